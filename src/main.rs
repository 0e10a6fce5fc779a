//! application entry point

use crate::server::model::config::ServerConfig;
use derive_more::Display;
use log::info;
use std::env;
use std::net::SocketAddrV4;
use std::path::Path;
use std::str::FromStr;

mod server;

const HOST_PARSING_FAILED_MSG: &str = "failed to parse HOST, aborting";
const TAX_RATE_PARSING_FAILED_MSG: &str = "failed to parse TAX_RATE, aborting";
const DEFAULT_HOST_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_TAX_RATE: f64 = 0.18;

#[actix_web::main()]
async fn main() -> std::io::Result<()> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    match env {
        Env::Prod | Env::Stg => {} // load in CI
        Env::Dev => {
            // a missing dotenv file is fine, envs may come from the shell
            dotenvy::from_path(Path::new(".env.dev")).ok();
        }
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // c. run app
    let addr = SocketAddrV4::from_str(
        env::var("HOST")
            .unwrap_or(DEFAULT_HOST_ADDR.to_string())
            .as_str(),
    )
    .expect(HOST_PARSING_FAILED_MSG);
    let tax_rate = env::var("TAX_RATE")
        .map(|v| f64::from_str(&v).expect(TAX_RATE_PARSING_FAILED_MSG))
        .unwrap_or(DEFAULT_TAX_RATE);
    let config = ServerConfig::new(addr, tax_rate);

    info!("App is starting in env={}, listening on {}", env, config.addr);

    server::run(config).await
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
