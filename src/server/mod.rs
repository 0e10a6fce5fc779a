//! main file for the server

pub(crate) mod controller;
pub(crate) mod model;
pub(crate) mod repository;
pub(crate) mod service;
pub(crate) mod state;
pub(crate) mod util;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use crate::server::controller::{order, stock};
use crate::server::model::config::ServerConfig;
use crate::server::repository::in_memory::InMemory;
use crate::server::service::Service;
use crate::server::state::AppState;

/// Run the server
pub async fn run(ServerConfig { addr, tax_rate }: ServerConfig) -> std::io::Result<()> {
    let repository = InMemory::seeded().await;
    let state = AppState::new(Service::new(repository, tax_rate));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .service(stock::get_stock)
            .service(stock::get_beer)
            .service(stock::put_beer)
            .service(stock::post_beer)
            .service(stock::delete_beer)
            .service(order::post_order)
            .service(order::get_orders)
            .service(order::get_order)
            .service(order::post_round)
            .service(order::close_tab)
            .service(order::delete_round)
    })
    .bind(addr)?
    .run()
    .await
}
