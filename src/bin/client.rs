use clap::{Args, Parser, Subcommand};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "taproom")]
#[command(about = "client cli used by bar staff to interact with the server", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// stock related ops
    #[command(arg_required_else_help = true)]
    Stock(StockArgs),
    /// order (tab) related ops
    #[command(arg_required_else_help = true)]
    Order(OrderArgs),
}

#[derive(Debug, Args)]
struct StockArgs {
    #[command(subcommand)]
    command: StockCmds,
}

#[derive(Debug, Subcommand)]
enum StockCmds {
    /// list every beer currently carried
    List,
    #[command(arg_required_else_help = true)]
    Add {
        #[arg(long, help = "Beer name.")]
        name: String,
        #[arg(long, help = "Price per unit.")]
        price: f64,
        #[arg(long, help = "Units on the shelf.")]
        quantity: u32,
    },
    #[command(arg_required_else_help = true)]
    Remove {
        #[arg(help = "Id of the beer to delist.")]
        id: Uuid,
    },
}

#[derive(Debug, Args)]
struct OrderArgs {
    #[command(subcommand)]
    command: OrderCmds,
}

#[derive(Debug, Subcommand)]
enum OrderCmds {
    /// open a new tab
    Open,
    #[command(arg_required_else_help = true)]
    Round {
        #[arg(short = 'o', help = "Order id to buy the round against.")]
        order: Uuid,
        #[arg(long, help = "Beer ids to pour, one unit each.", value_name = "BEER_IDs", num_args = 1..)]
        beers: Vec<Uuid>,
    },
    #[command(arg_required_else_help = true)]
    Pay {
        #[arg(help = "Order id to close and compute totals for.")]
        order: Uuid,
    },
}

const HOST: &str = "http://localhost:8080";

#[derive(Debug, Deserialize)]
struct BeerResponse {
    id: Uuid,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Debug, Deserialize)]
struct StockResponse {
    beers: Vec<BeerResponse>,
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    id: Uuid,
    paid: bool,
    sub_total: f64,
    discounts: f64,
    taxes: f64,
    total: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();

    match args.command {
        Commands::Stock(stock) => match stock.command {
            StockCmds::List => {
                let res = Client::new().get(format!("{}/stock", HOST)).send().await?;
                match res.status() {
                    StatusCode::OK => {
                        let stock = res.json::<StockResponse>().await?;
                        for beer in stock.beers {
                            println!("{}  {:<12} {:>8.2}$  x{}", beer.id, beer.name, beer.price, beer.quantity);
                        }
                    }
                    unexpected => println!("got unexpected status code, {}", unexpected),
                }
            }
            StockCmds::Add { name, price, quantity } => {
                let res = Client::new()
                    .post(format!("{}/stock", HOST))
                    .json(&serde_json::json!({
                        "name": name,
                        "price": price,
                        "quantity": quantity,
                    }))
                    .send()
                    .await?;
                match res.status() {
                    StatusCode::OK => {
                        let beer = res.json::<BeerResponse>().await?;
                        println!("added {} with id = {}", beer.name, beer.id);
                    }
                    unexpected => println!("got unexpected status code, {}", unexpected),
                }
            }
            StockCmds::Remove { id } => {
                let res = Client::new()
                    .delete(format!("{}/stock/{}", HOST, id))
                    .send()
                    .await?;
                match res.status() {
                    StatusCode::OK => println!("removed beer {}", id),
                    StatusCode::NOT_FOUND => println!("no beer with id {} in stock", id),
                    unexpected => println!("got unexpected status code, {}", unexpected),
                }
            }
        },
        Commands::Order(order) => match order.command {
            OrderCmds::Open => {
                let res = Client::new().post(format!("{}/orders", HOST)).send().await?;
                match res.status() {
                    StatusCode::OK => {
                        let order = res.json::<OrderResponse>().await?;
                        println!("opened tab, order id = {}", order.id);
                    }
                    unexpected => println!("got unexpected status code, {}", unexpected),
                }
            }
            OrderCmds::Round { order, beers } => {
                let items = beers
                    .iter()
                    .map(|id| serde_json::json!({"beer_id": id, "quantity": 1}))
                    .collect::<Vec<_>>();
                let res = Client::new()
                    .post(format!("{}/orders/{}/rounds", HOST, order))
                    .json(&serde_json::json!({ "items": items }))
                    .send()
                    .await?;
                match res.status() {
                    StatusCode::OK => println!("round added to order {}", order),
                    StatusCode::NOT_FOUND | StatusCode::CONFLICT => {
                        let err = res.json::<ErrorResponse>().await?;
                        println!("round rejected: {}", err.detail);
                    }
                    unexpected => println!("got unexpected status code, {}", unexpected),
                }
            }
            OrderCmds::Pay { order } => {
                let res = Client::new()
                    .post(format!("{}/orders/{}/pay", HOST, order))
                    .send()
                    .await?;
                match res.status() {
                    StatusCode::OK => {
                        let order = res.json::<OrderResponse>().await?;
                        println!(
                            "tab closed (paid={}): subtotal {:.2}, discounts {:.2}, taxes {:.2}, total {:.2}",
                            order.paid, order.sub_total, order.discounts, order.taxes, order.total
                        );
                    }
                    StatusCode::NOT_FOUND => {
                        let err = res.json::<ErrorResponse>().await?;
                        println!("could not close tab: {}", err.detail);
                    }
                    unexpected => println!("got unexpected status code, {}", unexpected),
                }
            }
        },
    };
    Ok(())
}
