use actix_web::{delete, get, post, web, Responder};
use log::warn;
use uuid::Uuid;

use crate::server::model::order::{Order, OrdersResponse, PostRoundRequest, Round};
use crate::server::service::error::ServiceError;
use crate::server::state::AppState;

#[post("/orders")]
/// open a fresh tab
pub(crate) async fn post_order(data: web::Data<AppState>) -> impl Responder {
    web::Json(data.service().create_order().await)
}

#[get("/orders")]
pub(crate) async fn get_orders(data: web::Data<AppState>) -> impl Responder {
    web::Json(OrdersResponse {
        orders: data.service().get_all_orders().await,
    })
}

#[get("/orders/{order_id}")]
pub(crate) async fn get_order(
    order_id: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<impl Responder, ServiceError> {
    let order = data.service().get_order(order_id.into_inner()).await?;
    Ok(web::Json(order))
}

#[post("/orders/{order_id}/rounds")]
/// buy a round of drinks against an open tab
pub(crate) async fn post_round(
    order_id: web::Path<Uuid>,
    body: web::Json<PostRoundRequest>,
    data: web::Data<AppState>,
) -> Result<web::Json<Order>, ServiceError> {
    let order_id = order_id.into_inner();
    match data.service().add_round_to_order(order_id, &body.items).await {
        Ok(order) => Ok(web::Json(order)),
        Err(e) => {
            warn!("round rejected for order={}, {}", order_id, e);
            Err(e)
        }
    }
}

#[post("/orders/{order_id}/pay")]
/// close the tab; an RPC-style call, POST because it is not idempotent
pub(crate) async fn close_tab(
    order_id: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<web::Json<Order>, ServiceError> {
    let order = data.service().close_tab(order_id.into_inner()).await?;
    Ok(web::Json(order))
}

#[delete("/orders/{order_id}/rounds/{round_id}")]
pub(crate) async fn delete_round(
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> Result<web::Json<Round>, ServiceError> {
    let (order_id, round_id) = path.into_inner();
    let round = data.service().delete_round_from_order(order_id, round_id).await?;
    Ok(web::Json(round))
}
