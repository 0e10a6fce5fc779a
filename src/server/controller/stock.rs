use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::server::model::beer::Beer;
use crate::server::service::error::ServiceError;
use crate::server::state::AppState;

#[get("/stock")]
/// full inventory, including beers that ran dry
pub(crate) async fn get_stock(data: web::Data<AppState>) -> impl Responder {
    web::Json(data.service().get_all_stock().await)
}

#[get("/stock/{beer_id}")]
pub(crate) async fn get_beer(
    beer_id: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<impl Responder, ServiceError> {
    let beer = data.service().get_stock_for_beer(beer_id.into_inner()).await?;
    Ok(web::Json(beer))
}

#[put("/stock/{beer_id}")]
/// upsert a beer; the path id wins over any id in the body
pub(crate) async fn put_beer(
    beer_id: web::Path<Uuid>,
    body: web::Json<Beer>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut beer = body.into_inner();
    beer.id = beer_id.into_inner();
    web::Json(data.service().put_stock(beer).await)
}

#[post("/stock")]
/// add a new beer; a fresh id is assigned server-side
pub(crate) async fn post_beer(body: web::Json<Beer>, data: web::Data<AppState>) -> impl Responder {
    web::Json(data.service().put_stock(body.into_inner()).await)
}

#[delete("/stock/{beer_id}")]
pub(crate) async fn delete_beer(
    beer_id: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<impl Responder, ServiceError> {
    let beer = data.service().delete_stock(beer_id.into_inner()).await?;
    Ok(web::Json(beer))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::server::repository::in_memory::InMemory;
    use crate::server::service::Service;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;

    fn app_state() -> AppState {
        AppState::new(Service::new(InMemory::new(), 0.18))
    }

    macro_rules! stock_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .service(get_stock)
                    .service(get_beer)
                    .service(put_beer)
                    .service(post_beer)
                    .service(delete_beer),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn post_then_get_round_trips_a_beer() {
        let app = stock_app!(app_state());

        let req = test::TestRequest::post()
            .uri("/stock")
            .set_json(json!({"name": "Corona", "price": 100.0, "quantity": 5}))
            .to_request();
        let beer: Beer = test::call_and_read_body_json(&app, req).await;
        assert_eq!(beer.name, "Corona");

        let req = test::TestRequest::get()
            .uri(&format!("/stock/{}", beer.id))
            .to_request();
        let fetched: Beer = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, beer);
    }

    #[actix_web::test]
    async fn put_forces_the_path_id() {
        let state = app_state();
        let stored = state
            .service()
            .put_stock(Beer {
                id: uuid::Uuid::new_v4(),
                name: "Modelo".to_string(),
                price: 200.0,
                quantity: 10,
            })
            .await;
        let app = stock_app!(state);

        let req = test::TestRequest::put()
            .uri(&format!("/stock/{}", stored.id))
            .set_json(json!({"id": uuid::Uuid::new_v4(), "name": "Modelo", "price": 200.0, "quantity": 7}))
            .to_request();
        let updated: Beer = test::call_and_read_body_json(&app, req).await;

        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.quantity, 7);
    }

    #[actix_web::test]
    async fn missing_beer_is_a_404_with_detail() {
        let app = stock_app!(app_state());

        let req = test::TestRequest::get()
            .uri(&format!("/stock/{}", uuid::Uuid::new_v4()))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"detail": "beer not found in stock"}));
    }

    #[actix_web::test]
    async fn delete_returns_the_removed_beer() {
        let state = app_state();
        let stored = state
            .service()
            .put_stock(Beer {
                id: uuid::Uuid::new_v4(),
                name: "Pilsen".to_string(),
                price: 300.0,
                quantity: 8,
            })
            .await;
        let app = stock_app!(state);

        let req = test::TestRequest::delete()
            .uri(&format!("/stock/{}", stored.id))
            .to_request();
        let removed: Beer = test::call_and_read_body_json(&app, req).await;
        assert_eq!(removed, stored);

        let req = test::TestRequest::delete()
            .uri(&format!("/stock/{}", stored.id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
