use crate::core::{generate_reply, search_restaurants};
use crate::models::{
    catalog, ChatRequest, ChatResponse, ErrorResponse, HealthResponse, LinkQuery, RouteRequest,
    UserLocation,
};
use crate::services::{deeplink, DirectionsClient};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directions: Arc<DirectionsClient>,
}

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/chat", web::post().to(chat))
        .route("/restaurants", web::get().to(list_restaurants))
        .route("/restaurants/{id}", web::get().to(get_restaurant))
        .route("/restaurants/{id}/links", web::get().to(get_links))
        .route("/routes", web::post().to(lookup_route));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Chat endpoint: free-text craving in, recommendation reply out
///
/// POST /api/v1/chat
///
/// Request body:
/// ```json
/// { "message": "somewhere warm for a rainy day" }
/// ```
async fn chat(req: web::Json<ChatRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for chat request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let restaurants = search_restaurants(&req.message);
    let reply = generate_reply(&req.message, &restaurants);

    tracing::info!(
        query = %req.message,
        results = restaurants.len(),
        "chat search completed"
    );

    HttpResponse::Ok().json(ChatResponse {
        reply,
        total_results: restaurants.len(),
        restaurants,
    })
}

/// Full catalog listing
async fn list_restaurants() -> impl Responder {
    HttpResponse::Ok().json(catalog::all_restaurants())
}

/// Single restaurant by id
async fn get_restaurant(path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match catalog::restaurant_by_id(&id) {
        Some(restaurant) => HttpResponse::Ok().json(restaurant),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "not_found".to_string(),
            message: format!("No restaurant with id {}", id),
            status_code: 404,
        }),
    }
}

/// Deep-link bundle (navigate / call / share) for a restaurant
///
/// GET /api/v1/restaurants/{id}/links?lat=..&lng=..
async fn get_links(path: web::Path<String>, query: web::Query<LinkQuery>) -> impl Responder {
    let id = path.into_inner();
    let restaurant = match catalog::restaurant_by_id(&id) {
        Some(r) => r,
        None => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "not_found".to_string(),
                message: format!("No restaurant with id {}", id),
                status_code: 404,
            });
        }
    };

    let origin = match (query.lat, query.lng) {
        (Some(latitude), Some(longitude)) => Some(UserLocation {
            latitude,
            longitude,
        }),
        _ => None,
    };

    HttpResponse::Ok().json(deeplink::link_bundle(&restaurant, origin))
}

/// Route lookup between two points
///
/// POST /api/v1/routes
///
/// Always answers 200: lookup failures degrade to the zero-distance
/// "unavailable" payload, which clients render as a pending/unknown state.
async fn lookup_route(state: web::Data<AppState>, req: web::Json<RouteRequest>) -> impl Responder {
    let info = state
        .directions
        .route_or_fallback(req.origin, req.destination)
        .await;

    if info.is_unavailable() {
        tracing::warn!("route lookup degraded to unavailable");
    }

    HttpResponse::Ok().json(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    fn state() -> AppState {
        AppState {
            directions: Arc::new(DirectionsClient::new(
                // Unroutable endpoint: route lookups degrade, nothing panics
                "http://localhost:1/directions".to_string(),
                "test-key".to_string(),
            )),
        }
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.status, "healthy");
    }

    #[actix_web::test]
    async fn test_chat_returns_results() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(serde_json::json!({ "message": "sushi tonight" }))
            .to_request();
        let resp: ChatResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.total_results, 1);
        assert_eq!(resp.restaurants[0].name, "Sushi Omakase");
        assert!(resp.reply.contains("sushi tonight"));
    }

    #[actix_web::test]
    async fn test_chat_rejects_empty_message() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(serde_json::json!({ "message": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_unknown_restaurant_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/restaurants/999")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_links_bundle() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/restaurants/1/links?lat=37.4979&lng=127.0276")
            .to_request();
        let resp: crate::models::LinkBundle = test::call_and_read_body_json(&app, req).await;
        assert!(resp.app_url.starts_with("kakaomap://route?sp=37.4979,127.0276"));
        assert!(resp.phone_url.starts_with("tel:"));
    }

    #[actix_web::test]
    async fn test_route_lookup_degrades_to_unavailable() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/routes")
            .set_json(serde_json::json!({
                "origin": { "lat": 37.4979, "lng": 127.0276 },
                "destination": { "lat": 37.5172, "lng": 127.0473 }
            }))
            .to_request();
        let resp: crate::models::DistanceInfo = test::call_and_read_body_json(&app, req).await;
        assert!(resp.is_unavailable());
    }
}
