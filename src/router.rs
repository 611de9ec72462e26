use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{order, restaurant, status, visit},
    model::{
        api::{ErrorDto, MessageDto},
        order::{CreateOrderDto, OrderDto},
        restaurant::{RestaurantDto, RestaurantListDto},
        visit::{CreateVisitDto, UpdateVisitDto, VisitDto},
    },
    state::AppState,
};

/// OpenAPI document covering all routes.
#[derive(OpenApi)]
#[openapi(
    paths(
        status::ping,
        restaurant::search_restaurants,
        visit::create_visit,
        visit::get_visit,
        visit::update_visit,
        visit::delete_visit,
        order::get_visit_orders,
        order::create_visit_order,
    ),
    components(schemas(
        CreateOrderDto,
        CreateVisitDto,
        ErrorDto,
        MessageDto,
        OrderDto,
        RestaurantDto,
        RestaurantListDto,
        UpdateVisitDto,
        VisitDto,
    )),
    tags(
        (name = "status", description = "Health check"),
        (name = "restaurant", description = "Restaurant search"),
        (name = "visit", description = "Visit management"),
        (name = "order", description = "Orders recorded during a visit"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ping", get(status::ping))
        .route("/restaurants", get(restaurant::search_restaurants))
        .route("/visits", post(visit::create_visit))
        .route(
            "/visits/{visit_id}",
            get(visit::get_visit)
                .put(visit::update_visit)
                .delete(visit::delete_visit),
        )
        .route(
            "/visits/{visit_id}/orders",
            get(order::get_visit_orders).post(order::create_visit_order),
        )
}

/// Swagger UI serving the OpenAPI document at `/docs`, with the raw JSON at
/// `/openapi.json`.
pub fn swagger() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi())
}
