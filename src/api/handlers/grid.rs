use actix_web::{get, http::Method, web, HttpResponse, Responder};

use crate::{
    api::handlers::DEFAULT_SIZE,
    logic::spiral::build_spiral,
    models::request::{link, ApiResponse, ErrorResponse, GridApiResponse, GridQuery, GridResponse},
};

/// GET /api/grid
/// Builds the spiral grid for the requested size (default 10).
#[utoipa::path(
    get,
    path = "/api/grid",
    tag = "grid",
    params(GridQuery),
    responses(
        (status = 200, description = "Spiral grid for the requested size", body = GridApiResponse),
        (status = 400, description = "Non-positive grid size", body = ErrorResponse),
    ),
)]
#[get("/grid")]
pub async fn get_grid(query: web::Query<GridQuery>) -> impl Responder {
    let size = query.size.unwrap_or(DEFAULT_SIZE);

    match build_spiral(size) {
        Ok(grid) => {
            let mut links = std::collections::HashMap::new();
            links.insert("self".into(), link(format!("/api/grid?size={size}"), Method::GET));
            links.insert(
                "intersections".into(),
                link("/api/intersections", Method::POST),
            );
            HttpResponse::Ok().json(ApiResponse::new(
                GridResponse {
                    size: grid.size,
                    grid: grid.cells,
                },
                links,
            ))
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}
