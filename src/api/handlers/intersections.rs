use actix_web::{http::Method, post, web, HttpResponse, Responder};

use crate::{
    api::handlers::DEFAULT_SIZE,
    logic::{
        error::GridError, intersect::find_intersected, locate::locate_min, spiral::build_spiral,
    },
    models::{
        request::{
            link, ApiResponse, ErrorResponse, IntersectionsApiResponse, IntersectionsRequest,
            IntersectionsResponse,
        },
        Matrix,
    },
};

/// POST /api/intersections
/// Builds the grid once, then traces the line from the minimum-value cell to
/// each target in order. A target absent from the grid fails the whole
/// request; results are never silently dropped.
#[utoipa::path(
    post,
    path = "/api/intersections",
    tag = "intersections",
    request_body = IntersectionsRequest,
    responses(
        (status = 200, description = "Grid and one traversed-value sequence per target", body = IntersectionsApiResponse),
        (status = 400, description = "Non-positive grid size or malformed body", body = ErrorResponse),
        (status = 404, description = "A target value is not present in the grid", body = ErrorResponse),
    ),
)]
#[post("/intersections")]
pub async fn post_intersections(body: web::Json<IntersectionsRequest>) -> impl Responder {
    let request = body.into_inner();
    let size = request.size.unwrap_or(DEFAULT_SIZE);
    let targets = request.targets.unwrap_or_default();

    let grid = match build_spiral(size) {
        Ok(grid) => grid,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };

    let mut intersected_numbers: Matrix<i32> = Vec::with_capacity(targets.len());
    for &target in &targets {
        match find_intersected(target, &grid) {
            Ok(path) => intersected_numbers.push(path),
            Err(e @ GridError::ValueNotFound(_)) => {
                return HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
            }
            Err(e) => {
                return HttpResponse::BadRequest()
                    .json(serde_json::json!({ "error": e.to_string() }))
            }
        }
    }

    let origin = match locate_min(&grid) {
        Ok(origin) => origin,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };

    let mut links = std::collections::HashMap::new();
    links.insert("self".into(), link("/api/intersections", Method::POST));
    links.insert("grid".into(), link(format!("/api/grid?size={size}"), Method::GET));
    HttpResponse::Ok().json(ApiResponse::new(
        IntersectionsResponse {
            size: grid.size,
            origin,
            targets,
            intersected_numbers,
            grid: grid.cells,
        },
        links,
    ))
}
