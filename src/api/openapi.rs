use utoipa::OpenApi;

use crate::models::{
    request::{
        ErrorResponse, GridApiResponse, GridResponse, IntersectionsApiResponse,
        IntersectionsRequest, IntersectionsResponse, Link,
    },
    Coordinate,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Spiral Grid API",
        description = "Spiral grid explorer: build square grids of integers arranged in an inward clockwise spiral, then trace which values a straight line crosses between the grid's centre and chosen target numbers.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::grid::get_grid,
        crate::api::handlers::intersections::post_intersections,
    ),
    components(
        schemas(
            // Wire models
            GridResponse, IntersectionsRequest, IntersectionsResponse,
            // Shared
            Coordinate, Link, ErrorResponse,
            // Concrete response envelopes (via #[aliases])
            GridApiResponse,
            IntersectionsApiResponse,
        )
    ),
    tags(
        (name = "grid",          description = "Spiral grid construction"),
        (name = "intersections", description = "Line tracing from the grid centre to target values"),
    )
)]
pub struct ApiDoc;
