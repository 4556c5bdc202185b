use actix_web::web;

use crate::api::handlers::{get_grid, post_intersections};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(get_grid)
            .service(post_intersections),
    );
}
