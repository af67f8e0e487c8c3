//! Employee API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
///
/// | Method | Path | Handler |
/// |--------|------|---------|
/// | GET | /api/empleados | list active employees |
/// | POST | /api/empleados | create / upsert |
/// | GET | /api/empleados/{id} | get by id (soft not-found) |
/// | PUT | /api/empleados/{id} | update existing |
/// | DELETE | /api/empleados/{id} | soft delete |
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/empleados", get(handler::list).post(handler::create))
        .route(
            "/api/empleados/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
