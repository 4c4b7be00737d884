use axum::routing::{delete, get, post, put};
use axum::Router;
use registry::AppRegistry;

use crate::handler::guest::{
    delete_guest, register_guest, show_guest, show_guest_list, update_guest,
};

pub fn build_guest_routers() -> Router<AppRegistry> {
    let guest_routers = Router::new()
        .route("/", post(register_guest))
        .route("/", get(show_guest_list))
        .route("/:guest_id", get(show_guest))
        .route("/:guest_id", put(update_guest))
        .route("/:guest_id", delete(delete_guest));

    Router::new().nest("/guests", guest_routers)
}
