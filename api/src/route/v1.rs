use axum::Router;
use registry::AppRegistry;

use super::guest::build_guest_routers;
use super::health::build_health_check_routers;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_guest_routers());
    Router::new().nest("/api/v1", router)
}
