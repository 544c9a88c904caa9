pub mod card;
pub mod health;

use axum::Router;
use registry::AppRegistry;

use self::{card::build_card_routers, health::build_health_check_routers};

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(build_health_check_routers())
        .merge(build_card_routers())
}
