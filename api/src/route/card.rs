use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::card::create_card;

pub fn build_card_routers() -> Router<AppRegistry> {
    Router::new().route("/create_card", post(create_card))
}
