use axum::{extract::State, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::JsonBody,
    model::card::{CardResponse, CreateCardRequest},
};

pub async fn create_card(
    State(registry): State<AppRegistry>,
    JsonBody(req): JsonBody<CreateCardRequest>,
) -> AppResult<Json<CardResponse>> {
    req.validate(&())?;

    tracing::info!(
        hotel_id = req.hotel_id,
        card_no = req.card_no,
        room_no = %req.room_no,
        begin_time = %req.begin_time,
        end_time = %req.end_time,
        "Creating card"
    );

    registry
        .card_repository()
        .create(req.into())
        .await
        .map(CardResponse::from)
        .map(Json)
}
