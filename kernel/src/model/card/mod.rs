use chrono::{DateTime, Utc};

use crate::model::id::CardId;

pub mod event;

#[derive(Debug)]
pub struct Card {
    pub card_id: CardId,
    pub hotel_id: i64,
    pub card_no: i64,
    pub room_no: String,
    pub access_window: AccessWindow,
    pub issued_at: DateTime<Utc>,
}

/// Validity window of a card, as `YYMMDDHHMM` strings.
///
/// The values are carried verbatim; no ordering between `begin_time` and
/// `end_time` is enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessWindow {
    pub begin_time: String,
    pub end_time: String,
}
