use garde::Validate;
use kernel::model::{
    card::{event::CreateCard, AccessWindow, Card},
    id::CardId,
};
use serde::{Deserialize, Serialize};

pub const CARD_CREATED_MESSAGE: &str = "Card created successfully";

// 値の形式 (YYMMDDHHMM など) は検証しない。空文字は未指定扱い
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCardRequest {
    #[garde(skip)]
    pub hotel_id: i64,
    #[garde(skip)]
    pub card_no: i64,
    #[garde(length(min = 1))]
    pub begin_time: String,
    #[garde(length(min = 1))]
    pub end_time: String,
    #[garde(length(min = 1))]
    pub room_no: String,
}

impl From<CreateCardRequest> for CreateCard {
    fn from(value: CreateCardRequest) -> Self {
        let CreateCardRequest {
            hotel_id,
            card_no,
            begin_time,
            end_time,
            room_no,
        } = value;
        CreateCard {
            hotel_id,
            card_no,
            room_no,
            access_window: AccessWindow {
                begin_time,
                end_time,
            },
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    Success,
    Error,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CardResponse {
    pub status: CardStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<CardId>,
}

impl From<Card> for CardResponse {
    fn from(value: Card) -> Self {
        Self {
            status: CardStatus::Success,
            message: CARD_CREATED_MESSAGE.into(),
            card_id: Some(value.card_id),
        }
    }
}
