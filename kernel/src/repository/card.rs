use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::card::{event::CreateCard, Card};

#[async_trait]
pub trait CardRepository: Send + Sync {
    // カードを発行し、新しい card_id を割り当てる
    async fn create(&self, event: CreateCard) -> AppResult<Card>;
}
