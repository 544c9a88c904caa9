use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    card::{event::CreateCard, Card},
    id::CardId,
};
use kernel::repository::card::CardRepository;
use shared::error::AppResult;

// エンコーダ連携はまだ無いので、ID の採番だけを行う
#[derive(new)]
pub struct CardRepositoryImpl;

#[async_trait]
impl CardRepository for CardRepositoryImpl {
    async fn create(&self, event: CreateCard) -> AppResult<Card> {
        let CreateCard {
            hotel_id,
            card_no,
            room_no,
            access_window,
        } = event;

        let card = Card {
            card_id: CardId::new(),
            hotel_id,
            card_no,
            room_no,
            access_window,
            issued_at: chrono::Utc::now(),
        };

        tracing::info!(
            card_id = %card.card_id,
            hotel_id = card.hotel_id,
            card_no = card.card_no,
            room_no = %card.room_no,
            begin_time = %card.access_window.begin_time,
            end_time = %card.access_window.end_time,
            "Card issued"
        );

        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use kernel::model::card::AccessWindow;

    use super::*;

    fn create_card() -> CreateCard {
        CreateCard::new(
            1234,
            1,
            "00001234".into(),
            AccessWindow {
                begin_time: "2509181200".into(),
                end_time: "2509201100".into(),
            },
        )
    }

    #[tokio::test]
    async fn test_create_card() -> anyhow::Result<()> {
        let repo = CardRepositoryImpl::new();

        let Card {
            card_id,
            hotel_id,
            card_no,
            room_no,
            access_window,
            issued_at,
        } = repo.create(create_card()).await?;

        assert_eq!(card_id.raw().get_version_num(), 4);
        assert_eq!(hotel_id, 1234);
        assert_eq!(card_no, 1);
        assert_eq!(room_no, "00001234");
        assert_eq!(access_window.begin_time, "2509181200");
        assert_eq!(access_window.end_time, "2509201100");
        assert!(issued_at <= chrono::Utc::now());
        Ok(())
    }

    #[tokio::test]
    async fn test_identical_requests_get_distinct_ids() -> anyhow::Result<()> {
        let repo = CardRepositoryImpl::new();

        let first = repo.create(create_card()).await?;
        let second = repo.create(create_card()).await?;
        assert_ne!(first.card_id, second.card_id);
        Ok(())
    }
}
