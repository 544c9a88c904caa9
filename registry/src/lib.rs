use std::sync::Arc;

use adapter::repository::card::CardRepositoryImpl;
use kernel::repository::card::CardRepository;

#[derive(Clone)]
pub struct AppRegistry {
    card_repository: Arc<dyn CardRepository>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::with_card_repository(Arc::new(CardRepositoryImpl::new()))
    }

    // 発行処理を差し替えたいとき (テスト等) に使う
    pub fn with_card_repository(card_repository: Arc<dyn CardRepository>) -> Self {
        Self { card_repository }
    }

    pub fn card_repository(&self) -> Arc<dyn CardRepository> {
        self.card_repository.clone()
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}
