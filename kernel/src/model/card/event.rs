use derive_new::new;

use super::AccessWindow;

#[derive(Debug, new)]
pub struct CreateCard {
    pub hotel_id: i64,
    pub card_no: i64,
    pub room_no: String,
    pub access_window: AccessWindow,
}
