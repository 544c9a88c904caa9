pub mod card;
pub mod health;
