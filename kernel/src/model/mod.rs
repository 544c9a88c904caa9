pub mod card;
pub mod id;
