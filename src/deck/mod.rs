//! Flashcard deck
//!
//! Card data model, the starter deck, and the store that owns the
//! authoritative card list.

pub mod model;
pub mod seed;
pub mod store;

// Re-exports
pub use model::{Card, CardId};
pub use seed::seed_cards;
pub use store::WordStore;
