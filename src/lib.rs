//! Flashdeck - a terminal flashcard deck
//!
//! Flashdeck keeps a list of term/definition cards, lets you page through
//! them, mark favorites, and hide one side of each card until you reveal it.
//! The core ([`Study`]) is independent of the terminal front end and talks to
//! storage only through [`storage::KeyValueStore`].

pub mod app;
pub mod config;
pub mod deck;
pub mod error;
pub mod speech;
pub mod storage;
pub mod study;
pub mod theme;
pub mod ui;
pub mod view;

pub use app::App;
pub use config::Config;
pub use deck::{Card, CardId, WordStore};
pub use error::{StorageError, StudyError};
pub use study::Study;
pub use theme::Theme;
pub use view::{Mode, RevealDirection, Side, Status, ViewState};
