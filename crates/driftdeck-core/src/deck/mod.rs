pub mod loader;
pub mod models;

pub use models::{Deck, Slide};
