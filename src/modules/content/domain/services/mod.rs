pub mod normalization;
pub mod placeholder;

pub use normalization::ScoreScale;
pub use placeholder::{FixedPlaceholders, PlaceholderProvider, RandomPlaceholders};
