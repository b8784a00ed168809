//! Core types for the slideshow kernel.

pub mod photo;
pub mod slide;
pub mod deck;

pub use photo::{PhotoId, Orientation, Photo};
pub use slide::{SlideId, SlideKind, Slide};
pub use deck::{Deck, DeckFingerprint};
