//! Deck types for the slideshow kernel.

use serde::Serialize;

use super::photo::PhotoId;
use super::slide::Slide;
use crate::canonical::canonical_hash_hex;
use crate::interest::deck_score;
use crate::SLIDESHOW_KERNEL_SCHEMA_VERSION;

/// Fingerprint of a deck's presentation order.
///
/// Derived from the ordered photo-id groups only, so two runs that present
/// the same photos in the same order share a fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DeckFingerprint(String);

impl DeckFingerprint {
    /// Compute the fingerprint of an ordered slide list.
    pub fn compute(slides: &[Slide]) -> Self {
        let groups: Vec<&[PhotoId]> = slides.iter().map(Slide::photo_ids).collect();
        Self(canonical_hash_hex(&(SLIDESHOW_KERNEL_SCHEMA_VERSION, groups)))
    }

    /// Get the fingerprint as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeckFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The final ordered presentation.
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    /// Schema version of this deck.
    pub schema_version: String,
    /// Hash of the policy parameters that produced the deck.
    pub policy_params_hash: String,
    /// Total interest over consecutive slide pairs.
    pub score: u64,
    /// Order fingerprint.
    pub fingerprint: DeckFingerprint,
    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Wrap an ordered slide list, computing its score and fingerprint.
    pub fn new(slides: Vec<Slide>, policy_params_hash: String) -> Self {
        Self {
            schema_version: SLIDESHOW_KERNEL_SCHEMA_VERSION.to_string(),
            policy_params_hash,
            score: deck_score(&slides),
            fingerprint: DeckFingerprint::compute(&slides),
            slides,
        }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Iterate slides in presentation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    /// Consume the deck, returning its slides.
    pub fn into_slides(self) -> Vec<Slide> {
        self.slides
    }
}
