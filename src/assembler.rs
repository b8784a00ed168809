//! Deck assembly.

use crate::partition::Bucket;
use crate::types::{Deck, Slide};

/// Concatenate ordered buckets into one presentation.
///
/// Buckets are emitted in ascending tag-count order whatever order they
/// arrive in; the sort is stable, so equal tag counts keep arrival order.
pub fn assemble_slides(mut buckets: Vec<Bucket>) -> Vec<Slide> {
    buckets.sort_by_key(|bucket| bucket.tag_count);
    let total = buckets.iter().map(Bucket::len).sum();

    let mut presentation = Vec::with_capacity(total);
    for bucket in buckets {
        presentation.extend(bucket.slides);
    }
    presentation
}

/// Assemble ordered buckets into a [`Deck`] produced under `policy_params_hash`.
pub fn assemble(buckets: Vec<Bucket>, policy_params_hash: String) -> Deck {
    Deck::new(assemble_slides(buckets), policy_params_hash)
}
