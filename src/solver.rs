//! Slideshow solver.
//!
//! Runs the full pipeline: compose slides from photos, partition them by tag
//! count, order each bucket independently and assemble the deck.

use rayon::prelude::*;
use tracing::{debug, info, info_span};

use crate::assembler::assemble;
use crate::compose::SlideComposer;
use crate::orderer::{order_bucket, OrderingStats};
use crate::partition::{split_by_order, Bucket, Buckets};
use crate::policy::SolverPolicy;
use crate::types::{Deck, Photo, Slide};

/// Deterministic slideshow solver.
///
/// Buckets never share slides, so they are ordered in parallel when the
/// policy allows it. Results are collected in ascending tag-count order
/// either way, so the deck does not depend on scheduling.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    policy: SolverPolicy,
}

impl Solver {
    /// Create a solver with the given policy.
    pub fn new(policy: SolverPolicy) -> Self {
        Self { policy }
    }

    /// Compose and order a deck from photos.
    pub fn solve(&self, photos: &[Photo]) -> Deck {
        let span = info_span!("solve", photos = photos.len(), pairing = %self.policy.vertical_pairing);
        let _enter = span.enter();

        let mut composer = SlideComposer::new();
        let slides = composer.compose(photos, self.policy.vertical_pairing);

        let verticals = photos.iter().filter(|p| p.is_vertical()).count();
        info!(
            slides = slides.len(),
            unpaired_verticals = verticals % 2,
            "slides composed"
        );

        self.solve_slides(slides)
    }

    /// Order already-composed slides into a deck.
    pub fn solve_slides(&self, slides: Vec<Slide>) -> Deck {
        let (deck, _) = self.solve_slides_with_stats(slides);
        deck
    }

    /// Order already-composed slides, also returning per-bucket statistics.
    pub fn solve_slides_with_stats(&self, slides: Vec<Slide>) -> (Deck, Vec<OrderingStats>) {
        let buckets = split_by_order(slides);
        debug!(buckets = buckets.len(), slides = buckets.slide_count(), "slides partitioned");

        let (ordered, stats): (Vec<Bucket>, Vec<OrderingStats>) =
            self.order_buckets(buckets).into_iter().unzip();

        let deck = assemble(ordered, self.policy.params_hash());
        info!(
            slides = deck.len(),
            score = deck.score,
            fingerprint = %deck.fingerprint,
            "deck assembled"
        );

        (deck, stats)
    }

    /// Order every bucket, ascending by tag count.
    pub fn order_buckets(&self, buckets: Buckets) -> Vec<(Bucket, OrderingStats)> {
        let buckets: Vec<Bucket> = buckets.into_iter().collect();

        if self.policy.parallel && buckets.len() >= self.policy.parallel_threshold {
            buckets.into_par_iter().map(order_bucket).collect()
        } else {
            buckets.into_iter().map(order_bucket).collect()
        }
    }

    /// Get the policy.
    pub fn policy(&self) -> &SolverPolicy {
        &self.policy
    }
}
