//! # slideshow-kernel
//!
//! Deterministic slideshow composition for tagged photo collections.
//!
//! The kernel answers one question:
//!
//! > Given a pool of tagged photos, in which order should their slides be
//! > shown so that consecutive slides are interesting together?
//!
//! ## Core Contract
//!
//! 1. Compose slides: one per horizontal photo, vertical photos in pairs
//! 2. Partition slides by tag count; only equal-size slides compete for adjacency
//! 3. Order each partition with an iterative tag-elimination heuristic
//! 4. Concatenate partitions by ascending tag count into a [`Deck`]
//!
//! ## Architecture
//!
//! ```text
//! Photos → SlideComposer → split_by_order → order_bucket (per bucket) → assemble → Deck
//!                                               ↓
//!                                        rayon (optional)
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same photos + same policy → identical deck fingerprint
//! - All sorts are stable; ties resolve by input order
//! - Parallel and sequential ordering produce the same deck

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod interest;
pub mod compose;
pub mod partition;
pub mod orderer;
pub mod assembler;
pub mod policy;
pub mod solver;
pub mod canonical;
pub mod format;

// Re-exports
pub use types::{PhotoId, Orientation, Photo, SlideId, SlideKind, Slide, Deck, DeckFingerprint};
pub use interest::{interest, deck_score};
pub use compose::{SlideComposer, VerticalPairing};
pub use partition::{Bucket, Buckets, split_by_order};
pub use orderer::{OrderingStats, order_bucket, order_slides, order_slides_with_stats};
pub use assembler::{assemble, assemble_slides};
pub use policy::{SolverPolicy, ConfigError};
pub use solver::Solver;
pub use canonical::{to_canonical_bytes, canonical_hash, canonical_hash_hex};
pub use format::{FormatError, parse_photos, render, render_debug};

/// Schema version for decks.
/// Increment on changes to fingerprinted output.
pub const SLIDESHOW_KERNEL_SCHEMA_VERSION: &str = "1.0.0";

/// Default policy version identifier.
pub const DEFAULT_POLICY_VERSION: &str = "solver_policy_v1";

/// Compose and order a deck from photos with the default policy.
pub fn solve(photos: &[Photo]) -> Deck {
    Solver::default().solve(photos)
}
