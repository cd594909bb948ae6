//! Metadata extraction module
//!
//! The core of the crate: given a [`PageSnapshot`] of a rendered reel page,
//! resolve five independent metadata fields (username, audio attribution,
//! engagement counts, caption/title), each through an ordered chain of
//! strategies with the first success winning.

pub mod audio;
pub mod caption;
pub mod counts;
pub mod extractor;
pub mod record;
pub mod snapshot;
pub mod username;

pub use audio::AUDIO_SENTINEL;
pub use caption::Caption;
pub use counts::{parse_count, Metric};
pub use extractor::ReelExtractor;
pub use record::ReelRecord;
pub use snapshot::{DomIndex, PageLink, PageSnapshot};
