//! `likex` is a positional bitmap index that accelerates `LIKE`-style
//! wildcard matching (`%`, `_`) over a static, in-memory column of short
//! byte strings.
//!
//! It is built once from a [driver::Driver] scan, then answers `count`
//! and `rows` queries by compiling the pattern into a [pattern::PatternPlan]
//! and evaluating it as a sequence of bitmap intersections/unions over a
//! per-`(byte, position)` index, falling back to an exact verifier
//! ([verify]) only where the bitmap algebra alone cannot decide a
//! candidate. See [index::LikeIndex] for the public entry point.
//!
//! Two bitmap backends are provided — [bitmaps::RoaringBitmap] (compressed,
//! backed by `croaring`) and [bitmaps::DenseBitmap] (a block-of-64-words
//! fallback) — both implementing [bitmaps::Bitmap], the primitive the rest
//! of the crate is generic over.

mod charcache;
pub mod config;
pub mod driver;
pub mod error;
mod lengths;
mod positional;
pub mod status;
mod types;
mod verify;

pub mod bitmaps;
pub mod pattern;

mod index;

pub use crate::bitmaps::{Bitmap, DenseBitmap, RoaringBitmap};
pub use crate::config::BuildConfig;
pub use crate::driver::{BuildError, Driver, QueryError};
pub use crate::error::{Error, Result};
pub use crate::index::LikeIndex;
pub use crate::pattern::PatternPlan;
pub use crate::status::StatusReport;
pub use crate::types::{RecordId, Value};
pub use crate::verify::matches;
