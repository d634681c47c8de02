//! Module `config` holds the small, `Copy` configuration types an index
//! build is parameterised by.

/// Hard ceiling on how many byte-positions the positional index tracks,
/// per [crate::index::LikeIndex] and per record.
///
/// Values longer than this are truncated for indexing purposes (spec
/// `MAX_POSITIONS`); queries whose `min_length` exceeds this bound can
/// never match and are rejected with `PatternTooLong`.
pub const MAX_POSITIONS: usize = 256;

/// Build-time configuration for [crate::index::LikeIndex].
#[derive(Clone, Copy, Debug)]
pub struct BuildConfig {
    /// Positions at and beyond this offset are not indexed; record bytes
    /// past this offset are invisible to positional queries. Defaults to
    /// [MAX_POSITIONS].
    pub max_positions: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            max_positions: MAX_POSITIONS,
        }
    }
}
