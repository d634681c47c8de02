//! Module `error` defines the crate-wide [Error] type and the `err_at!`
//! macro used throughout `likex` to tag every failure with its call site.

use std::{fmt, result};

/// Crate-wide error type. Every variant carries the `"file:line"` location
/// the error was raised at (filled in by [err_at]) plus a human message.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The source iterator handed to [crate::index::LikeIndex::build]
    /// returned an error.
    DriverFail(String, String),
    /// Allocation failed while building or querying the index.
    OutOfMemory(String, String),
    /// A query was issued before any index was published.
    IndexNotBuilt(String, String),
    /// `min_length` of the compiled pattern exceeds `MAX_POSITIONS`.
    PatternTooLong(String, String),
    /// A host-provided cancellation check aborted the query.
    Cancelled(String, String),
    /// Caller-supplied argument was invalid (e.g. malformed pattern source).
    InvalidInput(String, String),
    /// A numeric conversion failed (this should never trigger in practice).
    FailConvert(String, String),
    /// Any other condition the core has no specific recovery story for.
    Fatal(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;

        match self {
            DriverFail(l, m) => write!(f, "{} DriverFail: {}", l, m),
            OutOfMemory(l, m) => write!(f, "{} OutOfMemory: {}", l, m),
            IndexNotBuilt(l, m) => write!(f, "{} IndexNotBuilt: {}", l, m),
            PatternTooLong(l, m) => write!(f, "{} PatternTooLong: {}", l, m),
            Cancelled(l, m) => write!(f, "{} Cancelled: {}", l, m),
            InvalidInput(l, m) => write!(f, "{} InvalidInput: {}", l, m),
            FailConvert(l, m) => write!(f, "{} FailConvert: {}", l, m),
            Fatal(l, m) => write!(f, "{} Fatal: {}", l, m),
        }
    }
}

impl std::error::Error for Error {}

/// Crate-wide `Result`, aliasing [std::result::Result] to [Error].
pub type Result<T> = result::Result<T, Error>;

/// Tag an error (or construct one) with its call site.
///
/// Two forms, matching the call sites this macro grew out of:
///
/// ```ignore
/// err_at!(Fatal, msg: "bad length {}", len)   // -> Err(Error::Fatal(loc, msg))
/// err_at!(IOError, fallible_expr)             // -> fallible_expr.map_err(..)
/// ```
#[macro_export]
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+) => {{
        let msg = format!($($arg),+);
        let loc = format!("{}:{}", file!(), line!());
        Err($crate::error::Error::$v(loc, msg))
    }};
    ($v:ident, $e:expr) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let msg = format!("{}", err);
                let loc = format!("{}:{}", file!(), line!());
                Err($crate::error::Error::$v(loc, msg))
            }
        }
    }};
}
