//! Guard-style validation of function arguments.
//!
//! Each check either returns the validated value unchanged or fails with an
//! [`RequireError::InvalidArgument`] carrying a descriptive message. Intended
//! for use at the top of a routine, before the real work starts:
//!
//! ```
//! use require::{not_empty_named, verify, Result};
//!
//! fn publish(tags: Option<Vec<String>>, retries: u32) -> Result<()> {
//!     let tags = not_empty_named(tags, "tags")?;
//!     verify(retries > 0, "retries must be positive")?;
//!     // ... proceed with validated arguments
//!     # let _ = tags;
//!     Ok(())
//! }
//! ```

pub mod empty;
pub mod error;
pub mod require;

pub use empty::IsEmpty;
pub use error::{RequireError, Result};
pub use require::{
    in_range, in_range_named, is_empty, not_blank, not_blank_named, not_empty, not_empty_named,
    not_null, not_null_named, verify, verify_with,
};
