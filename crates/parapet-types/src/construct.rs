//! Fallible construction trait.
//!
//! [`TryNew`] is for types whose construction validates its inputs and
//! may fail. It mirrors the standard library's `TryFrom`/`TryInto`
//! naming, but for constructors that don't convert from a single other
//! type.
//!
//! | Pattern | Use When |
//! |---------|----------|
//! | `new()` | Construction always succeeds |
//! | [`TryNew`] | Construction validates and may fail |
//! | `TryFrom<T>` | Fallible conversion from another type |
//! | Builder | Multi-field initialization with typed setters |
//!
//! # Example
//!
//! ```
//! use parapet_types::TryNew;
//!
//! /// A percentage in 0..=100.
//! #[derive(Debug)]
//! struct Percent(u8);
//!
//! #[derive(Debug, PartialEq)]
//! struct OutOfRange(i64);
//!
//! impl TryNew for Percent {
//!     type Error = OutOfRange;
//!     type Args = i64;
//!
//!     fn try_new(raw: i64) -> Result<Self, Self::Error> {
//!         if !(0..=100).contains(&raw) {
//!             return Err(OutOfRange(raw));
//!         }
//!         Ok(Percent(raw as u8))
//!     }
//! }
//!
//! assert!(Percent::try_new(60).is_ok());
//! assert_eq!(Percent::try_new(-1).unwrap_err(), OutOfRange(-1));
//! ```

/// Trait for fallible construction with validation.
///
/// Types implementing `TryNew` should not also expose a plain `new()`
/// performing the same validation; the `try_` prefix makes fallibility
/// explicit at the call site. Validation must be pure; no side
/// effects in `try_new`.
pub trait TryNew {
    /// Why construction failed. Use a specific error type, not `String`.
    type Error;

    /// Arguments required for construction: a single value, a tuple,
    /// or a config struct for many fields.
    type Args;

    /// Attempts to create a new instance.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` when validation rejects the arguments. The
    /// error should say which argument was rejected and why.
    fn try_new(args: Self::Args) -> Result<Self, Self::Error>
    where
        Self: Sized;
}
