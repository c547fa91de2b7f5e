//! Application failure primitives shared by services and their adapters.
//!
//! Purpose: represent application-level failures with an internal
//! diagnostic and an optional, distinct user-facing message, plus one
//! specialised category for permission denials. The crate is purely
//! representational: values are raised at the failure point, propagated
//! unmodified through `Result`, and interpreted at a boundary that owns
//! the logging and display policy.
//!
//! Public surface:
//! - `AppError` (alias to `error::AppError`) — failure payload.
//! - `ErrorKind` (alias to `error::ErrorKind`) — failure category.
//! - `DEFAULT_AUTHORIZATION_MESSAGE` — diagnostic carried by
//!   `AppError::authorization`.
//! - `AppResult` — result alias for fallible operations.

pub mod error;

pub use self::error::{AppError, DEFAULT_AUTHORIZATION_MESSAGE, ErrorKind};

/// Convenient result alias for operations that fail with [`AppError`].
///
/// # Examples
/// ```
/// use app_error::{AppError, AppResult};
///
/// fn select_proposal(authorized: bool) -> AppResult<()> {
///     if authorized {
///         Ok(())
///     } else {
///         Err(AppError::authorization())
///     }
/// }
///
/// assert!(select_proposal(false).is_err());
/// ```
pub type AppResult<T> = Result<T, AppError>;
