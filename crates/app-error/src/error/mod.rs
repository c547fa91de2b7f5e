//! Application failure primitives.
//!
//! These errors are transport agnostic. Boundary layers decide whether to
//! log the diagnostic, render the user-facing text, or both; nothing here
//! performs I/O, recovery, or retries.

use serde::{Deserialize, Serialize};

/// Diagnostic used when an authorization failure is raised without an
/// explicit message.
///
/// Call sites needing the default should reference this constant rather
/// than restate the literal.
pub const DEFAULT_AUTHORIZATION_MESSAGE: &str = "User is not authorized";

/// Failure category separating permission denials from generic
/// application failures.
///
/// Exactly two categories exist, so boundary layers can match on the kind
/// exhaustively when choosing a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A generic application failure.
    Application,
    /// The acting party is not permitted to perform the requested
    /// operation.
    Authorization,
}

/// Application failure payload.
///
/// Carries a developer-oriented diagnostic and, optionally, a distinct
/// message that is safe to show to an end user. The diagnostic doubles as
/// the [`std::fmt::Display`] output, so values propagate through `Result`
/// and land in logs without further shaping.
///
/// ## Invariants
/// - `message` is stored exactly as supplied; nothing is trimmed,
///   validated, or rewritten.
/// - `user_message`, when present, is independent of `message`: the former
///   may be rendered to a user while the latter stays in internal logs.
/// - Values are immutable once constructed. Fields are populated only by
///   the constructors and [`AppError::with_user_message`].
///
/// # Examples
/// ```
/// use app_error::{AppError, ErrorKind};
///
/// let err = AppError::application("sample changer offline")
///     .with_user_message("Try again once the sample changer reconnects");
/// assert_eq!(err.kind(), ErrorKind::Application);
/// assert_eq!(err.to_string(), "sample changer offline");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_message: Option<String>,
}

impl AppError {
    /// Create an error of the given kind carrying a diagnostic message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            user_message: None,
        }
    }

    /// Convenience constructor for [`ErrorKind::Application`].
    pub fn application(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Application, message)
    }

    /// Convenience constructor for [`ErrorKind::Authorization`] carrying
    /// [`DEFAULT_AUTHORIZATION_MESSAGE`] as the diagnostic.
    ///
    /// # Examples
    /// ```
    /// use app_error::AppError;
    ///
    /// let err = AppError::authorization();
    /// assert_eq!(err.message(), "User is not authorized");
    /// ```
    pub fn authorization() -> Self {
        Self::new(ErrorKind::Authorization, DEFAULT_AUTHORIZATION_MESSAGE)
    }

    /// Convenience constructor for [`ErrorKind::Authorization`] with an
    /// explicit diagnostic overriding the default.
    pub fn authorization_with_message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    /// Attach text that is safe to display to an end user.
    ///
    /// # Examples
    /// ```
    /// use app_error::AppError;
    ///
    /// let err = AppError::authorization()
    ///     .with_user_message("Ask the proposal owner to grant you access");
    /// assert_eq!(
    ///     err.user_message(),
    ///     Some("Ask the proposal owner to grant you access"),
    /// );
    /// ```
    pub fn with_user_message(mut self, user_message: impl Into<String>) -> Self {
        self.user_message = Some(user_message.into());
        self
    }

    /// Failure category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Developer-oriented diagnostic, intended for internal logs only.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Human-readable text safe to show to an end user, when present.
    pub fn user_message(&self) -> Option<&str> {
        self.user_message.as_deref()
    }

    /// Whether this failure denotes a permission denial.
    pub fn is_authorization(&self) -> bool {
        matches!(self.kind, ErrorKind::Authorization)
    }
}
