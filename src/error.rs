//! Error types for the star-field animator and the contact mailer.

use thiserror::Error;

/// A star-field or mailer configuration that cannot be used.
///
/// Raised at validation time; values are never clamped into range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
	/// A `[min, max]` range is inverted or has a non-finite bound.
	#[error("{field}: invalid range [{min}, {max}]")]
	InvalidRange {
		field: &'static str,
		min: f64,
		max: f64,
	},
	/// A scalar parameter is outside its allowed domain.
	#[error("{field}: {value} is out of bounds ({expected})")]
	OutOfBounds {
		field: &'static str,
		value: f64,
		expected: &'static str,
	},
	/// A required environment variable is unset or empty.
	#[error("missing environment variable {0}")]
	MissingEnv(&'static str),
}

/// Failure reported by a [`MailTransport`](crate::contact::MailTransport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("mail transport rejected message: {0}")]
pub struct TransportError(pub String);

/// Contact submission failure, surfaced to the caller as a structured result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailError {
	/// One or more request fields were absent or empty.
	#[error("All fields are required")]
	Validation,
	/// The mail service rejected the owner notification or the acknowledgment.
	#[error("Failed to send email")]
	Delivery(#[source] TransportError),
	/// The request body was not JSON, or was `null`. Answered like a delivery
	/// failure; the parser's message is kept for the log.
	#[error("Failed to send email")]
	Unreadable(String),
}

impl MailError {
	/// HTTP status the contact endpoint answers with.
	pub fn status(&self) -> u16 {
		match self {
			MailError::Validation => 400,
			MailError::Delivery(_) | MailError::Unreadable(_) => 500,
		}
	}
}
