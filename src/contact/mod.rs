//! Contact form mail handler.
//!
//! Validates a submission, composes the owner notification and the sender
//! acknowledgment, and hands both to a [`MailTransport`]. With the `mailer`
//! feature, [`SmtpMailTransport`] delivers them through an authenticated SMTP
//! relay.

use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigurationError, MailError, TransportError};

#[cfg(feature = "mailer")]
mod smtp;

#[cfg(feature = "mailer")]
pub use smtp::{SmtpMailTransport, build_message};

/// Environment variable holding the site owner's address, also the SMTP login.
pub const OWNER_ADDRESS_ENV: &str = "EMAIL_USER";
/// Environment variable holding the SMTP password.
pub const PASSWORD_ENV: &str = "EMAIL_PASS";
/// Environment variable overriding the SMTP relay host.
pub const RELAY_ENV: &str = "EMAIL_RELAY";
/// Environment variable overriding the acknowledgment signature.
pub const SIGNATURE_ENV: &str = "EMAIL_SIGNATURE";

const DEFAULT_SIGNATURE: &str = "Saurav Agrawal";
/// Relay used when [`RELAY_ENV`] is unset.
pub const DEFAULT_RELAY: &str = "smtp.gmail.com";

/// Incoming form payload. Fields are optional so absence can be reported.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ContactRequest {
	pub name: Option<String>,
	pub email: Option<String>,
	pub subject: Option<String>,
	pub message: Option<String>,
}

/// A submission whose fields are all present and non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
	pub name: String,
	pub email: String,
	pub subject: String,
	pub message: String,
}

impl ContactRequest {
	/// Reads the four fields from a parsed JSON body.
	///
	/// Strings are taken verbatim. Numbers and `true` count as present and use
	/// their JSON text, as do arrays and objects. `null`, `false`, `0` and
	/// absent keys count as missing. A body that isn't an object has no fields.
	pub fn from_json(body: &Value) -> Self {
		let field = |key: &str| body.get(key).and_then(field_text);
		Self {
			name: field("name"),
			email: field("email"),
			subject: field("subject"),
			message: field("message"),
		}
	}

	/// Requires every field to be present and non-empty. Whitespace is kept
	/// and counts as content.
	pub fn validate(self) -> Result<ContactSubmission, MailError> {
		fn required(value: Option<String>) -> Result<String, MailError> {
			match value {
				Some(v) if !v.is_empty() => Ok(v),
				_ => Err(MailError::Validation),
			}
		}

		Ok(ContactSubmission {
			name: required(self.name)?,
			email: required(self.email)?,
			subject: required(self.subject)?,
			message: required(self.message)?,
		})
	}
}

/// Text of one body field, or `None` when the value means "not provided".
fn field_text(value: &Value) -> Option<String> {
	match value {
		Value::Null | Value::Bool(false) => None,
		Value::String(s) => Some(s.clone()),
		Value::Number(n) if n.as_f64() == Some(0.0) => None,
		Value::Number(n) => Some(n.to_string()),
		Value::Bool(true) => Some("true".to_string()),
		other => Some(other.to_string()),
	}
}

/// Endpoint reply body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactResponse {
	Sent { success: bool, message: String },
	Failed { error: String },
}

impl ContactResponse {
	pub fn sent() -> Self {
		ContactResponse::Sent {
			success: true,
			message: "Email sent successfully".to_string(),
		}
	}

	pub fn failed(err: &MailError) -> Self {
		ContactResponse::Failed {
			error: err.to_string(),
		}
	}
}

/// Who sends the mail, how the relay is reached, and how the acknowledgment is
/// signed.
#[derive(Clone, PartialEq, Eq)]
pub struct MailerConfig {
	/// Sender and recipient of the owner notification, and the SMTP login.
	pub owner_address: String,
	pub password: String,
	pub relay: String,
	pub signature: String,
}

impl MailerConfig {
	/// Config for `owner_address` with no password, the default relay and
	/// the default signature.
	pub fn new(owner_address: impl Into<String>) -> Self {
		Self {
			owner_address: owner_address.into(),
			password: String::new(),
			relay: DEFAULT_RELAY.to_string(),
			signature: DEFAULT_SIGNATURE.to_string(),
		}
	}

	pub fn with_password(mut self, password: impl Into<String>) -> Self {
		self.password = password.into();
		self
	}

	/// Reads [`OWNER_ADDRESS_ENV`], [`PASSWORD_ENV`] and, if set,
	/// [`RELAY_ENV`] and [`SIGNATURE_ENV`].
	pub fn from_env() -> Result<Self, ConfigurationError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Like [`from_env`](Self::from_env) over an arbitrary variable source.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigurationError> {
		let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

		let owner = var(OWNER_ADDRESS_ENV).ok_or(ConfigurationError::MissingEnv(OWNER_ADDRESS_ENV))?;
		let password = var(PASSWORD_ENV).ok_or(ConfigurationError::MissingEnv(PASSWORD_ENV))?;

		let mut config = Self::new(owner).with_password(password);
		if let Some(relay) = var(RELAY_ENV) {
			config.relay = relay;
		}
		if let Some(signature) = var(SIGNATURE_ENV) {
			config.signature = signature;
		}
		Ok(config)
	}
}

impl std::fmt::Debug for MailerConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MailerConfig")
			.field("owner_address", &self.owner_address)
			.field("password", &"<redacted>")
			.field("relay", &self.relay)
			.field("signature", &self.signature)
			.finish()
	}
}

/// A fully composed HTML message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingMail {
	pub from: String,
	pub to: String,
	pub subject: String,
	pub html: String,
}

/// Delivers composed messages to an external mail service.
pub trait MailTransport {
	fn send(&mut self, mail: &OutgoingMail) -> Result<(), TransportError>;
}

/// Escapes text for interpolation into an HTML body.
pub fn escape_html(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	out
}

/// Message to the site owner describing the submission.
pub fn compose_owner_notification(
	config: &MailerConfig,
	submission: &ContactSubmission,
) -> OutgoingMail {
	let name = escape_html(&submission.name);
	let email = escape_html(&submission.email);
	let subject = escape_html(&submission.subject);
	let message = escape_html(&submission.message);

	OutgoingMail {
		from: config.owner_address.clone(),
		to: config.owner_address.clone(),
		subject: format!("Portfolio Contact: {}", submission.subject),
		html: format!(
			r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #333; border-bottom: 2px solid #4F46E5; padding-bottom: 10px;">New Contact Form Submission</h2>
  <div style="background-color: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Subject:</strong> {subject}</p>
  </div>
  <div style="background-color: #fff; padding: 20px; border-left: 4px solid #4F46E5;">
    <h3 style="color: #333; margin-top: 0;">Message:</h3>
    <p style="line-height: 1.6; color: #555;">{message}</p>
  </div>
  <hr style="margin: 20px 0; border: none; border-top: 1px solid #eee;">
  <p style="color: #888; font-size: 12px;">This email was sent from your portfolio contact form.</p>
</div>"#
		),
	}
}

/// Automatic reply to the submitter.
pub fn compose_acknowledgment(config: &MailerConfig, submission: &ContactSubmission) -> OutgoingMail {
	let name = escape_html(&submission.name);
	let subject = escape_html(&submission.subject);
	let message = escape_html(&submission.message);
	let signature = escape_html(&config.signature);

	OutgoingMail {
		from: config.owner_address.clone(),
		to: submission.email.clone(),
		subject: "Thank you for contacting me!".to_string(),
		html: format!(
			r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #4F46E5;">Thank you for reaching out!</h2>
  <p>Hi {name},</p>
  <p>Thank you for contacting me through my portfolio. I have received your message and will get back to you as soon as possible.</p>
  <div style="background-color: #f8f9fa; padding: 15px; border-radius: 8px; margin: 20px 0;">
    <h3 style="margin-top: 0; color: #333;">Your message:</h3>
    <p style="margin-bottom: 0;"><strong>Subject:</strong> {subject}</p>
    <p style="color: #666; margin-top: 10px;">{message}</p>
  </div>
  <p>Best regards,<br>{signature}</p>
  <hr style="margin: 20px 0; border: none; border-top: 1px solid #eee;">
  <p style="color: #888; font-size: 12px;">This is an automated response. Please do not reply to this email.</p>
</div>"#
		),
	}
}

/// Handles contact submissions against a mail transport.
pub struct ContactMailer<T: MailTransport> {
	config: MailerConfig,
	transport: T,
}

impl<T: MailTransport> ContactMailer<T> {
	pub fn new(config: MailerConfig, transport: T) -> Self {
		Self { config, transport }
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// Validates and delivers one submission.
	///
	/// Nothing is sent when validation fails. The owner notification goes out
	/// first, then the acknowledgment; each is attempted once, and a failure
	/// of either fails the whole submission.
	pub fn submit(&mut self, request: ContactRequest) -> Result<(), MailError> {
		let submission = request.validate()?;

		let notification = compose_owner_notification(&self.config, &submission);
		self.transport
			.send(&notification)
			.map_err(MailError::Delivery)?;

		let acknowledgment = compose_acknowledgment(&self.config, &submission);
		self.transport
			.send(&acknowledgment)
			.map_err(MailError::Delivery)?;

		info!("contact: delivered submission from {}", submission.email);
		Ok(())
	}

	/// JSON boundary: `(status, response)` for a raw request body.
	///
	/// A body that doesn't parse, or parses to `null`, fails with 500 like a
	/// delivery failure. See [`ContactRequest::from_json`] for field rules.
	pub fn handle_json(&mut self, body: &str) -> (u16, ContactResponse) {
		let result = match serde_json::from_str::<Value>(body) {
			Ok(Value::Null) => Err(MailError::Unreadable("body is null".to_string())),
			Ok(value) => self.submit(ContactRequest::from_json(&value)),
			Err(e) => Err(MailError::Unreadable(e.to_string())),
		};
		match result {
			Ok(()) => (200, ContactResponse::sent()),
			Err(e) => {
				match e {
					MailError::Delivery(ref cause) => {
						error!("contact: email sending failed: {}", cause);
					}
					MailError::Unreadable(ref cause) => {
						error!("contact: unreadable request body: {}", cause);
					}
					MailError::Validation => {}
				}
				(e.status(), ContactResponse::failed(&e))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use std::collections::HashMap;

	use serde_json::json;

	#[test]
	fn whitespace_only_field_is_present() {
		let request = ContactRequest {
			name: Some("Ada".into()),
			email: Some("ada@example.com".into()),
			subject: Some("   ".into()),
			message: Some("hello".into()),
		};
		assert_eq!(request.validate().map(|s| s.subject), Ok("   ".to_string()));
	}

	#[test]
	fn json_fields_follow_presence_rules() {
		let body = json!({
			"name": 5,
			"email": "ada@example.com",
			"subject": true,
			"message": 0,
		});
		let request = ContactRequest::from_json(&body);
		assert_eq!(request.name.as_deref(), Some("5"));
		assert_eq!(request.subject.as_deref(), Some("true"));
		assert_eq!(request.message, None);

		let empty = ContactRequest::from_json(&json!({ "name": "", "email": null, "subject": false }));
		assert_eq!(empty.name.as_deref(), Some(""));
		assert_eq!(empty.email, None);
		assert_eq!(empty.subject, None);
		assert!(empty.validate().is_err());
	}

	#[test]
	fn non_object_body_has_no_fields() {
		let request = ContactRequest::from_json(&json!("hello"));
		assert_eq!(request.validate(), Err(MailError::Validation));
	}

	#[test]
	fn config_reads_credentials_and_overrides() {
		let vars: HashMap<&str, &str> = [
			("EMAIL_USER", "owner@example.com"),
			("EMAIL_PASS", "app-password"),
			("EMAIL_SIGNATURE", "The Owner"),
		]
		.into_iter()
		.collect();
		let config = MailerConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
		assert_eq!(config.owner_address, "owner@example.com");
		assert_eq!(config.password, "app-password");
		assert_eq!(config.relay, DEFAULT_RELAY);
		assert_eq!(config.signature, "The Owner");
		assert!(!format!("{config:?}").contains("app-password"));
	}

	#[test]
	fn config_requires_password() {
		let result = MailerConfig::from_lookup(|k| {
			(k == OWNER_ADDRESS_ENV).then(|| "owner@example.com".to_string())
		});
		assert_eq!(result, Err(ConfigurationError::MissingEnv(PASSWORD_ENV)));
	}

	#[test]
	fn html_is_escaped() {
		assert_eq!(
			escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
			"&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
		);
	}

	#[test]
	fn responses_serialize_to_wire_shape() {
		let sent = serde_json::to_value(ContactResponse::sent()).unwrap();
		assert_eq!(sent["success"], true);
		let failed = serde_json::to_value(ContactResponse::failed(&MailError::Validation)).unwrap();
		assert_eq!(failed["error"], "All fields are required");
	}
}
