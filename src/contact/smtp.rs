//! SMTP delivery through an authenticated relay.

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::debug;

use super::{MailTransport, MailerConfig, OutgoingMail};
use crate::error::TransportError;

/// Sends mail through the relay named in [`MailerConfig::relay`], logging in
/// as the owner address.
pub struct SmtpMailTransport {
	transport: SmtpTransport,
}

impl SmtpMailTransport {
	/// Builds a TLS relay transport. No connection is opened until the first send.
	pub fn connect(config: &MailerConfig) -> Result<Self, TransportError> {
		let credentials = Credentials::new(config.owner_address.clone(), config.password.clone());
		let transport = SmtpTransport::relay(&config.relay)
			.map_err(|e| TransportError(format!("relay {}: {e}", config.relay)))?
			.credentials(credentials)
			.build();
		debug!("contact: smtp relay {} configured", config.relay);
		Ok(Self { transport })
	}
}

/// Turns a composed message into an HTML email.
pub fn build_message(mail: &OutgoingMail) -> Result<Message, TransportError> {
	let from = mail
		.from
		.parse::<Mailbox>()
		.map_err(|e| TransportError(format!("sender {}: {e}", mail.from)))?;
	let to = mail
		.to
		.parse::<Mailbox>()
		.map_err(|e| TransportError(format!("recipient {}: {e}", mail.to)))?;

	Message::builder()
		.from(from)
		.to(to)
		.subject(mail.subject.clone())
		.header(ContentType::TEXT_HTML)
		.body(mail.html.clone())
		.map_err(|e| TransportError(e.to_string()))
}

impl MailTransport for SmtpMailTransport {
	fn send(&mut self, mail: &OutgoingMail) -> Result<(), TransportError> {
		let message = build_message(mail)?;
		self.transport
			.send(&message)
			.map(|_| ())
			.map_err(|e| TransportError(e.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn mail(to: &str) -> OutgoingMail {
		OutgoingMail {
			from: "owner@example.com".into(),
			to: to.into(),
			subject: "Portfolio Contact: Hello".into(),
			html: "<p>Hi</p>".into(),
		}
	}

	#[test]
	fn message_is_sent_as_html() {
		let message = build_message(&mail("ada@example.com")).unwrap();
		let raw = String::from_utf8_lossy(&message.formatted()).into_owned();
		assert!(raw.contains("text/html"));
		assert!(raw.contains("ada@example.com"));
	}

	#[test]
	fn bad_recipient_is_a_transport_error() {
		let err = build_message(&mail("not an address")).unwrap_err();
		assert!(err.0.starts_with("recipient not an address"));
	}
}
