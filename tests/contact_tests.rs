// Contact mailer behavior against an in-memory transport.

#![allow(unused_crate_dependencies)]

use starfield_portfolio::contact::{
	ContactMailer, ContactRequest, ContactResponse, MailTransport, MailerConfig, OutgoingMail,
};
use starfield_portfolio::error::{MailError, TransportError};

/// Records every message; fails the n-th send (1-based) when configured.
#[derive(Default)]
struct RecordingTransport {
	sent: Vec<OutgoingMail>,
	attempts: usize,
	fail_on: Option<usize>,
}

impl MailTransport for RecordingTransport {
	fn send(&mut self, mail: &OutgoingMail) -> Result<(), TransportError> {
		self.attempts += 1;
		if self.fail_on == Some(self.attempts) {
			return Err(TransportError("service unavailable".into()));
		}
		self.sent.push(mail.clone());
		Ok(())
	}
}

fn mailer(fail_on: Option<usize>) -> ContactMailer<RecordingTransport> {
	ContactMailer::new(
		MailerConfig::new("owner@example.com"),
		RecordingTransport {
			fail_on,
			..Default::default()
		},
	)
}

fn full_request() -> ContactRequest {
	ContactRequest {
		name: Some("Ada".into()),
		email: Some("ada@example.com".into()),
		subject: Some("Collaboration".into()),
		message: Some("Let's build <something>.".into()),
	}
}

#[test]
fn missing_email_is_rejected_without_dispatch() {
	let mut mailer = mailer(None);
	let body = r#"{"name":"Ada","subject":"Hi","message":"Hello"}"#;

	let (status, response) = mailer.handle_json(body);

	assert_eq!(status, 400);
	assert_eq!(
		response,
		ContactResponse::Failed {
			error: "All fields are required".into()
		}
	);
	assert_eq!(mailer.transport().attempts, 0);
}

#[test]
fn empty_field_counts_as_missing() {
	let mut mailer = mailer(None);
	let request = ContactRequest {
		message: Some(String::new()),
		..full_request()
	};
	assert_eq!(mailer.submit(request), Err(MailError::Validation));
	assert_eq!(mailer.transport().attempts, 0);
}

#[test]
fn unparsable_body_fails_like_delivery() {
	let mut mailer = mailer(None);
	for body in ["not json", "", "null"] {
		let (status, response) = mailer.handle_json(body);
		assert_eq!(status, 500, "body {body:?}");
		assert_eq!(
			response,
			ContactResponse::Failed {
				error: "Failed to send email".into()
			}
		);
	}
	assert_eq!(mailer.transport().attempts, 0);
}

#[test]
fn whitespace_and_numbers_count_as_present() {
	let mut mailer = mailer(None);
	let body = r#"{"name":5,"email":"ada@example.com","subject":"  ","message":"Hello"}"#;

	let (status, response) = mailer.handle_json(body);

	assert_eq!(status, 200);
	assert_eq!(response, ContactResponse::sent());
	let sent = &mailer.transport().sent;
	assert_eq!(sent.len(), 2);
	assert_eq!(sent[0].subject, "Portfolio Contact:   ");
	assert!(sent[1].html.contains("Hi 5,"));
}

#[test]
fn empty_string_and_null_are_missing() {
	let mut mailer = mailer(None);
	for body in [
		r#"{"name":"","email":"ada@example.com","subject":"Hi","message":"Hello"}"#,
		r#"{"name":"Ada","email":null,"subject":"Hi","message":"Hello"}"#,
		r#"["Ada","ada@example.com","Hi","Hello"]"#,
	] {
		let (status, _) = mailer.handle_json(body);
		assert_eq!(status, 400, "body {body}");
	}
	assert_eq!(mailer.transport().attempts, 0);
}

#[test]
fn success_sends_notification_then_acknowledgment() {
	let mut mailer = mailer(None);
	let body = serde_json::to_string(&full_request()).unwrap();

	let (status, response) = mailer.handle_json(&body);

	assert_eq!(status, 200);
	assert_eq!(response, ContactResponse::sent());

	let sent = &mailer.transport().sent;
	assert_eq!(sent.len(), 2);

	assert_eq!(sent[0].to, "owner@example.com");
	assert_eq!(sent[0].from, "owner@example.com");
	assert_eq!(sent[0].subject, "Portfolio Contact: Collaboration");
	assert!(sent[0].html.contains("ada@example.com"));
	assert!(sent[0].html.contains("Let&#39;s build &lt;something&gt;."));

	assert_eq!(sent[1].to, "ada@example.com");
	assert_eq!(sent[1].subject, "Thank you for contacting me!");
	assert!(sent[1].html.contains("Hi Ada,"));
	assert!(sent[1].html.contains("Saurav Agrawal"));
}

#[test]
fn failed_owner_notification_skips_acknowledgment() {
	let mut mailer = mailer(Some(1));
	let result = mailer.submit(full_request());

	assert!(matches!(result, Err(MailError::Delivery(_))));
	assert_eq!(mailer.transport().attempts, 1);
	assert!(mailer.transport().sent.is_empty());
}

#[test]
fn partial_delivery_is_reported_as_failure() {
	let mut mailer = mailer(Some(2));
	let body = serde_json::to_string(&full_request()).unwrap();

	let (status, response) = mailer.handle_json(&body);

	assert_eq!(status, 500);
	assert_eq!(
		response,
		ContactResponse::Failed {
			error: "Failed to send email".into()
		}
	);
	assert_eq!(mailer.transport().sent.len(), 1);
	assert_eq!(mailer.transport().attempts, 2);
}

#[test]
fn success_response_matches_wire_format() {
	let json = serde_json::to_value(ContactResponse::sent()).unwrap();
	assert_eq!(
		json,
		serde_json::json!({ "success": true, "message": "Email sent successfully" })
	);
}
