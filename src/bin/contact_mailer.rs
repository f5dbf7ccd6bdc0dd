//! Contact endpoint for CGI-style hosts.
//!
//! Reads the JSON request body from stdin, delivers it over SMTP using
//! `EMAIL_USER`/`EMAIL_PASS`, and writes a CGI response (status line, JSON
//! content type, body) to stdout.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use std::io::{self, Read, Write};

use log::error;
use starfield_portfolio::contact::{ContactMailer, ContactResponse, MailerConfig, SmtpMailTransport};
use starfield_portfolio::error::{MailError, TransportError};

fn respond(body: &str) -> (u16, ContactResponse) {
	let config = match MailerConfig::from_env() {
		Ok(config) => config,
		Err(e) => {
			error!("contact: {}", e);
			let err = MailError::Delivery(TransportError(e.to_string()));
			return (err.status(), ContactResponse::failed(&err));
		}
	};
	match SmtpMailTransport::connect(&config) {
		Ok(transport) => ContactMailer::new(config, transport).handle_json(body),
		Err(e) => {
			error!("contact: {}", e);
			let err = MailError::Delivery(e);
			(err.status(), ContactResponse::failed(&err))
		}
	}
}

fn main() -> io::Result<()> {
	env_logger::init();

	let mut body = String::new();
	if let Err(e) = io::stdin().read_to_string(&mut body) {
		error!("contact: failed to read request body: {}", e);
		body.clear();
	}

	let (status, response) = respond(&body);
	let json = serde_json::to_string(&response)
		.unwrap_or_else(|_| r#"{"error":"Failed to send email"}"#.to_string());

	let mut out = io::stdout().lock();
	write!(out, "Status: {status}\r\nContent-Type: application/json\r\n\r\n{json}")?;
	out.flush()
}
