use crate::registration::RegistrationInput;

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Invalid phone number";
pub const SESSIONS_REQUIRED: &str = "At least one session must be selected";
pub const AGREE_TERMS_REQUIRED: &str = "You must agree to the terms and conditions";

/// Per-field validation results for the registration form. A field with `None` passed
/// all of its rules; all fields `None` means the input is submittable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ValidationErrors {
	pub full_name: Option<&'static str>,
	pub email: Option<&'static str>,
	pub phone: Option<&'static str>,
	pub sessions: Option<&'static str>,
	pub agree_terms: Option<&'static str>,
}

impl ValidationErrors {
	pub fn is_valid(&self) -> bool {
		self.full_name.is_none()
			&& self.email.is_none()
			&& self.phone.is_none()
			&& self.sessions.is_none()
			&& self.agree_terms.is_none()
	}
}

/// Runs every field rule against the input. Rules are evaluated independently; one
/// field's failure never short-circuits another's.
pub fn validate(input: &RegistrationInput) -> ValidationErrors {
	ValidationErrors {
		full_name: full_name_error(&input.full_name),
		email: email_error(&input.email),
		phone: phone_error(&input.phone),
		sessions: if input.sessions.is_empty() {
			Some(SESSIONS_REQUIRED)
		} else {
			None
		},
		agree_terms: if input.agree_terms {
			None
		} else {
			Some(AGREE_TERMS_REQUIRED)
		},
	}
}

fn full_name_error(full_name: &str) -> Option<&'static str> {
	if full_name.trim().is_empty() {
		Some(FULL_NAME_REQUIRED)
	} else {
		None
	}
}

fn email_error(email: &str) -> Option<&'static str> {
	if email.is_empty() {
		Some(EMAIL_REQUIRED)
	} else if !is_email_shaped(email) {
		Some(EMAIL_INVALID)
	} else {
		None
	}
}

fn phone_error(phone: &str) -> Option<&'static str> {
	if phone.is_empty() {
		Some(PHONE_REQUIRED)
	} else if !phone.chars().all(|c| c.is_ascii_digit()) {
		Some(PHONE_INVALID)
	} else {
		None
	}
}

/// A deliberately permissive shape check: one `@` separating a non-empty local part
/// from a dotted domain, with no whitespace anywhere.
fn is_email_shaped(email: &str) -> bool {
	if email.chars().any(char::is_whitespace) {
		return false;
	}
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	if local.is_empty() || domain.contains('@') {
		return false;
	}
	let Some((host, tld)) = domain.rsplit_once('.') else {
		return false;
	};
	!host.is_empty() && !host.starts_with('.') && !tld.is_empty()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::registration::Session;

	fn valid_input() -> RegistrationInput {
		RegistrationInput {
			full_name: String::from("Jane Doe"),
			email: String::from("jane@example.com"),
			phone: String::from("5551234"),
			sessions: [Session::Music].into_iter().collect(),
			agree_terms: true,
		}
	}

	#[test]
	fn valid_input_has_no_errors() {
		let errors = validate(&valid_input());
		assert_eq!(errors, ValidationErrors::default());
		assert!(errors.is_valid());
	}

	#[test]
	fn blank_full_name_is_required() {
		let mut input = valid_input();
		input.full_name = String::from("   ");
		assert_eq!(validate(&input).full_name, Some(FULL_NAME_REQUIRED));
	}

	#[test]
	fn empty_email_reports_required_before_shape() {
		let mut input = valid_input();
		input.email = String::new();
		assert_eq!(validate(&input).email, Some(EMAIL_REQUIRED));
	}

	#[test]
	fn malformed_emails_are_rejected() {
		for email in ["jane", "jane@", "@example.com", "jane@example", "jane doe@example.com", "jane@@example.com"] {
			let mut input = valid_input();
			input.email = String::from(email);
			assert_eq!(validate(&input).email, Some(EMAIL_INVALID), "email: {}", email);
		}
	}

	#[test]
	fn nondigit_phone_is_invalid() {
		let mut input = valid_input();
		input.phone = String::from("abc");
		let errors = validate(&input);
		assert_eq!(errors.phone, Some(PHONE_INVALID));
		assert!(!errors.is_valid());
	}

	#[test]
	fn empty_phone_reports_required() {
		let mut input = valid_input();
		input.phone = String::new();
		assert_eq!(validate(&input).phone, Some(PHONE_REQUIRED));
	}

	#[test]
	fn no_sessions_selected_is_an_error() {
		let mut input = valid_input();
		input.sessions.clear();
		assert_eq!(validate(&input).sessions, Some(SESSIONS_REQUIRED));
	}

	#[test]
	fn unchecked_terms_is_an_error() {
		let mut input = valid_input();
		input.agree_terms = false;
		assert_eq!(validate(&input).agree_terms, Some(AGREE_TERMS_REQUIRED));
	}

	#[test]
	fn rules_are_evaluated_independently() {
		let errors = validate(&RegistrationInput::default());
		assert_eq!(errors.full_name, Some(FULL_NAME_REQUIRED));
		assert_eq!(errors.email, Some(EMAIL_REQUIRED));
		assert_eq!(errors.phone, Some(PHONE_REQUIRED));
		assert_eq!(errors.sessions, Some(SESSIONS_REQUIRED));
		assert_eq!(errors.agree_terms, Some(AGREE_TERMS_REQUIRED));
	}
}
