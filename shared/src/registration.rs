use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An event session track a registrant may opt into.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Session {
	Sports,
	Music,
	Dance,
	Games,
}

impl Session {
	pub const ALL: [Session; 4] = [Session::Sports, Session::Music, Session::Dance, Session::Games];

	/// The name used for this session on the wire and in form controls.
	pub fn wire_name(self) -> &'static str {
		match self {
			Self::Sports => "sports",
			Self::Music => "music",
			Self::Dance => "dance",
			Self::Games => "games",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Sports => "Sports",
			Self::Music => "Music",
			Self::Dance => "Dance",
			Self::Games => "Games",
		}
	}

	/// Toggles membership of this session in a selection set. Toggling twice with the
	/// same session returns the set to its prior state.
	pub fn toggle_in(self, sessions: &mut BTreeSet<Session>) {
		if !sessions.remove(&self) {
			sessions.insert(self);
		}
	}
}

/// The data entered into the registration form. Serializes directly to the JSON body
/// expected by the registration endpoint.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RegistrationInput {
	pub full_name: String,
	pub email: String,
	pub phone: String,
	#[serde(rename = "session")]
	pub sessions: BTreeSet<Session>,
	pub agree_terms: bool,
}

/// Response data from the registration endpoint.
#[derive(Debug, Deserialize)]
pub struct RegistrationResponse {
	pub status: String,
	#[serde(default)]
	pub error_message: Option<String>,
}

impl RegistrationResponse {
	pub fn into_outcome(self) -> SubmissionOutcome {
		if self.status == "success" {
			SubmissionOutcome::Success
		} else {
			let reason = self
				.error_message
				.unwrap_or_else(|| format!("registration failed with status \"{}\"", self.status));
			SubmissionOutcome::Rejected(reason)
		}
	}
}

/// How a single submission attempt resolved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionOutcome {
	/// The endpoint accepted the registration.
	Success,
	/// The endpoint answered but declined the registration.
	Rejected(String),
	/// The exchange itself failed (network error, timeout, or an unreadable response).
	TransportFailure(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn input_serializes_to_endpoint_body() {
		let mut sessions = BTreeSet::new();
		sessions.insert(Session::Music);
		sessions.insert(Session::Sports);
		let input = RegistrationInput {
			full_name: String::from("Jane Doe"),
			email: String::from("jane@example.com"),
			phone: String::from("5551234"),
			sessions,
			agree_terms: true,
		};

		let body = serde_json::to_value(&input).expect("input should serialize");
		assert_eq!(
			body,
			serde_json::json!({
				"full_name": "Jane Doe",
				"email": "jane@example.com",
				"phone": "5551234",
				"session": ["sports", "music"],
				"agree_terms": true,
			})
		);
	}

	#[test]
	fn success_response_maps_to_success() {
		let response: RegistrationResponse =
			serde_json::from_str(r#"{"status": "success"}"#).expect("response should parse");
		assert_eq!(response.into_outcome(), SubmissionOutcome::Success);
	}

	#[test]
	fn failure_response_maps_to_rejected_with_reason() {
		let response: RegistrationResponse =
			serde_json::from_str(r#"{"status": "error", "error_message": "duplicate"}"#)
				.expect("response should parse");
		assert_eq!(
			response.into_outcome(),
			SubmissionOutcome::Rejected(String::from("duplicate"))
		);
	}

	#[test]
	fn failure_response_without_message_still_rejects() {
		let response: RegistrationResponse =
			serde_json::from_str(r#"{"status": "full"}"#).expect("response should parse");
		let SubmissionOutcome::Rejected(reason) = response.into_outcome() else {
			panic!("expected a rejection");
		};
		assert!(reason.contains("full"));
	}

	#[test]
	fn toggling_a_session_twice_restores_the_set() {
		let mut sessions = BTreeSet::new();
		sessions.insert(Session::Dance);
		let original = sessions.clone();

		Session::Games.toggle_in(&mut sessions);
		assert!(sessions.contains(&Session::Games));
		Session::Games.toggle_in(&mut sessions);
		assert_eq!(sessions, original);
	}
}
