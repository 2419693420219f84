use crate::registration::{RegistrationInput, SubmissionOutcome};
use crate::validation::{validate, ValidationErrors};

/// A form field, as the touched-state tracker and error display see it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
	FullName,
	Email,
	Phone,
	Sessions,
	AgreeTerms,
}

/// Set once the endpoint has accepted a registration. Nothing clears it afterwards;
/// the form is one-shot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Confirmation {
	pub email: String,
}

#[derive(Clone, Copy, Debug, Default)]
struct TouchedFields {
	full_name: bool,
	email: bool,
	phone: bool,
	sessions: bool,
	agree_terms: bool,
}

/// The result of asking the controller to start a submission.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitStart {
	/// The input passed validation; the caller should perform exactly one network call
	/// and report back through [`FormController::finish_submit`].
	Started,
	/// Validation failed; all fields were marked touched so their errors render.
	Invalid,
	/// A submission is already pending; this attempt is dropped.
	AlreadyInFlight,
}

/// Owns the form's UI state: which fields the user has interacted with, whether a
/// submission is pending, and the post-success confirmation. The field values
/// themselves live in the view's signals; the controller only ever sees a snapshot of
/// them at submit time.
#[derive(Clone, Debug, Default)]
pub struct FormController {
	touched: TouchedFields,
	is_submitting: bool,
	confirmation: Option<Confirmation>,
}

impl FormController {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn touch(&mut self, field: Field) {
		match field {
			Field::FullName => self.touched.full_name = true,
			Field::Email => self.touched.email = true,
			Field::Phone => self.touched.phone = true,
			Field::Sessions => self.touched.sessions = true,
			Field::AgreeTerms => self.touched.agree_terms = true,
		}
	}

	fn is_touched(&self, field: Field) -> bool {
		match field {
			Field::FullName => self.touched.full_name,
			Field::Email => self.touched.email,
			Field::Phone => self.touched.phone,
			Field::Sessions => self.touched.sessions,
			Field::AgreeTerms => self.touched.agree_terms,
		}
	}

	/// The error to render for a field, if any. Untouched fields never show errors.
	pub fn visible_error(&self, field: Field, errors: &ValidationErrors) -> Option<&'static str> {
		if !self.is_touched(field) {
			return None;
		}
		match field {
			Field::FullName => errors.full_name,
			Field::Email => errors.email,
			Field::Phone => errors.phone,
			Field::Sessions => errors.sessions,
			Field::AgreeTerms => errors.agree_terms,
		}
	}

	pub fn is_submitting(&self) -> bool {
		self.is_submitting
	}

	pub fn confirmation(&self) -> Option<&Confirmation> {
		self.confirmation.as_ref()
	}

	/// Gates a submission attempt. Only a [`SubmitStart::Started`] return permits a
	/// network call.
	pub fn begin_submit(&mut self, input: &RegistrationInput) -> SubmitStart {
		if self.is_submitting {
			return SubmitStart::AlreadyInFlight;
		}
		if !validate(input).is_valid() {
			self.touch_all();
			return SubmitStart::Invalid;
		}
		self.is_submitting = true;
		SubmitStart::Started
	}

	/// Records the outcome of the submission started by the matching
	/// [`FormController::begin_submit`]. Clears the pending flag on every path.
	pub fn finish_submit(&mut self, email: &str, outcome: &SubmissionOutcome) {
		if let SubmissionOutcome::Success = outcome {
			self.confirmation = Some(Confirmation {
				email: String::from(email),
			});
		}
		self.is_submitting = false;
	}

	fn touch_all(&mut self) {
		self.touched = TouchedFields {
			full_name: true,
			email: true,
			phone: true,
			sessions: true,
			agree_terms: true,
		};
	}
}
