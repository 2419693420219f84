use event_signup_shared::registration::{RegistrationInput, RegistrationResponse, SubmissionOutcome};
use futures::{pin_mut, select, FutureExt};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use std::fmt::Display;
use web_sys::Url;

/// Path of the registration endpoint, relative to the origin the app is served from.
const REGISTRATION_PATH: &str = "register/";

/// How long a submission exchange may remain pending before it's abandoned.
const SUBMIT_TIMEOUT_MILLIS: u32 = 10_000;

/// Errors that can occur during the submission exchange with the registration endpoint
pub enum SubmitError {
	Http(gloo_net::Error),
	BadStatus(u16),
	Timeout,
}

impl Display for SubmitError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Http(err) => write!(f, "{}", err),
			Self::BadStatus(status) => write!(f, "The server answered with status {}", status),
			Self::Timeout => write!(f, "The registration request timed out"),
		}
	}
}

impl From<gloo_net::Error> for SubmitError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Http(error)
	}
}

/// Gets the URL of the registration endpoint in a way that adapts to any URL at which
/// the application could be hosted.
///
/// # Panics
///
/// This function panics when the browser context (window, location, URL, etc.) is inaccessible.
fn registration_endpoint() -> String {
	let js_location = web_sys::window()
		.expect("Failed to get browser window context")
		.location();
	let web_endpoint = js_location.href().expect("Failed to get current address");
	let url = Url::new(&web_endpoint).expect("Failed to generate URL instance");
	format!("{}/{}", url.origin(), REGISTRATION_PATH)
}

/// Submits the registration to the endpoint. A single attempt with a single
/// request/response exchange; no retries. Every possible resolution, including the
/// timeout, maps to exactly one [`SubmissionOutcome`].
pub async fn submit_registration(input: &RegistrationInput) -> SubmissionOutcome {
	match registration_exchange(input).await {
		Ok(response) => response.into_outcome(),
		Err(error) => SubmissionOutcome::TransportFailure(format!("{}", error)),
	}
}

async fn registration_exchange(input: &RegistrationInput) -> Result<RegistrationResponse, SubmitError> {
	let request = Request::post(&registration_endpoint()).json(input)?;

	let exchange = async {
		let response = request.send().await?;
		if !response.ok() {
			return Err(SubmitError::BadStatus(response.status()));
		}
		Ok(response.json::<RegistrationResponse>().await?)
	}
	.fuse();
	let timeout = TimeoutFuture::new(SUBMIT_TIMEOUT_MILLIS).fuse();
	pin_mut!(exchange, timeout);

	select! {
		result = exchange => result,
		() = timeout => Err(SubmitError::Timeout),
	}
}
