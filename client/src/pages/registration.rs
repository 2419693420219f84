use crate::api::submit_registration;
use crate::components::confirmation_modal::ConfirmationModal;
use crate::components::error_banner::{ErrorBanner, ErrorData};
use crate::page_utils::set_page_title;
use event_signup_shared::form::{Field, FormController, SubmitStart};
use event_signup_shared::registration::{RegistrationInput, Session, SubmissionOutcome};
use event_signup_shared::validation::validate;
use std::collections::BTreeSet;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	set_page_title("Registration");

	let full_name_signal = create_signal(ctx, String::new());
	let email_signal = create_signal(ctx, String::new());
	let phone_signal = create_signal(ctx, String::new());
	let sessions_signal = create_signal(ctx, BTreeSet::<Session>::new());
	let agree_terms_signal = create_signal(ctx, false);
	let controller_signal = create_signal(ctx, FormController::new());
	let submit_error_signal = create_signal(ctx, None::<ErrorData>);

	let input_signal = create_memo(ctx, || RegistrationInput {
		full_name: (*full_name_signal.get()).clone(),
		email: (*email_signal.get()).clone(),
		phone: (*phone_signal.get()).clone(),
		sessions: (*sessions_signal.get()).clone(),
		agree_terms: *agree_terms_signal.get(),
	});
	let errors_signal = create_memo(ctx, || validate(&input_signal.get()));

	let full_name_error_signal = create_memo(ctx, || {
		controller_signal
			.get()
			.visible_error(Field::FullName, &errors_signal.get())
	});
	let email_error_signal = create_memo(ctx, || {
		controller_signal.get().visible_error(Field::Email, &errors_signal.get())
	});
	let phone_error_signal = create_memo(ctx, || {
		controller_signal.get().visible_error(Field::Phone, &errors_signal.get())
	});
	let sessions_error_signal = create_memo(ctx, || {
		controller_signal
			.get()
			.visible_error(Field::Sessions, &errors_signal.get())
	});
	let agree_terms_error_signal = create_memo(ctx, || {
		controller_signal
			.get()
			.visible_error(Field::AgreeTerms, &errors_signal.get())
	});
	let is_submitting_signal = create_memo(ctx, || controller_signal.get().is_submitting());
	let confirmation_signal = create_memo(ctx, || controller_signal.get().confirmation().cloned());

	let touch_full_name = move |_event: WebEvent| controller_signal.modify().touch(Field::FullName);
	let touch_email = move |_event: WebEvent| controller_signal.modify().touch(Field::Email);
	let touch_phone = move |_event: WebEvent| controller_signal.modify().touch(Field::Phone);
	let touch_agree_terms = move |_event: WebEvent| controller_signal.modify().touch(Field::AgreeTerms);

	let session_checkboxes = View::new_fragment(
		Session::ALL
			.iter()
			.map(|session| {
				let session = *session;
				let toggle_handler = move |_event: WebEvent| {
					controller_signal.modify().touch(Field::Sessions);
					session.toggle_in(&mut sessions_signal.modify());
				};
				let checked_signal = create_memo(ctx, move || sessions_signal.get().contains(&session));
				view! {
					ctx,
					label(class="registration_session_option") {
						input(
							type="checkbox",
							name="session",
							value=session.wire_name(),
							checked=*checked_signal.get(),
							on:change=toggle_handler
						)
						(session.label())
					}
				}
			})
			.collect(),
	);

	let submit_handler = move |event: WebEvent| {
		event.prevent_default();

		let input = (*input_signal.get()).clone();
		if controller_signal.modify().begin_submit(&input) != SubmitStart::Started {
			return;
		}

		spawn_local_scoped(ctx, async move {
			let outcome = submit_registration(&input).await;
			match &outcome {
				SubmissionOutcome::Success => submit_error_signal.set(None),
				SubmissionOutcome::Rejected(reason) => {
					log::error!("Registration failed: {}", reason);
					submit_error_signal.set(Some(ErrorData::new_with_details(
						"The server declined this registration.",
						reason,
					)));
				}
				SubmissionOutcome::TransportFailure(reason) => {
					log::error!("Registration request failed: {}", reason);
					submit_error_signal.set(Some(ErrorData::new_with_details(
						"The registration could not be sent. Check your connection and try again.",
						reason,
					)));
				}
			}
			controller_signal.modify().finish_submit(&input.email, &outcome);
		});
	};

	view! {
		ctx,
		div(class="registration_page") {
			h3(class="registration_title") { "Registration" }
			ErrorBanner(error=submit_error_signal)
			form(id="registration_form", on:submit=submit_handler) {
				div(class="registration_field") {
					label(for="registration_full_name") { "Full Name" }
					input(
						id="registration_full_name",
						type="text",
						placeholder="Enter your full name",
						class=if full_name_error_signal.get().is_some() { "error" } else { "" },
						bind:value=full_name_signal,
						on:blur=touch_full_name
					)
					(if let Some(message) = *full_name_error_signal.get() {
						view! { ctx, p(class="input_error") { (message) } }
					} else {
						view! { ctx, }
					})
				}
				div(class="registration_field") {
					label(for="registration_email") { "Email Address" }
					input(
						id="registration_email",
						type="email",
						placeholder="Enter your email address",
						class=if email_error_signal.get().is_some() { "error" } else { "" },
						bind:value=email_signal,
						on:blur=touch_email
					)
					(if let Some(message) = *email_error_signal.get() {
						view! { ctx, p(class="input_error") { (message) } }
					} else {
						view! { ctx, }
					})
				}
				div(class="registration_field") {
					label(for="registration_phone") { "Phone Number" }
					input(
						id="registration_phone",
						type="tel",
						placeholder="Enter your phone number",
						class=if phone_error_signal.get().is_some() { "error" } else { "" },
						bind:value=phone_signal,
						on:blur=touch_phone
					)
					(if let Some(message) = *phone_error_signal.get() {
						view! { ctx, p(class="input_error") { (message) } }
					} else {
						view! { ctx, }
					})
				}
				div(class="registration_field") {
					label { "Selection of Event Sessions" }
					div(class="registration_session_options") {
						(session_checkboxes.clone())
					}
					(if let Some(message) = *sessions_error_signal.get() {
						view! { ctx, p(class="input_error") { (message) } }
					} else {
						view! { ctx, }
					})
				}
				div(class="registration_field registration_terms") {
					label(for="registration_agree_terms") {
						input(
							id="registration_agree_terms",
							type="checkbox",
							bind:checked=agree_terms_signal,
							on:change=touch_agree_terms
						)
						"I agree to the terms and conditions"
					}
					(if let Some(message) = *agree_terms_error_signal.get() {
						view! { ctx, p(class="input_error") { (message) } }
					} else {
						view! { ctx, }
					})
				}
				div(class="registration_submit") {
					button(type="submit", disabled=*is_submitting_signal.get()) {
						(if *is_submitting_signal.get() { "Submitting..." } else { "Submit" })
					}
				}
			}
			(if let Some(confirmation) = (*confirmation_signal.get()).clone() {
				view! { ctx, ConfirmationModal(email=confirmation.email) }
			} else {
				view! { ctx, }
			})
		}
	}
}
