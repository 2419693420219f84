use std::fmt::Display;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Clone, Eq, PartialEq)]
pub struct ErrorData {
	message: &'static str,
	details: Option<String>,
}

impl ErrorData {
	/// Creates a new data object with no error details to render
	pub fn new(message: &'static str) -> Self {
		Self { message, details: None }
	}

	/// Creates a new data object with error details to render
	pub fn new_with_details(message: &'static str, error: impl Display) -> Self {
		let details = Some(format!("{error}"));
		Self { message, details }
	}
}

#[derive(Prop)]
pub struct ErrorBannerProps<'a> {
	error: &'a Signal<Option<ErrorData>>,
}

/// A dismissible banner for errors that would otherwise only reach the console.
#[component]
pub fn ErrorBanner<'a, G: Html>(ctx: Scope<'a>, props: ErrorBannerProps<'a>) -> View<G> {
	view! {
		ctx,
		(if let Some(error) = (*props.error.get()).clone() {
			let dismiss_handler = move |_event: WebEvent| props.error.set(None);
			let details_view = if let Some(details) = error.details.clone() {
				view! {
					ctx,
					span(class="error_banner_details") { (details) }
				}
			} else {
				view! { ctx, }
			};
			view! {
				ctx,
				div(class="error_banner") {
					span(class="error_banner_text") { (error.message) }
					(details_view.clone())
					span(class="error_banner_dismiss") {
						a(class="click", on:click=dismiss_handler) { "[X]" }
					}
				}
			}
		} else {
			view! { ctx, }
		})
	}
}
