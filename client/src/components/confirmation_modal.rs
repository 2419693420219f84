use sycamore::prelude::*;

#[derive(Prop)]
pub struct ConfirmationModalProps {
	email: String,
}

/// The one-time acknowledgment shown after the endpoint accepts a registration.
/// Renders the submitted email; holds no state of its own.
#[component]
pub fn ConfirmationModal<G: Html>(ctx: Scope<'_>, props: ConfirmationModalProps) -> View<G> {
	view! {
		ctx,
		div(class="modal_backdrop") {
			div(class="modal", id="registration_confirmation") {
				h2 { "Thank you for registering!" }
				p {
					"A confirmation has been sent to "
					span(class="modal_email") { (props.email) }
					"."
				}
			}
		}
	}
}
