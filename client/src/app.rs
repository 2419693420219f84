use crate::pages::not_found::NotFoundView;
use crate::pages::registration::RegistrationView;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

#[derive(Route)]
enum AppRoute {
	#[to("/registration")]
	Registration,
	#[not_found]
	NotFound,
}

#[component]
pub fn App<G: Html>(ctx: Scope<'_>) -> View<G> {
	view! {
		ctx,
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoute>| {
				view! {
					ctx,
					(match *route.get() {
						AppRoute::Registration => view! { ctx, RegistrationView {} },
						AppRoute::NotFound => view! { ctx, NotFoundView {} }
					})
				}
			}
		)
	}
}
