use sycamore::prelude::*;

mod api;
mod app;
mod components;
mod page_utils;
mod pages;

use app::App;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	sycamore::render(|ctx| view! { ctx, App {} });
}
