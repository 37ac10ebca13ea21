#[cfg(target_family = "wasm")]
fn main() {
	collegehub_rs::logging::init();
	yew::Renderer::<collegehub_rs::page::App>::new().render();
}

#[cfg(not(target_family = "wasm"))]
fn main() {
	// Browser-only app; native builds exist for the test suite.
	collegehub_rs::logging::init();
	log::info!(target: env!("CARGO_PKG_NAME"), "build for wasm32 to run the app");
}
