//! Log initialization for both build targets: the browser console on wasm,
//! a terminal logger everywhere else.

#[cfg(target_family = "wasm")]
mod console {
	use log::{Level, Log, Metadata, Record};
	use wasm_bindgen::JsValue;

	pub struct ConsoleLogger;

	impl Log for ConsoleLogger {
		fn enabled(&self, metadata: &Metadata) -> bool {
			metadata.level() <= Level::Debug
		}

		fn log(&self, record: &Record) {
			if !self.enabled(record.metadata()) {
				return;
			}
			let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
			match record.level() {
				Level::Error => web_sys::console::error_1(&msg),
				Level::Warn => web_sys::console::warn_1(&msg),
				Level::Info => web_sys::console::info_1(&msg),
				Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
			}
		}

		fn flush(&self) {}
	}
}

#[cfg(target_family = "wasm")]
pub fn init() {
	if log::set_boxed_logger(Box::new(console::ConsoleLogger)).is_ok() {
		log::set_max_level(log::LevelFilter::Debug);
	}
}

#[cfg(not(target_family = "wasm"))]
pub fn init() {
	use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
	let _ = TermLogger::init(
		log::LevelFilter::Debug,
		Config::default(),
		TerminalMode::Mixed,
		ColorChoice::Auto,
	);
}
