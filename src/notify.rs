use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	Success,
	Error,
	Info,
}

/// A short transient message surfaced after a state-changing operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
	pub level: Level,
	pub message: String,
}

impl Toast {
	pub fn success(message: impl Into<String>) -> Self {
		Self { level: Level::Success, message: message.into() }
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self { level: Level::Error, message: message.into() }
	}

	pub fn info(message: impl Into<String>) -> Self {
		Self { level: Level::Info, message: message.into() }
	}
}

/// Sink for toasts emitted by the session and wishlist operations. The browser
/// shell forwards these into the yewdux toast store; tests record them.
pub trait Notify {
	fn push(&self, toast: Toast);
}

impl<N: Notify> Notify for Rc<N> {
	fn push(&self, toast: Toast) {
		(**self).push(toast)
	}
}

/// Records every toast for later inspection.
#[derive(Default)]
pub struct ToastLog(RefCell<Vec<Toast>>);

impl ToastLog {
	pub fn all(&self) -> Vec<Toast> {
		self.0.borrow().clone()
	}

	pub fn last(&self) -> Option<Toast> {
		self.0.borrow().last().cloned()
	}

	pub fn clear(&self) {
		self.0.borrow_mut().clear();
	}
}

impl Notify for ToastLog {
	fn push(&self, toast: Toast) {
		self.0.borrow_mut().push(toast);
	}
}
