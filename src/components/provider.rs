use std::rc::Rc;

use yew::prelude::*;

use crate::components::ToastNotifier;
use crate::data::User;
use crate::session::Session;
use crate::storage::BrowserStorage;
use crate::store::AppStore;

pub type AppSession = Session<BrowserStorage, ToastNotifier>;

/// Shared handle to the fixture store and the active session. Session methods
/// mutate interior state without re-rendering anything, so callers bump the
/// context version through [`AppContext::refresh`] after each mutation.
#[derive(Clone)]
pub struct AppContext {
	store: Rc<AppStore>,
	session: Rc<AppSession>,
	version: u32,
	bump: Callback<()>,
}

impl PartialEq for AppContext {
	fn eq(&self, other: &Self) -> bool {
		self.version == other.version && Rc::ptr_eq(&self.session, &other.session)
	}
}

impl AppContext {
	pub fn store(&self) -> &AppStore {
		&self.store
	}

	pub fn session(&self) -> Rc<AppSession> {
		self.session.clone()
	}

	pub fn current_user(&self) -> Option<User> {
		self.session.current_user()
	}

	pub fn refresh(&self) {
		self.bump.emit(());
	}
}

struct Version(u32);

impl Reducible for Version {
	type Action = ();

	fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
		Rc::new(Self(self.0.wrapping_add(1)))
	}
}

#[function_component]
pub fn AppProvider(props: &html::ChildrenProps) -> Html {
	let version = use_reducer(|| Version(0));
	let handles = use_memo((), |_| {
		let store = Rc::new(AppStore::seeded());
		let session = Rc::new(Session::new(store.clone(), BrowserStorage, ToastNotifier));
		session.restore();
		(store, session)
	});
	let bump = {
		let version = version.clone();
		Callback::from(move |_| version.dispatch(()))
	};
	let (store, session) = &*handles;
	let context = AppContext {
		store: store.clone(),
		session: session.clone(),
		version: version.0,
		bump,
	};
	html! {
		<ContextProvider<AppContext> context={context}>
			{props.children.clone()}
		</ContextProvider<AppContext>>
	}
}

/// Grabs the app context; panics outside an [`AppProvider`] subtree.
#[hook]
pub fn use_app() -> AppContext {
	use_context::<AppContext>().expect("AppProvider missing from the component tree")
}
