use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::components::{AppProvider, Navbar, ToastViewer};
use crate::route::Route;

#[function_component]
pub fn App() -> Html {
	html! {
		<BrowserRouter>
			<AppProvider>
				<Navbar />
				<ToastViewer />
				{ Route::switch() }
			</AppProvider>
		</BrowserRouter>
	}
}
