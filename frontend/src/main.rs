use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content {
    pub mod catalog;
}
mod state {
    pub mod carousel;
    pub mod contact_form;
    pub mod filter;
    pub mod theme;
    pub mod visibility;
}
mod utils {
    pub mod api;
    pub mod viewport;
}
mod components {
    pub mod contact;
    pub mod nav;
    pub mod projects;
    pub mod reveal;
    pub mod sections;
    pub mod showcase;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::home::Home;
use pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    gloo_console::log!(format!("Starting AbSolution site, backend at {:?}", config::get_backend_url()));
    yew::Renderer::<App>::new().render();
}
