use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page wrapper not-found">
            <section class="section visible">
                <h1 class="hero-title">{"404"}</h1>
                <p class="lead">{"This page wandered off. The good stuff is on the home page."}</p>
                <Link<Route> to={Route::Home} classes="cta-primary">
                    {"Back to AbSolution"}
                </Link<Route>>
            </section>
        </div>
    }
}
