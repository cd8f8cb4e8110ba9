use yew::prelude::*;

use crate::components::contact::Contact;
use crate::components::nav::Nav;
use crate::components::projects::Projects;
use crate::components::sections::{
    Banner, CaseStudies, Footer, Portfolio, Pricing, Services, Team, Testimonials, Workflow,
};
use crate::state::theme::{initial_theme, toggle_theme};
use crate::utils::viewport::{apply_theme_class, system_prefers_dark, LocalThemeStore};

#[function_component(Home)]
pub fn home() -> Html {
    let theme = use_state(|| initial_theme(&LocalThemeStore, system_prefers_dark()));

    // Keep the <html> class in sync with the theme
    {
        use_effect_with_deps(
            move |theme| {
                apply_theme_class(*theme);
                || ()
            },
            *theme,
        );
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| theme.set(toggle_theme(&LocalThemeStore, *theme)))
    };

    let mode = if theme.is_dark() { "dark-mode" } else { "light-mode" };

    html! {
        <div class={classes!("page", "wrapper", mode)}>
            <Nav theme={*theme} {on_toggle_theme} />
            <Banner />
            <Services />
            <Portfolio />
            <Projects />
            <Workflow />
            <CaseStudies />
            <Team />
            <Pricing />
            <Testimonials />
            <Contact />
            <Footer />
        </div>
    }
}
