use yew::prelude::*;

use crate::content::catalog::NAV_LINKS;
use crate::state::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let (theme_label, theme_icon) = if props.theme.is_dark() {
        ("Switch to Light Mode", "☀️")
    } else {
        ("Switch to Dark Mode", "🌙")
    };

    html! {
        <nav class="nav">
            <div class="brand">
                <div class="logo">{"AbSolution"}</div>
                <div class="tag">{"Design • AI • Automation"}</div>
            </div>

            <button class="theme-toggle" onclick={toggle_theme} aria-label={theme_label}>
                <span class="theme-icon">{theme_icon}</span>
            </button>

            <button class="hamburger" onclick={toggle_menu} aria-label="Toggle navigation">
                <span class={classes!((*menu_open).then_some("ham-open"))} />
            </button>

            <div class={classes!("nav-links", (*menu_open).then_some("open"))}>
                {
                    NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} onclick={close_menu.clone()}>{*label}</a>
                    }).collect::<Html>()
                }
            </div>
        </nav>
    }
}
