use yew::prelude::*;

use crate::content::catalog::{Category, PROJECTS, TECH_STACK, TOOLS};
use crate::state::filter::FilterSelector;
use crate::state::visibility::{stagger_delay_secs, GALLERY_THRESHOLD};
use crate::utils::viewport::{reveal_classes, use_reveal};

const CARD_BASE_DELAY: f64 = 0.5;
const CARD_STEP_DELAY: f64 = 0.1;

fn delay_style(secs: f64) -> String {
    format!("transition-delay: {:.1}s;", secs)
}

/// Filterable project gallery with the tech stack cloud.
#[function_component(Projects)]
pub fn projects() -> Html {
    let (section, visible) = use_reveal(GALLERY_THRESHOLD);
    let selector = use_state(|| FilterSelector::new(PROJECTS));

    let tabs = Category::TABS.iter().map(|tab| {
        let onclick = {
            let selector = selector.clone();
            let tab = *tab;
            Callback::from(move |_: MouseEvent| {
                let mut next = (*selector).clone();
                next.select_id(tab.id());
                selector.set(next);
            })
        };
        html! {
            <button
                key={tab.id()}
                class={classes!("tab", selector.is_active(*tab).then_some("active-tab"))}
                {onclick}
            >
                {tab.label()}
            </button>
        }
    }).collect::<Html>();

    let cards = selector.current().into_iter().enumerate().map(|(index, project)| {
        let delay = stagger_delay_secs(CARD_BASE_DELAY, CARD_STEP_DELAY, index);
        html! {
            <div key={project.id} class="project-card" style={delay_style(delay)}>
                <div class="card-image">
                    <img
                        src={project.image_path}
                        alt={project.title}
                        width="400"
                        height="500"
                        class="project-img"
                        loading="lazy"
                    />
                    <div class="card-overlay">
                        <a href={project.link} class="view-btn">{"View Project"}</a>
                    </div>
                </div>
                <div class="card-content">
                    <h3 class="card-title">{project.title}</h3>
                    <p class="card-subtitle">{project.subtitle}</p>
                    <div class="tech-stack">
                        { for project.tags.iter().map(|tag| html! { <span class="tech-chip">{*tag}</span> }) }
                    </div>
                </div>
            </div>
        }
    }).collect::<Html>();

    html! {
        <section id="projects" ref={section} class={reveal_classes("projects-section", visible)}>
            <div class="container">
                <div class="header">
                    <h2 class="title" style={delay_style(0.2)}>{"Projects & Products"}</h2>
                    <p class="subtitle" style={delay_style(0.3)}>
                        {"Innovative solutions crafted with cutting-edge technology"}
                    </p>
                </div>

                <div class="tabs" style={delay_style(0.4)}>{tabs}</div>

                <div class="projects-grid">
                    if selector.current().is_empty() {
                        <p class="empty-state">{"Nothing here yet. Check back soon."}</p>
                    } else {
                        {cards}
                    }
                </div>

                <div class="tech-section" style={delay_style(1.0)}>
                    <h3 class="tech-title">{"Our Tech Stack"}</h3>
                    <div class="tech-cloud">
                        { for TECH_STACK.iter().map(|tech| html! { <span class="tech-badge">{*tech}</span> }) }
                    </div>
                    <h3 class="tech-title">{"Tools We Use"}</h3>
                    <div class="tech-cloud">
                        { for TOOLS.iter().map(|tool| html! { <span class="tool-badge">{*tool}</span> }) }
                    </div>
                </div>

                <div class="cta" style={delay_style(1.2)}>
                    <h3 class="cta-title">{"Have an idea? Let's build it."}</h3>
                    <a href="#contact" class="cta-button">{"Start Your Project"}</a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_style_rounds_to_tenths() {
        assert_eq!(delay_style(stagger_delay_secs(CARD_BASE_DELAY, CARD_STEP_DELAY, 2)), "transition-delay: 0.7s;");
    }
}
