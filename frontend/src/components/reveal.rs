use yew::prelude::*;

use crate::state::visibility::SECTION_THRESHOLD;
use crate::utils::viewport::{reveal_classes, use_reveal};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub class: &'static str,
    #[prop_or("section")]
    pub tag: &'static str,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or(SECTION_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in an element that gains the `visible` class the
/// first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let (node, visible) = use_reveal(props.threshold);
    html! {
        <@{props.tag}
            ref={node}
            id={props.id.clone()}
            class={reveal_classes(props.class, visible)}
            style={props.style.clone()}
        >
            { for props.children.iter() }
        </@>
    }
}
