use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::catalog::SHOWCASE_APPS;
use crate::state::carousel::{Carousel, Direction};
use crate::utils::viewport::viewport_width;

// Used before the first resize measurement, and when there is no window.
const FALLBACK_WIDTH: f64 = 1024.0;

#[derive(Clone, PartialEq)]
struct ShowcaseState {
    carousel: Carousel,
    smooth: bool,
    // Bumped on every action so the scroll effect re-runs even when the
    // index stays put but the container width changed.
    moves: u32,
}

enum ShowcaseAction {
    Step(Direction),
    Jump(usize),
    Resize(f64),
}

impl Reducible for ShowcaseState {
    type Action = ShowcaseAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut carousel = self.carousel.clone();
        let smooth = match action {
            ShowcaseAction::Step(direction) => {
                carousel.advance(direction);
                true
            }
            ShowcaseAction::Jump(index) => {
                carousel.jump_to(index);
                true
            }
            ShowcaseAction::Resize(width) => {
                carousel.recompute_slide_count(width);
                false
            }
        };
        Rc::new(Self {
            carousel,
            smooth,
            moves: self.moves.wrapping_add(1),
        })
    }
}

fn scroll_container(container: &NodeRef, carousel: &Carousel, smooth: bool) {
    if let Some(element) = container.cast::<HtmlElement>() {
        let options = ScrollToOptions::new();
        options.set_left(carousel.scroll_offset(element.offset_width() as f64));
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        element.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Showcase)]
pub fn showcase() -> Html {
    let state = use_reducer(|| ShowcaseState {
        carousel: Carousel::new(SHOWCASE_APPS.len(), viewport_width().unwrap_or(FALLBACK_WIDTH)),
        smooth: false,
        moves: 0,
    });
    let container = use_node_ref();

    // Track the breakpoint while mounted
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let state = state.clone();
                        move || {
                            if let Some(width) = viewport_width() {
                                state.dispatch(ShowcaseAction::Resize(width));
                            }
                        }
                    });
                    let _ = window
                        .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
                    // Initial measurement
                    if let Some(width) = viewport_width() {
                        state.dispatch(ShowcaseAction::Resize(width));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "resize",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Scroll after every state change; the index is already clamped here.
    {
        let container = container.clone();
        let carousel = state.carousel.clone();
        let smooth = state.smooth;
        use_effect_with_deps(
            move |_| {
                scroll_container(&container, &carousel, smooth);
                || ()
            },
            state.moves,
        );
    }

    let step = |direction: Direction| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ShowcaseAction::Step(direction)))
    };

    let carousel = &state.carousel;
    let total = carousel.total_slides();
    let current = carousel.current();

    html! {
        <Reveal tag="div" class="app-showcase">
            <div class="showcase-header">
                <h3 class="showcase-title">{"Explore Our Mobile App Screens"}</h3>
                <p class="showcase-subtitle">
                    {"Our designs feature intuitive navigation, elegant UI components, and pixel-perfect execution that elevate the user experience across iOS and Android platforms."}
                </p>
            </div>

            <div class="carousel-container">
                <button class="carousel-arrow" onclick={step(Direction::Prev)} aria-label="Previous screens">
                    <span>{"❮"}</span>
                </button>

                <div class="phones-container" ref={container}>
                    <div class="phones-row">
                        {
                            SHOWCASE_APPS.iter().enumerate().map(|(index, app)| {
                                let slot = carousel.slot_for(index);
                                html! {
                                    <div
                                        key={app.id}
                                        class={classes!("phone-device", slot.label())}
                                        style={slot.transform().style()}
                                    >
                                        <div class="phone-notch"></div>
                                        <div class="phone-screen">
                                            <img
                                                src={app.image_path}
                                                alt={app.alt}
                                                width="280"
                                                height="560"
                                                class="phone-image"
                                                loading="lazy"
                                            />
                                        </div>
                                        <div class="phone-name">{app.name}</div>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <button class="carousel-arrow" onclick={step(Direction::Next)} aria-label="Next screens">
                    <span>{"❯"}</span>
                </button>
            </div>

            <div class="carousel-dots">
                {
                    (0..total).map(|index| {
                        let onclick = {
                            let state = state.clone();
                            Callback::from(move |_: MouseEvent| state.dispatch(ShowcaseAction::Jump(index)))
                        };
                        html! {
                            <span
                                key={index}
                                class={classes!("dot", (index == current).then_some("active-dot"))}
                                {onclick}
                            ></span>
                        }
                    }).collect::<Html>()
                }
            </div>

            <div class="cta-container">
                <a href="#contact" class="cta-button">{"Get Your App Designed"}</a>
            </div>
        </Reveal>
    }
}
