use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::state::theme::{Theme, ThemeStore, DARK_CLASS, THEME_KEY};
use crate::state::visibility::{IntersectionSample, RevealTracker, ViewportObserver};

/// `ViewportObserver` backed by the browser's IntersectionObserver.
pub struct DomObserver {
    inner: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl DomObserver {
    /// Returns None when the host has no IntersectionObserver.
    pub fn new(threshold: f64, mut on_sample: impl FnMut(IntersectionSample) + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_sample(IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let inner = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        Some(Self {
            inner,
            _callback: callback,
        })
    }
}

impl ViewportObserver for DomObserver {
    type Node = Element;

    fn watch(&mut self, node: &Element) {
        self.inner.observe(node);
    }

    fn unwatch(&mut self, node: &Element) {
        self.inner.unobserve(node);
    }

    fn disconnect(&mut self) {
        self.inner.disconnect();
    }
}

/// Reveals the referenced node the first time it crosses `threshold`.
///
/// Attach the returned `NodeRef` to the section and use the flag to add the
/// `visible` class. Without a window or IntersectionObserver the flag is set
/// right away.
#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state(|| false);
    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let tracker: Rc<RefCell<RevealTracker<DomObserver>>> =
                    Rc::new(RefCell::new(RevealTracker::new(threshold)));
                let on_sample = {
                    let tracker = tracker.clone();
                    let visible = visible.clone();
                    move |sample: IntersectionSample| {
                        let revealed = tracker.borrow_mut().handle(sample);
                        if revealed {
                            visible.set(true);
                        }
                    }
                };
                let element = node.cast::<Element>();
                match (element, DomObserver::new(threshold, on_sample)) {
                    (Some(element), Some(observer)) => {
                        tracker.borrow_mut().observe(observer, element);
                    }
                    _ => {
                        *tracker.borrow_mut() = RevealTracker::without_viewport(threshold);
                        visible.set(true);
                    }
                }
                move || {
                    // Breaks the tracker <-> callback cycle as well.
                    tracker.borrow_mut().teardown();
                }
            },
            (),
        );
    }
    (node, *visible)
}

/// Class string for a revealable block.
pub fn reveal_classes(base: &str, visible: bool) -> Classes {
    classes!(base.to_string(), if visible { Some("visible") } else { None })
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Theme storage in `window.localStorage`. Missing storage reads as empty
/// and drops writes.
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(THEME_KEY).ok().flatten())
    }

    fn save(&self, theme: Theme) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_KEY, theme.as_str());
            }
        }
    }
}

pub fn apply_theme_class(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
    }
}
