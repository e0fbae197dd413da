//! One-shot scroll-reveal animation.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Share of the element that must be visible before it reveals.
const VISIBLE_THRESHOLD: f64 = 0.15;

pub fn observer_supported() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps content in a `.reveal` container that gains `is-visible` the first
/// time it crosses the visibility threshold and never hides again. Browsers
/// without `IntersectionObserver` render everything visible from the start.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| !observer_supported());

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node| {
                let mut teardown: Option<Box<dyn FnOnce()>> = None;

                if !*visible {
                    if let Some(element) = node.cast::<Element>() {
                        let callback = Closure::wrap(Box::new(
                            move |entries: js_sys::Array, observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                                    if entry.is_intersecting() {
                                        visible.set(true);
                                        observer.disconnect();
                                    }
                                }
                            },
                        )
                            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));

                        if let Ok(observer) = IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            observer.observe(&element);
                            teardown = Some(Box::new(move || {
                                observer.disconnect();
                                drop(callback);
                            }));
                        }
                    }
                }

                move || {
                    if let Some(teardown) = teardown {
                        teardown();
                    }
                }
            },
            node.clone(),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), (*visible).then_some("is-visible"))}
        >
            { for props.children.iter() }
        </div>
    }
}
