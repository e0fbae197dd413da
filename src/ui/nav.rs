//! Fixed site header with the mobile navigation menu.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;

use crate::ui::menu::MenuState;
use crate::ui::scroll;

const NAV_SECTIONS: &[(&str, &str)] = &[
    ("#inicio", "Inicio"),
    ("#servicios", "Servicios"),
    ("#nosotros", "Nosotros"),
    ("#contacto", "Contacto"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(|| MenuState::Closed);
    let nav_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    // Outside clicks and desktop resizes dismiss the menu. The listeners are
    // re-registered whenever the open flag changes so they always see the
    // current state.
    {
        let deps = *menu;
        let menu = menu.clone();
        let nav_ref = nav_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with_deps(
            move |state| {
                let state = *state;
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let click_menu = menu.clone();
                let click_callback = Closure::wrap(Box::new(move |event: MouseEvent| {
                    if !state.is_open() {
                        return;
                    }
                    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside_nav = nav_ref
                        .cast::<Node>()
                        .map_or(false, |node| node.contains(target.as_ref()));
                    let inside_toggle = toggle_ref
                        .cast::<Node>()
                        .map_or(false, |node| node.contains(target.as_ref()));

                    let next = state.after_outside_click(inside_nav || inside_toggle);
                    if next != state {
                        click_menu.set(next);
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                let resize_menu = menu.clone();
                let resize_window = window.clone();
                let resize_callback = Closure::wrap(Box::new(move || {
                    let width = resize_window
                        .inner_width()
                        .ok()
                        .and_then(|value| value.as_f64())
                        .unwrap_or(0.0);

                    let next = state.after_resize(width);
                    if next != state {
                        resize_menu.set(next);
                    }
                }) as Box<dyn FnMut()>);

                document
                    .add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
                    .unwrap();
                window
                    .add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        click_callback.as_ref().unchecked_ref(),
                    );
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            deps,
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.toggled());
        })
    };

    let section_link = |href: &'static str| {
        let menu = menu.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            scroll::scroll_to_section(href);
            menu.set(menu.after_navigate());
        })
    };

    let open = menu.is_open();

    html! {
        <header class="site-header">
            <div class="header-inner">
                <a class="brand" href="#inicio" onclick={section_link("#inicio")}>
                    { "Andina Asesorías" }
                </a>
                <button
                    ref={toggle_ref}
                    id="menuToggle"
                    type="button"
                    class={classes!("menu-toggle", open.then_some("is-open"))}
                    aria-expanded={if open { "true" } else { "false" }}
                    aria-label="Abrir menú de navegación"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav
                    ref={nav_ref}
                    id="mainNav"
                    class={classes!("main-nav", open.then_some("is-open"))}
                >
                    { for NAV_SECTIONS.iter().copied().map(|(href, label)| html! {
                        <a class="nav-link" href={href} onclick={section_link(href)}>
                            { label }
                        </a>
                    }) }
                </nav>
            </div>
        </header>
    }
}
