//! Smooth in-page scrolling with fixed-header compensation.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

const HEADER_SELECTOR: &str = ".site-header";
const HEADER_CLEARANCE: f64 = 1.0;

/// Smooth-scrolls so the section lands just below the fixed header.
///
/// Anything that is not a resolvable `#` selector is ignored; a missing
/// section must not break the page.
pub fn scroll_to_section(href: &str) {
    if !href.starts_with('#') {
        return;
    }

    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(target) = document.query_selector(href).ok().flatten() else {
        return;
    };

    let page_offset = window.page_y_offset().unwrap_or(0.0);
    let top =
        target.get_bounding_client_rect().top() + page_offset - header_offset(&document) + HEADER_CLEARANCE;

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn header_offset(document: &Document) -> f64 {
    document
        .query_selector(HEADER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .map_or(0.0, |header| f64::from(header.offset_height()))
}
