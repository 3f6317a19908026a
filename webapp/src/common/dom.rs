use std::rc::Rc;

use dioxus::prelude::*;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Event, EventTarget, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions,
    Window,
};

use tracing::{debug, error};

use common::{modal::tab_target, particles::Viewport, scroll::SectionRect, theme::Theme};

// browser glue
//
// everything that touches web_sys directly lives here, so that the components
// only deal in the plain types from the common crate.  JsValue errors are opaque,
// so they are flattened into anyhow errors with their debug representation

pub fn js_err(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

pub fn window() -> anyhow::Result<Window> {
    web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window"))
}

pub fn document() -> anyhow::Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow::Error::msg("window has no document"))
}

fn body() -> anyhow::Result<HtmlElement> {
    document()?
        .body()
        .ok_or_else(|| anyhow::Error::msg("document has no body"))
}

// the css variables for each theme hang off :root[data-theme=...]
pub fn set_root_theme(theme: Theme) -> anyhow::Result<()> {
    document()?
        .document_element()
        .ok_or_else(|| anyhow::Error::msg("document has no root element"))?
        .set_attribute("data-theme", theme.as_str())
        .map_err(js_err)
}

pub fn section_rect(id: &str) -> Option<SectionRect> {
    let element = document().ok()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();

    Some(SectionRect {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

pub fn scroll_state() -> anyhow::Result<ScrollState> {
    let window = window()?;
    let root = document()?
        .document_element()
        .ok_or_else(|| anyhow::Error::msg("document has no root element"))?;

    Ok(ScrollState {
        scroll_y: window.scroll_y().map_err(js_err)?,
        scroll_height: root.scroll_height().into(),
        client_height: root.client_height().into(),
    })
}

pub fn viewport_height() -> anyhow::Result<f64> {
    window()?
        .inner_height()
        .map_err(js_err)?
        .as_f64()
        .ok_or_else(|| anyhow::Error::msg("inner_height is not a number"))
}

pub fn viewport() -> anyhow::Result<Viewport> {
    let window = window()?;

    let width = window
        .inner_width()
        .map_err(js_err)?
        .as_f64()
        .ok_or_else(|| anyhow::Error::msg("inner_width is not a number"))?;

    Ok(Viewport {
        width: width as f32,
        height: viewport_height()? as f32,
    })
}

pub fn scroll_to_top() -> anyhow::Result<()> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);

    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn lock_body_scroll(locked: bool) -> anyhow::Result<()> {
    let style = body()?.style();

    if locked {
        style.set_property("overflow", "hidden").map_err(js_err)
    } else {
        style.remove_property("overflow").map(|_| ()).map_err(js_err)
    }
}

// haptic tap where the device supports it.  navigator.vibrate() is missing on
// most desktops and all of iOS, which is not worth reporting
pub fn vibrate(millis: u32) {
    if let Ok(window) = window() {
        if !window.navigator().vibrate_with_duration(millis) {
            debug!("vibration not supported");
        }
    }
}

pub async fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let clipboard = window()?.navigator().clipboard();

    // only exposed in secure contexts, and absent in some embedded browsers
    if clipboard.is_undefined() {
        return Err(anyhow::Error::msg("clipboard api unavailable"));
    }

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(js_err)
}

// elements reachable with the tab key
const FOCUSABLE: &str =
    r#"a[href], button, textarea, input, select, [tabindex]:not([tabindex="-1"])"#;

fn focusable_in(container_id: &str) -> anyhow::Result<Vec<HtmlElement>> {
    let container = document()?
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::Error::msg(format!("no element with id {container_id}")))?;

    let nodes = container.query_selector_all(FOCUSABLE).map_err(js_err)?;

    Ok((0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

// returns false when there is nothing focusable inside the container
pub fn focus_first_in(container_id: &str) -> anyhow::Result<bool> {
    match focusable_in(container_id)?.first() {
        Some(element) => {
            element.focus().map_err(js_err)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

// trap_tab
//
// wraps tab and shift+tab around the focusable elements of the container.
// returns true when focus was moved here, in which case the browser's own tab
// handling has to be cancelled by the caller
pub fn trap_tab(container_id: &str, backwards: bool) -> anyhow::Result<bool> {
    let elements = focusable_in(container_id)?;

    let active = document()?.active_element();
    let position = active.and_then(|active| {
        let active: &JsValue = active.as_ref();
        elements.iter().position(|element| {
            let element: &JsValue = element.as_ref();
            element == active
        })
    });

    match tab_target(elements.len(), position, backwards) {
        Some(idx) => {
            elements[idx].focus().map_err(js_err)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn window_target() -> anyhow::Result<EventTarget> {
    Ok(window()?.into())
}

fn document_target() -> anyhow::Result<EventTarget> {
    Ok(document()?.into())
}

// use_listener
//
// registers a handler for a window or document event for the lifetime of the
// calling component.  the closure has to stay alive for as long as the browser
// holds a reference to it, so it is parked in a hook and removed again on drop
fn use_listener(
    name: &'static str,
    target: fn() -> anyhow::Result<EventTarget>,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) {
    let closure = use_hook(move || {
        let closure = Rc::new(Closure::<dyn FnMut(Event)>::new(handler));

        match target().and_then(|t| {
            t.add_event_listener_with_callback(event, (*closure).as_ref().unchecked_ref())
                .map_err(js_err)
        }) {
            Ok(()) => debug!("added {name} {event} listener"),
            Err(err) => error!("failed to add {name} {event} listener: {err}"),
        }

        closure
    });

    use_drop(move || {
        if let Ok(target) = target() {
            if let Err(err) = target
                .remove_event_listener_with_callback(event, (*closure).as_ref().unchecked_ref())
            {
                error!("failed to remove {name} {event} listener: {err:?}");
            }
        }
    });
}

pub fn use_window_listener(event: &'static str, mut handler: impl FnMut() + 'static) {
    use_listener("window", window_target, event, move |_| handler());
}

// keydown anywhere on the page, whether or not focus is inside the component
pub fn use_document_keydown(mut handler: impl FnMut(&KeyboardEvent) + 'static) {
    use_listener("document", document_target, "keydown", move |evt: Event| {
        if let Some(evt) = evt.dyn_ref::<KeyboardEvent>() {
            handler(evt);
        }
    });
}
