//! Small helpers over `web-sys` shared by the DOM surfaces

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlButtonElement, HtmlElement, NodeList, Window};

use crate::error::WidgetError;

/// Something selectors can be run against
pub trait QueryRoot {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue>;
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
}

impl QueryRoot for Document {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl QueryRoot for Element {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

pub fn window() -> Result<Window, WidgetError> {
    web_sys::window().ok_or(WidgetError::NoGlobal("window"))
}

pub fn document(window: &Window) -> Result<Document, WidgetError> {
    window.document().ok_or(WidgetError::NoGlobal("document"))
}

/// First element matching `selector` under `root`
pub fn query<T: JsCast>(root: &impl QueryRoot, selector: &str) -> Result<T, WidgetError> {
    root.select(selector)
        .map_err(WidgetError::dom)?
        .ok_or_else(|| WidgetError::MissingElement(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| WidgetError::Dom(format!("`{}` has an unexpected element type", selector)))
}

/// Every element matching `selector` under `root`, in document order
pub fn query_all<T: JsCast>(root: &impl QueryRoot, selector: &str) -> Result<Vec<T>, WidgetError> {
    let nodes = root.select_all(selector).map_err(WidgetError::dom)?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

pub fn button(root: &impl QueryRoot, selector: &str) -> Result<HtmlButtonElement, WidgetError> {
    query::<HtmlButtonElement>(root, selector)
}

/// Set (or clear, with `None`) an inline style property
pub fn set_style(element: &HtmlElement, property: &str, value: Option<&str>) {
    let style = element.style();
    let result = match value {
        Some(value) => style.set_property(property, value),
        None => style.remove_property(property).map(|_| ()),
    };
    if let Err(err) = result {
        log::debug!("style write `{}` failed: {:?}", property, err);
    }
}

pub fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::debug!("class toggle `{}` failed: {:?}", class, err);
    }
}

/// Computed padding-top plus padding-bottom of `element`, in pixels
pub fn vertical_padding(window: &Window, element: &Element) -> f32 {
    let Ok(Some(style)) = window.get_computed_style(element) else {
        return 0.0;
    };
    ["padding-top", "padding-bottom"]
        .iter()
        .filter_map(|property| style.get_property_value(property).ok())
        .map(|value| parse_px(&value))
        .sum()
}

/// Parse the leading number of a CSS length such as `"24px"`; 0 if none
pub fn parse_px(value: &str) -> f32 {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && c == '-')))
        .map_or(value.len(), |(i, _)| i);
    value[..end].parse().unwrap_or(0.0)
}

pub fn viewport_width(window: &Window) -> f32 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn media_matches(window: &Window, query: &str) -> bool {
    matches!(window.match_media(query), Ok(Some(list)) if list.matches())
}

/// An event listener that is removed when dropped
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut()>,
    ) -> Result<Self, WidgetError> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(WidgetError::dom)?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("24px"), 24.0);
        assert_eq!(parse_px(" 12.5px "), 12.5);
        assert_eq!(parse_px("0"), 0.0);
        assert_eq!(parse_px("-4px"), -4.0);
        assert_eq!(parse_px("auto"), 0.0);
        assert_eq!(parse_px(""), 0.0);
    }
}
