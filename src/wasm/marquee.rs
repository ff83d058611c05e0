//! Running line: duplicate the marquee strip once its font is ready

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::dom;
use crate::config::RunningLineConfig;
use crate::error::WidgetError;

/// Clone every container next to itself, then start the CSS animation on all of them
pub fn duplicate_and_animate(document: &Document, config: &RunningLineConfig) -> Result<usize, WidgetError> {
    let containers = dom::query_all::<Element>(document, &config.container)?;
    for container in &containers {
        let Some(parent) = container.parent_element() else {
            continue;
        };
        let clone = container.clone_node_with_deep(true).map_err(WidgetError::dom)?;
        parent.append_child(&clone).map_err(WidgetError::dom)?;
    }

    let animated = dom::query_all::<Element>(document, &config.container)?;
    for container in &animated {
        dom::toggle_class(container, &config.animated_class, true);
    }
    Ok(animated.len())
}

/// Wait for the running line font, then animate.
///
/// Measuring the strip before its font arrives would size the loop for the
/// fallback face.
pub fn start(document: &Document, config: &RunningLineConfig) {
    let on_loaded = {
        let document = document.clone();
        let config = config.clone();
        Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| {
            match duplicate_and_animate(&document, &config) {
                Ok(count) => log::info!("running line: animating {} strips", count),
                Err(err) => log::warn!("running line: {}", err),
            }
        })
    };
    let on_failed = {
        let font = config.font.clone();
        Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
            log::warn!("running line: font `{}` failed to load: {:?}", font, err);
        })
    };

    let _ = document.fonts().load(&config.font).then2(&on_loaded, &on_failed);

    // One-shot callbacks owned by the promise from here on
    on_loaded.forget();
    on_failed.forget();
}
