//! WASM bindings for the landing page widgets

mod carousel;
mod dom;
mod marquee;
mod steps;
mod timer;

pub use carousel::{DomCarousel, DomCarouselSurface};
pub use marquee::duplicate_and_animate;
pub use steps::{DomStepSlider, DomStepSurface, SharedSlider};
pub use timer::TimerDebounce;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::WidgetConfig;
use crate::error::WidgetError;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    crate::logging::init(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    });
}

/// Widgets mounted on the page; dropping this detaches them
#[wasm_bindgen]
pub struct LandingWidgets {
    slider: Option<DomStepSlider>,
    carousel: Option<Rc<DomCarousel>>,
}

#[wasm_bindgen]
impl LandingWidgets {
    /// Handle to the step slideshow, if it was found on the page
    pub fn slider(&self) -> Option<StepSliderHandle> {
        self.slider.as_ref().map(|slider| StepSliderHandle {
            slider: slider.slider().clone(),
        })
    }

    #[wasm_bindgen(js_name = hasCarousel)]
    pub fn has_carousel(&self) -> bool {
        self.carousel.is_some()
    }

    /// Index of the first visible participant
    #[wasm_bindgen(js_name = carouselPosition)]
    pub fn carousel_position(&self) -> Option<usize> {
        self.carousel.as_ref().map(|carousel| carousel.current())
    }
}

/// JS-side control of the step slideshow
#[wasm_bindgen]
pub struct StepSliderHandle {
    slider: SharedSlider,
}

#[wasm_bindgen]
impl StepSliderHandle {
    pub fn next(&self) {
        self.slider.borrow_mut().next();
    }

    pub fn previous(&self) {
        self.slider.borrow_mut().previous();
    }

    #[wasm_bindgen(js_name = jumpTo)]
    pub fn jump_to(&self, index: usize) {
        self.slider.borrow_mut().jump_to(index);
    }

    #[wasm_bindgen(js_name = currentSlide)]
    pub fn current_slide(&self) -> usize {
        self.slider.borrow().current_slide()
    }

    #[wasm_bindgen(js_name = slideCount)]
    pub fn slide_count(&self) -> usize {
        self.slider.borrow().slide_count()
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.slider.borrow().is_active()
    }
}

/// Log and drop a widget that is absent from this page
fn optional<T>(name: &str, result: Result<T, WidgetError>) -> Result<Option<T>, WidgetError> {
    match result {
        Ok(widget) => Ok(Some(widget)),
        Err(WidgetError::MissingElement(selector)) => {
            log::warn!("{}: `{}` not found, skipping", name, selector);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Mount every widget found on the page.
///
/// Missing carousel or slideshow markup is logged and skipped.
pub fn mount_with(config: &WidgetConfig) -> Result<LandingWidgets, WidgetError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let carousel = optional("carousel", DomCarousel::mount(&window, &document, config))?;
    let slider = optional("step slider", DomStepSlider::mount(&window, &document, config))?;
    marquee::start(&document, &config.running_line);

    Ok(LandingWidgets { slider, carousel })
}

/// Mount the carousel, step slideshow and running line.
///
/// `config_json` overrides the defaults key by key.
#[wasm_bindgen(js_name = mountLandingWidgets)]
pub fn mount(config_json: Option<String>) -> Result<LandingWidgets, JsValue> {
    let config = match config_json {
        Some(json) => WidgetConfig::from_json(&json)?,
        None => WidgetConfig::default(),
    };
    Ok(mount_with(&config)?)
}
