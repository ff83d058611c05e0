//! DOM surface for the step slideshow

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, Window};

use super::dom::{self, Listener};
use super::timer::TimerDebounce;
use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::slider::{SliderEvent, StepDisplay, StepSlider, StepSurface};

pub type SharedSlider = Rc<RefCell<StepSlider<DomStepSurface>>>;
type WeakSlider = Weak<RefCell<StepSlider<DomStepSurface>>>;

/// Route `event` to the slider behind `handle`, if it is still alive and idle
fn dispatch(handle: &WeakSlider, event: SliderEvent) {
    let Some(slider) = handle.upgrade() else {
        return;
    };
    match slider.try_borrow_mut() {
        Ok(mut slider) => slider.dispatch(event),
        Err(_) => log::debug!("step slider busy, dropping {:?}", event),
    };
}

fn click_handler(handle: &WeakSlider, event: SliderEvent) -> Closure<dyn FnMut()> {
    let handle = handle.clone();
    Closure::<dyn FnMut()>::new(move || dispatch(&handle, event))
}

/// The `.grid-steps` block and its controls
pub struct DomStepSurface {
    window: Window,
    document: Document,
    container: HtmlElement,
    steps: Vec<HtmlElement>,
    prev_button: HtmlButtonElement,
    next_button: HtmlButtonElement,
    indicator_box: Element,
    indicator_class: String,
    indicator_active_class: String,
    /// Indicator buttons, each with its click listener
    indicators: Vec<(Element, Listener)>,
    /// Previous/next listeners while attached
    navigation: Option<(Listener, Listener)>,
    handle: WeakSlider,
}

impl DomStepSurface {
    fn indicator(&self, index: usize) -> Result<(Element, Listener), WidgetError> {
        let button = self
            .document
            .create_element("button")
            .map_err(WidgetError::dom)?;
        button.set_class_name(&self.indicator_class);
        if let Err(err) = button.set_attribute("type", "button") {
            log::debug!("indicator {} type attribute failed: {:?}", index, err);
        }
        self.indicator_box
            .append_child(&button)
            .map_err(WidgetError::dom)?;

        let listener = Listener::new(
            &button,
            "click",
            click_handler(&self.handle, SliderEvent::JumpTo(index)),
        )?;
        Ok((button, listener))
    }
}

impl StepSurface for DomStepSurface {
    fn step_heights(&self) -> Vec<f32> {
        self.steps
            .iter()
            .map(|step| step.offset_height() as f32)
            .collect()
    }

    fn container_height(&self) -> f32 {
        self.container.offset_height() as f32 - dom::vertical_padding(&self.window, &self.container)
    }

    fn set_step_display(&mut self, step: usize, display: StepDisplay) {
        let Some(step) = self.steps.get(step) else {
            return;
        };
        let (visibility, position, opacity) = match display {
            StepDisplay::Shown => (Some("visible"), Some("relative"), Some("1")),
            StepDisplay::Hidden => (Some("hidden"), Some("absolute"), Some("0")),
            StepDisplay::Baseline => (None, None, None),
        };
        dom::set_style(step, "visibility", visibility);
        dom::set_style(step, "position", position);
        dom::set_style(step, "opacity", opacity);
    }

    fn rebuild_indicators(&mut self, count: usize) {
        for (button, _listener) in self.indicators.drain(..) {
            button.remove();
        }
        // Markup may ship placeholder indicators
        self.indicator_box.set_inner_html("");

        for index in 0..count {
            match self.indicator(index) {
                Ok(indicator) => self.indicators.push(indicator),
                Err(err) => {
                    log::warn!("could not create slide indicator {}: {}", index, err);
                    break;
                }
            }
        }
    }

    fn set_active_indicator(&mut self, index: usize) {
        for (i, (button, _)) in self.indicators.iter().enumerate() {
            dom::toggle_class(button, &self.indicator_active_class, i == index);
        }
    }

    fn set_navigation_disabled(&mut self, prev_disabled: bool, next_disabled: bool) {
        self.prev_button.set_disabled(prev_disabled);
        self.next_button.set_disabled(next_disabled);
    }

    fn set_navigation_listening(&mut self, listening: bool) {
        if !listening {
            self.navigation = None;
            return;
        }
        if self.navigation.is_some() {
            return;
        }

        let next = Listener::new(
            &self.next_button,
            "click",
            click_handler(&self.handle, SliderEvent::Next),
        );
        let prev = Listener::new(
            &self.prev_button,
            "click",
            click_handler(&self.handle, SliderEvent::Previous),
        );
        match (prev, next) {
            (Ok(prev), Ok(next)) => self.navigation = Some((prev, next)),
            (Err(err), _) | (_, Err(err)) => {
                log::warn!("could not attach slider navigation: {}", err)
            }
        }
    }
}

/// Mounted step slideshow: the slider plus its debounced resize listener
pub struct DomStepSlider {
    slider: SharedSlider,
    _resize: Listener,
}

impl DomStepSlider {
    /// Find the slideshow markup, run the first breakpoint check and start
    /// listening for resizes
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &WidgetConfig,
    ) -> Result<Self, WidgetError> {
        let selectors = &config.steps;
        let container: HtmlElement = dom::query(document, &selectors.container)?;
        let container_root: &Element = &container;
        let steps = dom::query_all::<HtmlElement>(container_root, &selectors.step)?;
        let prev_button = dom::button(document, &selectors.prev_button)?;
        let next_button = dom::button(document, &selectors.next_button)?;
        let indicator_box: Element = dom::query(document, &selectors.indicators)?;
        log::info!("step slider: {} steps found", steps.len());

        let slider: SharedSlider = Rc::new_cyclic(|handle: &WeakSlider| {
            RefCell::new(StepSlider::new(DomStepSurface {
                window: window.clone(),
                document: document.clone(),
                container,
                steps,
                prev_button,
                next_button,
                indicator_box,
                indicator_class: selectors.indicator_class.clone(),
                indicator_active_class: selectors.indicator_active_class.clone(),
                indicators: Vec::new(),
                navigation: None,
                handle: handle.clone(),
            }))
        });

        let query = config.media_query();
        check_breakpoint(&slider, window, &query);

        let handle = Rc::downgrade(&slider);
        let check_window = window.clone();
        let debounce = TimerDebounce::new(window.clone(), config.resize_debounce_ms, move |()| {
            if let Some(slider) = handle.upgrade() {
                check_breakpoint(&slider, &check_window, &query);
            }
        });
        let resize = Listener::new(
            window,
            "resize",
            Closure::<dyn FnMut()>::new(move || debounce.trigger(())),
        )?;

        Ok(Self {
            slider,
            _resize: resize,
        })
    }

    pub fn slider(&self) -> &SharedSlider {
        &self.slider
    }
}

fn check_breakpoint(slider: &SharedSlider, window: &Window, query: &str) {
    let matches = dom::media_matches(window, query);
    match slider.try_borrow_mut() {
        Ok(mut slider) => {
            let lifecycle = slider.check_breakpoint(matches);
            log::debug!("step slider: breakpoint {} -> {:?}", matches, lifecycle);
        }
        Err(_) => log::debug!("step slider busy, skipping breakpoint check"),
    }
}
