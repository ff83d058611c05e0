//! DOM binding for the participant carousel

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, Window};

use super::dom::{self, Listener};
use super::timer::TimerDebounce;
use crate::carousel::{CarouselSurface, CarouselView};
use crate::config::WidgetConfig;
use crate::error::WidgetError;

pub struct DomCarouselSurface {
    window: Window,
    list: HtmlElement,
    /// First participant card, measured for the item width
    item: HtmlElement,
    prev_button: HtmlButtonElement,
    next_button: HtmlButtonElement,
    current_count: Element,
    total_count: Element,
}

impl CarouselSurface for DomCarouselSurface {
    fn list_width(&self) -> f32 {
        self.list.offset_width() as f32
    }

    fn item_width(&self) -> f32 {
        self.item.offset_width() as f32
    }

    fn viewport_width(&self) -> f32 {
        dom::viewport_width(&self.window)
    }

    fn set_offset(&mut self, offset: f32) {
        let transform = format!("translateX(-{}px)", offset);
        dom::set_style(&self.list, "transform", Some(&transform));
    }

    fn set_navigation_disabled(&mut self, prev_disabled: bool, next_disabled: bool) {
        self.prev_button.set_disabled(prev_disabled);
        self.next_button.set_disabled(next_disabled);
    }

    fn set_counter(&mut self, shown: usize, total: usize) {
        self.current_count.set_text_content(Some(&shown.to_string()));
        self.total_count.set_text_content(Some(&total.to_string()));
    }
}

/// Mounted carousel with its auto-slide timer and listeners
pub struct DomCarousel {
    view: RefCell<CarouselView<DomCarouselSurface>>,
    auto_slide: TimerDebounce<()>,
    listeners: RefCell<Vec<Listener>>,
}

impl DomCarousel {
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &WidgetConfig,
    ) -> Result<Rc<Self>, WidgetError> {
        let selectors = &config.carousel;
        let container: Element = dom::query(document, &selectors.container)?;
        let items = dom::query_all::<HtmlElement>(&container, &selectors.item)?;
        let item = items
            .first()
            .cloned()
            .ok_or_else(|| WidgetError::MissingElement(selectors.item.clone()))?;
        let surface = DomCarouselSurface {
            window: window.clone(),
            list: dom::query(&container, &selectors.list)?,
            item,
            prev_button: dom::button(&container, &selectors.prev_button)?,
            next_button: dom::button(&container, &selectors.next_button)?,
            current_count: dom::query(&container, &selectors.current_count)?,
            total_count: dom::query(&container, &selectors.total_count)?,
        };
        let view = CarouselView::new(
            surface,
            items.len(),
            config.item_spacing(),
            config.fit_tolerance,
        );
        log::info!(
            "carousel: {} participants, {} visible",
            items.len(),
            view.carousel().visible()
        );

        let carousel = Rc::new_cyclic(|handle: &Weak<Self>| {
            let handle = handle.clone();
            Self {
                view: RefCell::new(view),
                auto_slide: TimerDebounce::new(window.clone(), config.auto_slide_ms, move |()| {
                    with_carousel(&handle, |carousel| carousel.auto_advance());
                }),
                listeners: RefCell::new(Vec::new()),
            }
        });

        let handle = Rc::downgrade(&carousel);
        let resize_debounce = TimerDebounce::new(window.clone(), config.resize_debounce_ms, {
            let handle = handle.clone();
            move |()| with_carousel(&handle, |carousel| carousel.remeasure())
        });

        let listeners = vec![
            Listener::new(
                &carousel.view.borrow().surface().next_button,
                "click",
                click_handler(&handle, Self::next),
            )?,
            Listener::new(
                &carousel.view.borrow().surface().prev_button,
                "click",
                click_handler(&handle, Self::previous),
            )?,
            Listener::new(
                window,
                "resize",
                Closure::<dyn FnMut()>::new(move || resize_debounce.trigger(())),
            )?,
        ];
        *carousel.listeners.borrow_mut() = listeners;

        carousel.auto_slide.trigger(());
        Ok(carousel)
    }

    pub fn next(&self) {
        self.view.borrow_mut().next();
        self.auto_slide.trigger(());
    }

    pub fn previous(&self) {
        self.view.borrow_mut().previous();
        self.auto_slide.trigger(());
    }

    fn auto_advance(&self) {
        self.view.borrow_mut().auto_advance();
        self.auto_slide.trigger(());
    }

    fn remeasure(&self) {
        self.view.borrow_mut().remeasure();
        self.auto_slide.trigger(());
    }

    /// Index of the first visible participant
    pub fn current(&self) -> usize {
        self.view.borrow().carousel().current()
    }
}

fn with_carousel(handle: &Weak<DomCarousel>, f: impl FnOnce(&DomCarousel)) {
    if let Some(carousel) = handle.upgrade() {
        f(&carousel);
    }
}

fn click_handler(handle: &Weak<DomCarousel>, f: fn(&DomCarousel)) -> Closure<dyn FnMut()> {
    let handle = handle.clone();
    Closure::<dyn FnMut()>::new(move || with_carousel(&handle, f))
}
