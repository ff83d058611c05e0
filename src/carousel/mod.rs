//! Participant carousel paging
//!
//! The carousel moves a whole "page" of visible items at a time, wraps back
//! to the start when auto-advancing past the end, and reports an
//! "items shown so far" counter.

use crate::layout::{visible_items, ItemSpacing};

/// Default auto-advance period
pub const AUTO_SLIDE_MS: u64 = 4_000;

/// Everything the carousel needs from the page
pub trait CarouselSurface {
    /// Width of the visible list area
    fn list_width(&self) -> f32;

    /// Width of a single participant card
    fn item_width(&self) -> f32;

    fn viewport_width(&self) -> f32;

    /// Translate the list left by `offset` pixels
    fn set_offset(&mut self, offset: f32);

    fn set_navigation_disabled(&mut self, prev_disabled: bool, next_disabled: bool);

    /// Show "`shown` of `total`"
    fn set_counter(&mut self, shown: usize, total: usize);
}

/// Paging state for a fixed list of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    item_count: usize,
    visible: usize,
    current: usize,
}

impl Carousel {
    /// Create a carousel at the first item
    pub fn new(item_count: usize, visible: usize) -> Self {
        Self {
            item_count,
            visible: visible.max(1),
            current: 0,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Index of the first visible item
    pub fn current(&self) -> usize {
        self.current
    }

    fn last_start(&self) -> usize {
        self.item_count.saturating_sub(self.visible)
    }

    fn has_next_page(&self) -> bool {
        self.current + self.visible < self.item_count
    }

    /// Move forward one page if there is one
    pub fn next(&mut self) {
        if self.has_next_page() {
            self.current += self.visible;
        }
        self.clamp();
    }

    /// Move back one page, stopping at the first item
    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(self.visible);
    }

    /// Timer-driven advance: like [`Carousel::next`] but wraps to the start
    pub fn auto_advance(&mut self) {
        if self.has_next_page() {
            self.current += self.visible;
            self.clamp();
        } else {
            self.current = 0;
        }
    }

    /// Apply a new visible count after a resize
    pub fn resize(&mut self, visible: usize) {
        self.visible = visible.max(1);
        self.clamp();
    }

    /// Keep the last page full instead of showing a partial page
    fn clamp(&mut self) {
        self.current = self.current.min(self.last_start());
    }

    pub fn prev_disabled(&self) -> bool {
        self.current == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.current >= self.last_start()
    }

    /// Number of items shown up to and including the current page
    pub fn shown_count(&self) -> usize {
        (self.current + self.visible).min(self.item_count)
    }
}

/// Carousel bound to a surface
pub struct CarouselView<S: CarouselSurface> {
    surface: S,
    carousel: Carousel,
    spacing: ItemSpacing,
    fit_tolerance: f32,
}

impl<S: CarouselSurface> CarouselView<S> {
    /// Measure the surface and render the first page
    pub fn new(surface: S, item_count: usize, spacing: ItemSpacing, fit_tolerance: f32) -> Self {
        let visible = visible_items(surface.list_width(), surface.item_width(), fit_tolerance);
        let mut view = Self {
            surface,
            carousel: Carousel::new(item_count, visible),
            spacing,
            fit_tolerance,
        };
        view.render();
        view
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn next(&mut self) {
        self.carousel.next();
        self.render();
    }

    pub fn previous(&mut self) {
        self.carousel.previous();
        self.render();
    }

    pub fn auto_advance(&mut self) {
        self.carousel.auto_advance();
        self.render();
    }

    /// Re-measure after the viewport changed
    pub fn remeasure(&mut self) {
        let visible = visible_items(
            self.surface.list_width(),
            self.surface.item_width(),
            self.fit_tolerance,
        );
        if visible != self.carousel.visible() {
            log::debug!(
                "carousel: {} -> {} visible items",
                self.carousel.visible(),
                visible
            );
        }
        self.carousel.resize(visible);
        self.render();
    }

    fn render(&mut self) {
        let offset = self.spacing.offset(
            self.carousel.current(),
            self.surface.item_width(),
            self.surface.viewport_width(),
        );
        self.surface.set_offset(offset);
        self.surface
            .set_navigation_disabled(self.carousel.prev_disabled(), self.carousel.next_disabled());
        self.surface
            .set_counter(self.carousel.shown_count(), self.carousel.item_count());
    }
}
