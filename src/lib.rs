//! Landing widgets: presentational behaviors for a marketing landing page
//!
//! This crate provides:
//! - A responsive step slideshow that pages steps by height below a breakpoint
//! - A participant carousel with auto-advance and an "N of M" counter
//! - A running line (marquee) that starts once its web font has loaded
//! - A reusable trailing-edge debounce for resize handling
//!
//! The paging logic lives behind small surface traits so it runs and is
//! tested without a browser; the `wasm` module binds it to the DOM.

pub mod carousel;
pub mod config;
pub mod debounce;
pub mod error;
pub mod layout;
pub mod logging;
pub mod slider;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::{LandingWidgets, StepSliderHandle};

// Re-export primary types
pub use carousel::{Carousel, CarouselSurface, CarouselView};
pub use config::WidgetConfig;
pub use debounce::Debounce;
pub use error::WidgetError;
pub use layout::{compute_slides, visible_items, ItemSpacing, Slide};
pub use slider::{Lifecycle, SliderEvent, StepDisplay, StepSlider, StepSurface};

#[cfg(test)]
mod tests {
    use super::*;

    /// Steps whose heights never change, rendered nowhere
    struct FixedSteps {
        heights: Vec<f32>,
        container: f32,
        shown: Vec<bool>,
    }

    impl StepSurface for FixedSteps {
        fn step_heights(&self) -> Vec<f32> {
            self.heights.clone()
        }

        fn container_height(&self) -> f32 {
            self.container
        }

        fn set_step_display(&mut self, step: usize, display: StepDisplay) {
            self.shown[step] = display != StepDisplay::Hidden;
        }

        fn rebuild_indicators(&mut self, _count: usize) {}

        fn set_active_indicator(&mut self, _index: usize) {}

        fn set_navigation_disabled(&mut self, _prev_disabled: bool, _next_disabled: bool) {}

        fn set_navigation_listening(&mut self, _listening: bool) {}
    }

    #[test]
    fn test_debounced_resize_drives_slider() {
        let surface = FixedSteps {
            heights: vec![120.0, 80.0, 300.0, 60.0, 60.0, 60.0],
            container: 400.0,
            shown: vec![true; 6],
        };
        let mut slider = StepSlider::new(surface);
        let mut resize = Debounce::new(150);
        let breakpoint = 680;
        let mut checks = 0;

        // Window dragged from 1024px down to 600px in one burst
        for (i, width) in [1024, 900, 760, 700, 600].into_iter().enumerate() {
            resize.trigger(width, i as u64 * 16);
        }
        for now in (0..500).step_by(16) {
            if let Some(width) = resize.poll(now) {
                checks += 1;
                slider.check_breakpoint(width <= breakpoint);
            }
        }

        assert_eq!(checks, 1);
        assert!(slider.is_active());
        assert_eq!(slider.slide_count(), 3);
        assert_eq!(slider.surface().shown, vec![true, true, false, false, false, false]);
    }
}
