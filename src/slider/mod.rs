//! Responsive step slideshow
//!
//! Below the breakpoint the steps are paged into slides that each fit the
//! container; above it every step is visible and the slider is inert.

mod surface;

pub use surface::{StepDisplay, StepSurface};

use crate::layout::{compute_slides, Slide};

/// UI event routed to the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderEvent {
    Next,
    Previous,
    JumpTo(usize),
}

/// What a breakpoint check did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Activated,
    Refreshed,
    Deactivated,
    Unchanged,
}

/// Step paginator with an active/inactive lifecycle
pub struct StepSlider<S: StepSurface> {
    surface: S,
    slides: Vec<Slide>,
    current: usize,
    active: bool,
}

impl<S: StepSurface> StepSlider<S> {
    /// Create an inactive slider over `surface`
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            slides: Vec::new(),
            current: 0,
            active: false,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn current_slide(&self) -> usize {
        self.current
    }

    /// Re-evaluate the breakpoint.
    ///
    /// `matches` is true when the viewport is narrow enough for paging.
    /// While already active, a match recomputes the slides because the
    /// content may have reflowed.
    pub fn check_breakpoint(&mut self, matches: bool) -> Lifecycle {
        match (matches, self.active) {
            (true, false) => {
                if self.activate() {
                    Lifecycle::Activated
                } else {
                    Lifecycle::Unchanged
                }
            }
            (true, true) => {
                if self.refresh() {
                    Lifecycle::Refreshed
                } else {
                    Lifecycle::Deactivated
                }
            }
            (false, true) => {
                self.deactivate();
                Lifecycle::Deactivated
            }
            (false, false) => Lifecycle::Unchanged,
        }
    }

    /// Switch to paged mode. Returns false if there is nothing to page.
    pub fn activate(&mut self) -> bool {
        if self.active {
            return true;
        }
        if !self.recompute() {
            log::debug!("step slider: nothing to paginate, staying inactive");
            return false;
        }

        self.surface.set_navigation_listening(true);
        self.active = true;
        log::debug!(
            "step slider: activated with {} slides at slide {}",
            self.slides.len(),
            self.current
        );
        true
    }

    /// Return every step to its stylesheet state and stop listening
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }

        for step in 0..self.step_count() {
            self.surface.set_step_display(step, StepDisplay::Baseline);
        }
        self.surface.set_navigation_listening(false);
        self.surface.rebuild_indicators(0);
        self.slides.clear();
        self.active = false;
        log::debug!("step slider: deactivated");
    }

    /// Recompute slides after a reflow while active.
    ///
    /// Deactivates when the container can no longer be paged.
    pub fn refresh(&mut self) -> bool {
        if !self.active {
            return false;
        }
        if !self.recompute() {
            self.deactivate();
            return false;
        }
        true
    }

    /// Route a UI event. Events are dropped while inactive.
    pub fn dispatch(&mut self, event: SliderEvent) {
        if !self.active {
            return;
        }
        match event {
            SliderEvent::Next => self.next(),
            SliderEvent::Previous => self.previous(),
            SliderEvent::JumpTo(index) => self.jump_to(index),
        }
    }

    /// Advance to the next slide; no-op on the last one
    pub fn next(&mut self) {
        if self.current + 1 < self.slides.len() {
            self.current += 1;
            self.show_current_slide();
        }
    }

    /// Go back one slide; no-op on the first one
    pub fn previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.show_current_slide();
        }
    }

    /// Show slide `index`; out-of-range indices are ignored
    pub fn jump_to(&mut self, index: usize) {
        if index < self.slides.len() {
            self.current = index;
            self.show_current_slide();
        }
    }

    fn step_count(&self) -> usize {
        self.slides.last().map_or(0, |slide| slide.steps.end)
    }

    fn recompute(&mut self) -> bool {
        let heights = self.surface.step_heights();
        let slides = compute_slides(&heights, self.surface.container_height());
        if slides.is_empty() {
            return false;
        }

        self.slides = slides;
        self.current = self.current.min(self.slides.len() - 1);
        self.surface.rebuild_indicators(self.slides.len());
        self.show_current_slide();
        true
    }

    fn show_current_slide(&mut self) {
        let Some(slide) = self.slides.get(self.current).cloned() else {
            return;
        };

        for step in 0..self.step_count() {
            let display = if slide.contains(step) {
                StepDisplay::Shown
            } else {
                StepDisplay::Hidden
            };
            self.surface.set_step_display(step, display);
        }

        self.surface.set_active_indicator(self.current);
        self.surface.set_navigation_disabled(
            self.current == 0,
            self.current + 1 == self.slides.len(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockSurface {
        heights: Vec<f32>,
        container: f32,
        displays: Vec<StepDisplay>,
        indicators: usize,
        active_indicator: Option<usize>,
        prev_disabled: bool,
        next_disabled: bool,
        listening: bool,
        listen_changes: usize,
    }

    impl MockSurface {
        fn new(heights: Vec<f32>, container: f32) -> Self {
            let displays = vec![StepDisplay::Baseline; heights.len()];
            Self {
                heights,
                container,
                displays,
                ..Default::default()
            }
        }

        /// Click as a browser would: only reaches the slider if a listener is attached
        fn click(slider: &mut StepSlider<Self>, event: SliderEvent) {
            if slider.surface().listening {
                slider.dispatch(event);
            }
        }
    }

    impl StepSurface for MockSurface {
        fn step_heights(&self) -> Vec<f32> {
            self.heights.clone()
        }

        fn container_height(&self) -> f32 {
            self.container
        }

        fn set_step_display(&mut self, step: usize, display: StepDisplay) {
            self.displays[step] = display;
        }

        fn rebuild_indicators(&mut self, count: usize) {
            self.indicators = count;
            self.active_indicator = None;
        }

        fn set_active_indicator(&mut self, index: usize) {
            assert!(index < self.indicators);
            self.active_indicator = Some(index);
        }

        fn set_navigation_disabled(&mut self, prev_disabled: bool, next_disabled: bool) {
            self.prev_disabled = prev_disabled;
            self.next_disabled = next_disabled;
        }

        fn set_navigation_listening(&mut self, listening: bool) {
            if self.listening != listening {
                self.listen_changes += 1;
            }
            self.listening = listening;
        }
    }

    /// Five slides of two steps each
    fn five_slides() -> StepSlider<MockSurface> {
        let mut slider = StepSlider::new(MockSurface::new(vec![100.0; 10], 200.0));
        assert!(slider.activate());
        assert_eq!(slider.slide_count(), 5);
        slider
    }

    fn shown(slider: &StepSlider<MockSurface>) -> Vec<usize> {
        slider
            .surface()
            .displays
            .iter()
            .enumerate()
            .filter(|(_, d)| **d == StepDisplay::Shown)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_activate_shows_first_slide() {
        let slider = five_slides();
        assert!(slider.is_active());
        assert_eq!(slider.current_slide(), 0);
        assert_eq!(shown(&slider), vec![0, 1]);
        assert_eq!(slider.surface().displays[2], StepDisplay::Hidden);
        assert_eq!(slider.surface().indicators, 5);
        assert_eq!(slider.surface().active_indicator, Some(0));
        assert!(slider.surface().prev_disabled);
        assert!(!slider.surface().next_disabled);
        assert!(slider.surface().listening);
    }

    #[test]
    fn test_jump_to_middle_enables_both_buttons() {
        let mut slider = five_slides();
        slider.jump_to(2);
        assert_eq!(slider.current_slide(), 2);
        assert_eq!(slider.surface().active_indicator, Some(2));
        assert_eq!(shown(&slider), vec![4, 5]);
        assert!(!slider.surface().prev_disabled);
        assert!(!slider.surface().next_disabled);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut slider = five_slides();
        slider.jump_to(3);
        slider.jump_to(5);
        assert_eq!(slider.current_slide(), 3);
    }

    #[test]
    fn test_next_on_last_slide_is_noop() {
        let mut slider = five_slides();
        slider.jump_to(4);
        assert!(slider.surface().next_disabled);
        slider.next();
        assert_eq!(slider.current_slide(), 4);
        assert_eq!(shown(&slider), vec![8, 9]);
    }

    #[test]
    fn test_previous_on_first_slide_is_noop() {
        let mut slider = five_slides();
        slider.previous();
        assert_eq!(slider.current_slide(), 0);
        slider.next();
        slider.previous();
        assert_eq!(slider.current_slide(), 0);
        assert!(slider.surface().prev_disabled);
    }

    #[test]
    fn test_deactivate_restores_baseline() {
        let mut slider = five_slides();
        slider.next();
        slider.deactivate();

        assert!(!slider.is_active());
        assert!(slider
            .surface()
            .displays
            .iter()
            .all(|d| *d == StepDisplay::Baseline));
        assert!(!slider.surface().listening);
        assert_eq!(slider.surface().indicators, 0);
    }

    #[test]
    fn test_no_navigation_after_deactivate() {
        let mut slider = five_slides();
        slider.deactivate();

        MockSurface::click(&mut slider, SliderEvent::Next);
        slider.dispatch(SliderEvent::Next);
        slider.dispatch(SliderEvent::JumpTo(3));
        assert!(slider
            .surface()
            .displays
            .iter()
            .all(|d| *d == StepDisplay::Baseline));

        assert!(slider.activate());
        MockSurface::click(&mut slider, SliderEvent::Next);
        assert_eq!(slider.current_slide(), 1);
    }

    #[test]
    fn test_repeated_activation_attaches_listeners_once() {
        let mut slider = five_slides();
        assert!(slider.activate());
        assert_eq!(slider.check_breakpoint(true), Lifecycle::Refreshed);
        assert_eq!(slider.surface().listen_changes, 1);

        MockSurface::click(&mut slider, SliderEvent::Next);
        assert_eq!(slider.current_slide(), 1);

        slider.deactivate();
        slider.deactivate();
        assert_eq!(slider.surface().listen_changes, 2);
    }

    #[test]
    fn test_breakpoint_transitions() {
        let mut slider = StepSlider::new(MockSurface::new(vec![100.0; 4], 200.0));
        assert_eq!(slider.check_breakpoint(false), Lifecycle::Unchanged);
        assert_eq!(slider.check_breakpoint(true), Lifecycle::Activated);
        assert_eq!(slider.check_breakpoint(true), Lifecycle::Refreshed);
        assert_eq!(slider.check_breakpoint(false), Lifecycle::Deactivated);
        assert_eq!(slider.check_breakpoint(false), Lifecycle::Unchanged);
    }

    #[test]
    fn test_refresh_clamps_index() {
        let mut slider = five_slides();
        slider.jump_to(4);

        // Container grew: everything now fits in two slides
        slider.surface_mut().container = 600.0;
        assert_eq!(slider.check_breakpoint(true), Lifecycle::Refreshed);
        assert_eq!(slider.slide_count(), 2);
        assert_eq!(slider.current_slide(), 1);
        assert_eq!(slider.surface().indicators, 2);
        assert_eq!(slider.surface().active_indicator, Some(1));
        assert!(slider.surface().next_disabled);
    }

    #[test]
    fn test_reactivation_keeps_clamped_position() {
        let mut slider = five_slides();
        slider.jump_to(3);
        slider.deactivate();
        assert!(slider.activate());
        assert_eq!(slider.current_slide(), 3);
    }

    #[test]
    fn test_unmeasured_container_stays_inactive() {
        let mut slider = StepSlider::new(MockSurface::new(vec![100.0; 3], 0.0));
        assert_eq!(slider.check_breakpoint(true), Lifecycle::Unchanged);
        assert!(!slider.is_active());
        assert!(!slider.surface().listening);
        assert!(slider
            .surface()
            .displays
            .iter()
            .all(|d| *d == StepDisplay::Baseline));
    }

    #[test]
    fn test_no_steps_stays_inactive() {
        let mut slider = StepSlider::new(MockSurface::new(Vec::new(), 400.0));
        assert!(!slider.activate());
        slider.next();
        slider.previous();
        assert_eq!(slider.current_slide(), 0);
    }

    #[test]
    fn test_refresh_to_unmeasured_container_deactivates() {
        let mut slider = five_slides();
        slider.surface_mut().container = 0.0;
        assert_eq!(slider.check_breakpoint(true), Lifecycle::Deactivated);
        assert!(!slider.is_active());
        assert!(!slider.surface().listening);
    }

    #[test]
    fn test_single_slide_disables_both_buttons() {
        let mut slider = StepSlider::new(MockSurface::new(vec![50.0; 3], 400.0));
        assert!(slider.activate());
        assert_eq!(slider.slide_count(), 1);
        assert!(slider.surface().prev_disabled);
        assert!(slider.surface().next_disabled);
    }
}
