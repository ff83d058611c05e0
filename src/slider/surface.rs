//! Capability interface between the step slider and its UI

/// Display state of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepDisplay {
    /// Whatever the page stylesheet says (no inline overrides)
    #[default]
    Baseline,
    /// In flow and fully opaque
    Shown,
    /// Removed from flow and transparent
    Hidden,
}

/// Everything the slider needs from the page.
///
/// Steps are addressed by their index in document order. Implementations
/// never fail: a write that cannot be applied is dropped.
pub trait StepSurface {
    /// Rendered height of every step, in document order
    fn step_heights(&self) -> Vec<f32>;

    /// Height budget for one slide (container height minus vertical padding)
    fn container_height(&self) -> f32;

    /// Apply a display state to one step
    fn set_step_display(&mut self, step: usize, display: StepDisplay);

    /// Replace all indicators with `count` fresh ones
    fn rebuild_indicators(&mut self, count: usize);

    /// Mark indicator `index` active and every other one inactive
    fn set_active_indicator(&mut self, index: usize);

    /// Toggle the disabled state of the previous/next controls
    fn set_navigation_disabled(&mut self, prev_disabled: bool, next_disabled: bool);

    /// Attach or detach the previous/next click listeners
    fn set_navigation_listening(&mut self, listening: bool);
}
