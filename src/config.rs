//! Widget configuration
//!
//! Every field has a default matching the landing page markup, so JS only
//! passes the keys it wants to override.

use serde::{Deserialize, Serialize};

use crate::carousel::AUTO_SLIDE_MS;
use crate::debounce::RESIZE_DEBOUNCE_MS;
use crate::error::WidgetError;
use crate::layout::{ItemSpacing, FIT_TOLERANCE};

/// Selectors for the step slideshow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StepSelectors {
    pub container: String,
    pub step: String,
    pub prev_button: String,
    pub next_button: String,
    pub indicators: String,
    /// Class given to each indicator button
    pub indicator_class: String,
    pub indicator_active_class: String,
}

impl Default for StepSelectors {
    fn default() -> Self {
        Self {
            container: ".grid-steps".to_string(),
            step: ".grid-steps__step".to_string(),
            prev_button: ".slider-controls__button_type_prev".to_string(),
            next_button: ".slider-controls__button_type_next".to_string(),
            indicators: ".slider-controls__buttons-container".to_string(),
            indicator_class: "slider-controls__circle-button".to_string(),
            indicator_active_class: "slider-controls__circle-button_active".to_string(),
        }
    }
}

/// Selectors for the participant carousel, relative to `container`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselSelectors {
    pub container: String,
    pub prev_button: String,
    pub next_button: String,
    pub list: String,
    pub item: String,
    pub current_count: String,
    pub total_count: String,
}

impl Default for CarouselSelectors {
    fn default() -> Self {
        Self {
            container: ".carousel".to_string(),
            prev_button: ".participants__prev-btn".to_string(),
            next_button: ".participants__next-btn".to_string(),
            list: ".participants__list".to_string(),
            item: ".participant".to_string(),
            current_count: ".participants__current-items".to_string(),
            total_count: ".participants__count-items".to_string(),
        }
    }
}

/// Running line (marquee) settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunningLineConfig {
    pub container: String,
    /// Class added once the duplicated line may start moving
    pub animated_class: String,
    /// CSS font shorthand to wait for before measuring
    pub font: String,
}

impl Default for RunningLineConfig {
    fn default() -> Self {
        Self {
            container: ".running-line__container".to_string(),
            animated_class: "running-line__animated".to_string(),
            font: "1em \"Merriweather\"".to_string(),
        }
    }
}

/// Top-level configuration for all landing page widgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub steps: StepSelectors,
    pub carousel: CarouselSelectors,
    pub running_line: RunningLineConfig,
    /// Slideshow is active at or below this viewport width (px)
    pub breakpoint_max_width: u32,
    pub resize_debounce_ms: u64,
    pub auto_slide_ms: u64,
    /// Viewports wider than this get `wide_item_gap` between carousel items
    pub wide_viewport_min: f32,
    pub wide_item_gap: f32,
    pub fit_tolerance: f32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        let spacing = ItemSpacing::default();
        Self {
            steps: StepSelectors::default(),
            carousel: CarouselSelectors::default(),
            running_line: RunningLineConfig::default(),
            breakpoint_max_width: 680,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            auto_slide_ms: AUTO_SLIDE_MS,
            wide_viewport_min: spacing.wide_viewport_min,
            wide_item_gap: spacing.wide_gap,
            fit_tolerance: FIT_TOLERANCE,
        }
    }
}

impl WidgetConfig {
    /// Parse a (possibly partial) JSON object over the defaults
    pub fn from_json(json: &str) -> Result<Self, WidgetError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), WidgetError> {
        if self.breakpoint_max_width == 0 {
            return Err(WidgetError::InvalidConfig(
                "breakpointMaxWidth must be positive".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.fit_tolerance) {
            return Err(WidgetError::InvalidConfig(format!(
                "fitTolerance {} is outside [0, 1)",
                self.fit_tolerance
            )));
        }
        Ok(())
    }

    /// Media query that enables the step slideshow
    pub fn media_query(&self) -> String {
        format!("(max-width: {}px)", self.breakpoint_max_width)
    }

    pub fn item_spacing(&self) -> ItemSpacing {
        ItemSpacing {
            wide_viewport_min: self.wide_viewport_min,
            wide_gap: self.wide_item_gap,
        }
    }
}
