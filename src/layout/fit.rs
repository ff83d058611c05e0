//! Horizontal fit calculations for the participant carousel

/// Default tolerance when deciding that an almost-fitting item counts as visible
pub const FIT_TOLERANCE: f32 = 0.05;

/// Count how many items of `item_width` fit in `container_width`.
///
/// When the container is within `tolerance` of holding one more item, that
/// item counts as visible; sub-pixel rounding would otherwise hide it.
/// Always returns at least 1.
pub fn visible_items(container_width: f32, item_width: f32, tolerance: f32) -> usize {
    if !(item_width > 0.0 && container_width > 0.0) {
        return 1;
    }

    let exact = container_width / item_width;
    let whole = exact.floor();
    let count = if 1.0 - (exact - whole) <= tolerance {
        whole + 1.0
    } else {
        whole
    };

    (count as usize).max(1)
}

/// Horizontal spacing between carousel items
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSpacing {
    /// Viewports wider than this get `wide_gap` between items
    pub wide_viewport_min: f32,
    pub wide_gap: f32,
}

impl Default for ItemSpacing {
    fn default() -> Self {
        Self {
            wide_viewport_min: 1350.0,
            wide_gap: 20.0,
        }
    }
}

impl ItemSpacing {
    /// Gap between items at the given viewport width
    pub fn gap(&self, viewport_width: f32) -> f32 {
        if viewport_width > self.wide_viewport_min {
            self.wide_gap
        } else {
            0.0
        }
    }

    /// Distance to translate the list so that `index` is the first item shown
    pub fn offset(&self, index: usize, item_width: f32, viewport_width: f32) -> f32 {
        index as f32 * (item_width + self.gap(viewport_width))
    }
}
