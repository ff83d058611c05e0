//! Greedy height-based pagination of steps into slides

use std::ops::Range;

/// A group of consecutive steps shown together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Step indices covered by this slide (document order, never empty)
    pub steps: Range<usize>,
}

impl Slide {
    /// Create a slide covering `start..end`
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "slide {}..{} is empty", start, end);
        Self { steps: start..end }
    }

    /// Number of steps in this slide
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for slides built by [`compute_slides`]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Check if this slide contains a given step
    pub fn contains(&self, step: usize) -> bool {
        self.steps.contains(&step)
    }
}

/// Partition steps into slides that fit `container_height`.
///
/// A step taller than half the container always gets a slide of its own.
/// Other steps are packed greedily in order until the next one would
/// overflow the container. Returns no slides for an empty step list or a
/// container that has not been laid out yet (zero, negative or NaN height).
pub fn compute_slides(heights: &[f32], container_height: f32) -> Vec<Slide> {
    if !(container_height.is_finite() && container_height > 0.0) {
        return Vec::new();
    }

    let oversize_limit = container_height / 2.0;
    let mut slides = Vec::new();
    let mut start = 0;
    let mut total_height = 0.0;

    for (index, &height) in heights.iter().enumerate() {
        if height > oversize_limit {
            if start < index {
                slides.push(Slide::new(start, index));
            }
            slides.push(Slide::new(index, index + 1));
            start = index + 1;
            total_height = 0.0;
        } else if total_height + height > container_height {
            if start < index {
                slides.push(Slide::new(start, index));
            }
            start = index;
            total_height = height;
        } else {
            total_height += height;
        }
    }

    if start < heights.len() {
        slides.push(Slide::new(start, heights.len()));
    }

    slides
}
