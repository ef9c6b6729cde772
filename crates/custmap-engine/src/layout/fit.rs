//! Zoom-to-fit: uniform scale + translation that centers the diagram in a
//! viewport.

use serde::{Deserialize, Serialize};

use super::{LayoutConfig, Point};

/// Padding added around the diagram bounding box before scaling.
const FIT_PADDING: f64 = 90.0;
/// Hard cap on the fitted scale so small diagrams are not blown up.
const FIT_MAX_SCALE: f64 = 2.0;
/// Headroom factor applied after capping.
const FIT_HEADROOM: f64 = 1.08;
/// Viewports smaller than this are treated as not-yet-settled.
const MIN_VIEWPORT: f64 = 80.0;

/// Axis-aligned bounding box of rendered geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounding box of the given card centers, expanded by the card extents.
    /// `None` when there are no points.
    pub fn around_cards(points: impl IntoIterator<Item = Point>, config: &LayoutConfig) -> Option<Self> {
        let half_w = config.card_width / 2.0;
        let half_h = config.card_height / 2.0;
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for point in points {
            min_x = min_x.min(point.x - half_w);
            min_y = min_y.min(point.y - half_h);
            max_x = max_x.max(point.x + half_w);
            max_y = max_y.max(point.y + half_h);
        }
        if !min_x.is_finite() {
            return None;
        }
        Some(Bounds {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Uniform transform: scale, then translate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

/// Compute the transform that centers `bounds` in `viewport`.
///
/// Returns `None` when the viewport has not settled yet or the bounding box
/// is degenerate; the caller retries on the next pass instead of applying a
/// divide-by-zero transform.
pub fn fit(bounds: Bounds, viewport: Viewport) -> Option<FitTransform> {
    if viewport.width < MIN_VIEWPORT || viewport.height < MIN_VIEWPORT {
        return None;
    }
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return None;
    }

    let scale = (viewport.width / (bounds.width() + FIT_PADDING))
        .min(viewport.height / (bounds.height() + FIT_PADDING))
        .min(FIT_MAX_SCALE)
        * FIT_HEADROOM;
    let translate_x = viewport.width / 2.0 - (bounds.min_x + bounds.width() / 2.0) * scale;
    let translate_y = viewport.height / 2.0 - (bounds.min_y + bounds.height() / 2.0) * scale;

    Some(FitTransform {
        scale,
        translate_x,
        translate_y,
    })
}

/// Coalescing fit request: any number of requests before settlement collapse
/// into one, and `take` arms exactly one fit pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FitRequest {
    pending: bool,
}

impl FitRequest {
    pub fn request(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending request, if any.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}
