//! Pointer resize session for changing a widget's height.
//!
//! The edge opposite the slot's anchor moves: widgets in bottom slots
//! grow upward, widgets in top slots grow downward. Height is measured
//! from the fixed edge captured at session start, so the live rect never
//! feeds back into the computation.

use homebase_common::types::{Dimensions, Rect, SizeTier, WidgetId};

use crate::slot::VerticalAnchor;

// =============================================================================
// TYPES
// =============================================================================

/// Bounds applied while resizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeLimits {
    /// Height floor in pixels; smaller heights are clamped, not rejected.
    pub min_height: f64,
    /// Fraction of default height at or below which the widget is compact.
    pub compact_threshold: f64,
}

impl Default for ResizeLimits {
    fn default() -> Self {
        Self {
            min_height: 100.0,
            compact_threshold: SizeTier::DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveResize {
    pub widget: WidgetId,
    pub anchor: VerticalAnchor,
    /// Y of the edge that stays put.
    pub fixed_edge: f64,
    /// Pointer Y minus the moving edge at session start.
    pub grab_offset: f64,
    pub width: f64,
    pub height: f64,
    pub default_height: f64,
}

impl ActiveResize {
    /// Live rect for a widget whose left edge is at `x`.
    pub fn rect(&self, x: f64) -> Rect {
        let y = match self.anchor {
            VerticalAnchor::Top => self.fixed_edge,
            VerticalAnchor::Bottom => self.fixed_edge - self.height,
        };
        Rect {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ResizeState {
    #[default]
    Idle,
    Resizing(ActiveResize),
}

/// Live height and tier after a pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeTick {
    pub height: f64,
    pub tier: SizeTier,
}

/// Quantized result of releasing a resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeRelease {
    pub widget: WidgetId,
    pub dimensions: Dimensions,
    pub tier: SizeTier,
}

/// Snap a released height to one of two tiers: half the default below
/// the halfway mark, the full default otherwise.
pub fn quantize_height(height: f64, default_height: f64) -> f64 {
    let half = default_height / 2.0;
    if height < half {
        half
    } else {
        default_height
    }
}

/// [`quantize_height`] that leaves a height already on the half tier in
/// place, so snapping an already-quantized height is a no-op.
pub fn snap_height(height: f64, default_height: f64) -> f64 {
    let half = default_height / 2.0;
    if (height - half).abs() < f64::EPSILON {
        half
    } else {
        quantize_height(height, default_height)
    }
}

/// Per-widget resize state machine: `Idle → Resizing → Idle`.
#[derive(Debug, Clone, Default)]
pub struct ResizeSession {
    state: ResizeState,
    limits: ResizeLimits,
}

// =============================================================================
// STATE MACHINE
// =============================================================================

impl ResizeSession {
    pub fn new(limits: ResizeLimits) -> Self {
        Self {
            state: ResizeState::Idle,
            limits,
        }
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.state, ResizeState::Resizing(_))
    }

    pub fn active(&self) -> Option<&ActiveResize> {
        match &self.state {
            ResizeState::Resizing(r) => Some(r),
            ResizeState::Idle => None,
        }
    }

    /// Start resizing a widget currently drawn at `rect`. Returns `false`
    /// if a resize is already live.
    pub fn begin(
        &mut self,
        widget: WidgetId,
        anchor: VerticalAnchor,
        rect: Rect,
        pointer_y: f64,
        default_height: f64,
    ) -> bool {
        if self.is_resizing() {
            return false;
        }
        let (fixed_edge, moving_edge) = match anchor {
            VerticalAnchor::Top => (rect.y, rect.bottom()),
            VerticalAnchor::Bottom => (rect.bottom(), rect.y),
        };
        self.state = ResizeState::Resizing(ActiveResize {
            widget,
            anchor,
            fixed_edge,
            grab_offset: pointer_y - moving_edge,
            width: rect.width,
            height: rect.height,
            default_height,
        });
        true
    }

    /// Recompute the live height from the pointer. Ignored when idle.
    pub fn update(&mut self, pointer_y: f64) -> Option<ResizeTick> {
        let limits = self.limits;
        let ResizeState::Resizing(r) = &mut self.state else {
            return None;
        };
        let edge = pointer_y - r.grab_offset;
        let raw = match r.anchor {
            VerticalAnchor::Top => edge - r.fixed_edge,
            VerticalAnchor::Bottom => r.fixed_edge - edge,
        };
        r.height = raw.max(limits.min_height);
        Some(ResizeTick {
            height: r.height,
            tier: SizeTier::from_height(r.height, r.default_height, limits.compact_threshold),
        })
    }

    /// Release at `pointer_y` and quantize. Width is carried through
    /// unchanged. Returns `None` when no resize was active.
    pub fn end(&mut self, pointer_y: f64) -> Option<ResizeRelease> {
        self.update(pointer_y)?;
        let ResizeState::Resizing(r) = std::mem::take(&mut self.state) else {
            return None;
        };
        let height = quantize_height(r.height, r.default_height);
        Some(ResizeRelease {
            widget: r.widget,
            dimensions: Dimensions::new(r.width, height),
            tier: SizeTier::from_height(height, r.default_height, self.limits.compact_threshold),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
