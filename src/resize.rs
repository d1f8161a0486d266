use egui::{Pos2, Vec2};

/// Observed placement of the canvas element, delivered whenever layout runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceLayout {
    /// Top-left corner in layout points
    pub origin: Pos2,
    /// Size in layout points
    pub size: Vec2,
    /// Device pixel ratio
    pub pixels_per_point: f32,
}

impl SurfaceLayout {
    pub fn new(origin: Pos2, size: Vec2, pixels_per_point: f32) -> Self {
        Self {
            origin,
            size,
            pixels_per_point,
        }
    }

    /// Buffer dimensions matching the element's physical pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        let to_px = |v: f32| {
            let px = (v * self.pixels_per_point).round();
            if px.is_finite() && px > 0.0 { px as u32 } else { 0 }
        };
        (to_px(self.size.x), to_px(self.size.y))
    }
}

/// What the engine does with its buffer after a layout observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAction {
    /// Same physical size: leave everything alone.
    Keep,
    /// Zero-sized surface: wait for a real size.
    Defer,
    /// First real size: allocate a white buffer and make it the history base.
    Reset,
    /// Size changed with existing work: reallocate and repaint the latest
    /// snapshot.
    Repaint,
}

/// Decide how to reconcile the buffer with a newly observed size.
///
/// Keyed strictly on the physical pixel delta so repeated layout passes at
/// the same size never touch the drawing.
pub fn reconcile(current: (u32, u32), required: (u32, u32), history_empty: bool) -> ResizeAction {
    if required.0 == 0 || required.1 == 0 {
        ResizeAction::Defer
    } else if current == required && !history_empty {
        ResizeAction::Keep
    } else if history_empty {
        ResizeAction::Reset
    } else {
        ResizeAction::Repaint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_physical_size_rounds() {
        let layout = SurfaceLayout::new(pos2(0.0, 0.0), vec2(100.4, 50.0), 1.5);
        assert_eq!(layout.physical_size(), (151, 75));
        let empty = SurfaceLayout::new(pos2(0.0, 0.0), vec2(0.0, 50.0), 2.0);
        assert_eq!(empty.physical_size(), (0, 100));
    }

    #[test]
    fn test_reconcile_table() {
        assert_eq!(reconcile((0, 0), (0, 10), true), ResizeAction::Defer);
        assert_eq!(reconcile((10, 10), (10, 0), false), ResizeAction::Defer);
        assert_eq!(reconcile((0, 0), (10, 10), true), ResizeAction::Reset);
        assert_eq!(reconcile((10, 10), (10, 10), false), ResizeAction::Keep);
        assert_eq!(reconcile((10, 10), (20, 10), false), ResizeAction::Repaint);
        assert_eq!(reconcile((10, 10), (20, 10), true), ResizeAction::Reset);
    }
}
