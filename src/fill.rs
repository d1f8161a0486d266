//! Paint-bucket fill for hand-drawn line art.
//!
//! Dark pixels act as walls so the fill never bleeds across ink, even
//! anti-aliased ink imported from elsewhere.

use image::{Rgba, RgbaImage};
use std::collections::VecDeque;

/// Why a fill request changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillSkip {
    /// The seed lies outside the buffer.
    OutOfBounds,
    /// The seed is an ink (boundary) pixel.
    OnBoundary,
    /// The seed already has the fill color.
    AlreadyFilled,
}

/// Result of a [`flood_fill`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    Filled { pixels: usize },
    Skipped(FillSkip),
}

impl FillOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, FillOutcome::Filled { .. })
    }
}

/// Whether `pixel` stops the fill: close to black on every color channel,
/// or already exactly the fill color.
#[inline]
pub fn is_boundary(pixel: Rgba<u8>, fill: Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    (r < threshold && g < threshold && b < threshold) || pixel == fill
}

/// Breadth-first, 4-connected fill from `seed`.
///
/// The fill color is forced opaque. Work happens on a copy which replaces
/// `buffer` in one step, so callers see either the old or the finished image.
pub fn flood_fill(
    buffer: &mut RgbaImage,
    seed: (u32, u32),
    color: Rgba<u8>,
    threshold: u8,
) -> FillOutcome {
    let (width, height) = buffer.dimensions();
    let (seed_x, seed_y) = seed;
    if seed_x >= width || seed_y >= height {
        return FillOutcome::Skipped(FillSkip::OutOfBounds);
    }

    let fill = Rgba([color[0], color[1], color[2], 255]);
    let seed_pixel = *buffer.get_pixel(seed_x, seed_y);
    if seed_pixel == fill {
        return FillOutcome::Skipped(FillSkip::AlreadyFilled);
    }
    if is_boundary(seed_pixel, fill, threshold) {
        return FillOutcome::Skipped(FillSkip::OnBoundary);
    }

    let w = width as usize;
    let mut working = buffer.clone();
    let mut visited = vec![false; w * height as usize];
    let mut queue = VecDeque::new();

    visited[seed_y as usize * w + seed_x as usize] = true;
    queue.push_back((seed_x, seed_y));
    let mut painted = 0;

    while let Some((x, y)) = queue.pop_front() {
        working.put_pixel(x, y, fill);
        painted += 1;

        let neighbors = [
            (x.checked_sub(1), Some(y)),
            (x.checked_add(1), Some(y)),
            (Some(x), y.checked_sub(1)),
            (Some(x), y.checked_add(1)),
        ];
        for (nx, ny) in neighbors {
            let (Some(nx), Some(ny)) = (nx, ny) else {
                continue;
            };
            if nx >= width || ny >= height {
                continue;
            }
            let vi = ny as usize * w + nx as usize;
            if visited[vi] || is_boundary(*working.get_pixel(nx, ny), fill, threshold) {
                continue;
            }
            visited[vi] = true;
            queue.push_back((nx, ny));
        }
    }

    *buffer = working;
    log::debug!("Flood fill from {:?} painted {} pixels", seed, painted);
    FillOutcome::Filled { pixels: painted }
}
