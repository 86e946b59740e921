//! LED colors and fixed 8x8 frames used by the menu and the collector.

use super::{Frame, Rgb};

pub const OFF: Rgb = (0, 0, 0);
pub const WHITE: Rgb = (255, 255, 255);
pub const RED: Rgb = (255, 0, 0);
pub const GREEN: Rgb = (0, 255, 0);
pub const BLUE: Rgb = (0, 0, 255);
pub const YELLOW: Rgb = (255, 255, 0);
pub const VIOLET: Rgb = (255, 0, 255);

// Short aliases keep the frame layouts readable.
const _X: Rgb = OFF;
const _W: Rgb = WHITE;
const _R: Rgb = RED;
const _G: Rgb = GREEN;
const _B: Rgb = BLUE;
const _Y: Rgb = YELLOW;
const _V: Rgb = VIOLET;

/// Four colored arrows around a center dot: up enables, down disables,
/// left/right navigate. Shown by the parameter editor and in unbounded runs.
pub const NAVIGATION: Frame = [
    _X, _X, _X, _X, _X, _X, _X, _X, //
    _X, _X, _X, _G, _X, _X, _X, _X, //
    _X, _X, _G, _G, _G, _X, _X, _X, //
    _X, _Y, _X, _G, _X, _V, _X, _X, //
    _Y, _Y, _Y, _R, _V, _V, _V, _X, //
    _X, _Y, _X, _B, _X, _V, _X, _X, //
    _X, _X, _B, _B, _B, _X, _X, _X, //
    _X, _X, _X, _B, _X, _X, _X, _X, //
];

/// Farewell frame shown when the user quits from the menu.
pub const FAREWELL: Frame = [
    _X, _X, _X, _X, _X, _X, _X, _X, //
    _W, _X, _X, _X, _X, _X, _X, _X, //
    _X, _W, _X, _X, _X, _X, _X, _X, //
    _X, _X, _W, _X, _X, _X, _X, _X, //
    _X, _X, _X, _W, _X, _X, _X, _X, //
    _X, _X, _W, _X, _X, _X, _X, _X, //
    _X, _W, _X, _X, _X, _X, _X, _X, //
    _W, _X, _X, _X, _W, _W, _W, _W, //
];

/// A blank frame with a single pixel lit, used for the sweep animation.
pub fn single_pixel(x: usize, y: usize, color: Rgb) -> Frame {
    let mut frame = [OFF; 64];
    frame[y * 8 + x] = color;
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel_placement() {
        let frame = single_pixel(3, 4, WHITE);
        assert_eq!(frame[4 * 8 + 3], WHITE);
        assert_eq!(frame.iter().filter(|&&c| c != OFF).count(), 1);
    }

    #[test]
    fn test_navigation_center_is_red() {
        assert_eq!(NAVIGATION[4 * 8 + 3], RED);
    }
}
