//! Colour math for the animated page background.

use crate::consts::{
    GRADIENT_HUE_STEP, GRADIENT_LIGHTNESS, GRADIENT_SATURATION, GRADIENT_STOP_OFFSET,
};

/// Rotates the hue of a three-stop pastel gradient one step per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GradientAnimator {
    hue: u16,
}

impl GradientAnimator {
    pub fn new(hue: u16) -> Self {
        Self { hue: hue % 360 }
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// Advance one frame and return the new stops.
    pub fn tick(&mut self) -> [[u8; 3]; 3] {
        self.hue = (self.hue + GRADIENT_HUE_STEP) % 360;
        self.stops()
    }

    /// Stops at `hue`, `hue + 60` and `hue + 120`, ordered top-left to
    /// bottom-right.
    pub fn stops(&self) -> [[u8; 3]; 3] {
        let stop = |i: u16| {
            let h = (self.hue + GRADIENT_STOP_OFFSET * i) % 360;
            hsl_to_rgb(h as f32, GRADIENT_SATURATION, GRADIENT_LIGHTNESS)
        };
        [stop(0), stop(1), stop(2)]
    }
}

/// Convert HSL (hue in degrees, saturation and lightness in `0..=1`) to RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [u8; 3] {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    [to_u8(r), to_u8(g), to_u8(b)]
}
