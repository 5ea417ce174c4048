//! Hue-cycling colours for the title bar.

use ratatui::style::Color;

/// Hue advanced per frame at roughly 30 frames per second.
const HUE_STEP: f64 = 0.0032;

/// A position on the colour wheel in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hue(f64);

impl Hue {
    /// Moves one frame around the wheel.
    pub fn advance(&mut self) {
        self.0 = (self.0 + HUE_STEP) % 1.0;
    }

    /// Current colour.
    pub fn color(self) -> Color {
        let [r, g, b] = wheel(self.0);
        Color::Rgb(channel(r), channel(g), channel(b))
    }

    /// Colour on the opposite side of the wheel, for text over [`Hue::color`].
    pub fn inverse(self) -> Color {
        let [r, g, b] = wheel(self.0);
        Color::Rgb(channel(1.0 - r), channel(1.0 - g), channel(1.0 - b))
    }
}

/// Fully saturated RGB for a hue: red, yellow, green, cyan, blue, magenta, red.
fn wheel(hue: f64) -> [f64; 3] {
    let scaled = hue * 6.0;
    let t = scaled.fract();
    match scaled {
        s if 0.0 < s && s < 1.0 => [1.0, s, 0.0],
        s if (1.0..2.0).contains(&s) => [1.0 - t, 1.0, 0.0],
        s if (2.0..3.0).contains(&s) => [0.0, 1.0, t],
        s if (3.0..4.0).contains(&s) => [0.0, 1.0 - t, 1.0],
        s if (4.0..5.0).contains(&s) => [t, 0.0, 1.0],
        s if (5.0..6.0).contains(&s) => [1.0, 0.0, 1.0 - t],
        _ => [1.0, 0.0, 0.0],
    }
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_segments() {
        assert_eq!(wheel(0.0), [1.0, 0.0, 0.0]);
        assert_eq!(wheel(0.0625), [1.0, 0.375, 0.0]);
        assert_eq!(wheel(0.25), [0.5, 1.0, 0.0]);
        assert_eq!(wheel(0.5), [0.0, 1.0, 1.0]);
        assert_eq!(wheel(0.625), [0.0, 0.25, 1.0]);
        assert_eq!(wheel(0.75), [0.5, 0.0, 1.0]);
    }

    #[test]
    fn test_color_and_inverse() {
        let hue = Hue::default();
        assert_eq!(hue.color(), Color::Rgb(255, 0, 0));
        assert_eq!(hue.inverse(), Color::Rgb(0, 255, 255));
    }

    #[test]
    fn test_advance_wraps() {
        let mut hue = Hue(0.999);
        hue.advance();
        assert!(hue.0 < HUE_STEP);
    }
}
