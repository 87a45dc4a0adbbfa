//! HSL palette for the per-vertex color pass.

use corona_config::schema::PaletteConfig;

/// Convert HSL to linear RGB.
///
/// `hue` is in degrees (any value, wrapped into `[0, 360)`); `saturation`
/// and `lightness` are in `[0, 1]`. Every output channel is in `[0, 1]`.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [
        (r + m).clamp(0.0, 1.0),
        (g + m).clamp(0.0, 1.0),
        (b + m).clamp(0.0, 1.0),
    ]
}

const RAINBOW_SATURATION: f32 = 1.0;
const RAINBOW_LIGHTNESS: f32 = 0.6;

/// Time-animated hue band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HuePalette {
    pub base_hue: f32,
    pub hue_spread: f32,
    pub hue_rate: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Default for HuePalette {
    fn default() -> Self {
        Self::from_config(&PaletteConfig::default())
    }
}

impl HuePalette {
    pub fn from_config(config: &PaletteConfig) -> Self {
        Self {
            base_hue: config.base_hue as f32,
            hue_spread: config.hue_spread as f32,
            hue_rate: config.hue_rate as f32,
            saturation: config.saturation as f32,
            lightness: config.lightness as f32,
        }
    }

    /// Hue in degrees, wrapped into `[0, 360)`.
    pub fn hue_at(&self, angle: f32, t: f32, phase: f32) -> f32 {
        let hue = self.base_hue + self.hue_spread * (t * self.hue_rate + angle + phase).sin();
        // rem_euclid rounds tiny negatives up to exactly 360.0
        let wrapped = hue.rem_euclid(360.0);
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    }

    pub fn color_at(&self, angle: f32, t: f32, phase: f32) -> [f32; 3] {
        hsl_to_rgb(self.hue_at(angle, t, phase), self.saturation, self.lightness)
    }

    /// Rainbow color shown before the first tick: hue follows the angle
    /// around the loop, shifted by `jitter` degrees. Always fully saturated
    /// at 60% lightness, whatever the animated band is tuned to.
    pub fn rainbow_at(&self, angle: f32, jitter: f32) -> [f32; 3] {
        hsl_to_rgb(angle.to_degrees() + jitter, RAINBOW_SATURATION, RAINBOW_LIGHTNESS)
    }
}
