mod color;

pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ffcc00").unwrap();
        assert_eq!(c, Color::from_rgba(255, 204, 0, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ffaa0080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 170, 0, 128));
    }

    #[test]
    fn color_from_hex_short_form() {
        let c = Color::from_hex("#fc0").unwrap();
        assert_eq!(c, Color::from_rgba(255, 204, 0, 255));
    }

    #[test]
    fn color_from_hex_no_hash() {
        let c = Color::from_hex("00ff00").unwrap();
        assert_eq!(c, Color::from_rgba(0, 255, 0, 255));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abcd").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_to_rgb_f32() {
        let [r, g, b] = Color::from_rgba(255, 0, 51, 255).to_rgb_f32();
        assert!((r - 1.0).abs() < 1e-6);
        assert!(g.abs() < 1e-6);
        assert!((b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn color_serialization() {
        let c = Color::from_rgba(1, 2, 3, 4);
        let json = serde_json::to_string(&c).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
