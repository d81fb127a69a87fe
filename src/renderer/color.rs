//! Color helpers

/// Convert hue (degrees), saturation and lightness (0-1) plus alpha to linear RGBA
pub fn hsla_to_rgba(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> [f32; 4] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    [r + m, g + m, b + m, alpha.clamp(0.0, 1.0)]
}

/// CSS `rgba()` string for a color
pub fn css_rgba(color: [f32; 4]) -> String {
    let [r, g, b, a] = color;
    format!(
        "rgba({}, {}, {}, {:.3})",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
        a
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-4)
    }

    #[test]
    fn test_primary_hues() {
        assert!(close(hsla_to_rgba(0.0, 1.0, 0.5, 1.0), [1.0, 0.0, 0.0, 1.0]));
        assert!(close(hsla_to_rgba(120.0, 1.0, 0.5, 1.0), [0.0, 1.0, 0.0, 1.0]));
        assert!(close(hsla_to_rgba(240.0, 1.0, 0.5, 0.5), [0.0, 0.0, 1.0, 0.5]));
    }

    #[test]
    fn test_hue_wraps() {
        assert!(close(hsla_to_rgba(360.0, 1.0, 0.5, 1.0), hsla_to_rgba(0.0, 1.0, 0.5, 1.0)));
        assert!(close(hsla_to_rgba(-120.0, 1.0, 0.5, 1.0), hsla_to_rgba(240.0, 1.0, 0.5, 1.0)));
    }

    #[test]
    fn test_gray_when_unsaturated() {
        let c = hsla_to_rgba(200.0, 0.0, 0.25, 1.0);
        assert!(close(c, [0.25, 0.25, 0.25, 1.0]));
    }

    #[test]
    fn test_css_rgba() {
        assert_eq!(css_rgba([1.0, 0.5, 0.0, 0.25]), "rgba(255, 128, 0, 0.250)");
    }
}
