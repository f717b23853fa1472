//! 8-bit sRGB colors and the compositing rules used by [`Canvas`](crate::Canvas).

/// Straight (non-premultiplied) sRGB color with alpha.
pub type Color = palette::Srgba<u8>;

pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
pub const BLACK: Color = Color::new(0, 0, 0, 255);
pub const WHITE: Color = Color::new(255, 255, 255, 255);
pub const RED: Color = Color::new(255, 0, 0, 255);
pub const GREEN: Color = Color::new(0, 255, 0, 255);
pub const BLUE: Color = Color::new(0, 0, 255, 255);

/// Component-wise product, used to tint texels by a sprite or text color.
pub fn modulate(a: Color, b: Color) -> Color {
    fn mul(x: u8, y: u8) -> u8 {
        ((x as u16 * y as u16 + 127) / 255) as u8
    }

    Color::new(
        mul(a.red, b.red),
        mul(a.green, b.green),
        mul(a.blue, b.blue),
        mul(a.alpha, b.alpha),
    )
}

/// Source-over compositing of `src` onto `dst`.
pub fn blend_over(dst: Color, src: Color) -> Color {
    match src.alpha {
        255 => return src,
        0 => return dst,
        _ => {}
    }

    let src_a = src.alpha as f32 / 255.0;
    let dst_a = dst.alpha as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    let mix = |s: u8, d: u8| {
        let value = (s as f32 * src_a + d as f32 * dst_a * (1.0 - src_a)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };

    Color::new(
        mix(src.red, dst.red),
        mix(src.green, dst.green),
        mix(src.blue, dst.blue),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulate_by_white_is_identity() {
        let c = Color::new(12, 34, 56, 78);
        assert_eq!(modulate(c, WHITE), c);
        assert_eq!(modulate(c, TRANSPARENT), TRANSPARENT);
    }

    #[test]
    fn opaque_source_replaces() {
        assert_eq!(blend_over(BLUE, RED), RED);
    }

    #[test]
    fn transparent_source_keeps_destination() {
        assert_eq!(blend_over(BLUE, TRANSPARENT), BLUE);
    }

    #[test]
    fn half_red_over_opaque_blue() {
        let out = blend_over(BLUE, Color::new(255, 0, 0, 128));
        assert_eq!(out.alpha, 255);
        assert!(out.red > 120 && out.red < 135);
        assert!(out.blue > 120 && out.blue < 135);
    }

    #[test]
    fn over_transparent_keeps_source_color() {
        let out = blend_over(TRANSPARENT, Color::new(10, 20, 30, 100));
        assert_eq!(out, Color::new(10, 20, 30, 100));
    }
}
