use crate::{
    font::Font,
    geometry::{Point, Rect, Size},
};

/// One glyph placed by [`TextLayout::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedGlyph {
    pub glyph_index: u16,
    /// Top-left corner of the glyph bitmap. **Y axis goes down.**
    pub x: f32,
    pub y: f32,
}

/// Glyph placement for a single-font string.
///
/// Lines are split on `'\n'` only; widgets size their canvas for the label
/// they show, so there is no wrapping. The first baseline sits at the
/// font's ascent so `(0, 0)` is the top-left of the first line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLayout {
    pub glyphs: Vec<PlacedGlyph>,
    /// Pen position at the top of the line for every character, plus one
    /// entry for the end of the string.
    pub carets: Vec<Point>,
    /// Tight box around every non-empty glyph bitmap.
    pub bounds: Rect,
    pub line_height: f32,
}

impl TextLayout {
    pub fn new(font: &Font, string: &str, size: f32, line_spacing: f32) -> Self {
        let Some(line_metrics) = font.line_metrics(size) else {
            return Self::empty(string);
        };

        let ascent = line_metrics.ascent;
        let line_height = line_metrics.new_line_size * line_spacing;

        let mut glyphs = Vec::with_capacity(string.len());
        let mut carets = Vec::with_capacity(string.len() + 1);
        let mut bounds: Option<Rect> = None;
        let mut pen_x = 0.0f32;
        let mut line_top = 0.0f32;
        let mut previous: Option<u16> = None;

        for ch in string.chars() {
            if ch == '\n' {
                carets.push(Point::new(pen_x, line_top));
                pen_x = 0.0;
                line_top += line_height;
                previous = None;
                continue;
            }

            let glyph_index = font.glyph_index(ch);
            if let Some(previous) = previous {
                pen_x += font.kerning(previous, glyph_index, size);
            }
            carets.push(Point::new(pen_x, line_top));

            let metrics = font.glyph_metrics(glyph_index, size);
            let x = pen_x + metrics.xmin as f32;
            let y = line_top + ascent - (metrics.ymin as f32 + metrics.height as f32);

            if metrics.width > 0 && metrics.height > 0 {
                let rect = Rect::new(
                    Point::new(x, y),
                    Size::new(metrics.width as f32, metrics.height as f32),
                );
                bounds = Some(bounds.map_or(rect, |b| b.union(&rect)));
            }

            glyphs.push(PlacedGlyph { glyph_index, x, y });
            pen_x += metrics.advance_width;
            previous = Some(glyph_index);
        }
        carets.push(Point::new(pen_x, line_top));

        Self {
            glyphs,
            carets,
            bounds: bounds.unwrap_or_else(Rect::zero),
            line_height,
        }
    }

    /// Layout used when there is no font: nothing to draw, every caret at
    /// the origin.
    pub fn empty(string: &str) -> Self {
        Self {
            glyphs: Vec::new(),
            carets: vec![Point::origin(); string.chars().count() + 1],
            bounds: Rect::zero(),
            line_height: 0.0,
        }
    }

    /// Caret of the `index`-th character; the end of the string when out of
    /// range.
    pub fn caret(&self, index: usize) -> Point {
        self.carets
            .get(index)
            .or_else(|| self.carets.last())
            .copied()
            .unwrap_or_else(Point::origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_layout_keeps_one_caret_per_char() {
        let layout = TextLayout::empty("abc");
        assert_eq!(layout.carets.len(), 4);
        assert!(layout.glyphs.is_empty());
        assert_eq!(layout.caret(10), Point::origin());
    }

    #[test]
    fn glyphs_advance_left_to_right() {
        let Some(font) = crate::test_support::system_font() else {
            return;
        };
        let layout = TextLayout::new(&font, "AB", 24.0, 1.0);

        assert_eq!(layout.glyphs.len(), 2);
        assert!(layout.caret(1).x > layout.caret(0).x);
        assert!(layout.bounds.width() > 0.0);
        assert!(layout.bounds.height() > 0.0);
    }

    #[test]
    fn newline_starts_a_new_line() {
        let Some(font) = crate::test_support::system_font() else {
            return;
        };
        let layout = TextLayout::new(&font, "A\nB", 24.0, 1.0);

        // "B" is the third char; its caret is back at x = 0 on the next line.
        let b = layout.caret(2);
        assert_eq!(b.x, 0.0);
        assert!(b.y > 0.0);
        assert_eq!(b.y, layout.line_height);
        assert_eq!(layout.caret(99), layout.caret(3));
    }
}
