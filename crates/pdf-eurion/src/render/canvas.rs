//! Content stream builder for vector drawing

use crate::constants::BEZIER_CIRCLE_FACTOR;
use crate::types::Rgb;

/// Accumulates PDF content stream operators for a single page.
#[derive(Debug, Default, Clone)]
pub struct Canvas {
    ops: String,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_state(&mut self) {
        self.ops.push_str("q\n");
    }

    pub fn restore_state(&mut self) {
        self.ops.push_str("Q\n");
    }

    /// Select a named ExtGState from the page resources
    pub fn set_graphics_state(&mut self, name: &str) {
        self.ops.push_str(&format!("/{} gs\n", name));
    }

    pub fn set_fill_rgb(&mut self, color: Rgb) {
        self.ops.push_str(&format!(
            "{} {} {} rg\n",
            fmt_num(color.r),
            fmt_num(color.g),
            fmt_num(color.b)
        ));
    }

    pub fn set_stroke_rgb(&mut self, color: Rgb) {
        self.ops.push_str(&format!(
            "{} {} {} RG\n",
            fmt_num(color.r),
            fmt_num(color.g),
            fmt_num(color.b)
        ));
    }

    /// Fill and stroke a circle, approximated by four Bezier curves
    pub fn circle(&mut self, cx: f64, cy: f64, r: f64) {
        let k = r * BEZIER_CIRCLE_FACTOR;
        let p = |v: f64| fmt_num(v);

        self.ops.push_str(&format!("{} {} m\n", p(cx + r), p(cy)));
        self.ops.push_str(&format!(
            "{} {} {} {} {} {} c\n",
            p(cx + r),
            p(cy + k),
            p(cx + k),
            p(cy + r),
            p(cx),
            p(cy + r)
        ));
        self.ops.push_str(&format!(
            "{} {} {} {} {} {} c\n",
            p(cx - k),
            p(cy + r),
            p(cx - r),
            p(cy + k),
            p(cx - r),
            p(cy)
        ));
        self.ops.push_str(&format!(
            "{} {} {} {} {} {} c\n",
            p(cx - r),
            p(cy - k),
            p(cx - k),
            p(cy - r),
            p(cx),
            p(cy - r)
        ));
        self.ops.push_str(&format!(
            "{} {} {} {} {} {} c\n",
            p(cx + k),
            p(cy - r),
            p(cx + r),
            p(cy - k),
            p(cx + r),
            p(cy)
        ));
        self.ops.push_str("B\n");
    }

    pub fn as_str(&self) -> &str {
        &self.ops
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.ops.into_bytes()
    }
}

/// Format a coordinate with at most four decimals and no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    let mut s = format!("{:.4}", value);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(7.5), "7.5");
        assert_eq!(fmt_num(-2.5), "-2.5");
        assert_eq!(fmt_num(160.0 / 255.0), "0.6275");
        assert_eq!(fmt_num(-0.00001), "0");
    }

    #[test]
    fn test_circle_is_closed_and_painted() {
        let mut canvas = Canvas::new();
        canvas.circle(10.0, 20.0, 1.0);
        let ops = canvas.as_str();
        assert!(ops.starts_with("11 20 m\n"));
        assert_eq!(ops.matches(" c\n").count(), 4);
        assert!(ops.ends_with("11 20 c\nB\n"));
    }

    #[test]
    fn test_color_operators() {
        let mut canvas = Canvas::new();
        canvas.set_fill_rgb(Rgb::new(1.0, 0.0, 0.5));
        canvas.set_stroke_rgb(Rgb::new(1.0, 0.0, 0.5));
        canvas.set_graphics_state("GS0");
        assert_eq!(canvas.as_str(), "1 0 0.5 rg\n1 0 0.5 RG\n/GS0 gs\n");
    }
}
