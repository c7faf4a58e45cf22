use super::point::PixelPoint;
use super::surface::Rgb;

/// Canvas coordinates never exceed this magnitude.
pub const PIXEL_LIMIT: f64 = 1e12;

/// What the curve does across samples where the function is undefined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GapPolicy {
    /// Lift the pen: the next defined sample starts a new polyline.
    #[default]
    Break,

    /// Keep drawing, joining the defined samples on either side of the gap.
    Connect,
}

/// Options to use when plotting a function. `Default` gives the fixed 700x700 layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotOptions {
    pub canvas_size: (u16, u16),

    /// Inclusive range of sampled `x` values.
    pub domain: (f64, f64),
    pub step: f64,

    /// Canvas units per graph unit, `(horizontal, vertical)`.
    pub scale: (f64, f64),

    // labels have their own spacing, unrelated to `scale`
    pub tick_spacing: f64,
    pub tick_label_offset: f64,

    pub axis_color: Rgb,
    pub curve_color: Rgb,
    pub gaps: GapPolicy,
}

impl Default for PlotOptions {
    fn default() -> PlotOptions {
        PlotOptions {
            canvas_size: (700, 700),
            domain: (-100.0, 100.0),
            step: 0.1,
            scale: (70.0, 50.0),
            tick_spacing: 30.0,
            tick_label_offset: 15.0,
            axis_color: Rgb::BLACK,
            curve_color: Rgb::BLACK,
            gaps: GapPolicy::Break,
        }
    }
}

impl PlotOptions {
    /// Set the domain. Returns an updated [`PlotOptions`] for chaining.
    pub fn domain(mut self, from: f64, to: f64) -> Self {
        self.domain = (from, to);
        self
    }

    pub fn colors(mut self, axis: Rgb, curve: Rgb) -> Self {
        self.axis_color = axis;
        self.curve_color = curve;
        self
    }

    pub fn gaps(mut self, gaps: GapPolicy) -> Self {
        self.gaps = gaps;
        self
    }

    pub fn width(&self) -> f64 {
        self.canvas_size.0 as f64
    }

    pub fn height(&self) -> f64 {
        self.canvas_size.1 as f64
    }

    pub fn origin(&self) -> PixelPoint {
        PixelPoint(self.width() / 2.0, self.height() / 2.0)
    }

    /// Number of samples taken over the domain, both ends included.
    pub fn sample_count(&self) -> usize {
        let (from, to) = self.domain;
        if !(self.step > 0.0) || to < from {
            return 0;
        }
        // tolerate the rounding in e.g. 4.6 / 0.1 = 45.99999999999999
        ((to - from) / self.step + 1e-9).floor() as usize + 1
    }

    /// Converts a point in **graph** space to **canvas** space. Coordinates are clamped to
    /// `±PIXEL_LIMIT`, so a huge but finite value still maps to a finite point.
    pub fn to_pixel(&self, x: f64, y: f64) -> PixelPoint {
        let origin = self.origin();
        PixelPoint(
            (origin.0 + x * self.scale.0).clamp(-PIXEL_LIMIT, PIXEL_LIMIT),
            (origin.1 - y * self.scale.1).clamp(-PIXEL_LIMIT, PIXEL_LIMIT),
        )
    }

    /// Where the label for the integer `n` is drawn.
    pub fn tick_position(&self, n: i64) -> PixelPoint {
        let origin = self.origin();
        PixelPoint(origin.0 + n as f64 * self.tick_spacing, origin.1 + self.tick_label_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn affine_map() {
        let opts = PlotOptions::default();
        assert_eq!(opts.to_pixel(0.0, 0.0), PixelPoint(350.0, 350.0));
        assert_eq!(opts.to_pixel(1.0, 1.0), PixelPoint(420.0, 300.0));
        assert_eq!(opts.to_pixel(-2.0, -3.0), PixelPoint(210.0, 500.0));
        assert_eq!(opts.tick_position(-2), PixelPoint(290.0, 365.0));
    }

    #[test]
    fn huge_values_map_to_finite_pixels() {
        let opts = PlotOptions::default();
        assert_eq!(opts.to_pixel(0.0, 1e307), PixelPoint(350.0, -PIXEL_LIMIT));
        assert_eq!(opts.to_pixel(-1e307, -1e307), PixelPoint(-PIXEL_LIMIT, PIXEL_LIMIT));
    }

    #[test]
    fn sample_counts() {
        assert_eq!(PlotOptions::default().sample_count(), 2001);
        assert_eq!(PlotOptions::default().domain(-2.3, 2.3).sample_count(), 47);
        assert_eq!(PlotOptions::default().domain(1.0, 1.0).sample_count(), 1);
        assert_eq!(PlotOptions::default().domain(1.0, 0.0).sample_count(), 0);
    }
}
