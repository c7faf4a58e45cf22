//! Curve sampling and rendering.
//!
//! A render pass clears the surface, draws both axes through the middle of the canvas, then walks
//! the domain in fixed steps: every defined sample extends the curve through the affine map in
//! [`PlotOptions::to_pixel`], undefined ones are skipped. Integer tick labels are written under the
//! horizontal axis, once per distinct integer part of the defined samples' `x` values.
//!
//! Rendering never fails. The expression was validated when it was normalized, and anything that
//! goes wrong for a single `x` (a logarithm of a negative number, a division by zero) only removes
//! that sample.
//!
//! ```
//! use rustplot::normalizer::normalize;
//! use rustplot::plot::{render, PlotOptions, RecordingSurface};
//!
//! let expr = normalize("sin(x)").unwrap();
//! let mut surface = RecordingSurface::new();
//! let stats = render(&expr, &PlotOptions::default(), &mut surface);
//! assert_eq!(stats.plotted, 2001);
//! ```

pub mod grid;
pub mod opts;
pub mod point;
mod sample;
pub mod surface;

use crate::normalizer::NormalizedExpression;
use std::collections::HashSet;

pub use grid::GridSurface;
pub use opts::{GapPolicy, PlotOptions};
pub use point::{PixelPoint, SamplePoint};
pub use sample::{samples, Samples};
pub use surface::{DrawCommand, DrawingSurface, Frame, RecordingSurface, Rgb};

/// Integers already labeled during the current render pass.
type TickLabelSet = HashSet<i64>;

/// What a render pass did. `plotted + skipped == samples`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub samples: usize,
    pub plotted: usize,
    pub skipped: usize,
    pub labels: usize,
}

/// Clears `surface` and draws the axes and the graph of `expr` onto it.
pub fn render<S>(expr: &NormalizedExpression, options: &PlotOptions, surface: &mut S) -> RenderStats
where
    S: DrawingSurface + ?Sized,
{
    surface.clear();
    draw_axes(options, surface);
    draw_curve(expr, options, surface)
}

fn draw_axes<S>(options: &PlotOptions, surface: &mut S)
where
    S: DrawingSurface + ?Sized,
{
    let origin = options.origin();

    surface.begin_path();
    surface.move_to(origin.0, 0.0);
    surface.line_to(origin.0, options.height());
    surface.move_to(0.0, origin.1);
    surface.line_to(options.width(), origin.1);
    surface.stroke(options.axis_color);
}

/// Draw the curve as a single path, with the tick labels along the horizontal axis.
fn draw_curve<S>(expr: &NormalizedExpression, options: &PlotOptions, surface: &mut S) -> RenderStats
where
    S: DrawingSurface + ?Sized,
{
    let mut stats = RenderStats::default();
    let mut labeled = TickLabelSet::new();
    let mut pen_down = false;

    surface.begin_path();
    for sample in samples(expr, options) {
        stats.samples += 1;

        match sample.y {
            Some(y) => {
                let pixel = options.to_pixel(sample.x, y);
                if pen_down {
                    surface.line_to(pixel.0, pixel.1);
                } else {
                    surface.move_to(pixel.0, pixel.1);
                    pen_down = true;
                }
                stats.plotted += 1;

                // integer part, so that -0.5 is labeled 0 and [-2.3, 2.3] gives -2..=2
                let tick = sample.x.trunc() as i64;
                if labeled.insert(tick) {
                    let at = options.tick_position(tick);
                    surface.fill_text(&tick.to_string(), at.0, at.1);
                    stats.labels += 1;
                }
            }
            None => {
                stats.skipped += 1;
                if options.gaps == GapPolicy::Break {
                    pen_down = false;
                }
            }
        }
    }
    surface.stroke(options.curve_color);

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;

    fn record(input: &str, options: &PlotOptions) -> (RenderStats, RecordingSurface) {
        let expr = normalize(input).unwrap();
        let mut surface = RecordingSurface::new();
        let stats = render(&expr, options, &mut surface);
        (stats, surface)
    }

    /// The points of the curve path, in order, with `true` marking a `move_to`.
    fn curve_points(surface: &RecordingSurface) -> Vec<(bool, PixelPoint)> {
        let curve_start = surface
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::BeginPath)
            .unwrap();
        surface.commands[curve_start..]
            .iter()
            .filter_map(|c| match c {
                DrawCommand::MoveTo(p) => Some((true, *p)),
                DrawCommand::LineTo(p) => Some((false, *p)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn axes_come_first() {
        let (_, surface) = record("x", &PlotOptions::default());
        assert_eq!(
            surface.commands[..7].to_vec(),
            vec![
                DrawCommand::Clear,
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(PixelPoint(350.0, 0.0)),
                DrawCommand::LineTo(PixelPoint(350.0, 700.0)),
                DrawCommand::MoveTo(PixelPoint(0.0, 350.0)),
                DrawCommand::LineTo(PixelPoint(700.0, 350.0)),
                DrawCommand::Stroke(Rgb::BLACK),
            ]
        );
    }

    #[test]
    fn sine_uses_every_sample() {
        let options = PlotOptions::default();
        let (stats, surface) = record("Math.sin(x)", &options);
        assert_eq!(stats.samples, 2001);
        assert_eq!(stats.plotted, 2001);
        assert_eq!(stats.skipped, 0);

        let points = curve_points(&surface);
        assert_eq!(points.len(), 2001);
        assert!(points[0].0);
        assert!(points[1..].iter().all(|(moved, _)| !moved));

        for (i, (_, p)) in points.iter().enumerate() {
            let x = -100.0 + i as f64 * 0.1;
            assert_abs_diff_eq!(p.0, 350.0 + x * 70.0, epsilon = 1e-6);
            assert_abs_diff_eq!(p.1, 350.0 - x.sin() * 50.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn logarithm_skips_negative_domain() {
        let (stats, surface) = record("Math.log(x)", &PlotOptions::default());
        let points = curve_points(&surface);

        // -100..=0 are undefined, 0.1..=100 are plotted
        assert_eq!(stats.skipped, 1001);
        assert_eq!(stats.plotted, 1000);
        assert_eq!(points.len(), 1000);
        assert!(points.iter().all(|(_, p)| p.0 > 350.0));
        assert!(points[0].0);
    }

    #[test]
    fn tick_labels_once_per_integer() {
        let options = PlotOptions::default().domain(-2.3, 2.3);
        let (stats, surface) = record("x", &options);

        assert_eq!(surface.texts(), vec!["-2", "-1", "0", "1", "2"]);
        assert_eq!(stats.labels, 5);

        let frame = surface.frame();
        let positions = frame.labels.iter().map(|l| l.at).collect::<Vec<_>>();
        assert_eq!(
            positions,
            [-2.0, -1.0, 0.0, 1.0, 2.0]
                .iter()
                .map(|n| PixelPoint(350.0 + n * 30.0, 365.0))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn every_integer_of_the_default_domain_is_labeled() {
        let (stats, surface) = record("Math.sin(x)", &PlotOptions::default());
        assert_eq!(stats.labels, 201);
        let texts = surface.texts();
        assert_eq!(texts.first(), Some(&"-100"));
        assert_eq!(texts.last(), Some(&"100"));
    }

    #[test]
    fn only_defined_samples_are_labeled() {
        // x = 0 itself is undefined, 0.1..1 still carries the label 0
        let (stats, surface) = record("Math.log(x)", &PlotOptions::default());
        assert_eq!(stats.labels, 101);
        let texts = surface.texts();
        assert_eq!(texts.first(), Some(&"0"));
        assert_eq!(texts.last(), Some(&"100"));
        assert!(texts.iter().all(|t| !t.starts_with('-')));
    }

    #[test]
    fn huge_values_stay_off_the_canvas() {
        let expr = normalize("x * 1e306").unwrap();
        let mut grid = GridSurface::new(80, 40, (700, 700));
        render(&expr, &PlotOptions::default(), &mut grid);
        assert_eq!(grid.get(79, 39), Some(' '));

        let mut surface = RecordingSurface::new();
        render(&expr, &PlotOptions::default(), &mut surface);
        let frame = surface.frame();
        assert!(frame
            .strokes
            .iter()
            .all(|s| [s.from.0, s.from.1, s.to.0, s.to.1].iter().all(|c| c.is_finite())));
    }

    #[test]
    fn gaps_break_or_connect() {
        // undefined on (-1, 1)
        let input = "Math.sqrt(x * x - 1)";
        let options = PlotOptions::default().domain(-2.0, 2.0);

        let (_, broken) = record(input, &options);
        let moves = curve_points(&broken).iter().filter(|(moved, _)| *moved).count();
        assert_eq!(moves, 2);

        let (_, connected) = record(input, &options.gaps(GapPolicy::Connect));
        let moves = curve_points(&connected).iter().filter(|(moved, _)| *moved).count();
        assert_eq!(moves, 1);
    }

    #[test]
    fn rendering_twice_gives_one_frame() {
        let expr = normalize("x ^ 2").unwrap();
        let options = PlotOptions::default();
        let mut surface = RecordingSurface::new();
        render(&expr, &options, &mut surface);
        let first = surface.clone();
        render(&expr, &options, &mut surface);
        assert_eq!(surface, first);
    }

    #[test]
    fn grid_backend() {
        let expr = normalize("0").unwrap();
        let mut grid = GridSurface::new(70, 35, (700, 700));
        let stats = render(&expr, &PlotOptions::default(), &mut grid);
        assert_eq!(stats.plotted, 2001);

        let lines = grid.lines();
        assert_eq!(lines.len(), 35);
        // the curve y = 0 lies on the horizontal axis
        assert_eq!(lines[17], "-".repeat(70));
        assert_eq!(grid.get(35, 0), Some('|'));
        // label row one cell under the axis
        assert!(lines[18].contains("0"));
    }
}
