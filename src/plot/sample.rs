use super::opts::PlotOptions;
use super::point::SamplePoint;
use crate::normalizer::NormalizedExpression;

/// Iterator over the fixed-step samples of an expression across the domain.
///
/// Each `x` is computed from the sample index rather than by repeatedly adding the step, so
/// rounding does not accumulate over the 2000 steps of the default domain.
pub struct Samples<'a> {
    expr: &'a NormalizedExpression,
    from: f64,
    step: f64,
    index: usize,
    count: usize,
}

impl Iterator for Samples<'_> {
    type Item = SamplePoint;

    fn next(&mut self) -> Option<SamplePoint> {
        if self.index >= self.count {
            return None;
        }
        let x = self.from + self.index as f64 * self.step;
        self.index += 1;
        Some(SamplePoint { x, y: self.expr.eval(x) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples<'_> {}

/// Evaluates `expr` at every step of the domain in `options`.
pub fn samples<'a>(expr: &'a NormalizedExpression, options: &PlotOptions) -> Samples<'a> {
    Samples {
        expr,
        from: options.domain.0,
        step: options.step,
        index: 0,
        count: options.sample_count(),
    }
}
