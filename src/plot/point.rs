/// One evaluation of the plotted function. `y` is `None` where the function is undefined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: Option<f64>,
}

/// A pair of `(x, y)` values in **canvas** units, origin at the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelPoint(pub f64, pub f64);

impl From<(f64, f64)> for PixelPoint {
    fn from((x, y): (f64, f64)) -> PixelPoint {
        PixelPoint(x, y)
    }
}

/// Clips the segment `from -> to` to the rectangle `(0, 0)..=(width, height)`.
///
/// Returns `None` when no part of the segment is inside, or when an endpoint is not finite.
pub fn clip_segment(
    from: PixelPoint,
    to: PixelPoint,
    width: f64,
    height: f64,
) -> Option<(PixelPoint, PixelPoint)> {
    if ![from.0, from.1, to.0, to.1].iter().all(|c| c.is_finite()) {
        return None;
    }
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [
        (-dx, from.0),
        (dx, width - from.0),
        (-dy, from.1),
        (dy, height - from.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some((
        PixelPoint(from.0 + t0 * dx, from.1 + t0 * dy),
        PixelPoint(from.0 + t1 * dx, from.1 + t1 * dy),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inside_segment_is_unchanged() {
        let segment = (PixelPoint(10.0, 10.0), PixelPoint(20.0, 30.0));
        assert_eq!(clip_segment(segment.0, segment.1, 100.0, 100.0), Some(segment));
    }

    #[test]
    fn crossing_segment_is_cut() {
        assert_eq!(
            clip_segment(PixelPoint(-50.0, 50.0), PixelPoint(150.0, 50.0), 100.0, 100.0),
            Some((PixelPoint(0.0, 50.0), PixelPoint(100.0, 50.0)))
        );
    }

    #[test]
    fn outside_segment_is_dropped() {
        assert_eq!(clip_segment(PixelPoint(-5.0, -5.0), PixelPoint(-1.0, 200.0), 100.0, 100.0), None);
        assert_eq!(clip_segment(PixelPoint(0.0, 150.0), PixelPoint(100.0, 101.0), 100.0, 100.0), None);
    }

    #[test]
    fn non_finite_segment_is_dropped() {
        let inside = PixelPoint(50.0, 50.0);
        assert_eq!(clip_segment(inside, PixelPoint(50.0, f64::INFINITY), 100.0, 100.0), None);
        assert_eq!(clip_segment(PixelPoint(f64::NAN, 0.0), inside, 100.0, 100.0), None);
    }
}
