//! Centripetal Catmull-Rom segments.
//!
//! Each span between two control points is converted once into a cubic
//! Hermite polynomial `c0 + c1 t + c2 t² + c3 t³` over `t ∈ [0, 1]`. Knot
//! intervals follow the centripetal rule (square root of the chord length),
//! which keeps the curve from overshooting or looping when control points
//! are unevenly spaced.

use glam::DVec3;

/// Knot intervals shorter than this are replaced by a neighbouring interval.
const MIN_KNOT_INTERVAL: f64 = 1e-4;

/// One cubic span of the track spline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HermiteSegment {
    c0: DVec3,
    c1: DVec3,
    c2: DVec3,
    c3: DVec3,
}

impl HermiteSegment {
    /// Build the span from `p1` to `p2` with neighbours `p0` and `p3`.
    pub fn centripetal(p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3) -> Self {
        let mut dt0 = p0.distance_squared(p1).powf(0.25);
        let mut dt1 = p1.distance_squared(p2).powf(0.25);
        let mut dt2 = p2.distance_squared(p3).powf(0.25);

        if dt1 < MIN_KNOT_INTERVAL {
            dt1 = 1.0;
        }
        if dt0 < MIN_KNOT_INTERVAL {
            dt0 = dt1;
        }
        if dt2 < MIN_KNOT_INTERVAL {
            dt2 = dt1;
        }

        // Tangents of the non-uniform spline, rescaled to the [0, 1] span.
        let m1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
        let m2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;

        Self::hermite(p1, p2, m1, m2)
    }

    /// Cubic Hermite span from `start` to `end` with end tangents `m_start`, `m_end`.
    pub fn hermite(start: DVec3, end: DVec3, m_start: DVec3, m_end: DVec3) -> Self {
        Self {
            c0: start,
            c1: m_start,
            c2: -3.0 * start + 3.0 * end - 2.0 * m_start - m_end,
            c3: 2.0 * start - 2.0 * end + m_start + m_end,
        }
    }

    /// Point at local parameter `t` (clamped to `[0, 1]`).
    #[inline]
    pub fn point(&self, t: f64) -> DVec3 {
        let t = t.clamp(0.0, 1.0);
        ((self.c3 * t + self.c2) * t + self.c1) * t + self.c0
    }

    /// Derivative with respect to the local parameter at `t`.
    #[inline]
    pub fn derivative(&self, t: f64) -> DVec3 {
        let t = t.clamp(0.0, 1.0);
        (self.c3 * (3.0 * t) + self.c2 * 2.0) * t + self.c1
    }

    /// Start point of the span.
    #[inline]
    pub fn start(&self) -> DVec3 {
        self.c0
    }

    /// End point of the span.
    #[inline]
    pub fn end(&self) -> DVec3 {
        self.c0 + self.c1 + self.c2 + self.c3
    }
}

/// Build the spans for an ordered point list.
///
/// Open curves get reflected phantom end points; closed curves wrap around,
/// adding a span from the last point back to the first.
pub(crate) fn build_segments(points: &[DVec3], closed: bool) -> Vec<HermiteSegment> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let at = |i: isize| -> DVec3 {
        if closed {
            let idx = i.rem_euclid(n as isize) as usize;
            points.get(idx).copied().unwrap_or(DVec3::ZERO)
        } else if i < 0 {
            let first = points.first().copied().unwrap_or(DVec3::ZERO);
            let second = points.get(1).copied().unwrap_or(first);
            2.0 * first - second
        } else if i as usize >= n {
            let last = points.last().copied().unwrap_or(DVec3::ZERO);
            let before = points.get(n - 2).copied().unwrap_or(last);
            2.0 * last - before
        } else {
            points.get(i as usize).copied().unwrap_or(DVec3::ZERO)
        }
    };

    let spans = if closed { n } else { n - 1 };
    (0..spans as isize)
        .map(|i| HermiteSegment::centripetal(at(i - 1), at(i), at(i + 1), at(i + 2)))
        .collect()
}
