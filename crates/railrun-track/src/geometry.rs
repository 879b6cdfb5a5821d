//! Arc-length parameterized track geometry.

use glam::DVec3;
use railrun_errors::{ConfigError, ConfigResult};

use crate::MIN_TRACK_LENGTH;
use crate::spline::{HermiteSegment, build_segments};

/// Arc-length table resolution per spline span.
const SAMPLES_PER_SEGMENT: usize = 64;

/// Consecutive control points closer than this are merged.
const DUPLICATE_POINT_EPSILON: f64 = 1e-6;

/// Golden-section refinement iterations for closest-point search.
const REFINE_ITERATIONS: usize = 64;

/// Immutable track curve queried by distance travelled.
///
/// Built once per level from ordered control points. The spline is a
/// centripetal Catmull-Rom curve; a cumulative length table built at
/// construction maps distance to curve parameter so equal distance steps cover
/// equal path length.
///
/// # Example
///
/// ```
/// use glam::DVec3;
/// use railrun_track::TrackGeometry;
///
/// let track = TrackGeometry::new(
///     vec![
///         DVec3::new(0.0, 0.0, 0.0),
///         DVec3::new(50.0, 0.0, 0.0),
///         DVec3::new(100.0, 0.0, 20.0),
///     ],
///     false,
/// )?;
///
/// // Open tracks clamp out-of-range distances.
/// let end = track.position_at_distance(1.0e6);
/// assert!((end - DVec3::new(100.0, 0.0, 20.0)).length() < 1e-6);
/// # Ok::<(), railrun_errors::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TrackGeometry {
    /// Control points as supplied, in path order
    control_points: Vec<DVec3>,

    /// Spline spans between consecutive (merged) control points
    segments: Vec<HermiteSegment>,

    /// Cumulative length at each table sample, first entry 0
    lengths: Vec<f64>,

    /// Curve position at each table sample
    samples: Vec<DVec3>,

    /// Cached total arc length
    total_length: f64,

    /// Whether distance wraps around
    closed: bool,
}

impl TrackGeometry {
    /// Minimum number of control points.
    pub const MIN_POINTS: usize = 2;

    /// Build a track from control points.
    ///
    /// Consecutive duplicate points are merged before the spline is built. A
    /// track whose points all coincide is accepted and has zero length.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooFewPoints`] for fewer than two points and
    /// [`ConfigError::NonFinitePoint`] if any coordinate is NaN or infinite.
    pub fn new(control_points: Vec<DVec3>, closed: bool) -> ConfigResult<Self> {
        if control_points.len() < Self::MIN_POINTS {
            return Err(ConfigError::TooFewPoints {
                actual: control_points.len(),
                min: Self::MIN_POINTS,
            });
        }
        if let Some(index) = control_points.iter().position(|p| !p.is_finite()) {
            return Err(ConfigError::NonFinitePoint { index });
        }

        let mut spline_points: Vec<DVec3> = Vec::with_capacity(control_points.len());
        for &p in &control_points {
            match spline_points.last() {
                Some(last) if last.distance(p) < DUPLICATE_POINT_EPSILON => {}
                _ => spline_points.push(p),
            }
        }
        if closed && spline_points.len() > 2 {
            if let (Some(first), Some(last)) = (spline_points.first(), spline_points.last()) {
                if first.distance(*last) < DUPLICATE_POINT_EPSILON {
                    spline_points.pop();
                }
            }
        }

        let segments = build_segments(&spline_points, closed);
        let (lengths, samples) = Self::build_length_table(&segments);
        let total_length = lengths.last().copied().unwrap_or(0.0);

        Ok(Self {
            control_points,
            segments,
            lengths,
            samples,
            total_length,
            closed,
        })
    }

    fn build_length_table(segments: &[HermiteSegment]) -> (Vec<f64>, Vec<DVec3>) {
        let Some(first) = segments.first() else {
            return (vec![0.0], Vec::new());
        };

        let count = segments.len() * SAMPLES_PER_SEGMENT;
        let mut lengths = Vec::with_capacity(count + 1);
        let mut samples = Vec::with_capacity(count + 1);

        let mut previous = first.start();
        let mut total = 0.0;
        lengths.push(0.0);
        samples.push(previous);

        for segment in segments {
            for j in 1..=SAMPLES_PER_SEGMENT {
                let point = segment.point(j as f64 / SAMPLES_PER_SEGMENT as f64);
                total += previous.distance(point);
                lengths.push(total);
                samples.push(point);
                previous = point;
            }
        }

        (lengths, samples)
    }

    /// Total arc length in metres.
    #[inline]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Whether the track is a closed loop.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Control points as supplied at construction.
    #[inline]
    pub fn control_points(&self) -> &[DVec3] {
        &self.control_points
    }

    /// Clamp (open) or wrap (closed) a distance onto the track.
    pub fn resolve_distance(&self, distance: f64) -> f64 {
        if self.total_length < MIN_TRACK_LENGTH || !distance.is_finite() {
            return 0.0;
        }
        if self.closed {
            distance.rem_euclid(self.total_length)
        } else {
            distance.clamp(0.0, self.total_length)
        }
    }

    /// Normalized parameter `distance / total_length` in `[0, 1]`.
    ///
    /// Zero-length tracks resolve to 0.
    pub fn normalized_parameter(&self, distance: f64) -> f64 {
        if self.total_length < MIN_TRACK_LENGTH {
            return 0.0;
        }
        (self.resolve_distance(distance) / self.total_length).clamp(0.0, 1.0)
    }

    /// World position at `distance` along the track.
    pub fn position_at_distance(&self, distance: f64) -> DVec3 {
        match self.locate(distance) {
            Some((segment, t)) => segment.point(t),
            None => self.control_points.first().copied().unwrap_or(DVec3::ZERO),
        }
    }

    /// Unit tangent (direction of travel) at `distance`.
    ///
    /// Falls back to the span chord, then to `+X`, where the spline
    /// derivative vanishes.
    pub fn tangent_at_distance(&self, distance: f64) -> DVec3 {
        let Some((segment, t)) = self.locate(distance) else {
            return DVec3::X;
        };
        segment
            .derivative(t)
            .try_normalize()
            .or_else(|| (segment.end() - segment.start()).try_normalize())
            .unwrap_or(DVec3::X)
    }

    /// Distance along the track of the point closest to `position`.
    ///
    /// Coarse scan over the arc-length table followed by golden-section
    /// refinement between the neighbouring samples.
    pub fn distance_at_position(&self, position: DVec3) -> f64 {
        if self.total_length < MIN_TRACK_LENGTH {
            return 0.0;
        }

        let mut best = 0usize;
        let mut best_dist = f64::INFINITY;
        for (i, sample) in self.samples.iter().enumerate() {
            let d = sample.distance_squared(position);
            if d < best_dist {
                best_dist = d;
                best = i;
            }
        }

        let lo = best
            .checked_sub(1)
            .and_then(|i| self.lengths.get(i))
            .copied()
            .unwrap_or(0.0);
        let hi = self
            .lengths
            .get(best + 1)
            .copied()
            .unwrap_or(self.total_length);

        let cost = |d: f64| self.position_at_distance(d).distance_squared(position);
        let found = golden_section_min(lo, hi, cost);
        self.resolve_distance(found)
    }

    /// Evenly spaced points ahead of `start`, for path previews.
    ///
    /// Open tracks stop at the end of the track, so fewer than `count` points
    /// may be returned.
    pub fn preview_points(&self, start: f64, spacing: f64, count: usize) -> Vec<DVec3> {
        let spacing = if spacing.is_finite() { spacing.max(0.0) } else { 0.0 };
        let start = self.resolve_distance(start);
        let mut points = Vec::with_capacity(count);
        for i in 0..count {
            let d = start + spacing * i as f64;
            if !self.closed && d > self.total_length + MIN_TRACK_LENGTH {
                break;
            }
            points.push(self.position_at_distance(d));
        }
        points
    }

    /// Map a distance to a span and its local parameter.
    fn locate(&self, distance: f64) -> Option<(&HermiteSegment, f64)> {
        let span_count = self.segments.len();
        if span_count == 0 {
            return None;
        }

        let u = self.parameter_at_distance(distance);
        let scaled = u * span_count as f64;
        let index = (scaled.floor().max(0.0) as usize).min(span_count - 1);
        let local = (scaled - index as f64).clamp(0.0, 1.0);
        self.segments.get(index).map(|segment| (segment, local))
    }

    /// Invert the arc-length table: distance to global spline parameter.
    fn parameter_at_distance(&self, distance: f64) -> f64 {
        let u = self.normalized_parameter(distance);
        if u <= 0.0 {
            return 0.0;
        }

        let target = u * self.total_length;
        let intervals = self.lengths.len().saturating_sub(1);
        if intervals == 0 {
            return 0.0;
        }

        let upper = self
            .lengths
            .partition_point(|&l| l < target)
            .clamp(1, intervals);
        let lower = upper - 1;
        let l0 = self.lengths.get(lower).copied().unwrap_or(0.0);
        let l1 = self.lengths.get(upper).copied().unwrap_or(l0);
        let span = l1 - l0;
        let frac = if span > MIN_TRACK_LENGTH {
            ((target - l0) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };

        ((lower as f64 + frac) / intervals as f64).clamp(0.0, 1.0)
    }
}

/// Minimize a unimodal function on `[lo, hi]`.
fn golden_section_min<F>(mut lo: f64, mut hi: f64, f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    const INV_PHI: f64 = 0.618_033_988_749_894_8;

    if hi < lo {
        std::mem::swap(&mut lo, &mut hi);
    }
    let mut a = hi - INV_PHI * (hi - lo);
    let mut b = lo + INV_PHI * (hi - lo);
    let mut fa = f(a);
    let mut fb = f(b);

    for _ in 0..REFINE_ITERATIONS {
        if fa < fb {
            hi = b;
            b = a;
            fb = fa;
            a = hi - INV_PHI * (hi - lo);
            fa = f(a);
        } else {
            lo = a;
            a = b;
            fa = fb;
            b = lo + INV_PHI * (hi - lo);
            fb = f(b);
        }
    }

    (lo + hi) * 0.5
}
