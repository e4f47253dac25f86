//! Bowed connector curves.
//!
//! A straight connector `A → C` is drawn as a quadratic Bezier through a
//! control point `B` pushed sideways from the midpoint. The push is
//! proportional to the connector length, slightly randomized, and its sign
//! depends only on which half of the canvas the midpoint sits in, so every
//! strand on one side of the web sags the same way.
//!
//! [`WebCurve`] flattens the Bezier with a fixed number of uniform
//! parameter steps and streams the result as a `VertexSource`.

use crate::basics::{Point, VertexSource, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP};
use crate::config::WebConfig;
use crate::random::RandomSource;
use crate::segment::Segment;
use crate::trans_center::CenterTransform;

/// Added to the random draw so the bow never drops below 1.5 units.
pub const BOW_FLOOR: f64 = 1.5;

// ============================================================================
// WebCurve
// ============================================================================

/// Uniformly sampled quadratic Bezier from `start` through `control` to
/// `end`.
///
/// Emits `num_steps` vertices: a move_to at `start`, then line_to's, the
/// last of which is exactly `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebCurve {
    start: Point,
    control: Point,
    end: Point,
    num_steps: usize,
    step: usize,
}

impl WebCurve {
    /// `num_steps` is clamped to at least 2 so both endpoints are emitted.
    pub fn new(start: Point, control: Point, end: Point, num_steps: usize) -> Self {
        Self {
            start,
            control,
            end,
            num_steps: num_steps.max(2),
            step: 0,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn control(&self) -> Point {
        self.control
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// De Casteljau evaluation at `t`. Exact at `t == 0` and `t == 1`.
    pub fn point_at(&self, t: f64) -> Point {
        let p1 = self.start.lerp(self.control, t);
        let p2 = self.control.lerp(self.end, t);
        p1.lerp(p2, t)
    }

    /// All sampled points, start to end.
    pub fn points(&self) -> Vec<Point> {
        (0..self.num_steps).map(|i| self.point_at(self.t(i))).collect()
    }

    #[inline]
    fn t(&self, i: usize) -> f64 {
        i as f64 / (self.num_steps - 1) as f64
    }
}

impl VertexSource for WebCurve {
    fn rewind(&mut self, _path_id: u32) {
        self.step = 0;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if self.step >= self.num_steps {
            return PATH_CMD_STOP;
        }
        let p = self.point_at(self.t(self.step));
        *x = p.x;
        *y = p.y;
        let cmd = if self.step == 0 {
            PATH_CMD_MOVE_TO
        } else {
            PATH_CMD_LINE_TO
        };
        self.step += 1;
        cmd
    }
}

// ============================================================================
// CurveApproximator
// ============================================================================

/// Turns straight connectors into bowed `WebCurve`s.
#[derive(Debug, Clone, Copy)]
pub struct CurveApproximator {
    transform: CenterTransform,
    bow: f64,
    scale: f64,
    steps: usize,
    jitter: f64,
}

impl CurveApproximator {
    /// `bow` is the fraction of the connector length used for the push,
    /// `scale` divides it, `steps` is the number of sampled points. The
    /// random part of the push starts at full width; see
    /// [`CurveApproximator::with_jitter`].
    pub fn new(transform: CenterTransform, bow: f64, scale: f64, steps: usize) -> Self {
        Self {
            transform,
            bow,
            scale,
            steps,
            jitter: 1.0,
        }
    }

    /// Multiply the uniform draw by `jitter`; 0 makes every curve of a
    /// given length bow the same amount.
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn from_config(config: &WebConfig) -> Self {
        Self::new(
            CenterTransform::new(config.width, config.height),
            config.curve_bow,
            config.curve_scale,
            config.curve_steps,
        )
        .with_jitter(config.curve_jitter)
    }

    /// `+1` when `midpoint` lies left of the hub, `-1` otherwise.
    pub fn direction(&self, midpoint: Point) -> f64 {
        if self.transform.to_centered(midpoint).x < 0.0 {
            1.0
        } else {
            -1.0
        }
    }

    /// Signed push applied to the midpoint for a uniform draw `u`.
    pub fn offset(&self, segment: &Segment, u: f64) -> f64 {
        let direction = self.direction(segment.midpoint());
        segment.length() * self.bow * direction * (self.jitter * u + BOW_FLOOR) / self.scale
    }

    /// Control point for a given uniform draw `u`.
    ///
    /// The midpoint moves `offset` along x and follows the line through it
    /// with slope `-1 / slope`. A horizontal connector has a vertical
    /// perpendicular, so the push goes along y instead.
    pub fn control_point(&self, segment: &Segment, u: f64) -> Point {
        let mid = segment.midpoint();
        let offset = self.offset(segment, u);
        let slope = segment.slope();
        if slope == 0.0 {
            return Point::new(mid.x, mid.y + offset);
        }
        let perp = -1.0 / slope;
        let y_inter = mid.y - perp * mid.x;
        let x = mid.x + offset;
        Point::new(x, perp * x + y_inter)
    }

    /// Build the curve for `segment`, drawing one value from `rng`.
    pub fn approximate(&self, segment: &Segment, rng: &mut RandomSource) -> WebCurve {
        let control = self.control_point(segment, rng.uniform());
        WebCurve::new(segment.p1(), control, segment.p2(), self.steps)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::{is_line_to, is_move_to, is_stop};
    use crate::math::point_distance;

    fn approximator() -> CurveApproximator {
        CurveApproximator::new(CenterTransform::new(2400.0, 1714.0), 0.3, 160.0, 20)
    }

    fn drain(curve: &mut WebCurve) -> Vec<(u32, Point)> {
        let mut out = Vec::new();
        let (mut x, mut y) = (0.0, 0.0);
        curve.rewind(0);
        loop {
            let cmd = curve.vertex(&mut x, &mut y);
            if is_stop(cmd) {
                break;
            }
            out.push((cmd, Point::new(x, y)));
        }
        out
    }

    #[test]
    fn test_endpoints_exact_for_any_draw() {
        let ap = approximator();
        let mut rng = RandomSource::from_seed(1);
        let segs = [
            (Point::new(1300.5, 900.25), Point::new(1410.75, 780.125)),
            (Point::new(100.0, 100.0), Point::new(2300.0, 1600.0)),
            (Point::new(1199.9, 857.0), Point::new(1200.1, 857.3)),
            (Point::new(0.1, 0.2), Point::new(-0.3, 0.7)),
        ];
        for (a, c) in segs {
            let s = Segment::new(a, c).unwrap();
            for _ in 0..20 {
                let pts = ap.approximate(&s, &mut rng).points();
                assert_eq!(pts.len(), 20);
                assert_eq!(pts[0], a);
                assert_eq!(pts[19], c);
            }
        }
    }

    #[test]
    fn test_vertex_stream_commands() {
        let ap = approximator();
        let s = Segment::new(Point::new(1000.0, 800.0), Point::new(1100.0, 700.0)).unwrap();
        let mut curve = ap.approximate(&s, &mut RandomSource::from_seed(2));
        let verts = drain(&mut curve);
        assert_eq!(verts.len(), 20);
        assert!(is_move_to(verts[0].0));
        assert!(verts[1..].iter().all(|(cmd, _)| is_line_to(*cmd)));
        assert_eq!(verts[0].1, s.p1());
        assert_eq!(verts[19].1, s.p2());

        // rewind restarts the stream
        assert_eq!(drain(&mut curve), verts);
    }

    #[test]
    fn test_direction_by_side() {
        let ap = approximator();
        assert_eq!(ap.direction(Point::new(100.0, 500.0)), 1.0);
        assert_eq!(ap.direction(Point::new(2000.0, 500.0)), -1.0);
        assert_eq!(ap.direction(Point::new(1200.0, 500.0)), -1.0);
    }

    #[test]
    fn test_offset_magnitude_range() {
        let ap = approximator();
        let s = Segment::new(Point::new(2000.0, 500.0), Point::new(2160.0, 620.0)).unwrap();
        // length 200, right side => negative
        let lo = ap.offset(&s, 0.0);
        let hi = ap.offset(&s, 0.999_999);
        assert!((lo - (-200.0 * 0.3 * 1.5 / 160.0)).abs() < 1e-9);
        assert!(hi < lo);
        assert!(hi > -200.0 * 0.3 * 2.5 / 160.0);
    }

    #[test]
    fn test_control_point_on_perpendicular() {
        let ap = approximator();
        let s = Segment::new(Point::new(300.0, 300.0), Point::new(400.0, 350.0)).unwrap();
        let mid = s.midpoint();
        let b = ap.control_point(&s, 0.5);
        let d = b.sub(mid);
        let along = Point::new(100.0, 50.0);
        // perpendicular to A->C
        assert!((d.x * along.x + d.y * along.y).abs() < 1e-9);
        // left side pushes +x
        assert!((d.x - ap.offset(&s, 0.5)).abs() < 1e-12);
        assert!(d.x > 0.0);
    }

    #[test]
    fn test_jitter_scales_random_part() {
        let s = Segment::new(Point::new(2000.0, 500.0), Point::new(2160.0, 620.0)).unwrap();
        let flat = approximator().with_jitter(0.0);
        assert_eq!(flat.offset(&s, 0.1), flat.offset(&s, 0.9));
        assert!((flat.offset(&s, 0.9) - (-200.0 * 0.3 * 1.5 / 160.0)).abs() < 1e-9);

        let wide = approximator().with_jitter(2.0);
        assert!((wide.offset(&s, 0.25) - approximator().offset(&s, 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_from_config_carries_jitter() {
        let s = Segment::new(Point::new(300.0, 300.0), Point::new(400.0, 350.0)).unwrap();
        let mut cfg = WebConfig::default();
        assert_eq!(
            CurveApproximator::from_config(&cfg).offset(&s, 0.4),
            approximator().offset(&s, 0.4)
        );
        cfg.curve_jitter = 0.0;
        let ap = CurveApproximator::from_config(&cfg);
        assert_eq!(ap.offset(&s, 0.0), ap.offset(&s, 0.99));
    }

    #[test]
    fn test_horizontal_connector_pushes_along_y() {
        let ap = approximator();
        let s = Segment::new(Point::new(1500.0, 400.0), Point::new(1600.0, 400.0)).unwrap();
        let b = ap.control_point(&s, 0.0);
        assert_eq!(b.x, 1550.0);
        assert!((b.y - (400.0 + ap.offset(&s, 0.0))).abs() < 1e-12);
    }

    #[test]
    fn test_curve_stays_near_chord() {
        let ap = approximator();
        let s = Segment::new(Point::new(500.0, 500.0), Point::new(700.0, 450.0)).unwrap();
        let curve = ap.approximate(&s, &mut RandomSource::from_seed(3));
        let pts = curve.points();
        let max_dev = point_distance(curve.control(), s.midpoint());
        for p in pts {
            assert!(point_distance(p, s.midpoint()) <= s.length() / 2.0 + max_dev + 1e-9);
        }
    }

    #[test]
    fn test_steps_clamped() {
        let c = WebCurve::new(Point::ORIGIN, Point::new(1.0, 1.0), Point::new(2.0, 0.0), 0);
        assert_eq!(c.num_steps(), 2);
        assert_eq!(c.points(), vec![Point::ORIGIN, Point::new(2.0, 0.0)]);
    }

    #[test]
    fn test_approximate_consumes_one_draw() {
        let ap = approximator();
        let s = Segment::new(Point::new(10.0, 10.0), Point::new(20.0, 30.0)).unwrap();
        let mut a = RandomSource::from_seed(4);
        let mut b = RandomSource::from_seed(4);
        ap.approximate(&s, &mut a);
        b.uniform();
        assert_eq!(a.uniform().to_bits(), b.uniform().to_bits());
    }
}
