//! Connector placement between adjacent spokes.
//!
//! For a ring radius `r` every spoke line carries two candidate points at
//! distance `r` from the hub, one on each side. Joining two spokes gives
//! four candidate strokes; only the pairing whose strokes stay short is
//! drawn, which keeps connectors from cutting diagonally across the web.

use crate::basics::Point;
use crate::error::Result;
use crate::math::{point_distance, points_coincide};
use crate::segment::Segment;
use crate::spokes::Spoke;
use crate::trans_center::CenterTransform;

// ============================================================================
// Offset points
// ============================================================================

/// The two points on a spoke's line at a given distance from the hub,
/// in canvas coordinates.
///
/// In the centered frame `negative == -positive`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetPoints {
    pub positive: Point,
    pub negative: Point,
}

// ============================================================================
// Connector
// ============================================================================

/// One straight stroke between two adjacent spokes, before curving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub start: Point,
    pub end: Point,
}

impl Connector {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        point_distance(self.start, self.end)
    }

    /// True when both ends land on the same point (a spoke joined to itself).
    pub fn is_degenerate(&self) -> bool {
        points_coincide(self.start, self.end)
    }

    /// Promote to a `Segment`; fails on vertical connectors.
    pub fn to_segment(&self) -> Result<Segment> {
        Segment::new(self.start, self.end)
    }
}

/// Which of the two candidate pairings was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    /// `(A+, B+)` and `(A-, B-)`.
    Matched,
    /// `(A+, B-)` and `(A-, B+)`.
    Crossed,
}

/// The connectors drawn for one spoke pair at one radius, plus the pairing
/// that lost the tie-break.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorPair {
    pub pairing: Pairing,
    pub chosen: [Connector; 2],
    pub rejected: [Connector; 2],
}

// ============================================================================
// ConnectorGeometry
// ============================================================================

/// Computes offset points and connector pairings in a fixed canvas frame.
#[derive(Debug, Clone, Copy)]
pub struct ConnectorGeometry {
    transform: CenterTransform,
}

impl ConnectorGeometry {
    pub fn new(transform: CenterTransform) -> Self {
        Self { transform }
    }

    pub fn transform(&self) -> &CenterTransform {
        &self.transform
    }

    /// Points at distance `radius` from the hub along `line`.
    ///
    /// The line is rebuilt in the centered frame, then
    /// `x = sqrt(r² / (1 + slope²))`, `y = x * slope` gives the positive
    /// side and its negation the other.
    pub fn offset_points(&self, line: &Segment, radius: f64) -> Result<OffsetPoints> {
        let centered = self.transform.segment_to_centered(line)?;
        let slope = centered.slope();
        let x_offset = ((radius * radius) / (1.0 + slope * slope)).sqrt();
        let y_offset = x_offset * slope;
        Ok(OffsetPoints {
            positive: self.transform.to_canvas(Point::new(x_offset, y_offset)),
            negative: self.transform.to_canvas(Point::new(-x_offset, -y_offset)),
        })
    }

    /// Pick the short pairing between spokes `a` and `b` at `radius`.
    ///
    /// Compares `|A+ B+|` against `|A+ B-|`; the strictly shorter one wins,
    /// ties go to the crossed pairing. Lengths are compared on raw points so
    /// a spoke paired with itself never needs a slope.
    pub fn connect(&self, a: &Spoke, b: &Spoke, radius: f64) -> Result<ConnectorPair> {
        let pa = self.offset_points(&a.segment, radius)?;
        let pb = self.offset_points(&b.segment, radius)?;

        let matched = [
            Connector::new(pa.positive, pb.positive),
            Connector::new(pa.negative, pb.negative),
        ];
        let crossed = [
            Connector::new(pa.positive, pb.negative),
            Connector::new(pa.negative, pb.positive),
        ];

        Ok(if matched[0].length() < crossed[0].length() {
            ConnectorPair {
                pairing: Pairing::Matched,
                chosen: matched,
                rejected: crossed,
            }
        } else {
            ConnectorPair {
                pairing: Pairing::Crossed,
                chosen: crossed,
                rejected: matched,
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
