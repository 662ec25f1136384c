use egui::{Pos2, Rect, Vec2, pos2, vec2};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};

/// Shapes that can be stamped onto the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Heart,
    Star,
    Oval,
}

/// One cubic Bézier segment, starting wherever the previous one ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub ctrl1: Pos2,
    pub ctrl2: Pos2,
    pub end: Pos2,
}

/// A closed path made of cubic segments
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedCurve {
    pub start: Pos2,
    pub segments: Vec<CubicSegment>,
}

impl ClosedCurve {
    /// Line segments per cubic when flattening. Fixed so stamps are reproducible.
    pub const FLATTEN_STEPS: usize = 32;

    pub fn new(start: Pos2) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    pub fn curve_to(mut self, ctrl1: Pos2, ctrl2: Pos2, end: Pos2) -> Self {
        self.segments.push(CubicSegment { ctrl1, ctrl2, end });
        self
    }

    /// Approximate the curve with a polygon. The closing point is not repeated.
    pub fn flatten(&self) -> Vec<Pos2> {
        let mut points = Vec::with_capacity(1 + self.segments.len() * Self::FLATTEN_STEPS);
        points.push(self.start);

        let mut from = self.start;
        for segment in &self.segments {
            for step in 1..=Self::FLATTEN_STEPS {
                let t = step as f32 / Self::FLATTEN_STEPS as f32;
                points.push(cubic_point(from, segment, t));
            }
            from = segment.end;
        }

        if points.len() > 1 && points.last() == Some(&self.start) {
            points.pop();
        }
        points
    }
}

fn cubic_point(p0: Pos2, segment: &CubicSegment, t: f32) -> Pos2 {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    pos2(
        a * p0.x + b * segment.ctrl1.x + c * segment.ctrl2.x + d * segment.end.x,
        a * p0.y + b * segment.ctrl1.y + c * segment.ctrl2.y + d * segment.end.y,
    )
}

/// Filled region produced for a stamp. The raster decides which pixels it covers.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeOutline {
    Polygon(Vec<Pos2>),
    ClosedCurve(ClosedCurve),
    Ellipse { center: Pos2, size: Vec2 },
}

impl ShapeOutline {
    pub fn bounding_rect(&self) -> Rect {
        match self {
            Self::Polygon(points) => Rect::from_points(points),
            Self::ClosedCurve(curve) => Rect::from_points(&curve.flatten()),
            Self::Ellipse { center, size } => Rect::from_center_size(*center, *size),
        }
    }
}

/// Outline for `kind` centered near `center` with the given size
pub fn outline(kind: ShapeKind, center: Pos2, size: f32) -> ShapeOutline {
    match kind {
        ShapeKind::Heart => ShapeOutline::ClosedCurve(heart(center, size)),
        ShapeKind::Star => ShapeOutline::Polygon(star(center, size)),
        ShapeKind::Oval => oval(center, size),
    }
}

/// Heart built from two mirrored cubics on a 32-unit base shape.
/// The notch sits just below `center`, the tip `28 * size / 32` below it.
pub fn heart(center: Pos2, size: f32) -> ClosedCurve {
    let k = size / 32.0;
    let at = |dx: f32, dy: f32| pos2(center.x + dx * k, center.y + dy * k);

    ClosedCurve::new(at(0.0, 8.0))
        .curve_to(at(16.0, -16.0), at(32.0, 8.0), at(0.0, 28.0))
        .curve_to(at(-32.0, 8.0), at(-16.0, -16.0), at(0.0, 8.0))
}

/// Five-pointed star: ten vertices alternating between radius `size / 2`
/// and `size / 4`, the first one pointing straight up.
pub fn star(center: Pos2, size: f32) -> Vec<Pos2> {
    let outer = size / 2.0;
    let inner = size / 4.0;

    (0..10)
        .map(|i| {
            let angle = FRAC_PI_2 + i as f32 * PI / 5.0;
            let radius = if i % 2 == 0 { outer } else { inner };
            // Screen y grows downwards
            pos2(center.x + angle.cos() * radius, center.y - angle.sin() * radius)
        })
        .collect()
}

/// Axis-aligned oval, 20 pixels wider than it is tall
pub fn oval(center: Pos2, size: f32) -> ShapeOutline {
    ShapeOutline::Ellipse {
        center,
        size: vec2(size + 20.0, size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_radii_alternate() {
        let center = pos2(100.0, 80.0);
        let points = star(center, 36.0);
        assert_eq!(points.len(), 10);

        for (i, p) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { 18.0 } else { 9.0 };
            assert!((p.distance(center) - expected).abs() < 1e-3, "vertex {} at {:?}", i, p);
        }
    }

    #[test]
    fn test_star_points_up() {
        let points = star(pos2(50.0, 50.0), 40.0);
        assert!((points[0].x - 50.0).abs() < 1e-4);
        assert!((points[0].y - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_oval_bounds() {
        let rect = oval(pos2(60.0, 40.0), 36.0).bounding_rect();
        assert_eq!(rect.width(), 56.0);
        assert_eq!(rect.height(), 36.0);
        assert_eq!(rect.center(), pos2(60.0, 40.0));
    }

    #[test]
    fn test_heart_scales_with_size() {
        let small = heart(pos2(0.0, 0.0), 32.0);
        assert_eq!(small.start, pos2(0.0, 8.0));
        assert_eq!(small.segments.len(), 2);
        assert_eq!(small.segments[0].end, pos2(0.0, 28.0));

        let large = heart(pos2(0.0, 0.0), 64.0);
        assert_eq!(large.segments[0].end, pos2(0.0, 56.0));
    }

    #[test]
    fn test_heart_flatten_is_closed_and_symmetric() {
        let curve = heart(pos2(100.0, 100.0), 36.0);
        let points = curve.flatten();
        assert_eq!(points.len(), 2 * ClosedCurve::FLATTEN_STEPS);

        let bounds = Rect::from_points(&points);
        assert!((bounds.center().x - 100.0).abs() < 0.01);
        assert!(bounds.max.y > 100.0);
    }

    #[test]
    fn test_outline_is_deterministic() {
        let a = outline(ShapeKind::Heart, pos2(10.0, 20.0), 48.0);
        let b = outline(ShapeKind::Heart, pos2(10.0, 20.0), 48.0);
        assert_eq!(a, b);
    }
}
