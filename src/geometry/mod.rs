pub mod shapes;

pub use shapes::{ClosedCurve, CubicSegment, ShapeKind, ShapeOutline};
