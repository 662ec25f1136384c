use egui::Pos2;

/// Tracks the last pointer position of an in-progress pen or eraser stroke.
///
/// Lives from pointer-down to pointer-up; each drag step draws from the
/// previous position to the new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSession {
    last: Pos2,
}

impl StrokeSession {
    pub fn new(start: Pos2) -> Self {
        Self { last: start }
    }

    /// Moves to `pos`, returning the segment to draw
    pub fn advance(&mut self, pos: Pos2) -> (Pos2, Pos2) {
        let from = std::mem::replace(&mut self.last, pos);
        (from, pos)
    }
}
