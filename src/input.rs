use crate::tools::ToolController;
use egui::{Context, Pos2, Rect, Response};

/// Pointer events in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Primary button pressed over the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved over the canvas with the primary button held
    PointerDrag { pos: Pos2 },
    /// Primary button released, anywhere
    PointerUp,
}

impl CanvasEvent {
    /// Forwards the event to the tool controller
    pub fn dispatch(self, controller: &mut ToolController) {
        match self {
            Self::PointerDown { pos } => controller.on_pointer_down(pos),
            Self::PointerDrag { pos } => controller.on_pointer_drag(pos),
            Self::PointerUp => controller.on_pointer_up(),
        }
    }
}

/// Converts raw egui pointer input into [`CanvasEvent`]s
#[derive(Debug)]
pub struct CanvasInput {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
    pressed_on_canvas: bool,
}

impl CanvasInput {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
            pressed_on_canvas: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_in_canvas(&self, pos: Pos2) -> bool {
        self.canvas_rect.contains(pos)
    }

    /// Screen position to canvas-local position
    pub fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process this frame's pointer state for the canvas widget `canvas`
    /// and generate canvas events
    pub fn process_input(&mut self, ctx: &Context, canvas: &Response) -> Vec<CanvasEvent> {
        self.set_canvas_rect(canvas.rect);
        let (pressed, down, released, pos) = ctx.input(|input| {
            (
                input.pointer.primary_pressed(),
                input.pointer.primary_down(),
                input.pointer.primary_released(),
                input.pointer.interact_pos(),
            )
        });
        // Pointer over a window or popup above the canvas
        let pos = pos.filter(|_| canvas.contains_pointer());
        self.process_pointer(pressed, down, released, pos)
    }

    /// Pointer state machine, separate from egui so it can be driven directly
    pub fn process_pointer(
        &mut self,
        pressed: bool,
        down: bool,
        released: bool,
        pos: Option<Pos2>,
    ) -> Vec<CanvasEvent> {
        let mut events = Vec::new();

        if pressed {
            if let Some(pos) = pos.filter(|p| self.is_in_canvas(*p)) {
                events.push(CanvasEvent::PointerDown {
                    pos: self.to_canvas(pos),
                });
                self.pressed_on_canvas = true;
                self.last_pointer_pos = Some(pos);
            }
        } else if down && self.pressed_on_canvas {
            if let Some(pos) = pos {
                if Some(pos) != self.last_pointer_pos && self.is_in_canvas(pos) {
                    events.push(CanvasEvent::PointerDrag {
                        pos: self.to_canvas(pos),
                    });
                    self.last_pointer_pos = Some(pos);
                }
            }
        }

        if released && self.pressed_on_canvas {
            events.push(CanvasEvent::PointerUp);
            self.pressed_on_canvas = false;
            self.last_pointer_pos = None;
        }

        events
    }
}
