use crate::tools::ToolController;
use egui::{Context, TextureHandle, TextureId, TextureOptions};

/// Keeps the GPU copy of the canvas in step with the raster
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    uploads: u64,
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-uploads the canvas if the controller asked for a redraw and returns
    /// the texture to paint
    pub fn sync(&mut self, ctx: &Context, controller: &mut ToolController) -> TextureId {
        let dirty = controller.take_redraw_request();

        let id = match self.handle.as_mut() {
            Some(handle) => {
                if dirty {
                    handle.set(controller.canvas().to_color_image(), TextureOptions::NEAREST);
                    self.uploads += 1;
                    log::trace!("Canvas texture upload #{}", self.uploads);
                }
                handle.id()
            }
            None => {
                let handle = ctx.load_texture(
                    "journal_canvas",
                    controller.canvas().to_color_image(),
                    TextureOptions::NEAREST,
                );
                let id = handle.id();
                self.handle = Some(handle);
                self.uploads += 1;
                id
            }
        };

        if dirty {
            ctx.request_repaint();
        }
        id
    }

    #[cfg(test)]
    fn uploads(&self) -> u64 {
        self.uploads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RasterSurface;

    #[test]
    fn test_uploads_only_when_dirty() {
        let ctx = Context::default();
        let mut controller = ToolController::new(RasterSurface::new(16, 16));
        let mut texture = CanvasTexture::new();

        let first = texture.sync(&ctx, &mut controller);
        assert_eq!(texture.uploads(), 1);

        let second = texture.sync(&ctx, &mut controller);
        assert_eq!(first, second);
        assert_eq!(texture.uploads(), 1);

        controller.new_canvas();
        texture.sync(&ctx, &mut controller);
        assert_eq!(texture.uploads(), 2);
    }
}
