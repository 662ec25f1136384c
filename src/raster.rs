use crate::flood_fill::{self, FillReport};
use crate::geometry::{ClosedCurve, ShapeOutline};
use egui::{Color32, ColorImage, Pos2, Rect};
use image::{Rgba, RgbaImage};

pub const CANVAS_WIDTH: u32 = 700;
pub const CANVAS_HEIGHT: u32 = 500;

/// Color every pixel starts with, and the color the eraser paints
pub const BACKGROUND: Color32 = Color32::WHITE;

/// Fixed-size RGBA pixel buffer that every drawing tool paints into.
///
/// Pixel `(i, j)` covers the cell `[i, i+1) x [j, j+1)` and is tested at its
/// center. Anything that falls outside the buffer is clipped per pixel.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

impl RasterSurface {
    /// Creates a surface filled with the background color
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, to_rgba(BACKGROUND)),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width() as usize, self.height() as usize]
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color32> {
        self.contains(x, y).then(|| {
            let [r, g, b, a] = self.image.get_pixel(x as u32, y as u32).0;
            Color32::from_rgba_unmultiplied(r, g, b, a)
        })
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color32) {
        if self.contains(x, y) {
            self.image.put_pixel(x as u32, y as u32, to_rgba(color));
        }
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    /// Draws a round-capped segment `width` pixels thick
    pub fn stroke_line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        let radius = width / 2.0;
        if radius <= 0.0 {
            return;
        }
        let rgba = to_rgba(color);
        let bounds = Rect::from_two_pos(from, to).expand(radius);

        self.for_each_pixel_in(bounds, |image, x, y, center| {
            if distance_sq_to_segment(center, from, to) <= radius * radius {
                image.put_pixel(x, y, rgba);
            }
        });
    }

    /// Fills a polygon using the even-odd rule
    pub fn fill_polygon(&mut self, points: &[Pos2], color: Color32) {
        if points.len() < 3 {
            return;
        }
        let rgba = to_rgba(color);
        let bounds = Rect::from_points(points);
        let (Some((_, min_y)), Some((_, max_y))) = (
            self.clip_pixel(bounds.min),
            self.clip_pixel(bounds.max),
        ) else {
            return;
        };

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
        for y in min_y..=max_y {
            crossings.clear();
            let scan = y as f32 + 0.5;

            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if (a.y <= scan && b.y > scan) || (b.y <= scan && a.y > scan) {
                    crossings.push(a.x + (scan - a.y) / (b.y - a.y) * (b.x - a.x));
                }
            }

            crossings.sort_by(|a, b| a.total_cmp(b));
            for span in crossings.chunks_exact(2) {
                // Pixels whose centers fall in [span[0], span[1])
                let start = ((span[0] - 0.5).ceil() as i64).max(0);
                let end = ((span[1] - 0.5).ceil() as i64).min(self.width() as i64);
                for x in start..end {
                    self.image.put_pixel(x as u32, y, rgba);
                }
            }
        }
    }

    /// Fills the region enclosed by a closed cubic path
    pub fn fill_closed_curve(&mut self, curve: &ClosedCurve, color: Color32) {
        self.fill_polygon(&curve.flatten(), color);
    }

    /// Fills the axis-aligned ellipse inscribed in the `width` x `height` box around `center`
    pub fn fill_ellipse(&mut self, center: Pos2, width: f32, height: f32, color: Color32) {
        let (rx, ry) = (width / 2.0, height / 2.0);
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let rgba = to_rgba(color);
        let bounds = Rect::from_center_size(center, egui::vec2(width, height));

        self.for_each_pixel_in(bounds, |image, x, y, p| {
            let dx = (p.x - center.x) / rx;
            let dy = (p.y - center.y) / ry;
            if dx * dx + dy * dy <= 1.0 {
                image.put_pixel(x, y, rgba);
            }
        });
    }

    /// Fills any stamp outline
    pub fn fill_shape(&mut self, outline: &ShapeOutline, color: Color32) {
        match outline {
            ShapeOutline::Polygon(points) => self.fill_polygon(points, color),
            ShapeOutline::ClosedCurve(curve) => self.fill_closed_curve(curve, color),
            ShapeOutline::Ellipse { center, size } => {
                self.fill_ellipse(*center, size.x, size.y, color)
            }
        }
    }

    /// Recolors the 4-connected same-colored region under `seed`
    pub fn flood_fill(&mut self, seed: Pos2, color: Color32) -> FillReport {
        flood_fill::flood_fill(
            &mut self.image,
            seed.x.floor() as i32,
            seed.y.floor() as i32,
            to_rgba(color),
        )
    }

    /// Paints every pixel with `color`. Dimensions are unchanged.
    pub fn clear(&mut self, color: Color32) {
        let rgba = to_rgba(color);
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Copy of the current pixel buffer
    pub fn snapshot(&self) -> RgbaImage {
        self.image.clone()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Converts the buffer for upload as an egui texture
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(self.size(), self.image.as_raw())
    }

    /// Maps a point to the pixel under it, clamped to the buffer
    fn clip_pixel(&self, p: Pos2) -> Option<(u32, u32)> {
        if self.width() == 0 || self.height() == 0 {
            return None;
        }
        let x = (p.x.floor() as i64).clamp(0, self.width() as i64 - 1);
        let y = (p.y.floor() as i64).clamp(0, self.height() as i64 - 1);
        Some((x as u32, y as u32))
    }

    /// Visits every in-bounds pixel touching `bounds`, passing its center
    fn for_each_pixel_in(
        &mut self,
        bounds: Rect,
        mut visit: impl FnMut(&mut RgbaImage, u32, u32, Pos2),
    ) {
        let canvas = Rect::from_min_size(
            Pos2::ZERO,
            egui::vec2(self.width() as f32, self.height() as f32),
        );
        if !bounds.intersects(canvas) {
            return;
        }
        let (Some((min_x, min_y)), Some((max_x, max_y))) =
            (self.clip_pixel(bounds.min), self.clip_pixel(bounds.max))
        else {
            return;
        };

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let center = egui::pos2(x as f32 + 0.5, y as f32 + 0.5);
                visit(&mut self.image, x, y, center);
            }
        }
    }
}

pub(crate) fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

fn distance_sq_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return p.distance_sq(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance_sq(a + ab * t)
}
