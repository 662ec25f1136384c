use image::{Rgba, RgbaImage};
use std::collections::VecDeque;

/// Outcome of a single flood fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillReport {
    /// Number of pixels recolored
    pub changed: usize,
}

impl FillReport {
    pub fn is_noop(&self) -> bool {
        self.changed == 0
    }
}

/// Replace the 4-connected region around `(seed_x, seed_y)` that shares the
/// seed's color with `fill`.
///
/// The seed color is compared on all four channels. A seed outside the image,
/// or a seed already painted with `fill`, leaves the image untouched.
pub fn flood_fill(image: &mut RgbaImage, seed_x: i32, seed_y: i32, fill: Rgba<u8>) -> FillReport {
    let (width, height) = image.dimensions();
    if !in_bounds(seed_x, seed_y, width, height) {
        log::debug!("Flood fill seed ({}, {}) is off the canvas", seed_x, seed_y);
        return FillReport::default();
    }

    let target = *image.get_pixel(seed_x as u32, seed_y as u32);
    if target == fill {
        return FillReport::default();
    }

    // One flag per pixel, row-major
    let mut visited = vec![false; width as usize * height as usize];
    let mut queue = VecDeque::new();
    queue.push_back((seed_x, seed_y));

    let mut report = FillReport::default();
    while let Some((x, y)) = queue.pop_front() {
        if !in_bounds(x, y, width, height) {
            continue;
        }
        let index = y as usize * width as usize + x as usize;
        if visited[index] {
            continue;
        }
        visited[index] = true;

        let pixel = image.get_pixel_mut(x as u32, y as u32);
        if *pixel != target {
            continue;
        }
        *pixel = fill;
        report.changed += 1;

        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let (nx, ny) = (x + dx, y + dy);
            if in_bounds(nx, ny, width, height) && !visited[ny as usize * width as usize + nx as usize] {
                queue.push_back((nx, ny));
            }
        }
    }

    report
}

fn in_bounds(x: i32, y: i32, width: u32, height: u32) -> bool {
    x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn test_fill_whole_blank_image() {
        let mut image = RgbaImage::from_pixel(8, 6, WHITE);
        let report = flood_fill(&mut image, 3, 2, RED);
        assert_eq!(report.changed, 48);
        assert!(image.pixels().all(|p| *p == RED));
    }

    #[test]
    fn test_same_color_is_noop() {
        let mut image = RgbaImage::from_pixel(4, 4, RED);
        let report = flood_fill(&mut image, 1, 1, RED);
        assert!(report.is_noop());
    }

    #[test]
    fn test_seed_out_of_bounds_is_noop() {
        let mut image = RgbaImage::from_pixel(4, 4, WHITE);
        assert!(flood_fill(&mut image, -1, 0, RED).is_noop());
        assert!(flood_fill(&mut image, 0, 4, RED).is_noop());
        assert!(image.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn test_vertical_wall_stops_fill() {
        let mut image = RgbaImage::from_pixel(5, 3, WHITE);
        for y in 0..3 {
            image.put_pixel(2, y, BLACK);
        }
        let report = flood_fill(&mut image, 0, 0, RED);
        assert_eq!(report.changed, 6);
        assert_eq!(*image.get_pixel(1, 2), RED);
        assert_eq!(*image.get_pixel(2, 1), BLACK);
        assert_eq!(*image.get_pixel(3, 0), WHITE);
        assert_eq!(*image.get_pixel(4, 2), WHITE);
    }

    #[test]
    fn test_diagonal_neighbours_are_not_connected() {
        let mut image = RgbaImage::from_pixel(2, 2, WHITE);
        image.put_pixel(1, 0, BLACK);
        image.put_pixel(0, 1, BLACK);
        let report = flood_fill(&mut image, 0, 0, RED);
        assert_eq!(report.changed, 1);
        assert_eq!(*image.get_pixel(1, 1), WHITE);
    }

    #[test]
    fn test_alpha_participates_in_match() {
        let mut image = RgbaImage::from_pixel(3, 1, WHITE);
        image.put_pixel(1, 0, Rgba([255, 255, 255, 0]));
        let report = flood_fill(&mut image, 0, 0, RED);
        assert_eq!(report.changed, 1);
        assert_eq!(*image.get_pixel(2, 0), WHITE);
    }
}
