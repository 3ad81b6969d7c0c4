use crate::controllers::follow::ports::canvas::{Canvas, Colour, Stroke};
use crate::core::data::Vec2;

/// A text draw deferred to the overlay pass, in logical coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub baseline_left: Vec2,
    pub size: f32,
    pub colour: Colour,
}

/// Software rasterizer over an RGBA8 framebuffer.
///
/// Shapes are given in logical pixels and scaled by `scale` onto the physical
/// framebuffer. A pixel is painted when its centre lies within half the stroke
/// weight of the outline. Text cannot be rasterized here, so it is collected
/// for whoever presents the frame.
pub struct FrameCanvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    scale: f64,
    text_runs: Vec<TextRun>,
}

impl<'a> FrameCanvas<'a> {
    /// # Panics
    /// Panics if `frame` is not exactly `width * height * 4` bytes.
    pub fn new(frame: &'a mut [u8], width: u32, height: u32, scale: f64) -> Self {
        assert_eq!(
            frame.len(),
            width as usize * height as usize * 4,
            "frame length {} does not match {}x{} RGBA",
            frame.len(),
            width,
            height
        );

        Self {
            frame,
            width,
            height,
            scale,
            text_runs: Vec::new(),
        }
    }

    #[must_use]
    pub fn into_text_runs(self) -> Vec<TextRun> {
        self.text_runs
    }

    /// Visits every pixel whose centre falls in the physical box
    /// `[min, max]`, clipped to the frame.
    fn paint_where(&mut self, min: Vec2, max: Vec2, colour: Colour, hit: impl Fn(Vec2) -> bool) {
        let x_start = clip(min.x.floor(), self.width);
        let x_end = clip(max.x.ceil(), self.width);
        let y_start = clip(min.y.floor(), self.height);
        let y_end = clip(max.y.ceil(), self.height);
        let width = self.width as usize;

        for y in y_start..y_end {
            for x in x_start..x_end {
                let centre = Vec2::new(x as f64 + 0.5, y as f64 + 0.5);
                if hit(centre) {
                    let index = (y * width + x) * 4;
                    self.frame[index..index + 4]
                        .copy_from_slice(&[colour.r, colour.g, colour.b, 255]);
                }
            }
        }
    }
}

impl Canvas for FrameCanvas<'_> {
    fn clear(&mut self, colour: Colour) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[colour.r, colour.g, colour.b, 255]);
        }
    }

    fn stroke_rect(&mut self, top_left: Vec2, size: Vec2, stroke: Stroke) {
        let half = stroke.weight * self.scale / 2.0;
        let near = top_left * self.scale;
        let far = (top_left + size) * self.scale;

        let outer_min = Vec2::new(near.x - half, near.y - half);
        let outer_max = Vec2::new(far.x + half, far.y + half);
        let inner_min = Vec2::new(near.x + half, near.y + half);
        let inner_max = Vec2::new(far.x - half, far.y - half);

        self.paint_where(outer_min, outer_max, stroke.colour, |p| {
            let in_outer = p.x >= outer_min.x
                && p.x <= outer_max.x
                && p.y >= outer_min.y
                && p.y <= outer_max.y;
            let in_inner = p.x > inner_min.x
                && p.x < inner_max.x
                && p.y > inner_min.y
                && p.y < inner_max.y;
            in_outer && !in_inner
        });
    }

    fn stroke_circle(&mut self, centre: Vec2, diameter: f64, stroke: Stroke) {
        let half = stroke.weight * self.scale / 2.0;
        let centre = centre * self.scale;
        let radius = diameter * self.scale / 2.0;
        let inner = (radius - half).max(0.0);
        let outer = radius + half;

        self.paint_where(
            Vec2::new(centre.x - outer, centre.y - outer),
            Vec2::new(centre.x + outer, centre.y + outer),
            stroke.colour,
            |p| {
                let dx = p.x - centre.x;
                let dy = p.y - centre.y;
                let distance = (dx * dx + dy * dy).sqrt();
                distance >= inner && distance <= outer
            },
        );
    }

    fn text(&mut self, text: &str, baseline_left: Vec2, size: f32, colour: Colour) {
        self.text_runs.push(TextRun {
            text: text.to_string(),
            baseline_left,
            size,
            colour,
        });
    }
}

fn clip(value: f64, limit: u32) -> usize {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        (value as usize).min(limit as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: u32 = 40;
    const RED: Stroke = Stroke {
        colour: Colour::RED,
        weight: 2.0,
    };

    fn pixel(frame: &[u8], x: usize, y: usize) -> [u8; 4] {
        let index = (y * SIZE as usize + x) * 4;
        [frame[index], frame[index + 1], frame[index + 2], frame[index + 3]]
    }

    #[test]
    fn clear_fills_every_pixel_opaque() {
        let mut frame = vec![7; (SIZE * SIZE * 4) as usize];
        FrameCanvas::new(&mut frame, SIZE, SIZE, 1.0).clear(Colour::grey(30));

        assert!(frame.chunks_exact(4).all(|p| p == [30, 30, 30, 255]));
    }

    #[test]
    fn rect_outline_leaves_interior_untouched() {
        let mut frame = vec![0; (SIZE * SIZE * 4) as usize];
        let mut canvas = FrameCanvas::new(&mut frame, SIZE, SIZE, 1.0);

        canvas.stroke_rect(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0), RED);

        assert_eq!(pixel(&frame, 10, 10), [255, 0, 0, 255]);
        assert_eq!(pixel(&frame, 20, 9), [255, 0, 0, 255]);
        assert_eq!(pixel(&frame, 29, 20), [255, 0, 0, 255]);
        assert_eq!(pixel(&frame, 20, 20), [0, 0, 0, 0]);
        assert_eq!(pixel(&frame, 5, 5), [0, 0, 0, 0]);
        assert_eq!(pixel(&frame, 35, 35), [0, 0, 0, 0]);
    }

    #[test]
    fn circle_outline_is_a_ring() {
        let mut frame = vec![0; (SIZE * SIZE * 4) as usize];
        let mut canvas = FrameCanvas::new(&mut frame, SIZE, SIZE, 1.0);

        canvas.stroke_circle(
            Vec2::new(20.0, 20.0),
            20.0,
            Stroke {
                colour: Colour::RED,
                weight: 4.0,
            },
        );

        assert_eq!(pixel(&frame, 30, 20), [255, 0, 0, 255]);
        assert_eq!(pixel(&frame, 20, 10), [255, 0, 0, 255]);
        assert_eq!(pixel(&frame, 20, 20), [0, 0, 0, 0]);
        assert_eq!(pixel(&frame, 0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn shapes_partly_off_frame_are_clipped() {
        let mut frame = vec![0; (SIZE * SIZE * 4) as usize];
        let mut canvas = FrameCanvas::new(&mut frame, SIZE, SIZE, 1.0);

        canvas.stroke_circle(Vec2::new(-5.0, 38.0), 30.0, RED);
        canvas.stroke_rect(Vec2::new(30.0, -10.0), Vec2::new(100.0, 100.0), RED);

        assert_eq!(pixel(&frame, 30, 20), [255, 0, 0, 255]);
    }

    #[test]
    fn scale_maps_logical_to_physical_pixels() {
        let mut frame = vec![0; (SIZE * SIZE * 4) as usize];
        let mut canvas = FrameCanvas::new(&mut frame, SIZE, SIZE, 2.0);

        canvas.stroke_rect(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0), RED);

        assert_eq!(pixel(&frame, 10, 20), [255, 0, 0, 255]);
        assert_eq!(pixel(&frame, 5, 20), [0, 0, 0, 0]);
        assert_eq!(pixel(&frame, 20, 20), [0, 0, 0, 0]);
    }

    #[test]
    fn text_is_collected_not_drawn() {
        let mut frame = vec![0; (SIZE * SIZE * 4) as usize];
        let mut canvas = FrameCanvas::new(&mut frame, SIZE, SIZE, 1.0);

        canvas.text("Speed: 5 mm/s", Vec2::new(10.0, 20.0), 20.0, Colour::WHITE);
        let runs = canvas.into_text_runs();

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "Speed: 5 mm/s");
        assert!(frame.iter().all(|&byte| byte == 0));
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn mismatched_buffer_panics() {
        let mut frame = vec![0; 10];
        let _ = FrameCanvas::new(&mut frame, SIZE, SIZE, 1.0);
    }
}
