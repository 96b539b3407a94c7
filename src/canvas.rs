use crate::debug::{debug_disc, debug_line, debug_text};
use crate::scale::ScaleContext;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut};
use rusttype::{point, Font, PositionedGlyph, Scale};

/// The buffer background color.
pub(crate) const BACKGROUND: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

/// The capability shared by every entity that can paint itself onto a frame.
pub trait Drawable {
    /// Draws the entity onto the canvas under the given scale context.
    fn draw(&self, canvas: &mut Canvas, ctx: &ScaleContext);
}

/// A pixel buffer together with the drawing primitives the compositor uses.
pub struct Canvas {
    buffer: RgbImage,
}

impl Canvas {
    /// Creates a canvas of the given size, filled with the background color.
    pub(crate) fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            buffer: RgbImage::from_pixel(width, height, background),
        }
    }

    /// Gets the underlying pixel buffer.
    pub fn image(&self) -> &RgbImage {
        &self.buffer
    }

    /// Gets the width of the canvas in pixels.
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Gets the height of the canvas in pixels.
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Fills the whole canvas with the given color.
    pub(crate) fn clear(&mut self, color: Rgb<u8>) {
        for pixel in self.buffer.pixels_mut() {
            *pixel = color;
        }
    }

    /// Draws a one-pixel line between two pixel positions.
    pub fn line(&mut self, start: (f32, f32), end: (f32, f32), color: Rgb<u8>) {
        debug_line(start, end);
        draw_line_segment_mut(&mut self.buffer, start, end, color);
    }

    /// Draws a line of the given width by stepping filled discs along it.
    pub fn thick_line(&mut self, start: (f32, f32), end: (f32, f32), color: Rgb<u8>, width: f32) {
        if width <= 1.0 {
            self.line(start, end, color);
            return;
        }
        debug_line(start, end);

        let radius = ((width / 2.0) as i32).max(1);
        let (dx, dy) = (end.0 - start.0, end.1 - start.1);
        let length = (dx * dx + dy * dy).sqrt();
        if length < 0.001 {
            draw_filled_circle_mut(&mut self.buffer, (start.0 as i32, start.1 as i32), radius, color);
            return;
        }

        // Step slightly less than the radius so the discs overlap.
        let step = (radius as f32 * 0.5).max(0.5);
        let steps = (length / step).ceil() as i32;
        for i in 0..=steps {
            let x = start.0 + i as f32 * dx * step / length;
            let y = start.1 + i as f32 * dy * step / length;
            draw_filled_circle_mut(&mut self.buffer, (x as i32, y as i32), radius, color);
        }
        draw_filled_circle_mut(&mut self.buffer, (end.0 as i32, end.1 as i32), radius, color);
    }

    /// Draws a filled circle centred on a pixel position.
    pub fn filled_circle(&mut self, centre: (f32, f32), radius: i32, color: Rgb<u8>) {
        debug_disc(centre, radius);
        draw_filled_circle_mut(&mut self.buffer, (centre.0 as i32, centre.1 as i32), radius, color);
    }

    /// Draws a circle outline centred on a pixel position.
    pub fn hollow_circle(&mut self, centre: (f32, f32), radius: i32, color: Rgb<u8>) {
        debug_disc(centre, radius);
        draw_hollow_circle_mut(&mut self.buffer, (centre.0 as i32, centre.1 as i32), radius, color);
    }

    /// Draws a line of text centred on a pixel position.
    pub fn text(
        &mut self,
        anchor: (f32, f32),
        text: &str,
        font: &Font,
        height: f32,
        color: Rgb<u8>,
    ) {
        debug_text(anchor, text);
        let scale = Scale::uniform(height);
        let v_metrics = font.v_metrics(scale);
        let glyphs: Vec<PositionedGlyph> =
            font.layout(text, scale, point(0.0, v_metrics.ascent)).collect();
        let text_width = glyphs
            .iter()
            .rev()
            .filter_map(|g| g.pixel_bounding_box().map(|bb| bb.max.x as f32))
            .next()
            .unwrap_or(0.0);

        let offset = (anchor.0 - text_width / 2.0, anchor.1 - height / 2.0);
        let (buf_w, buf_h) = (self.buffer.width() as i32, self.buffer.height() as i32);
        for glyph in glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    let px = offset.0 as i32 + bb.min.x + gx as i32;
                    let py = offset.1 as i32 + bb.min.y + gy as i32;
                    if coverage > 0.5 && px >= 0 && px < buf_w && py >= 0 && py < buf_h {
                        self.buffer.put_pixel(px as u32, py as u32, color);
                    }
                });
            }
        }
    }
}
