use crate::math::Point2d;
use crate::util::Interval;

/// The fraction of the network extent added as padding on each side of the
/// world bounding box, so edge geometry never touches the buffer border.
const BORDER_PAD: f64 = 0.05;

/// An immutable snapshot of the world-to-pixel transform.
///
/// A context is built once per zoom change and replaced wholesale; every
/// geometry primitive reads its pixel position through a reference to the
/// currently published context during a redraw pass.
#[derive(Clone, Debug)]
pub struct ScaleContext {
    /// The zoom ratio, where 1.0 fills the 100% view size.
    zoom: f64,
    /// The padded world extent along the x axis.
    world_x: Interval<f64>,
    /// The padded world extent along the y axis.
    world_y: Interval<f64>,
    /// The width of the pixel buffer.
    pixel_width: u32,
    /// The height of the pixel buffer.
    pixel_height: u32,
}

impl ScaleContext {
    /// Creates a scale context for the given world bounding box and view size.
    ///
    /// The world box is padded by 5% of its extent on each side, and the pixel
    /// dimensions are the view dimensions multiplied by `zoom`, truncated.
    /// A non-positive `zoom` yields a degenerate zero-size buffer.
    pub fn new(
        zoom: f64,
        top_left: Point2d,
        bottom_right: Point2d,
        view_width: u32,
        view_height: u32,
    ) -> Self {
        let world_x = Interval::new(top_left.x, bottom_right.x);
        let world_y = Interval::new(top_left.y, bottom_right.y);
        Self {
            zoom,
            world_x: world_x.pad(BORDER_PAD * world_x.length()),
            world_y: world_y.pad(BORDER_PAD * world_y.length()),
            pixel_width: (view_width as f64 * zoom) as u32,
            pixel_height: (view_height as f64 * zoom) as u32,
        }
    }

    /// Gets the zoom ratio.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Gets the width of the pixel buffer.
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    /// Gets the height of the pixel buffer.
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    /// Gets the top-left corner of the padded world bounding box.
    pub fn world_top_left(&self) -> Point2d {
        Point2d::new(self.world_x.min, self.world_y.min)
    }

    /// Gets the bottom-right corner of the padded world bounding box.
    pub fn world_bottom_right(&self) -> Point2d {
        Point2d::new(self.world_x.max, self.world_y.max)
    }

    /// Maps a world coordinate to a pixel coordinate by linear interpolation
    /// between the padded world box and the pixel box.
    pub fn to_pixel(&self, world: Point2d) -> (f32, f32) {
        let x = self.world_x.inv_lerp(world.x) * self.pixel_width as f64;
        let y = self.world_y.inv_lerp(world.y) * self.pixel_height as f64;
        (x as f32, y as f32)
    }
}

/// A world coordinate paired with the rule for deriving its pixel position
/// from a scale context.
///
/// The pixel position is recomputed on every query; nothing is cached between
/// rescales.
#[derive(Clone, Copy, Debug)]
pub struct ScaledPoint {
    world: Point2d,
}

impl ScaledPoint {
    /// Creates a scaled point at the given world coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            world: Point2d::new(x, y),
        }
    }

    /// Gets the world coordinates.
    pub fn world(&self) -> Point2d {
        self.world
    }

    /// Derives the pixel position under the given scale context.
    pub fn pixel(&self, ctx: &ScaleContext) -> (f32, f32) {
        ctx.to_pixel(self.world)
    }
}

impl From<Point2d> for ScaledPoint {
    fn from(world: Point2d) -> Self {
        Self { world }
    }
}
