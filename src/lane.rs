use crate::canvas::{Canvas, Drawable};
use crate::math::Point2d;
use crate::scale::{ScaleContext, ScaledPoint};
use crate::signal::LightColor;
use crate::{CrossingId, LaneMarkingId};
use image::Rgb;
use itertools::Itertools;

/// The radius of a pedestrian signal disc in pixels.
const CROSSING_SIGNAL_RADIUS: i32 = 5;

const LANE_MARKING_COLOR: Rgb<u8> = Rgb([0x77, 0x77, 0x77]);
const CROSSING_COLOR: Rgb<u8> = Rgb([0xb8, 0x86, 0x0b]);

/// A painted lane boundary, visible only at lane-level zoom.
pub struct LaneMarking {
    /// The lane marking ID.
    id: LaneMarkingId,
    /// The polyline of the marking.
    points: Vec<ScaledPoint>,
}

/// The attributes of a lane marking.
pub struct LaneMarkingAttributes<'a> {
    /// The polyline of the marking.
    pub points: &'a [Point2d],
}

impl LaneMarking {
    /// Creates a new lane marking.
    pub(crate) fn new(id: LaneMarkingId, attribs: &LaneMarkingAttributes) -> Self {
        Self {
            id,
            points: attribs.points.iter().map(|p| (*p).into()).collect(),
        }
    }

    /// Gets the lane marking ID.
    pub fn id(&self) -> LaneMarkingId {
        self.id
    }
}

impl Drawable for LaneMarking {
    fn draw(&self, canvas: &mut Canvas, ctx: &ScaleContext) {
        for (a, b) in self.points.iter().tuple_windows() {
            canvas.line(a.pixel(ctx), b.pixel(ctx), LANE_MARKING_COLOR);
        }
    }
}

/// A pedestrian crossing, visible only at lane-level zoom.
pub struct Crossing {
    /// The crossing ID.
    id: CrossingId,
    /// The polyline of the crossing.
    points: Vec<ScaledPoint>,
}

/// The attributes of a crossing.
pub struct CrossingAttributes<'a> {
    /// The polyline of the crossing.
    pub points: &'a [Point2d],
}

impl Crossing {
    /// Creates a new crossing.
    pub(crate) fn new(id: CrossingId, attribs: &CrossingAttributes) -> Self {
        Self {
            id,
            points: attribs.points.iter().map(|p| (*p).into()).collect(),
        }
    }

    /// Gets the crossing ID.
    pub fn id(&self) -> CrossingId {
        self.id
    }

    /// The point at which the crossing's signal disc is drawn.
    fn signal_anchor(&self) -> Option<ScaledPoint> {
        match self.points.as_slice() {
            [] => None,
            [only] => Some(*only),
            points => {
                let a = points[0].world();
                let b = points[points.len() - 1].world();
                Some(ScaledPoint::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0))
            }
        }
    }

    /// Draws the crossing's pedestrian signal in the given light color.
    pub(crate) fn draw_signal(&self, canvas: &mut Canvas, ctx: &ScaleContext, light: LightColor) {
        if let Some(anchor) = self.signal_anchor() {
            canvas.filled_circle(anchor.pixel(ctx), CROSSING_SIGNAL_RADIUS, light.rgb());
        }
    }
}

impl Drawable for Crossing {
    fn draw(&self, canvas: &mut Canvas, ctx: &ScaleContext) {
        for (a, b) in self.points.iter().tuple_windows() {
            canvas.line(a.pixel(ctx), b.pixel(ctx), CROSSING_COLOR);
        }
    }
}
