use crate::canvas::Canvas;
use crate::error::VizError;
use crate::math::Point2d;
use crate::results::SignalLineTick;
use crate::scale::{ScaleContext, ScaledPoint};
use crate::{CrossingId, IntersectionId};
use image::Rgb;
use log::warn;
use smallvec::SmallVec;

/// The drawn width of a signal line in pixels.
const SIGNAL_LINE_WIDTH: f32 = 2.0;

/// The number of turn movements per approach.
pub(crate) const TURN_COUNT: usize = 3;

/// The number of approaches per intersection.
pub(crate) const APPROACH_COUNT: usize = 4;

/// The state of a traffic light.
///
/// The integer codes are a contract with the simulation-result format.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightColor {
    Red,
    Amber,
    Green,
}

impl LightColor {
    /// Decodes a light color code from the simulation-result format.
    pub fn from_code(code: i32) -> Result<Self, VizError> {
        match code {
            1 => Ok(Self::Red),
            2 => Ok(Self::Amber),
            3 => Ok(Self::Green),
            other => Err(VizError::UnknownLightCode(other)),
        }
    }

    /// The color the light is rendered in.
    pub fn rgb(&self) -> Rgb<u8> {
        match self {
            Self::Red => Rgb([0xdd, 0x00, 0x00]),
            Self::Amber => Rgb([0xff, 0xbf, 0x00]),
            Self::Green => Rgb([0x00, 0xaa, 0x00]),
        }
    }
}

/// One of the four incoming approaches of an intersection.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Approach {
    A,
    B,
    C,
    D,
}

impl Approach {
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// A turn movement out of an approach.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Turn {
    Left,
    Straight,
    Right,
}

impl Turn {
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// The visual indicator for one turn movement's light.
pub struct TrafficSignalLine {
    /// The line's start, in world coordinates.
    from: ScaledPoint,
    /// The line's end, in world coordinates.
    to: ScaledPoint,
}

impl TrafficSignalLine {
    /// Creates a new signal line.
    pub fn new(from: Point2d, to: Point2d) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Draws the line in the given light color.
    pub(crate) fn draw_light(&self, canvas: &mut Canvas, ctx: &ScaleContext, light: LightColor) {
        canvas.thick_line(
            self.from.pixel(ctx),
            self.to.pixel(ctx),
            light.rgb(),
            SIGNAL_LINE_WIDTH,
        );
    }
}

/// The signal lines of one approach, one set per turn movement.
/// Only the first line of each set is drawn.
#[derive(Default)]
struct ApproachSignals {
    turns: [SmallVec<[TrafficSignalLine; 1]>; TURN_COUNT],
}

/// A signalised junction, owning its four directional signal groups and the
/// ordered list of its pedestrian crossings.
pub struct Intersection {
    /// The intersection ID.
    id: IntersectionId,
    /// The signal lines of the four approaches.
    approaches: [ApproachSignals; APPROACH_COUNT],
    /// The crossings controlled by this intersection's pedestrian lights.
    crossings: SmallVec<[CrossingId; 4]>,
}

impl Intersection {
    /// Creates a new intersection.
    pub(crate) fn new(id: IntersectionId) -> Self {
        Self {
            id,
            approaches: Default::default(),
            crossings: SmallVec::new(),
        }
    }

    /// Gets the intersection ID.
    pub fn id(&self) -> IntersectionId {
        self.id
    }

    /// Gets the crossings controlled by this intersection, in signal order.
    pub fn crossings(&self) -> &[CrossingId] {
        &self.crossings
    }

    /// Adds a signal line to the given approach and turn movement.
    pub(crate) fn add_signal_line(&mut self, approach: Approach, turn: Turn, line: TrafficSignalLine) {
        self.approaches[approach.index()].turns[turn.index()].push(line);
    }

    /// Associates a crossing with this intersection's pedestrian signals.
    pub(crate) fn add_crossing(&mut self, crossing: CrossingId) {
        self.crossings.push(crossing);
    }

    /// Draws the vehicle lights of all four approaches per the tick's state.
    ///
    /// A light list shorter than the movement count, or a turn movement with
    /// no signal line, is a logic error in the loaded data; it is reported
    /// and the frame is drawn with whatever partial data is available.
    pub(crate) fn draw_lights(&self, canvas: &mut Canvas, ctx: &ScaleContext, tick: &SignalLineTick) {
        for (idx, approach) in self.approaches.iter().enumerate() {
            let lights = tick.vehicle_lights(idx);
            if lights.len() != TURN_COUNT {
                warn!(
                    "intersection {:?}: approach {} has {} lights, expected {}",
                    self.id,
                    idx,
                    lights.len(),
                    TURN_COUNT
                );
            }
            for (turn, lines) in approach.turns.iter().enumerate() {
                let Some(light) = lights.get(turn) else {
                    continue;
                };
                if let Some(line) = lines.first() {
                    line.draw_light(canvas, ctx, *light);
                }
            }
        }
    }
}
