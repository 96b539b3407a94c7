use crate::canvas::{Canvas, Drawable};
use crate::math::Point2d;
use crate::scale::{ScaleContext, ScaledPoint};
use crate::signal::{Approach, LightColor, APPROACH_COUNT};
use crate::IntersectionId;
use image::Rgb;
use smallvec::SmallVec;
use std::collections::HashMap;

/// The radius of an agent marker at 100% zoom, in pixels.
const AGENT_RADIUS: f64 = 3.0;

/// The smallest radius an agent marker is drawn at, so agents
/// remain visible when zoomed far out.
const MIN_AGENT_RADIUS: f64 = 2.0;

const AGENT_COLOR: Rgb<u8> = Rgb([0x22, 0x55, 0xcc]);

/// The precomputed output of a simulation run: one tick per frame.
#[derive(Default)]
pub struct SimulationResults {
    /// The ticks, in frame order.
    ticks: Vec<Tick>,
}

impl SimulationResults {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends the next frame's tick.
    pub fn push_tick(&mut self, tick: Tick) {
        self.ticks.push(tick);
    }

    /// Gets the number of ticks.
    pub fn tick_count(&self) -> usize {
        self.ticks.len()
    }

    /// Returns true if there are no ticks.
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Gets the tick at the given frame index.
    pub fn get_tick(&self, frame: usize) -> Option<&Tick> {
        self.ticks.get(frame)
    }
}

/// One discrete time-step's full world snapshot.
#[derive(Default)]
pub struct Tick {
    /// The agents' states, by agent ID.
    agents: HashMap<u32, AgentTick>,
    /// The intersections' signal states, by intersection ID.
    signals: HashMap<IntersectionId, SignalLineTick>,
}

impl Tick {
    /// Creates an empty tick.
    pub fn new() -> Self {
        Default::default()
    }

    /// Records an agent's state for this tick.
    pub fn insert_agent(&mut self, agent: AgentTick) {
        self.agents.insert(agent.id(), agent);
    }

    /// Records an intersection's signal state for this tick.
    pub fn insert_signal(&mut self, signal: SignalLineTick) {
        self.signals.insert(signal.intersection(), signal);
    }

    /// Gets the state of the agent with the given ID.
    pub fn agent(&self, id: u32) -> Option<&AgentTick> {
        self.agents.get(&id)
    }

    /// Returns an iterator over all the agent states in this tick.
    pub fn agents(&self) -> impl Iterator<Item = &AgentTick> {
        self.agents.values()
    }

    /// Returns an iterator over all the signal states in this tick.
    pub fn signals(&self) -> impl Iterator<Item = &SignalLineTick> {
        self.signals.values()
    }
}

/// An agent's state in one time tick.
pub struct AgentTick {
    /// The agent's ID.
    id: u32,
    /// The agent's world position.
    pos: ScaledPoint,
    /// The agent's heading in radians, counter-clockwise from the +x axis.
    heading: f64,
    /// Signal metadata, present when the agent represents a
    /// signal-controlled entity rather than a vehicle.
    signal: Option<SignalPhase>,
}

/// The signal-phase metadata of a signal-controlled agent.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalPhase {
    /// The index of the active phase.
    pub phase: u32,
    /// The time elapsed in the active phase, in s.
    pub elapsed: f64,
    /// The length of the full signal cycle, in s.
    pub cycle_len: f64,
    /// The number of phases in the cycle.
    pub phase_count: u32,
}

impl AgentTick {
    /// Creates an agent state snapshot.
    pub fn new(id: u32, pos: Point2d, heading: f64) -> Self {
        Self {
            id,
            pos: pos.into(),
            heading,
            signal: None,
        }
    }

    /// Attaches signal-phase metadata to the snapshot.
    pub fn with_signal(mut self, signal: SignalPhase) -> Self {
        self.signal = Some(signal);
        self
    }

    /// Gets the agent's ID.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Gets the agent's position.
    pub fn pos(&self) -> &ScaledPoint {
        &self.pos
    }

    /// Gets the agent's heading in radians.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Gets the agent's signal-phase metadata, if any.
    pub fn signal(&self) -> Option<&SignalPhase> {
        self.signal.as_ref()
    }
}

impl Drawable for AgentTick {
    /// Draws the agent as a disc with a heading tick. The marker scales with
    /// zoom but never below a fixed minimum, so it stays visible on the
    /// road-overview tiers.
    fn draw(&self, canvas: &mut Canvas, ctx: &ScaleContext) {
        let (x, y) = self.pos.pixel(ctx);
        let radius = f64::max(AGENT_RADIUS * ctx.zoom(), MIN_AGENT_RADIUS);
        let nose = (
            x + (2.0 * radius * self.heading.cos()) as f32,
            y + (2.0 * radius * self.heading.sin()) as f32,
        );
        canvas.filled_circle((x, y), radius as i32, AGENT_COLOR);
        canvas.line((x, y), nose, AGENT_COLOR);
    }
}

/// An intersection's signal-light state in one time tick.
pub struct SignalLineTick {
    /// The intersection this state belongs to.
    intersection: IntersectionId,
    /// Per approach, the turn-light colors in left/straight/right order.
    vehicle_lights: [SmallVec<[LightColor; 3]>; APPROACH_COUNT],
    /// The pedestrian-light colors, parallel to the intersection's crossings.
    pedestrian_lights: SmallVec<[LightColor; 4]>,
}

impl SignalLineTick {
    /// Creates a signal state with all lights unset.
    pub fn new(intersection: IntersectionId) -> Self {
        Self {
            intersection,
            vehicle_lights: Default::default(),
            pedestrian_lights: SmallVec::new(),
        }
    }

    /// Gets the intersection this state belongs to.
    pub fn intersection(&self) -> IntersectionId {
        self.intersection
    }

    /// Sets an approach's turn-light colors, in left/straight/right order.
    pub fn set_vehicle_lights(&mut self, approach: Approach, lights: &[LightColor]) {
        self.vehicle_lights[approach.index()] = SmallVec::from_slice(lights);
    }

    /// Appends a pedestrian-light color. Lights are paired positionally with
    /// the intersection's crossings.
    pub fn push_pedestrian_light(&mut self, light: LightColor) {
        self.pedestrian_lights.push(light);
    }

    /// Gets an approach's turn-light colors by approach index.
    pub(crate) fn vehicle_lights(&self, approach: usize) -> &[LightColor] {
        &self.vehicle_lights[approach]
    }

    /// Gets the pedestrian-light colors.
    pub fn pedestrian_lights(&self) -> &[LightColor] {
        &self.pedestrian_lights
    }
}
