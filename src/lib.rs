pub use canvas::{Canvas, Drawable};
pub use cgmath;
pub use error::VizError;
pub use image;
pub use lane::{Crossing, CrossingAttributes, LaneMarking, LaneMarkingAttributes};
pub use link::{Link, LinkAttributes};
pub use network::RoadNetwork;
pub use node::{Node, NodeAttributes};
pub use progress::{ProgressSender, ProgressUpdate};
pub use results::{AgentTick, SignalLineTick, SignalPhase, SimulationResults, Tick};
pub use scale::{ScaleContext, ScaledPoint};
pub use segment::{Segment, SegmentAttributes};
pub use signal::{Approach, Intersection, LightColor, TrafficSignalLine, Turn};
use slotmap::{new_key_type, SlotMap};
pub use slotmap::{Key, KeyData};
pub use util::Interval;
pub use visualizer::Visualizer;

mod canvas;
mod debug;
mod error;
mod lane;
mod link;
pub mod math;
mod network;
mod node;
pub mod progress;
mod results;
mod scale;
mod segment;
mod signal;
mod util;
mod visualizer;

new_key_type! {
    /// Unique ID of a [Node].
    pub struct NodeId;
    /// Unique ID of a [Link].
    pub struct LinkId;
    /// Unique ID of a [Segment].
    pub struct SegmentId;
    /// Unique ID of a [LaneMarking].
    pub struct LaneMarkingId;
    /// Unique ID of a [Crossing].
    pub struct CrossingId;
    /// Unique ID of an [Intersection].
    pub struct IntersectionId;
}

type NodeSet = SlotMap<NodeId, Node>;
type LinkSet = SlotMap<LinkId, Link>;
type SegmentSet = SlotMap<SegmentId, Segment>;
type LaneMarkingSet = SlotMap<LaneMarkingId, LaneMarking>;
type CrossingSet = SlotMap<CrossingId, Crossing>;
type IntersectionSet = SlotMap<IntersectionId, Intersection>;
