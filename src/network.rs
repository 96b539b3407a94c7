use crate::lane::{Crossing, CrossingAttributes, LaneMarking, LaneMarkingAttributes};
use crate::link::{Link, LinkAttributes};
use crate::math::Point2d;
use crate::node::{Node, NodeAttributes};
use crate::segment::{Segment, SegmentAttributes};
use crate::signal::{Approach, Intersection, TrafficSignalLine, Turn};
use crate::util::Interval;
use crate::{
    CrossingId, CrossingSet, IntersectionId, IntersectionSet, LaneMarkingId, LaneMarkingSet,
    LinkId, LinkSet, NodeId, NodeSet, SegmentId, SegmentSet,
};
use std::collections::HashSet;

/// The static topology of a road network.
///
/// All entities live in arenas owned by the network and reference each other
/// by ID, never by owning links. The world bounding box grows as geometry is
/// added.
#[derive(Default)]
pub struct RoadNetwork {
    /// The nodes in the network.
    nodes: NodeSet,
    /// The links in the network.
    links: LinkSet,
    /// The segments in the network.
    segments: SegmentSet,
    /// The lane markings in the network.
    lane_markings: LaneMarkingSet,
    /// The pedestrian crossings in the network.
    crossings: CrossingSet,
    /// The signalised intersections in the network.
    intersections: IntersectionSet,
    /// The world extent of all added geometry, once any exists.
    bounds: Option<(Interval<f64>, Interval<f64>)>,
}

impl RoadNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a node to the network.
    pub fn add_node(&mut self, attributes: &NodeAttributes) -> NodeId {
        self.expand_bounds(attributes.pos);
        self.nodes.insert_with_key(|id| Node::new(id, attributes))
    }

    /// Adds a link to the network.
    pub fn add_link(&mut self, attributes: &LinkAttributes) -> LinkId {
        self.links.insert_with_key(|id| Link::new(id, attributes))
    }

    /// Adds a segment to the network.
    pub fn add_segment(&mut self, attributes: &SegmentAttributes) -> SegmentId {
        self.segments
            .insert_with_key(|id| Segment::new(id, attributes))
    }

    /// Adds a lane marking to the network.
    pub fn add_lane_marking(&mut self, attributes: &LaneMarkingAttributes) -> LaneMarkingId {
        for point in attributes.points {
            self.expand_bounds(*point);
        }
        self.lane_markings
            .insert_with_key(|id| LaneMarking::new(id, attributes))
    }

    /// Adds a pedestrian crossing to the network.
    pub fn add_crossing(&mut self, attributes: &CrossingAttributes) -> CrossingId {
        for point in attributes.points {
            self.expand_bounds(*point);
        }
        self.crossings
            .insert_with_key(|id| Crossing::new(id, attributes))
    }

    /// Adds an intersection to the network.
    pub fn add_intersection(&mut self) -> IntersectionId {
        self.intersections.insert_with_key(Intersection::new)
    }

    /// Adds a signal line to an intersection's approach and turn movement.
    pub fn add_signal_line(
        &mut self,
        intersection: IntersectionId,
        approach: Approach,
        turn: Turn,
        from: Point2d,
        to: Point2d,
    ) {
        self.expand_bounds(from);
        self.expand_bounds(to);
        self.intersections[intersection].add_signal_line(
            approach,
            turn,
            TrafficSignalLine::new(from, to),
        );
    }

    /// Associates a crossing with an intersection's pedestrian signals.
    /// The order of association is the order pedestrian lights pair up in.
    pub fn add_signal_crossing(&mut self, intersection: IntersectionId, crossing: CrossingId) {
        self.intersections[intersection].add_crossing(crossing);
    }

    /// Gets a reference to the node with the given ID.
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Gets a reference to the link with the given ID.
    pub fn get_link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id)
    }

    /// Gets a reference to the crossing with the given ID.
    pub fn get_crossing(&self, id: CrossingId) -> Option<&Crossing> {
        self.crossings.get(id)
    }

    /// Gets a reference to the intersection with the given ID.
    pub fn get_intersection(&self, id: IntersectionId) -> Option<&Intersection> {
        self.intersections.get(id)
    }

    /// Returns an iterator over all the nodes in the network.
    pub fn iter_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Returns an iterator over all the links in the network.
    pub fn iter_links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    /// Returns an iterator over all the segments in the network.
    pub fn iter_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.values()
    }

    /// Returns an iterator over all the lane markings in the network.
    pub fn iter_lane_markings(&self) -> impl Iterator<Item = &LaneMarking> {
        self.lane_markings.values()
    }

    /// Returns an iterator over all the crossings in the network.
    pub fn iter_crossings(&self) -> impl Iterator<Item = &Crossing> {
        self.crossings.values()
    }

    /// Returns an iterator over all the intersections in the network.
    pub fn iter_intersections(&self) -> impl Iterator<Item = &Intersection> {
        self.intersections.values()
    }

    /// The links whose name labels should be drawn, with duplicate road names
    /// across opposite traversal directions removed. The first link of each
    /// name/endpoint pair in iteration order carries the label.
    pub fn labelled_links(&self) -> Vec<LinkId> {
        let mut seen = HashSet::new();
        self.links
            .values()
            .filter(|link| seen.insert(link.label_key()))
            .map(|link| link.id())
            .collect()
    }

    /// Gets the top-left corner of the world bounding box.
    pub fn top_left(&self) -> Point2d {
        match &self.bounds {
            Some((x, y)) => Point2d::new(x.min, y.min),
            None => Point2d::new(0.0, 0.0),
        }
    }

    /// Gets the bottom-right corner of the world bounding box.
    pub fn bottom_right(&self) -> Point2d {
        match &self.bounds {
            Some((x, y)) => Point2d::new(x.max, y.max),
            None => Point2d::new(0.0, 0.0),
        }
    }

    /// Gets the node arena, for draw passes that resolve endpoint IDs.
    pub(crate) fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    /// Grows the bounding box to contain the given point.
    fn expand_bounds(&mut self, point: Point2d) {
        self.bounds = Some(match self.bounds.take() {
            Some((x, y)) => (x.expand_to(point.x), y.expand_to(point.y)),
            None => (
                Interval::new(point.x, point.x),
                Interval::new(point.y, point.y),
            ),
        });
    }
}
