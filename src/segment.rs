use crate::canvas::Canvas;
use crate::scale::ScaleContext;
use crate::{LinkId, NodeId, NodeSet, SegmentId};
use image::Rgb;

const SEGMENT_COLOR: Rgb<u8> = Rgb([0xaa, 0xaa, 0xaa]);

/// A thin connector joining two nodes, part of a parent link.
/// Segments are only visible at road-overview zoom levels.
pub struct Segment {
    /// The segment ID.
    id: SegmentId,
    /// The link this segment belongs to.
    link: LinkId,
    /// The node the segment starts at.
    from: NodeId,
    /// The node the segment ends at.
    to: NodeId,
}

/// The attributes of a segment.
pub struct SegmentAttributes {
    /// The link this segment belongs to.
    pub link: LinkId,
    /// The node the segment starts at.
    pub from: NodeId,
    /// The node the segment ends at.
    pub to: NodeId,
}

impl Segment {
    /// Creates a new segment.
    pub(crate) fn new(id: SegmentId, attribs: &SegmentAttributes) -> Self {
        Self {
            id,
            link: attribs.link,
            from: attribs.from,
            to: attribs.to,
        }
    }

    /// Gets the segment ID.
    pub fn id(&self) -> SegmentId {
        self.id
    }

    /// Gets the link this segment belongs to.
    pub fn link(&self) -> LinkId {
        self.link
    }

    /// Draws the segment as a thin line between its endpoint nodes.
    pub(crate) fn draw(&self, canvas: &mut Canvas, ctx: &ScaleContext, nodes: &NodeSet) {
        let (Some(from), Some(to)) = (nodes.get(self.from), nodes.get(self.to)) else {
            return;
        };
        canvas.line(from.pos().pixel(ctx), to.pos().pixel(ctx), SEGMENT_COLOR);
    }
}
