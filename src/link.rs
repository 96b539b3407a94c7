use crate::canvas::Canvas;
use crate::scale::ScaleContext;
use crate::{LinkId, NodeId, NodeSet};
use image::Rgb;
use rusttype::Font;

/// The drawn width of a link in pixels.
const LINK_WIDTH: f32 = 2.0;

/// The height of a link name label in pixels.
const LABEL_HEIGHT: f32 = 12.0;

const LINK_COLOR: Rgb<u8> = Rgb([0x55, 0x55, 0x55]);
const LABEL_COLOR: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);

/// A named road connecting two nodes in one traversal direction.
pub struct Link {
    /// The link ID.
    id: LinkId,
    /// The road name, drawn as the link's label.
    name: String,
    /// The node the link starts at.
    start: NodeId,
    /// The node the link ends at.
    end: NodeId,
}

/// The attributes of a link.
pub struct LinkAttributes<'a> {
    /// The road name.
    pub name: &'a str,
    /// The node the link starts at.
    pub start: NodeId,
    /// The node the link ends at.
    pub end: NodeId,
}

impl Link {
    /// Creates a new link.
    pub(crate) fn new(id: LinkId, attribs: &LinkAttributes) -> Self {
        Self {
            id,
            name: attribs.name.to_owned(),
            start: attribs.start,
            end: attribs.end,
        }
    }

    /// Gets the link ID.
    pub fn id(&self) -> LinkId {
        self.id
    }

    /// Gets the road name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the node the link starts at.
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Gets the node the link ends at.
    pub fn end(&self) -> NodeId {
        self.end
    }

    /// The key under which this link's name label is deduplicated.
    /// Two links with the same name joining the same node pair share a key
    /// regardless of traversal direction, so the road is labelled once.
    pub(crate) fn label_key(&self) -> (&str, NodeId, NodeId) {
        if self.start < self.end {
            (&self.name, self.start, self.end)
        } else {
            (&self.name, self.end, self.start)
        }
    }

    /// Draws the link as a line between its endpoint nodes.
    pub(crate) fn draw(&self, canvas: &mut Canvas, ctx: &ScaleContext, nodes: &NodeSet) {
        let (Some(start), Some(end)) = (nodes.get(self.start), nodes.get(self.end)) else {
            return;
        };
        canvas.thick_line(start.pos().pixel(ctx), end.pos().pixel(ctx), LINK_COLOR, LINK_WIDTH);
    }

    /// Draws the link's name label at its midpoint.
    pub(crate) fn draw_name(
        &self,
        canvas: &mut Canvas,
        ctx: &ScaleContext,
        nodes: &NodeSet,
        font: &Font,
    ) {
        let (Some(start), Some(end)) = (nodes.get(self.start), nodes.get(self.end)) else {
            return;
        };
        let (x0, y0) = start.pos().pixel(ctx);
        let (x1, y1) = end.pos().pixel(ctx);
        let anchor = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
        canvas.text(anchor, &self.name, font, LABEL_HEIGHT, LABEL_COLOR);
    }
}
