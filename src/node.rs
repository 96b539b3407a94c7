use crate::canvas::{Canvas, Drawable};
use crate::math::Point2d;
use crate::scale::{ScaleContext, ScaledPoint};
use crate::NodeId;
use image::Rgb;

/// The radius of a node dot in pixels.
const NODE_RADIUS: i32 = 5;

const NODE_FILL: Rgb<u8> = Rgb([0xff, 0x88, 0x22]);
const UNI_OUTLINE: Rgb<u8> = Rgb([0x00, 0x00, 0xff]);
const BI_OUTLINE: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);

/// A point where links meet or end.
pub struct Node {
    /// The node ID.
    id: NodeId,
    /// The node's world position.
    pos: ScaledPoint,
    /// Whether the node joins traffic in one direction only.
    /// Unidirectional nodes are hidden at street-level zoom to reduce clutter.
    is_uni: bool,
}

/// The attributes of a node.
pub struct NodeAttributes {
    /// The node's world position.
    pub pos: Point2d,
    /// Whether the node joins traffic in one direction only.
    pub is_uni: bool,
}

impl Node {
    /// Creates a new node.
    pub(crate) fn new(id: NodeId, attribs: &NodeAttributes) -> Self {
        Self {
            id,
            pos: attribs.pos.into(),
            is_uni: attribs.is_uni,
        }
    }

    /// Gets the node ID.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Gets the node's position.
    pub fn pos(&self) -> &ScaledPoint {
        &self.pos
    }

    /// Whether the node is unidirectional.
    pub fn is_uni(&self) -> bool {
        self.is_uni
    }
}

impl Drawable for Node {
    fn draw(&self, canvas: &mut Canvas, ctx: &ScaleContext) {
        let pos = self.pos.pixel(ctx);
        let outline = if self.is_uni { UNI_OUTLINE } else { BI_OUTLINE };
        canvas.filled_circle(pos, NODE_RADIUS, NODE_FILL);
        canvas.hollow_circle(pos, NODE_RADIUS, outline);
    }
}
