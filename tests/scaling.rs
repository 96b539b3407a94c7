//! Tests for the world-to-pixel scale computation.

use assert_approx_eq::assert_approx_eq;
use traffic_viz::math::Point2d;
use traffic_viz::{NodeAttributes, RoadNetwork, ScaleContext, SimulationResults, Visualizer};

/// A network whose bounding box is pinned to (0,0)-(1000,1000).
fn corner_network() -> RoadNetwork {
    let mut network = RoadNetwork::new();
    network.add_node(&NodeAttributes {
        pos: Point2d::new(0.0, 0.0),
        is_uni: false,
    });
    network.add_node(&NodeAttributes {
        pos: Point2d::new(1000.0, 1000.0),
        is_uni: false,
    });
    network
}

/// The world box is padded by 5% per side and the buffer matches the view.
#[test]
fn pads_world_box_and_sizes_buffer() {
    let vis = Visualizer::new(corner_network(), SimulationResults::new(), 1.0, 500, 500);
    assert_eq!(vis.image().dimensions(), (500, 500));

    let ctx = vis.scale_context();
    assert_approx_eq!(ctx.world_top_left().x, -50.0);
    assert_approx_eq!(ctx.world_top_left().y, -50.0);
    assert_approx_eq!(ctx.world_bottom_right().x, 1050.0);
    assert_approx_eq!(ctx.world_bottom_right().y, 1050.0);
}

/// Each zoom step changes the zoom ratio by 10% and resizes the buffer.
#[test]
fn zoom_steps_are_ten_percent() {
    let mut vis = Visualizer::new(corner_network(), SimulationResults::new(), 1.0, 500, 500);
    vis.zoom_in(1);
    assert_approx_eq!(vis.zoom(), 1.10);
    assert_eq!(vis.image().dimensions(), (550, 550));
}

/// Negative step counts zoom out.
#[test]
fn negative_steps_zoom_out() {
    let mut vis = Visualizer::new(corner_network(), SimulationResults::new(), 1.0, 500, 500);
    vis.zoom_in(-2);
    assert_approx_eq!(vis.zoom(), 0.80);
    assert_eq!(vis.image().dimensions(), (400, 400));
}

/// A world point maps to pixels by linear interpolation in the padded box.
#[test]
fn interpolates_world_to_pixel() {
    let ctx = ScaleContext::new(
        1.0,
        Point2d::new(0.0, 0.0),
        Point2d::new(1000.0, 1000.0),
        500,
        500,
    );
    // The centre of the world maps to the centre of the buffer.
    let (x, y) = ctx.to_pixel(Point2d::new(500.0, 500.0));
    assert_approx_eq!(x as f64, 250.0);
    assert_approx_eq!(y as f64, 250.0);
    // The unpadded top-left corner sits 5% in from the buffer's corner.
    let (x, y) = ctx.to_pixel(Point2d::new(0.0, 0.0));
    assert_approx_eq!(x as f64, 500.0 * 50.0 / 1100.0, 1e-3);
    assert_approx_eq!(y as f64, 500.0 * 50.0 / 1100.0, 1e-3);
}

/// A non-positive zoom is a caller error that degenerates to an empty buffer.
#[test]
fn non_positive_zoom_degenerates_to_empty_buffer() {
    let mut vis = Visualizer::new(corner_network(), SimulationResults::new(), 1.0, 500, 500);
    vis.redraw_at_scale(0.0);
    assert_eq!(vis.image().dimensions(), (0, 0));
}
