//! Tests that the compositor draws each layer at the right zoom tier.
//!
//! Layers are probed by sampling buffer pixels at world positions chosen to
//! land on integral pixel coordinates, away from any other geometry.

use image::Rgb;
use traffic_viz::math::Point2d;
use traffic_viz::{
    AgentTick, Approach, CrossingAttributes, IntersectionId, LaneMarkingAttributes,
    LightColor, LinkAttributes, NodeAttributes, RoadNetwork, SegmentAttributes,
    SignalLineTick, SimulationResults, Tick, Turn, Visualizer,
};

const WHITE: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
const VIEW: u32 = 100;

/// A network whose bounding box is pinned to (0,0)-(100,100) by two
/// bidirectional corner nodes.
fn anchored_network() -> RoadNetwork {
    let mut network = RoadNetwork::new();
    network.add_node(&NodeAttributes {
        pos: Point2d::new(0.0, 0.0),
        is_uni: false,
    });
    network.add_node(&NodeAttributes {
        pos: Point2d::new(100.0, 100.0),
        is_uni: false,
    });
    network
}

/// Samples the buffer pixel a world position maps to, offset by `dy` pixels.
fn pixel_at(vis: &Visualizer, world: Point2d, dy: f32) -> Rgb<u8> {
    let (x, y) = vis.scale_context().to_pixel(world);
    *vis.image().get_pixel(x.round() as u32, (y + dy).round() as u32)
}

#[test]
fn unidirectional_nodes_hide_at_lane_zoom() {
    let mut network = anchored_network();
    network.add_node(&NodeAttributes {
        pos: Point2d::new(50.0, 50.0),
        is_uni: true,
    });
    let mut vis = Visualizer::new(network, SimulationResults::new(), 1.0, VIEW, VIEW);
    assert_ne!(pixel_at(&vis, Point2d::new(50.0, 50.0), 0.0), WHITE);

    vis.redraw_at_scale(2.0);
    assert_eq!(pixel_at(&vis, Point2d::new(50.0, 50.0), 0.0), WHITE);
}

#[test]
fn bidirectional_nodes_draw_at_every_zoom() {
    let mut network = anchored_network();
    network.add_node(&NodeAttributes {
        pos: Point2d::new(50.0, 50.0),
        is_uni: false,
    });
    let mut vis = Visualizer::new(network, SimulationResults::new(), 1.0, VIEW, VIEW);
    assert_ne!(pixel_at(&vis, Point2d::new(50.0, 50.0), 0.0), WHITE);

    vis.redraw_at_scale(2.0);
    assert_ne!(pixel_at(&vis, Point2d::new(50.0, 50.0), 0.0), WHITE);
}

#[test]
fn segments_only_draw_on_road_overview() {
    let mut network = anchored_network();
    let a = network.add_node(&NodeAttributes {
        pos: Point2d::new(20.0, 20.0),
        is_uni: false,
    });
    let b = network.add_node(&NodeAttributes {
        pos: Point2d::new(80.0, 20.0),
        is_uni: false,
    });
    let c = network.add_node(&NodeAttributes {
        pos: Point2d::new(20.0, 61.0),
        is_uni: false,
    });
    let d = network.add_node(&NodeAttributes {
        pos: Point2d::new(80.0, 61.0),
        is_uni: false,
    });
    let road = network.add_link(&LinkAttributes {
        name: "High St",
        start: a,
        end: b,
    });
    // A segment whose geometry detours away from its parent link's chord.
    network.add_segment(&SegmentAttributes {
        link: road,
        from: c,
        to: d,
    });

    let mut vis = Visualizer::new(network, SimulationResults::new(), 1.0, VIEW, VIEW);
    assert_ne!(pixel_at(&vis, Point2d::new(50.0, 61.0), 0.0), WHITE);

    vis.redraw_at_scale(2.0);
    assert_eq!(pixel_at(&vis, Point2d::new(50.0, 61.0), 0.0), WHITE);
}

#[test]
fn links_draw_at_every_zoom() {
    let mut network = anchored_network();
    let a = network.add_node(&NodeAttributes {
        pos: Point2d::new(20.0, 20.0),
        is_uni: false,
    });
    let b = network.add_node(&NodeAttributes {
        pos: Point2d::new(80.0, 20.0),
        is_uni: false,
    });
    network.add_link(&LinkAttributes {
        name: "High St",
        start: a,
        end: b,
    });

    let mut vis = Visualizer::new(network, SimulationResults::new(), 1.0, VIEW, VIEW);
    assert_ne!(pixel_at(&vis, Point2d::new(50.0, 20.0), 0.0), WHITE);

    vis.redraw_at_scale(2.0);
    assert_ne!(pixel_at(&vis, Point2d::new(50.0, 20.0), 0.0), WHITE);
}

#[test]
fn lane_detail_only_draws_above_critical_zoom() {
    let mut network = anchored_network();
    network.add_lane_marking(&LaneMarkingAttributes {
        points: &[Point2d::new(30.0, 39.0), Point2d::new(70.0, 39.0)],
    });
    network.add_crossing(&CrossingAttributes {
        points: &[Point2d::new(30.0, 72.0), Point2d::new(70.0, 72.0)],
    });

    let mut vis = Visualizer::new(network, SimulationResults::new(), 1.0, VIEW, VIEW);
    assert_eq!(pixel_at(&vis, Point2d::new(50.0, 39.0), 0.0), WHITE);
    assert_eq!(pixel_at(&vis, Point2d::new(50.0, 72.0), 0.0), WHITE);

    vis.redraw_at_scale(2.0);
    assert_ne!(pixel_at(&vis, Point2d::new(50.0, 39.0), 0.0), WHITE);
    assert_ne!(pixel_at(&vis, Point2d::new(50.0, 72.0), 0.0), WHITE);
}

#[test]
fn vehicle_lights_take_tick_colors() {
    let mut network = anchored_network();
    let intersection = network.add_intersection();
    network.add_signal_line(
        intersection,
        Approach::A,
        Turn::Straight,
        Point2d::new(40.0, 50.0),
        Point2d::new(60.0, 50.0),
    );

    let mut signal = SignalLineTick::new(intersection);
    signal.set_vehicle_lights(
        Approach::A,
        &[LightColor::Red, LightColor::Amber, LightColor::Green],
    );
    let mut tick = Tick::new();
    tick.insert_signal(signal);
    let mut results = SimulationResults::new();
    results.push_tick(tick);

    let mut vis = Visualizer::new(network, results, 2.0, VIEW, VIEW);
    // The straight-turn line takes the middle light color.
    assert_eq!(
        pixel_at(&vis, Point2d::new(50.0, 50.0), 0.0),
        LightColor::Amber.rgb()
    );

    // The whole signal layer is gated by the zoom tier.
    vis.redraw_at_scale(1.0);
    assert_eq!(pixel_at(&vis, Point2d::new(50.0, 50.0), 0.0), WHITE);
}

#[test]
fn pedestrian_signals_pair_by_index() {
    let mut network = anchored_network();
    let crossing = network.add_crossing(&CrossingAttributes {
        points: &[Point2d::new(30.0, 72.0), Point2d::new(70.0, 72.0)],
    });
    let intersection = network.add_intersection();
    network.add_signal_crossing(intersection, crossing);

    let mut signal = SignalLineTick::new(intersection);
    signal.push_pedestrian_light(LightColor::Green);
    let mut tick = Tick::new();
    tick.insert_signal(signal);
    let mut results = SimulationResults::new();
    results.push_tick(tick);

    let vis = Visualizer::new(network, results, 2.0, VIEW, VIEW);
    // The signal disc extends above the crossing's own polyline.
    assert_eq!(
        pixel_at(&vis, Point2d::new(50.0, 72.0), -3.0),
        LightColor::Green.rgb()
    );
}

#[test]
fn mismatched_pedestrian_lights_skip_the_layer() {
    let mut network = anchored_network();
    let crossing = network.add_crossing(&CrossingAttributes {
        points: &[Point2d::new(30.0, 72.0), Point2d::new(70.0, 72.0)],
    });
    let intersection = network.add_intersection();
    network.add_signal_crossing(intersection, crossing);

    // Two lights for one crossing: inconsistent tick data.
    let mut signal = SignalLineTick::new(intersection);
    signal.push_pedestrian_light(LightColor::Green);
    signal.push_pedestrian_light(LightColor::Red);
    let mut tick = Tick::new();
    tick.insert_signal(signal);
    let mut results = SimulationResults::new();
    results.push_tick(tick);

    let vis = Visualizer::new(network, results, 2.0, VIEW, VIEW);
    assert_eq!(pixel_at(&vis, Point2d::new(50.0, 72.0), -3.0), WHITE);
}

#[test]
fn agents_draw_at_every_zoom() {
    let mut tick = Tick::new();
    tick.insert_agent(AgentTick::new(7, Point2d::new(50.0, 30.0), 0.0));
    let mut results = SimulationResults::new();
    results.push_tick(tick);

    let mut vis = Visualizer::new(anchored_network(), results, 1.0, VIEW, VIEW);
    assert_ne!(pixel_at(&vis, Point2d::new(50.0, 30.0), 0.0), WHITE);

    vis.redraw_at_scale(2.0);
    assert_ne!(pixel_at(&vis, Point2d::new(50.0, 30.0), 0.0), WHITE);
}

#[test]
fn unknown_intersection_in_tick_is_skipped() {
    let network = anchored_network();
    let mut signal = SignalLineTick::new(IntersectionId::default());
    signal.push_pedestrian_light(LightColor::Green);
    let mut tick = Tick::new();
    tick.insert_signal(signal);
    let mut results = SimulationResults::new();
    results.push_tick(tick);

    // The stale reference is reported and the frame still renders.
    let vis = Visualizer::new(network, results, 2.0, VIEW, VIEW);
    assert_eq!(vis.image().dimensions(), (200, 200));
}

#[test]
fn static_map_renders_without_results() {
    let mut network = anchored_network();
    network.add_node(&NodeAttributes {
        pos: Point2d::new(50.0, 50.0),
        is_uni: false,
    });
    let vis = Visualizer::new(network, SimulationResults::new(), 2.0, VIEW, VIEW);
    assert_ne!(pixel_at(&vis, Point2d::new(50.0, 50.0), 0.0), WHITE);
}
