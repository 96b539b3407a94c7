//! Tests for the progress-event channel.

use assert_approx_eq::assert_approx_eq;
use traffic_viz::math::Point2d;
use traffic_viz::{progress, NodeAttributes, RoadNetwork, SimulationResults, Visualizer};

/// Repaints report monotone layer progress, ending at completion.
#[test]
fn repaints_report_layer_progress() {
    let mut network = RoadNetwork::new();
    network.add_node(&NodeAttributes {
        pos: Point2d::new(0.0, 0.0),
        is_uni: false,
    });
    network.add_node(&NodeAttributes {
        pos: Point2d::new(100.0, 100.0),
        is_uni: false,
    });

    let (tx, rx) = progress::channel();
    let mut vis = Visualizer::new(network, SimulationResults::new(), 1.0, 100, 100);
    vis.set_progress_sink(tx);
    vis.redraw_at_curr_scale();

    let updates: Vec<_> = rx.try_iter().collect();
    assert!(!updates.is_empty());
    for pair in updates.windows(2) {
        assert!(pair[0].value <= pair[1].value);
    }
    let last = updates.last().unwrap();
    assert_approx_eq!(last.value, 1.0);
    assert!(last.known_size);
}

/// The sender half may live on a worker thread.
#[test]
fn sender_crosses_threads() {
    let (tx, rx) = progress::channel();
    let worker = std::thread::spawn(move || {
        tx.send(progress::ProgressUpdate {
            value: 0.5,
            known_size: false,
            color: traffic_viz::image::Rgb([0, 0, 0]),
            caption: "loading".to_owned(),
        });
    });
    worker.join().unwrap();

    let update = rx.recv().unwrap();
    assert!(!update.known_size);
    assert_eq!(update.caption, "loading");
}
