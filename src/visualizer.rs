use crate::canvas::{Canvas, Drawable, BACKGROUND};
use crate::error::VizError;
use crate::math::Point2d;
use crate::network::RoadNetwork;
use crate::progress::{ProgressSender, ProgressUpdate};
use crate::results::SimulationResults;
use crate::scale::ScaleContext;
use crate::NodeId;
use cgmath::MetricSpace;
use image::{Rgb, RgbImage};
use log::warn;
use rusttype::Font;

/// The zoom ratio above which the view switches from road-overview
/// rendering to lane-level rendering.
const ZOOM_IN_CRITICAL: f64 = 1.6;

/// The zoom multiplier applied per zoom step.
const ZOOM_STEP: f64 = 0.10;

/// The pixel radius within which a node is hit by a screen-position query.
const NEAR_THRESHOLD: f64 = 20.0;

/// The number of compositing layers, used for progress reporting.
const REDRAW_LAYERS: usize = 7;

const PROGRESS_COLOR: Rgb<u8> = Rgb([0x33, 0x66, 0x99]);

/// Renders a road network and its simulation results into a pixel buffer,
/// with zoom and frame-stepping.
///
/// The visualizer owns exactly one buffer at a time; every rescale discards
/// the old buffer and repaints into a fresh one sized to the new zoom.
pub struct Visualizer {
    /// The static network topology.
    network: RoadNetwork,
    /// The precomputed simulation results.
    results: SimulationResults,
    /// The index of the frame currently displayed.
    curr_frame_tick: usize,
    /// The pixel buffer all layers composite into.
    canvas: Canvas,
    /// The view width at 100% zoom.
    view_width: u32,
    /// The view height at 100% zoom.
    view_height: u32,
    /// The current zoom ratio.
    zoom: f64,
    /// The currently published scale context.
    ctx: ScaleContext,
    /// The font link name labels are drawn with, once the UI provides one.
    label_font: Option<Font<'static>>,
    /// Where repaint progress is reported, if anywhere.
    progress: Option<ProgressSender>,
    /// The draw primitives emitted by the previous repaint.
    #[cfg(feature = "debug")]
    debug: serde_json::Value,
}

impl Visualizer {
    /// Creates a visualizer bound to the given data sources and triggers the
    /// first scale computation.
    ///
    /// `results` may be empty, in which case the map renders statically and
    /// frame navigation is disabled.
    pub fn new(
        network: RoadNetwork,
        results: SimulationResults,
        initial_zoom: f64,
        view_width: u32,
        view_height: u32,
    ) -> Self {
        let ctx = ScaleContext::new(
            initial_zoom,
            network.top_left(),
            network.bottom_right(),
            view_width,
            view_height,
        );
        let canvas = Canvas::new(ctx.pixel_width(), ctx.pixel_height(), BACKGROUND);
        let mut vis = Self {
            network,
            results,
            curr_frame_tick: 0,
            canvas,
            view_width,
            view_height,
            zoom: initial_zoom,
            ctx,
            label_font: None,
            progress: None,
            #[cfg(feature = "debug")]
            debug: serde_json::Value::Null,
        };
        vis.redraw_at_curr_scale();
        vis
    }

    /// Rebinds the visualizer to new data sources and triggers the first
    /// scale computation at `initial_zoom`.
    pub fn set_source(
        &mut self,
        network: RoadNetwork,
        results: SimulationResults,
        initial_zoom: f64,
        view_width: u32,
        view_height: u32,
    ) {
        self.network = network;
        self.results = results;
        self.curr_frame_tick = 0;
        self.view_width = view_width;
        self.view_height = view_height;
        self.redraw_at_scale(initial_zoom);
    }

    /// Gets the current pixel buffer.
    pub fn image(&self) -> &RgbImage {
        self.canvas.image()
    }

    /// Gets the network being rendered.
    pub fn network(&self) -> &RoadNetwork {
        &self.network
    }

    /// Gets the simulation results being rendered.
    pub fn results(&self) -> &SimulationResults {
        &self.results
    }

    /// Gets the current zoom ratio.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Gets the currently published scale context.
    pub fn scale_context(&self) -> &ScaleContext {
        &self.ctx
    }

    /// Gets the index of the frame currently displayed.
    pub fn curr_frame_tick(&self) -> usize {
        self.curr_frame_tick
    }

    /// Displays the frame with the given index and repaints.
    /// Returns false, leaving the current frame unchanged, if the index is
    /// out of range or no results are loaded.
    pub fn set_curr_frame_tick(&mut self, frame: usize) -> bool {
        if frame >= self.results.tick_count() {
            return false;
        }
        self.curr_frame_tick = frame;
        self.redraw_at_curr_scale();
        true
    }

    /// Steps the displayed frame by the given amount; negative amounts step
    /// backwards. Returns false if the target frame is out of range.
    pub fn increment_curr_frame_tick(&mut self, amount: i32) -> bool {
        let target = self.curr_frame_tick as i64 + amount as i64;
        if target < 0 {
            return false;
        }
        self.set_curr_frame_tick(target as usize)
    }

    /// Zooms in by the given number of steps, each step increasing the zoom
    /// by 10%. Negative numbers zoom out.
    pub fn zoom_in(&mut self, steps: i32) {
        self.redraw_at_scale(self.zoom + self.zoom * steps as f64 * ZOOM_STEP);
    }

    /// Publishes a fresh scale context at the given zoom ratio, allocates a
    /// new buffer sized to it, and repaints.
    ///
    /// A non-positive `percent` is a caller error and produces a degenerate
    /// zero-size buffer.
    pub fn redraw_at_scale(&mut self, percent: f64) {
        self.zoom = percent;
        self.ctx = ScaleContext::new(
            percent,
            self.network.top_left(),
            self.network.bottom_right(),
            self.view_width,
            self.view_height,
        );
        self.canvas = Canvas::new(self.ctx.pixel_width(), self.ctx.pixel_height(), BACKGROUND);
        self.redraw_at_curr_scale();
    }

    /// Repaints the buffer at the current scale: a deterministic full redraw
    /// of all layers, back to front, each gated by the zoom tier.
    pub fn redraw_at_curr_scale(&mut self) {
        let zoomed_in = self.zoom > ZOOM_IN_CRITICAL;

        self.canvas.clear(BACKGROUND);
        self.report_progress(1, "cleared");

        // Nodes. At street-level zoom, unidirectional nodes are skipped.
        for node in self.network.iter_nodes() {
            if zoomed_in && node.is_uni() {
                continue;
            }
            node.draw(&mut self.canvas, &self.ctx);
        }
        self.report_progress(2, "nodes");

        // Segments only appear on the road overview.
        if !zoomed_in {
            for segment in self.network.iter_segments() {
                segment.draw(&mut self.canvas, &self.ctx, self.network.nodes());
            }
        }
        self.report_progress(3, "segments");

        for link in self.network.iter_links() {
            link.draw(&mut self.canvas, &self.ctx, self.network.nodes());
        }
        self.report_progress(4, "links");

        // Names go on last; each road is labelled once.
        if let Some(font) = &self.label_font {
            for id in self.network.labelled_links() {
                if let Some(link) = self.network.get_link(id) {
                    link.draw_name(&mut self.canvas, &self.ctx, self.network.nodes(), font);
                }
            }
        }
        self.report_progress(5, "labels");

        if zoomed_in {
            self.draw_lane_detail();
        }
        self.report_progress(6, "signals");

        if let Some(tick) = self.results.get_tick(self.curr_frame_tick) {
            for agent in tick.agents() {
                agent.draw(&mut self.canvas, &self.ctx);
            }
        }
        self.report_progress(7, "agents");

        #[cfg(feature = "debug")]
        {
            self.debug = crate::debug::take_debug_frame();
        }
    }

    /// Retrieves the node at the given screen position, or `None` if there is
    /// none within range. Nodes are scanned in iteration order and the first
    /// hit wins.
    pub fn node_at(&self, screen: Point2d) -> Option<NodeId> {
        self.network
            .iter_nodes()
            .find(|node| {
                let (x, y) = node.pos().pixel(&self.ctx);
                Point2d::new(x as f64, y as f64).distance(screen) <= NEAR_THRESHOLD
            })
            .map(|node| node.id())
    }

    /// Sets the font link name labels are drawn with, from raw font data.
    pub fn set_label_font(&mut self, font_data: Vec<u8>) -> Result<(), VizError> {
        let font = Font::try_from_vec(font_data).ok_or(VizError::InvalidFont)?;
        self.label_font = Some(font);
        Ok(())
    }

    /// Attaches a progress sink; subsequent repaints report layer-by-layer
    /// progress to it.
    pub fn set_progress_sink(&mut self, sink: ProgressSender) {
        self.progress = Some(sink);
    }

    /// Gets the draw primitives emitted by the previous repaint as a JSON array.
    #[cfg(feature = "debug")]
    pub fn debug(&mut self) -> serde_json::Value {
        self.debug.clone()
    }

    /// Draws the lane-level layers: lane markings, crossings, and the active
    /// tick's signal state.
    fn draw_lane_detail(&mut self) {
        for marking in self.network.iter_lane_markings() {
            marking.draw(&mut self.canvas, &self.ctx);
        }
        for crossing in self.network.iter_crossings() {
            crossing.draw(&mut self.canvas, &self.ctx);
        }

        let Some(tick) = self.results.get_tick(self.curr_frame_tick) else {
            return;
        };
        for signal in tick.signals() {
            let Some(intersection) = self.network.get_intersection(signal.intersection()) else {
                warn!(
                    "tick {} references unknown intersection {:?}",
                    self.curr_frame_tick,
                    signal.intersection()
                );
                continue;
            };

            intersection.draw_lights(&mut self.canvas, &self.ctx, signal);

            // Pedestrian lights pair with crossings positionally; a count
            // mismatch means the tick data is inconsistent with the network,
            // so the layer is skipped for this intersection.
            let crossings = intersection.crossings();
            let lights = signal.pedestrian_lights();
            if crossings.len() != lights.len() {
                warn!(
                    "intersection {:?}: {} pedestrian lights for {} crossings",
                    intersection.id(),
                    lights.len(),
                    crossings.len()
                );
                continue;
            }
            for (crossing_id, light) in crossings.iter().zip(lights) {
                if let Some(crossing) = self.network.get_crossing(*crossing_id) {
                    crossing.draw_signal(&mut self.canvas, &self.ctx, *light);
                }
            }
        }
    }

    /// Reports repaint progress to the attached sink, if any.
    fn report_progress(&self, layer: usize, caption: &str) {
        if let Some(sink) = &self.progress {
            sink.send(ProgressUpdate {
                value: layer as f64 / REDRAW_LAYERS as f64,
                known_size: true,
                color: PROGRESS_COLOR,
                caption: caption.to_owned(),
            });
        }
    }
}
