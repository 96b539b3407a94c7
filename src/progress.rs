use image::Rgb;
use std::sync::mpsc::{self, Receiver, Sender};

/// A progress notification for a long-running load or redraw operation.
///
/// The meaning of `value` and `known_size` is defined by the consuming
/// presentation widget, not by this crate.
#[derive(Clone, Debug)]
pub struct ProgressUpdate {
    /// The progress value, nominally in `0.0..=1.0` when the size is known.
    pub value: f64,
    /// Whether the total size of the operation is known.
    pub known_size: bool,
    /// The color the presentation widget should render in.
    pub color: Rgb<u8>,
    /// The caption to display.
    pub caption: String,
}

/// The sending half of a progress-event channel. Cheap to clone and safe to
/// hand to a worker thread; it never touches the network data or the pixel
/// buffer.
#[derive(Clone)]
pub struct ProgressSender {
    tx: Sender<ProgressUpdate>,
}

impl ProgressSender {
    /// Emits a progress event. Events sent after the receiver is dropped are
    /// discarded.
    pub fn send(&self, update: ProgressUpdate) {
        let _ = self.tx.send(update);
    }
}

/// Creates a progress-event channel. The producer side is given to the
/// loader or the [Visualizer](crate::Visualizer); the consumer side belongs
/// to the presentation layer.
pub fn channel() -> (ProgressSender, Receiver<ProgressUpdate>) {
    let (tx, rx) = mpsc::channel();
    (ProgressSender { tx }, rx)
}
