#[cfg(feature = "debug")]
use serde_json::json;

#[cfg(feature = "debug")]
thread_local!(
    static DEBUG_FRAME: std::cell::RefCell<Vec<serde_json::Value>> = Default::default();
);

#[allow(unused)]
pub fn debug_line(p1: (f32, f32), p2: (f32, f32)) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "line",
            "p1": [p1.0, p1.1],
            "p2": [p2.0, p2.1],
        }))
    })
}

#[allow(unused)]
pub fn debug_disc(centre: (f32, f32), radius: i32) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "disc",
            "centre": [centre.0, centre.1],
            "radius": radius,
        }))
    })
}

#[allow(unused)]
pub fn debug_text(anchor: (f32, f32), text: &str) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "text",
            "anchor": [anchor.0, anchor.1],
            "text": text,
        }))
    })
}

#[cfg(feature = "debug")]
pub fn take_debug_frame() -> serde_json::Value {
    json!(DEBUG_FRAME.with(|frame| frame.take()))
}
