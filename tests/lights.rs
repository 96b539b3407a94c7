//! Tests for the traffic light color-code contract.

use traffic_viz::{LightColor, VizError};

/// Codes 1-3 decode to red, amber and green.
#[test]
fn decodes_known_codes() {
    assert_eq!(LightColor::from_code(1).unwrap(), LightColor::Red);
    assert_eq!(LightColor::from_code(2).unwrap(), LightColor::Amber);
    assert_eq!(LightColor::from_code(3).unwrap(), LightColor::Green);
}

/// Codes outside the contract are rejected with the offending value.
#[test]
fn rejects_unknown_codes() {
    assert!(matches!(
        LightColor::from_code(0),
        Err(VizError::UnknownLightCode(0))
    ));
    assert!(matches!(
        LightColor::from_code(9),
        Err(VizError::UnknownLightCode(9))
    ));
}

/// Each state renders in a distinct color.
#[test]
fn states_render_distinctly() {
    assert_ne!(LightColor::Red.rgb(), LightColor::Green.rgb());
    assert_ne!(LightColor::Red.rgb(), LightColor::Amber.rgb());
    assert_ne!(LightColor::Amber.rgb(), LightColor::Green.rgb());
}
