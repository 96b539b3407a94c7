use thiserror::Error;

/// Errors surfaced to the embedding loader or UI.
#[derive(Error, Debug)]
pub enum VizError {
    /// A traffic light color code outside the simulation-result contract.
    #[error("unknown traffic light color code: {0}")]
    UnknownLightCode(i32),

    /// The supplied label font data could not be parsed.
    #[error("failed to parse label font data")]
    InvalidFont,
}
