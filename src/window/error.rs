use super::family::WindowFamily;

/// Error while describing a window.
///
/// Evaluation itself never fails; these only come up when a window is
/// described by untyped input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WindowError {
    /// The name does not match any window family.
    #[error("Unknown window family `{0}`")]
    UnknownFamily(String),
    /// The numeric tag is outside `1..=14`.
    #[error("Window type tag {0} is out of range, expected 1..=14")]
    UnknownTag(u8),
    /// The shape parameter is NaN or infinite.
    #[error("Shape parameter of {family} window must be finite, got {value}")]
    InvalidShapeParameter { family: WindowFamily, value: f64 },
    /// The text form could not be parsed.
    #[error("Failed to parse window spec: {0}")]
    Parse(String),
}
