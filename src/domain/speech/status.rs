use std::fmt;

/// Global generation status. The speech service owns exactly one of these;
/// every transition goes through a service method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    Idle,
    Generating,
    Playing,
    Error,
}

impl fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationStatus::Idle => write!(f, "idle"),
            GenerationStatus::Generating => write!(f, "generating"),
            GenerationStatus::Playing => write!(f, "playing"),
            GenerationStatus::Error => write!(f, "error"),
        }
    }
}
