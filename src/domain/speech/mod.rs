pub mod dto;
pub mod error;
pub mod service;
pub mod settings;
pub mod status;

pub use dto::{GenerationOutcome, GenerationRequest, PreviewOutcome, SynthesisRequest};
pub use error::SpeechServiceError;
pub use service::SpeechService;
pub use settings::{Pitch, SpeechSettings, MAX_SPEED, MIN_SPEED};
pub use status::GenerationStatus;
