pub mod base64;
pub mod buffer;
pub mod error;
pub mod format;
pub mod mp3;
pub mod pcm;
pub mod wav;

pub use buffer::AudioBuffer;
pub use error::AudioError;
pub use format::{AudioFormat, EncodedAudio};
pub use mp3::{Mp3BlockEncoder, Mp3EncoderFactory};
