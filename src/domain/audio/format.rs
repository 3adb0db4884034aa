use std::fmt;

/// Container formats the export encoder can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    Wav,
}

impl AudioFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::Wav => "audio/wav",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Wav => "wav",
        }
    }

    /// File name used when the user exports without naming a target.
    pub fn default_export_filename(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "voxpro-tts-export.mp3",
            AudioFormat::Wav => "voxpro-tts-export.wav",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Encoded audio bytes plus the container they are in.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedAudio {
    pub format: AudioFormat,
    pub bytes: Vec<u8>,
}
