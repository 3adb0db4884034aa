use crate::domain::speech::{SpeechService, SpeechSettings};
use crate::error::{AppError, AppResult};

use super::SettingsCommands;

pub fn run(service: &mut SpeechService, command: SettingsCommands) -> AppResult<()> {
    match command {
        SettingsCommands::Show => print_settings(service.settings()),
        SettingsCommands::Set(args) => {
            if args.voice.is_none() && args.speed.is_none() && args.pitch.is_none() {
                return Err(AppError::InvalidInput(
                    "Nothing to change; pass --voice, --speed, or --pitch.".to_string(),
                ));
            }
            if let Some(label) = &args.voice {
                service.set_voice(label)?;
            }
            if let Some(speed) = args.speed {
                service.set_speed(speed)?;
            }
            if let Some(pitch) = args.pitch {
                service.set_pitch(pitch.into())?;
            }
            print_settings(service.settings());
        }
    }
    Ok(())
}

fn print_settings(settings: &SpeechSettings) {
    println!("Voice: {} ({})", settings.voice_label, settings.voice_id);
    println!("Speed: {}x", settings.speed);
    println!("Pitch: {}", settings.pitch);
}
