use crate::domain::speech::SpeechSettings;
use crate::domain::voice::PERSONAS;

use super::VoicesArgs;

pub fn run(settings: &SpeechSettings, args: VoicesArgs) {
    println!("Available voices:");
    for persona in PERSONAS {
        let marker = if persona.label == settings.voice_label {
            " (selected)"
        } else {
            ""
        };
        println!(
            "- {} [{}, {}]{}: {}",
            persona.label, persona.name, persona.gender, marker, persona.description
        );
        if args.full {
            println!("    {}", persona.instruction);
        }
    }
}
