use super::model::{Gender, VoicePersona};

/// The shipped persona catalog. Order matters: it is the order voices are
/// listed to the user, and the first entry is the default voice.
pub const PERSONAS: &[VoicePersona] = &[
    VoicePersona {
        voice_id: "Puck",
        label: "YouTube Narrator",
        name: "Energetic Narrator",
        description: "Confident and lively. Perfect for engaging digital content.",
        gender: Gender::Male,
        instruction: "Act as a professional YouTube narrator. Your voice must be confident, engaging, and slightly energetic. Use natural upward inflections at the end of interesting points and maintain a brisk but perfectly clear human pace.",
    },
    VoicePersona {
        voice_id: "Kore",
        label: "Storyteller",
        name: "Warm Storyteller",
        description: "Warm, emotional, and deeply engaging for long-form narratives.",
        gender: Gender::Female,
        instruction: "Act as a professional audiobook narrator. Your voice should be warm, rich, and emotional. Use expressive pauses and a gentle, inviting tone. Let your voice slightly reflect the mood of the story as it unfolds.",
    },
    VoicePersona {
        voice_id: "Fenrir",
        label: "Academic Tutor",
        name: "Clear Teacher",
        description: "Methodical and articulate. Ideal for technical lessons.",
        gender: Gender::Male,
        instruction: "Act as a university professor. Your voice must be slow, clear, and focused on articulation. Use methodical pacing with short pauses after complex terms to allow for listener comprehension. Maintain a respectful, intellectual gravitas.",
    },
    VoicePersona {
        voice_id: "Zephyr",
        label: "School Teacher",
        name: "Patient Educator",
        description: "Clear, patient, and nurturing for students.",
        gender: Gender::Female,
        instruction: "Act as a kind elementary school teacher. Your voice should be slow, very clear, and patient. Use a nurturing, melodic tone and emphasize key words softly. Include natural, gentle breaths between sentences.",
    },
    VoicePersona {
        voice_id: "Puck",
        label: "EduTuber",
        name: "Engaging Educator",
        description: "Enthusiastic and clear. Great for educational videos.",
        gender: Gender::Male,
        instruction: "Act as a high-energy educational content creator. Be enthusiastic but maintain total clarity. Your voice should sound like you are genuinely excited about the topic you are explaining.",
    },
    VoicePersona {
        voice_id: "Zephyr",
        label: "Zen Guide",
        name: "Meditation Coach",
        description: "Soft, airy, and incredibly calm for relaxation.",
        gender: Gender::Female,
        instruction: "Act as a meditation guide. Use a very low, soft, and airy tone. Speak with significant breathiness and long, soothing pauses. Your voice should feel like a gentle whisper intended to induce total relaxation.",
    },
    VoicePersona {
        voice_id: "Charon",
        label: "News Anchor",
        name: "Professional News",
        description: "Neutral, authoritative, and perfectly objective.",
        gender: Gender::Male,
        instruction: "Act as a veteran news anchor. Your tone must be professional, neutral, and authoritative. Avoid emotional exaggeration. Use a steady, rhythmic cadence that conveys facts with absolute confidence.",
    },
    VoicePersona {
        voice_id: "Kore",
        label: "App Guide",
        name: "Friendly Assistant",
        description: "Polite and conversational for interfaces.",
        gender: Gender::Female,
        instruction: "Act as a friendly digital concierge. Your voice should be polite, helpful, and naturally conversational. Use a bright, pleasant tone and sound as if you are smiling while speaking.",
    },
    VoicePersona {
        voice_id: "Fenrir",
        label: "Hindi Professor",
        name: "Formal Hindi",
        description: "Formal and academic Hindi delivery.",
        gender: Gender::Male,
        instruction: "Act as a formal Hindi instructor. Your delivery must be slow and articulate, utilizing pure and correct pronunciation. Maintain a respectful, academic, and traditional tone.",
    },
    VoicePersona {
        voice_id: "Charon",
        label: "YouTube Teacher",
        name: "Confident Tutor",
        description: "Authoritative yet accessible for tutorials.",
        gender: Gender::Male,
        instruction: "Act as an expert tutorial lead. Your voice should be slow, clear, and exceptionally confident. Use a grounded tone that reassures the student they are learning from a master of the craft.",
    },
    VoicePersona {
        voice_id: "Charon",
        label: "Crime Storyteller",
        name: "Terror Narrator",
        description: "Very low, dark, and terrifying. Cold and unsettling.",
        gender: Gender::Male,
        instruction: "Act as a suspense narrator in a horror documentary. Your voice must be very low, dark, and terrifying. Speak with a cold, threatening, and unsettling texture. Use long, heavy pauses and audible, shallow breaths. Every sentence should feel like a sinister warning. Avoid all warmth or friendliness; your voice should sound like a shadow in a dark room.",
    },
];

pub fn default_persona() -> &'static VoicePersona {
    &PERSONAS[0]
}

/// Look a persona up by its label, ignoring case.
pub fn find_by_label(label: &str) -> Option<&'static VoicePersona> {
    PERSONAS
        .iter()
        .find(|persona| persona.label.eq_ignore_ascii_case(label))
}
