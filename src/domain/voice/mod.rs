pub mod catalog;
pub mod model;

pub use catalog::{default_persona, find_by_label, PERSONAS};
pub use model::{Gender, VoicePersona};
