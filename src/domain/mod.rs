pub mod audio;
pub mod history;
pub mod speech;
pub mod voice;
