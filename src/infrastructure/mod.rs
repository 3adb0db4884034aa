pub mod config;
pub mod encoders;
pub mod playback;
pub mod repositories;
