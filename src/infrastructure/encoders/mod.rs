pub mod lame;

pub use lame::LameMp3EncoderFactory;
