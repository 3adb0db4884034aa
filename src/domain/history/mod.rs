pub mod model;

pub use model::{HistoryEntry, HistoryLog, HISTORY_LIMIT};
