use crate::domain::speech::SpeechService;
use crate::error::{AppError, AppResult};

use super::HistoryCommands;

pub fn run(service: &mut SpeechService, command: HistoryCommands) -> AppResult<()> {
    match command {
        HistoryCommands::List => {
            let history = service.history();
            if history.is_empty() {
                println!("History is empty.");
                return Ok(());
            }
            for entry in history.entries() {
                println!(
                    "{}  {}  {:<16}  {}",
                    entry.id,
                    entry.created_at.format("%Y-%m-%d %H:%M"),
                    entry.voice_label,
                    entry.text
                );
            }
        }
        HistoryCommands::Delete { id } => {
            if service.delete_history_entry(id)? {
                println!("Deleted {}.", id);
            } else {
                return Err(AppError::InvalidInput(format!(
                    "No history entry with id {}",
                    id
                )));
            }
        }
        HistoryCommands::Clear => {
            let removed = service.clear_history()?;
            if removed == 1 {
                println!("Removed 1 entry.");
            } else {
                println!("Removed {} entries.", removed);
            }
        }
    }
    Ok(())
}
