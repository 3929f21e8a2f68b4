//! Scripted command sequences for headless runs (`--pan l,l,f,add`).

use hexscape_world::{PanDirection, ViewerCommand};

use crate::error::AppError;

/// Parses one token. Accepts single letters or full words, any case.
pub fn parse_command(token: &str) -> Result<ViewerCommand, AppError> {
    let command = match token.trim().to_ascii_lowercase().as_str() {
        "l" | "left" => ViewerCommand::Pan(PanDirection::Left),
        "r" | "right" => ViewerCommand::Pan(PanDirection::Right),
        "f" | "forward" => ViewerCommand::Pan(PanDirection::Forward),
        "b" | "back" => ViewerCommand::Pan(PanDirection::Back),
        "add" => ViewerCommand::AddChunk,
        _ => return Err(AppError::UnknownCommand(token.to_string())),
    };
    Ok(command)
}

/// Parses every token, skipping empty ones.
pub fn parse_script<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<ViewerCommand>, AppError> {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .filter(|t| !t.trim().is_empty())
        .map(parse_command)
        .collect()
}
