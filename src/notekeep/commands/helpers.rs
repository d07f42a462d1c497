use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotekeepError, Result};
use crate::image::is_data_url;
use crate::model::{ImageUpdate, Note, NoteId};

/// Turns a missing note into `Ok(None)` so callers can report it as a no-op.
pub fn found(result: Result<Note>) -> Result<Option<Note>> {
    match result {
        Ok(note) => Ok(Some(note)),
        Err(NotekeepError::NoteNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn not_found(id: NoteId) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning(format!("Note {} not found", id)))
}

pub fn validate_image(image: Option<&str>) -> Result<()> {
    match image {
        Some(data) if !is_data_url(data) => Err(NotekeepError::Api(
            "Image must be a base64 data URL".to_string(),
        )),
        _ => Ok(()),
    }
}

pub fn validate_image_update(update: &ImageUpdate) -> Result<()> {
    match update {
        ImageUpdate::SetTo(data) => validate_image(Some(data)),
        _ => Ok(()),
    }
}
