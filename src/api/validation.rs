use super::ApiError;
use crate::domain::MediaId;
use crate::parser::parse_media_id;

/// Path segments must be bare numeric ids.
pub fn validate_media_id(raw: &str) -> Result<MediaId, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::validation(format!(
            "Invalid media ID: {raw}. ID must be a positive integer"
        )));
    }
    parse_media_id(trimmed).map_err(ApiError::from)
}

pub fn validate_link(link: &str) -> Result<MediaId, ApiError> {
    parse_media_id(link).map_err(ApiError::from)
}
