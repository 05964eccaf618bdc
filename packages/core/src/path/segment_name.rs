use crate::error::SegmentNameError;

/// Check the shape of a segment token
///
/// A segment name is exactly three bytes: an uppercase ASCII letter
/// followed by two uppercase ASCII letters or digits. Length is checked
/// first, so a multi-byte character counts against it.
///
/// # Errors
///
/// Returns the `SegmentNameError` variant describing the first problem found.
pub fn parse_segment_name(name: &str) -> Result<&str, SegmentNameError> {
    if name.len() != 3 {
        return Err(SegmentNameError::WrongLength);
    }
    for (i, ch) in name.chars().enumerate() {
        if i == 0 {
            if !ch.is_ascii_uppercase() {
                return Err(SegmentNameError::FirstCharNotUppercase);
            }
        } else if !(ch.is_ascii_uppercase() || ch.is_ascii_digit()) {
            return Err(SegmentNameError::NotAlphanumeric);
        }
    }
    Ok(name)
}
