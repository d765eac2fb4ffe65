use unicode_segmentation::UnicodeSegmentation;

/// Length bounds for the message body. Unlike the other fields these are not
/// hardcoded: the caller supplies them, normally from `ContactSettings` in
/// configuration.
#[derive(Debug, Clone, Copy)]
pub struct MessageLimits {
    pub min: usize,
    pub max: usize,
}

#[derive(Debug, Clone)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(s: String, limits: MessageLimits) -> Result<ContactMessage, String> {
        let trimmed = s.trim();
        let length = trimmed.graphemes(true).count();

        if (limits.min..=limits.max).contains(&length) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(format!(
                "message must be between {} and {} characters, got {}",
                limits.min, limits.max, length
            ))
        }
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
