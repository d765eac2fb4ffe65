use unicode_segmentation::UnicodeSegmentation;

/// The optional company field of a contact submission, at most 120 graphemes
/// after trimming. "No company" is represented by `Option<ContactCompany>`
/// being `None` upstream, never by an empty `ContactCompany`.
#[derive(Debug, Clone)]
pub struct ContactCompany(String);

impl ContactCompany {
    pub fn parse(s: String) -> Result<ContactCompany, String> {
        let trimmed = s.trim();
        let length = trimmed.graphemes(true).count();

        if length > 120 {
            Err(format!(
                "company is too long: expected at most 120 characters, got {}",
                length
            ))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for ContactCompany {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
