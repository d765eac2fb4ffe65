use unicode_segmentation::UnicodeSegmentation;

/// The name a visitor typed into the contact form.
/// Whitespace around it is stripped, and the trimmed value has to be between
/// 2 and 80 graphemes. `parse` is the only way to build one, so every
/// `ContactName` in the program already went through those checks.
#[derive(Debug, Clone)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse(s: String) -> Result<ContactName, String> {
        let trimmed = s.trim();
        // A grapheme is what a reader would call a single character, which may
        // span several bytes ("å" is two). Counting bytes instead would
        // reject perfectly reasonable non-ASCII names.
        let length = trimmed.graphemes(true).count();

        if (2..=80).contains(&length) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(format!(
                "`{}` is not a valid contact name: expected between 2 and 80 characters, got {}",
                s, length
            ))
        }
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
