use validator::ValidateEmail;

#[derive(Debug, Clone)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Returns a `ContactEmail` if `s` satisfies standard email syntax,
    /// an explanatory error message otherwise.
    pub fn parse(s: String) -> Result<ContactEmail, String> {
        let trimmed = s.trim().to_string();
        if trimmed.validate_email() {
            Ok(Self(trimmed))
        } else {
            Err(format!("`{}` is not a valid email address", s))
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
