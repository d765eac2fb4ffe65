/// One rejected field and the reason it was rejected.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// The set of field errors a submission was rejected with.
/// Always holds at least one entry: validation collects every violation
/// instead of stopping at the first, so a caller fixing their payload sees
/// the whole picture in one round trip.
#[derive(Debug, thiserror::Error)]
#[error("invalid contact submission, rejected fields: {}", .0.iter().map(|e| e.field).collect::<Vec<_>>().join(", "))]
pub struct ValidationError(Vec<FieldError>);

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self(errors)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}
