use crate::domain::{ContactCompany, ContactEmail, ContactMessage, ContactName};

/// A contact submission that made it through validation. Every field already
/// satisfies its constraints; there is no invariant left for this struct to
/// protect beyond what the newtypes guarantee.
#[derive(Debug)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub company: Option<ContactCompany>,
    pub email: ContactEmail,
    pub message: ContactMessage,
}
