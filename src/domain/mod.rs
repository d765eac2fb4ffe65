mod contact_company;
mod contact_email;
mod contact_message;
mod contact_name;
mod contact_submission;
mod validation;

pub use contact_company::ContactCompany;
pub use contact_email::ContactEmail;
pub use contact_message::{ContactMessage, MessageLimits};
pub use contact_name::ContactName;
pub use contact_submission::ContactSubmission;
pub use validation::{FieldError, ValidationError};
