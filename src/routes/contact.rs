use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};

use crate::{
    configuration::ContactSettings,
    domain::{
        ContactCompany, ContactEmail, ContactMessage, ContactName, ContactSubmission, FieldError,
        MessageLimits, ValidationError,
    },
    routes::error_chain_fmt,
};

/// The raw wire format of `POST /api/contact`. Everything is a plain string
/// here; turning it into a `ContactSubmission` is `validate_submission`'s job.
#[derive(serde::Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub company: Option<String>,
    pub email: String,
    pub message: String,
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// Same logic to get the full error chain on `Debug`
impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ContactError::Validation(e) => HttpResponse::build(self.status_code())
                .json(serde_json::json!({ "errors": e.errors() })),
        }
    }
}

/// `submit_contact` orchestrates the work to be done by calling the required
/// routines and translates their outcome into the proper response according
/// to the rules and conventions of HTTP.
#[tracing::instrument(
    name = "Handling a contact submission",
    // `form` is unwrapped inside fields() and `settings` is not worth displaying
    skip(form, settings),
    fields(
        contact_email = %form.email,
        contact_name = %form.name
    )
)]
pub async fn submit_contact(
    form: web::Json<ContactForm>,
    settings: web::Data<ContactSettings>,
) -> Result<HttpResponse, ContactError> {
    let submission = validate_submission(form.into_inner(), settings.message_limits())?;

    // TODO: hand the submission off to the email provider (Resend/SendGrid)
    // once one is picked; until then accepting it is all we do.
    tracing::info!(
        company = submission.company.as_ref().map(AsRef::as_ref),
        "Accepted a contact submission"
    );

    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
}

/// The pure validation step: checks every field and collects every violation,
/// so the caller learns about all of their mistakes in a single response
/// rather than one per request.
///
/// An absent company and a whitespace-only company both normalize to `None`.
fn validate_submission(
    form: ContactForm,
    limits: MessageLimits,
) -> Result<ContactSubmission, ValidationError> {
    let mut errors = Vec::new();

    let name = ContactName::parse(form.name)
        .map_err(|message| errors.push(FieldError { field: "name", message }));
    let company = form
        .company
        .filter(|c| !c.trim().is_empty())
        .map(|c| {
            ContactCompany::parse(c)
                .map_err(|message| errors.push(FieldError { field: "company", message }))
        })
        .transpose();
    let email = ContactEmail::parse(form.email)
        .map_err(|message| errors.push(FieldError { field: "email", message }));
    let message = ContactMessage::parse(form.message, limits)
        .map_err(|message| errors.push(FieldError { field: "message", message }));

    match (name, company, email, message) {
        (Ok(name), Ok(company), Ok(email), Ok(message)) => Ok(ContactSubmission {
            name,
            company,
            email,
            message,
        }),
        _ => Err(ValidationError::new(errors)),
    }
}
