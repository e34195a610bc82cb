use actix_web::{HttpResponse, Responder, get, post, web};
use log::error;

use crate::domain::types::ReferenceId;
use crate::dto::intake::ValidationErrorResponse;
use crate::forms::intake::IntakeFormPayload;
use crate::models::config::ServerConfig;
use crate::repository::memory::InMemorySubmissionStore;
use crate::services::ServiceError;
use crate::services::intake::{get_submission, option_catalogs, submit_intake};

#[get("/v1/intake/options")]
pub async fn intake_options() -> impl Responder {
    HttpResponse::Ok().json(option_catalogs())
}

#[post("/v1/intake")]
pub async fn create_intake(
    payload: web::Json<IntakeFormPayload>,
    store: web::Data<InMemorySubmissionStore>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let delay = server_config.persistence_delay();
    match submit_intake(payload.into_inner(), store.get_ref(), delay).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(ServiceError::Validation(errors)) => {
            HttpResponse::UnprocessableEntity().json(ValidationErrorResponse { errors })
        }
        Err(ServiceError::Form(err)) => HttpResponse::BadRequest().body(err.to_string()),
        Err(ServiceError::SubmissionInFlight) => HttpResponse::Conflict().finish(),
        Err(err) => {
            error!("Failed to process intake submission: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/intake/{reference}")]
pub async fn show_intake(
    path: web::Path<String>,
    store: web::Data<InMemorySubmissionStore>,
) -> impl Responder {
    // A reference that cannot even parse was never issued.
    let reference = match path.into_inner().parse::<ReferenceId>() {
        Ok(reference) => reference,
        Err(_) => return HttpResponse::NotFound().finish(),
    };
    match get_submission(&reference, store.get_ref()) {
        Ok(submission) => HttpResponse::Ok().json(submission),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            error!("Failed to load submission {reference}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
