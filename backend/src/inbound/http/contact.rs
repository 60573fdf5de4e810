//! Public contact form endpoint.
//!
//! ```text
//! POST /api/v1/contact
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ContactForm;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Success message shown to the visitor once the submission is stored.
pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";

const SAVE_FAILED_MESSAGE: &str =
    "We could not record your message right now. Please try again later.";

/// Contact form payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFormBody {
    #[schema(example = "Asha Rao")]
    pub full_name: String,
    #[schema(example = "asha@example.com")]
    pub email: String,
    #[schema(example = "+91 98765 43210")]
    pub phone_number: String,
    pub company: Option<String>,
    #[schema(example = "27AAPFU0939F1ZV")]
    pub gst_number: Option<String>,
    pub subject: String,
    pub message: String,
}

impl From<ContactFormBody> for ContactForm {
    fn from(body: ContactFormBody) -> Self {
        Self {
            full_name: body.full_name,
            email: body.email,
            phone_number: body.phone_number,
            company: body.company,
            gst_number: body.gst_number,
            subject: body.subject,
            message: body.message,
        }
    }
}

/// Outcome of a contact submission.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    /// True when the message reached the inbox.
    pub success: bool,
    pub message: String,
    /// Reference quoted back to the visitor.
    pub reference_id: String,
}

/// Submit the contact form.
#[utoipa::path(
    post,
    path = "/api/v1/contact",
    request_body = ContactFormBody,
    responses(
        (status = 200, description = "Submission processed", body = ContactResponse),
        (status = 400, description = "Validation failed", body = ErrorSchema)
    ),
    tags = ["contact"],
    operation_id = "submitContact"
)]
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    body: web::Json<ContactFormBody>,
) -> ApiResult<HttpResponse> {
    let receipt = state.contact.submit(body.into_inner().into()).await?;
    let message = if receipt.saved {
        THANK_YOU_MESSAGE
    } else {
        SAVE_FAILED_MESSAGE
    };
    Ok(HttpResponse::Ok().json(ContactResponse {
        success: receipt.saved,
        message: message.to_owned(),
        reference_id: receipt.reference_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error;
    use crate::domain::ports::ContactReceipt;
    use crate::inbound::http::test_utils::TestPorts;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn app(
        ports: TestPorts,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(ports.into_state()))
            .service(web::scope("/api/v1").service(submit_contact))
    }

    fn payload() -> Value {
        json!({
            "fullName": "Asha Rao",
            "email": "asha@example.com",
            "phoneNumber": "+91 98765 43210",
            "gstNumber": "27AAPFU0939F1ZV",
            "subject": "Quote request",
            "message": "Please call me about cutting discs."
        })
    }

    #[rstest]
    #[case(true, THANK_YOU_MESSAGE)]
    #[case(false, SAVE_FAILED_MESSAGE)]
    #[actix_web::test]
    async fn success_mirrors_the_inbox_write(#[case] saved: bool, #[case] expected: &str) {
        let mut ports = TestPorts::default();
        ports
            .contact
            .expect_submit()
            .withf(|form| {
                form.full_name == "Asha Rao"
                    && form.gst_number.as_deref() == Some("27AAPFU0939F1ZV")
                    && form.company.is_none()
            })
            .times(1)
            .returning(move |_| {
                Ok(ContactReceipt {
                    saved,
                    reference_id: "ref-1".to_owned(),
                })
            });
        let app = actix_test::init_service(app(ports)).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/contact")
            .set_json(payload())
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["success"], saved);
        assert_eq!(body["message"], expected);
        assert_eq!(body["referenceId"], "ref-1");
    }

    #[actix_web::test]
    async fn violations_are_400_with_details() {
        let mut ports = TestPorts::default();
        ports.contact.expect_submit().returning(|_| {
            Err(Error::invalid_request("Validation failed: Full name is required")
                .with_details(json!({"violations": ["Full name is required"]})))
        });
        let app = actix_test::init_service(app(ports)).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/contact")
            .set_json(json!({}))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["details"]["violations"][0], "Full name is required");
    }
}
