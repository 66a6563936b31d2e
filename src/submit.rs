//! Payload assembly and the account-creation collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::answers::FileUpload;
use crate::catalog::{Role, ids};
use crate::error::SubmitError;
use crate::session::WizardSession;

/// Seller-only payload block. Absent for buyers — the fields are omitted
/// from the transmission entirely, never sent empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerDetails {
    pub business_name: String,
    pub industry: String,
    pub specific: String,
    pub country: String,
    pub city: String,
    pub street_address: String,
    pub image: FileUpload,
}

/// Everything transmitted to the account service.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationPayload {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: String,
    pub phone: String,
    pub club: String,
    /// Directory record id. The UI works with the display name; the wire
    /// carries the identifier.
    pub profession_id: String,
    pub seller: Option<SellerDetails>,
}

/// Assemble the final payload from a completed session, resolving the
/// profession display name to its record id.
pub fn build_payload(session: &WizardSession) -> Result<RegistrationPayload, SubmitError> {
    if !session.is_complete() {
        return Err(SubmitError::Incomplete("review step not reached".into()));
    }
    let answers = session.answers();
    let role = answers
        .role()
        .ok_or_else(|| SubmitError::Incomplete("role not answered".into()))?;

    let profession_name = answers.text(ids::PROFESSION);
    let profession_id = session
        .sources()
        .profession_id_for(profession_name)
        .ok_or_else(|| SubmitError::UnknownProfession(profession_name.to_string()))?
        .to_string();

    let seller = match role {
        Role::Buy => None,
        Role::Sell => {
            let image = answers
                .file(ids::IMAGE)
                .cloned()
                .ok_or_else(|| SubmitError::Incomplete("business image not attached".into()))?;
            Some(SellerDetails {
                business_name: answers.text(ids::BUSINESS_NAME).to_string(),
                industry: answers.text(ids::INDUSTRY).to_string(),
                specific: answers.text(ids::SPECIFIC).to_string(),
                country: answers.text(ids::COUNTRY).to_string(),
                city: answers.text(ids::CITY).to_string(),
                street_address: answers.text(ids::STREET_ADDRESS).to_string(),
                image,
            })
        }
    };

    Ok(RegistrationPayload {
        name: answers.text(ids::NAME).to_string(),
        email: answers.text(ids::EMAIL).to_string(),
        role,
        password: answers.text(ids::PASSWORD).to_string(),
        phone: answers.text(ids::PHONE).to_string(),
        club: answers.text(ids::CLUB).to_string(),
        profession_id,
        seller,
    })
}

/// The sole side-effecting collaborator: creates the account.
#[async_trait]
pub trait AccountService: Send + Sync {
    async fn create_account(&self, payload: &RegistrationPayload) -> Result<(), SubmitError>;
}

/// Drives single-attempt submissions against an [`AccountService`].
pub struct Submitter {
    service: Arc<dyn AccountService>,
}

impl Submitter {
    pub fn new(service: Arc<dyn AccountService>) -> Self {
        Self { service }
    }

    /// Submit the session once. Refuses while a prior attempt is pending;
    /// a failure keeps the answers so the user can retry explicitly.
    pub async fn submit(&self, session: &mut WizardSession) -> Result<(), SubmitError> {
        let payload = build_payload(session)?;
        session.begin_submission()?;
        tracing::info!(role = %payload.role, "Submitting registration");
        match self.service.create_account(&payload).await {
            Ok(()) => {
                session.finish_submission(Ok(()));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Registration failed: {}", e);
                session.finish_submission(Err(e.to_string()));
                Err(e)
            }
        }
    }
}

/// Multipart client for the platform's register endpoint.
pub struct HttpAccountService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAccountService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn register_url(&self) -> String {
        format!("{}/api/register", self.base_url.trim_end_matches('/'))
    }

    fn build_form(payload: &RegistrationPayload) -> Result<Form, SubmitError> {
        let mut form = Form::new()
            .text("name", payload.name.clone())
            .text("email", payload.email.clone())
            .text("role", payload.role.as_str())
            .text("password", payload.password.clone())
            .text("phone", payload.phone.clone())
            .text("club", payload.club.clone())
            .text("profession", payload.profession_id.clone());

        if let Some(seller) = &payload.seller {
            let image = Part::bytes(seller.image.bytes.clone())
                .file_name(seller.image.file_name.clone())
                .mime_str(&seller.image.content_type)
                .map_err(|e| SubmitError::Transport(e.to_string()))?;
            form = form
                .text("businessName", seller.business_name.clone())
                .text("industry", seller.industry.clone())
                .text("specific", seller.specific.clone())
                .text("country", seller.country.clone())
                .text("city", seller.city.clone())
                .text("streetAddress", seller.street_address.clone())
                .part("image", image);
        }
        Ok(form)
    }
}

#[async_trait]
impl AccountService for HttpAccountService {
    async fn create_account(&self, payload: &RegistrationPayload) -> Result<(), SubmitError> {
        let form = Self::build_form(payload)?;
        let response = self
            .client
            .post(self.register_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status.to_string()
        } else {
            body
        };
        Err(SubmitError::Rejected(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DirectoryRecord, OptionSources};
    use crate::config::WizardConfig;

    fn walked_session(role: &str) -> WizardSession {
        let sources = Arc::new(OptionSources::new(
            vec![DirectoryRecord {
                id: "p1".into(),
                name: "Teacher".into(),
            }],
            Vec::new(),
        ));
        let mut session = WizardSession::new(sources, WizardConfig::default());
        for value in ["Asha", "asha@example.com", role] {
            session.answer_text(value);
            session.advance();
        }
        if role == "Sell" {
            for value in ["Duka la Asha", "Retail", "Boutique", "Tanzania", "Dar es Salaam", "Kariakoo St 12"] {
                session.answer_text(value);
                session.advance();
            }
            session.attach_file(FileUpload {
                file_name: "shop.png".into(),
                content_type: "image/png".into(),
                bytes: vec![1, 2],
            });
            session.advance();
        }
        for value in ["Simba SC", "Teacher", "0712345678", "secret1"] {
            session.answer_text(value);
            session.advance();
        }
        session
    }

    #[test]
    fn buyer_payload_omits_seller_block() {
        let session = walked_session("Buy");
        let payload = build_payload(&session).unwrap();
        assert_eq!(payload.role, Role::Buy);
        assert_eq!(payload.profession_id, "p1");
        assert!(payload.seller.is_none());
    }

    #[test]
    fn seller_payload_carries_full_block() {
        let session = walked_session("Sell");
        let payload = build_payload(&session).unwrap();
        let seller = payload.seller.expect("seller block");
        assert_eq!(seller.business_name, "Duka la Asha");
        assert_eq!(seller.industry, "Retail");
        assert_eq!(seller.specific, "Boutique");
        assert_eq!(seller.image.file_name, "shop.png");
    }

    #[test]
    fn incomplete_session_refuses_to_build() {
        let sources = Arc::new(OptionSources::new(Vec::new(), Vec::new()));
        let session = WizardSession::new(sources, WizardConfig::default());
        assert!(matches!(
            build_payload(&session),
            Err(SubmitError::Incomplete(_))
        ));
    }

    #[test]
    fn stale_profession_name_is_rejected() {
        let mut session = walked_session("Buy");
        // Re-enter a profession the directory no longer knows.
        session.back();
        session.back();
        session.back();
        assert_eq!(session.current_question().id, ids::PROFESSION);
        session.answer_text("Astronaut");
        session.advance();
        session.advance();
        session.advance();

        assert!(matches!(
            build_payload(&session),
            Err(SubmitError::UnknownProfession(name)) if name == "Astronaut"
        ));
    }

    #[test]
    fn seller_form_builds_with_image_part() {
        let session = walked_session("Sell");
        let payload = build_payload(&session).unwrap();
        assert!(HttpAccountService::build_form(&payload).is_ok());
    }

    #[test]
    fn bad_content_type_is_a_transport_error() {
        let session = walked_session("Sell");
        let mut payload = build_payload(&session).unwrap();
        if let Some(seller) = payload.seller.as_mut() {
            seller.image.content_type = "not a mime".into();
        }
        assert!(matches!(
            HttpAccountService::build_form(&payload),
            Err(SubmitError::Transport(_))
        ));
    }
}
