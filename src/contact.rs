//! Contact form submission.
//!
//! Messages go out through a third-party transactional-email provider
//! speaking the EmailJS REST contract: a JSON POST carrying the service id,
//! template id, public client key, and the template parameters (sender
//! name, sender email, message body). Success or failure of that single
//! call is the only observable result — there is no delivery confirmation,
//! no retry, and no timeout enforcement beyond the HTTP client's own.
//!
//! The [`Mailer`] trait is the seam: production code uses
//! [`EmailJsMailer`], tests use a recording mock. Callers treat the send as
//! fire-and-forget and surface the outcome through the status banner,
//! whose fade/hide timing lives here as the single source of truth.

use crate::config::EmailConfig;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not an email address")]
    InvalidEmail(String),
    #[error("email provider is not configured (service_id, template_id, public_key)")]
    NotConfigured,
    #[error("send failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("email provider rejected the message: HTTP {0}")]
    Rejected(u16),
}

/// A contact form submission: sender name, sender email, free-text message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(from_name: &str, from_email: &str, message: &str) -> Self {
        Self {
            from_name: from_name.trim().to_string(),
            from_email: from_email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// All three fields are required; the sender address must at least
    /// look like an email address.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.from_name.is_empty() {
            return Err(ContactError::MissingField("sender name"));
        }
        if self.from_email.is_empty() {
            return Err(ContactError::MissingField("sender email"));
        }
        if self.message.is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        let well_formed = self
            .from_email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !well_formed {
            return Err(ContactError::InvalidEmail(self.from_email.clone()));
        }
        Ok(())
    }
}

/// The outbound-email seam.
pub trait Mailer {
    fn send(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// The provider's send endpoint; also injected into the generated
/// contact page so the browser-side submission hits the same contract.
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Wire format of the provider's send call.
#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

/// Production mailer: blocking JSON POST to the EmailJS endpoint.
pub struct EmailJsMailer {
    endpoint: String,
    config: EmailConfig,
    client: reqwest::blocking::Client,
}

impl EmailJsMailer {
    pub fn new(config: &EmailConfig) -> Result<Self, ContactError> {
        Self::with_endpoint(config, EMAILJS_ENDPOINT)
    }

    /// Point the mailer at a different endpoint (test servers).
    pub fn with_endpoint(config: &EmailConfig, endpoint: &str) -> Result<Self, ContactError> {
        if !config.is_configured() {
            return Err(ContactError::NotConfigured);
        }
        Ok(Self {
            endpoint: endpoint.to_string(),
            config: config.clone(),
            client: reqwest::blocking::Client::new(),
        })
    }
}

impl Mailer for EmailJsMailer {
    fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        message.validate()?;
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: message,
        };
        let response = self.client.post(&self.endpoint).json(&request).send()?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ContactError::Rejected(status.as_u16()))
        }
    }
}

// ============================================================================
// Status banner timing
// ============================================================================

/// Milliseconds after which the banner starts fading out.
pub const BANNER_FADE_MS: u64 = 3500;
/// Milliseconds after which the banner is fully hidden.
pub const BANNER_HIDE_MS: u64 = 4200;

/// Visibility phase of the transient status banner. The banner appears on
/// a submission result, fades after [`BANNER_FADE_MS`], and disappears at
/// [`BANNER_HIDE_MS`] — two chained delays, then gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPhase {
    Visible,
    Fading,
    Hidden,
}

/// Pure phase function over elapsed time since the result arrived.
pub fn banner_phase(elapsed_ms: u64) -> BannerPhase {
    if elapsed_ms >= BANNER_HIDE_MS {
        BannerPhase::Hidden
    } else if elapsed_ms >= BANNER_FADE_MS {
        BannerPhase::Fading
    } else {
        BannerPhase::Visible
    }
}

/// Banner copy for the two submission outcomes.
pub fn banner_text(success: bool) -> &'static str {
    if success {
        "Message sent successfully!"
    } else {
        "Failed to send message. Please try again later."
    }
}
