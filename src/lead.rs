//! Lead capture: the booking form's draft state, validation rules and the
//! submission call to the external form-intake endpoint.

use gloo_console::log;
use gloo_net::http::Request;
use serde::Serialize;

use crate::config;
use crate::i18n::{ContactText, Lang};

/// Field values of the booking form. Created empty when the modal mounts and
/// discarded when it unmounts; only field edits mutate it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadDraft {
    pub name: String,
    pub phone: String,
    pub code: String,
    pub email: String,
    pub comment: String,
}

impl LeadDraft {
    pub fn is_submittable(&self) -> bool {
        valid_name(&self.name) && valid_email(&self.email) && valid_phone(&self.phone)
    }
}

pub fn valid_name(name: &str) -> bool {
    name.trim().chars().count() >= 2
}

/// Accepts the plain `local@domain.tld` shape, nothing stricter.
pub fn valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

pub fn valid_phone(phone: &str) -> bool {
    normalize_phone(phone).chars().count() >= 8
}

/// Keeps digits and a leading `+`, drops everything else. Idempotent.
pub fn normalize_phone(phone: &str) -> String {
    let mut normalized = String::with_capacity(phone.len());
    for ch in phone.trim().chars() {
        if ch.is_ascii_digit() || (ch == '+' && normalized.is_empty()) {
            normalized.push(ch);
        }
    }
    normalized
}

/// Status of the current submission attempt. Transitions are linear:
/// `Idle → Loading → Success | Error`, and `Error → Loading` on resubmit.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl SubmitStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmitStatus::Loading)
    }

    /// The submit control is disabled while a request is in flight or the
    /// draft fails validation, which is what keeps submissions single-flight.
    pub fn can_submit(&self, draft: &LeadDraft) -> bool {
        !self.is_loading() && draft.is_submittable()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// No endpoint configured for this build.
    Config,
    /// The endpoint answered with a non-2xx status.
    Rejected(Option<String>),
    /// The request never completed.
    Network,
}

impl SubmitError {
    pub fn message(&self, t: &ContactText) -> String {
        match self {
            SubmitError::Config => t.error_generic.to_string(),
            SubmitError::Rejected(Some(detail)) => detail.clone(),
            SubmitError::Rejected(None) => t.error_generic.to_string(),
            SubmitError::Network => t.error_network.to_string(),
        }
    }
}

#[derive(Serialize)]
struct LeadPayload<'a> {
    name: &'a str,
    phone: String,
    code: &'a str,
    email: &'a str,
    message: &'a str,
    locale: &'static str,
    page: String,
    #[serde(rename = "createdAt")]
    created_at: String,
}

/// Best human-readable message out of a rejection body. Form processors
/// answer either `{"errors":[{"message":...}]}` or `{"error":...}`.
pub fn rejection_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if let Some(message) = value
        .get("errors")
        .and_then(|errors| errors.get(0))
        .and_then(|first| first.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(message.to_string());
    }
    value
        .get("error")
        .and_then(|error| error.as_str())
        .map(str::to_string)
}

/// Posts the draft to the configured intake endpoint. Does not retry; the
/// caller keeps the draft editable so the user can resubmit.
pub async fn submit(draft: &LeadDraft, lang: Lang) -> Result<(), SubmitError> {
    let endpoint = config::lead_endpoint().ok_or(SubmitError::Config)?;

    let page = web_sys::window()
        .and_then(|window| window.location().href().ok())
        .unwrap_or_default();
    let payload = LeadPayload {
        name: &draft.name,
        phone: normalize_phone(&draft.phone),
        code: &draft.code,
        email: &draft.email,
        message: &draft.comment,
        locale: lang.code(),
        page,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    let request = Request::post(endpoint)
        .header("Accept", "application/json")
        .json(&payload)
        .map_err(|_| SubmitError::Network)?;

    match request.send().await {
        Ok(response) => {
            if response.ok() {
                Ok(())
            } else {
                log!("lead submission rejected, status:", response.status());
                let body = response.text().await.unwrap_or_default();
                Err(SubmitError::Rejected(rejection_message(&body)))
            }
        }
        Err(err) => {
            log!("lead submission network error:", err.to_string());
            Err(SubmitError::Network)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> LeadDraft {
        LeadDraft {
            name: "Anna K".into(),
            phone: "+371 263 88885".into(),
            code: String::new(),
            email: "anna@example.com".into(),
            comment: String::new(),
        }
    }

    #[test]
    fn fresh_draft_is_empty_and_idle() {
        let draft = LeadDraft::default();
        assert!(draft.name.is_empty() && draft.phone.is_empty() && draft.email.is_empty());
        assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
        assert!(!draft.is_submittable());
    }

    #[test]
    fn submittable_requires_every_field_rule() {
        let draft = valid_draft();
        assert!(draft.is_submittable());

        let mut short_name = draft.clone();
        short_name.name = " A ".into();
        assert!(!short_name.is_submittable());

        let mut bad_email = draft.clone();
        bad_email.email = "anna@example".into();
        assert!(!bad_email.is_submittable());

        let mut short_phone = draft.clone();
        short_phone.phone = "+371 26".into();
        assert!(!short_phone.is_submittable());

        // Comment and code stay unconstrained.
        let mut extras = draft;
        extras.code = "123456".into();
        extras.comment = "x".repeat(5000);
        assert!(extras.is_submittable());
    }

    #[test]
    fn email_shape() {
        assert!(valid_email("a@b.lv"));
        assert!(valid_email("first.last@mail.example.com"));
        assert!(!valid_email(""));
        assert!(!valid_email("plain"));
        assert!(!valid_email("@b.lv"));
        assert!(!valid_email("a@.lv"));
        assert!(!valid_email("a@b."));
        assert!(!valid_email("a@b"));
        assert!(!valid_email("a@@b.lv"));
    }

    #[test]
    fn phone_normalization_is_idempotent() {
        for raw in ["+371 263 88885", "(371) 26-38-88-85", "  +37126388885  ", "abc"] {
            let once = normalize_phone(raw);
            assert_eq!(normalize_phone(&once), once);
        }
        assert_eq!(normalize_phone("+371 263 88885"), "+37126388885");
        assert_eq!(normalize_phone("(+371) 263-88-885"), "37126388885");
    }

    #[test]
    fn no_submission_while_loading() {
        let draft = valid_draft();
        assert!(SubmitStatus::Idle.can_submit(&draft));
        assert!(SubmitStatus::Error("x".into()).can_submit(&draft));
        assert!(!SubmitStatus::Loading.can_submit(&draft));
        assert!(!SubmitStatus::Success.can_submit(&draft));
    }

    #[test]
    fn rejection_message_prefers_structured_detail() {
        assert_eq!(
            rejection_message(r#"{"error":"Invalid email"}"#),
            Some("Invalid email".to_string())
        );
        assert_eq!(
            rejection_message(r#"{"errors":[{"message":"Form not found"}]}"#),
            Some("Form not found".to_string())
        );
        assert_eq!(rejection_message(""), None);
        assert_eq!(rejection_message("<html>502</html>"), None);
        assert_eq!(rejection_message(r#"{"status":"bad"}"#), None);
    }

    #[test]
    fn rejection_falls_back_to_localized_generic_text() {
        let t = &Lang::Lv.bundle().contact;
        assert_eq!(SubmitError::Rejected(None).message(t), t.error_generic);
        assert_eq!(SubmitError::Network.message(t), t.error_network);
        assert_eq!(
            SubmitError::Rejected(Some("Invalid email".into())).message(t),
            "Invalid email"
        );
    }
}
