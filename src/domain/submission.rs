use chrono::Utc;
use serde::Serialize;

pub const SUBMISSION_SOURCE: &str = "landing.example.com";
pub const COMPANY_NOT_SPECIFIED: &str = "Not specified";
pub const DIRECT_REFERRER: &str = "direct";

/// Raw form input exactly as the visitor typed it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
}

/// Client details the host environment knows about the visitor.
#[derive(Debug, Clone)]
pub struct ClientContext {
    pub user_agent: String,
    pub language: String,
    pub referrer: Option<String>,
}

impl Default for ClientContext {
    fn default() -> Self {
        ClientContext {
            user_agent: format!("contact-relay/{}", env!("CARGO_PKG_VERSION")),
            language: "en-US".to_string(),
            referrer: None,
        }
    }
}

/// The JSON payload posted to the webhook. Built fresh on every
/// submit, immutable afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
    pub metadata: SubmissionMetadata,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionMetadata {
    pub timestamp: String,
    pub source: String,
    pub user_agent: String,
    pub language: String,
    pub referrer: String,
}

impl ContactSubmission {
    pub fn build(fields: &FormFields, ctx: &ClientContext) -> Self {
        let company = fields.company.trim();

        ContactSubmission {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_lowercase(),
            company: match company.is_empty() {
                true => COMPANY_NOT_SPECIFIED.to_string(),
                false => company.to_string(),
            },
            phone: fields.phone.trim().to_string(),
            message: fields.message.trim().to_string(),
            metadata: SubmissionMetadata {
                timestamp: Utc::now().to_rfc3339(),
                source: SUBMISSION_SOURCE.to_string(),
                user_agent: ctx.user_agent.clone(),
                language: ctx.language.clone(),
                referrer: ctx
                    .referrer
                    .clone()
                    .unwrap_or_else(|| DIRECT_REFERRER.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_fields() -> FormFields {
        FormFields {
            name: " Jo ".to_string(),
            email: " JO@x.com ".to_string(),
            company: String::new(),
            phone: String::new(),
            message: "  Hello there, I need help  ".to_string(),
        }
    }

    #[test]
    fn build_normalizes_fields() {
        let submission = ContactSubmission::build(&test_fields(), &ClientContext::default());

        assert_eq!(submission.name, "Jo");
        assert_eq!(submission.email, "jo@x.com");
        assert_eq!(submission.message, "Hello there, I need help");
    }

    #[test]
    fn blank_company_gets_sentinel() {
        let submission = ContactSubmission::build(&test_fields(), &ClientContext::default());

        assert_eq!(submission.company, COMPANY_NOT_SPECIFIED);
        assert_eq!(submission.phone, "");
    }

    #[test]
    fn provided_company_is_kept() {
        let mut fields = test_fields();
        fields.company = " Acme Corp ".to_string();
        let submission = ContactSubmission::build(&fields, &ClientContext::default());

        assert_eq!(submission.company, "Acme Corp");
    }

    #[test]
    fn missing_referrer_becomes_direct() {
        let submission = ContactSubmission::build(&test_fields(), &ClientContext::default());

        assert_eq!(submission.metadata.referrer, DIRECT_REFERRER);
        assert_eq!(submission.metadata.source, SUBMISSION_SOURCE);
    }

    #[test]
    fn provided_referrer_is_kept() {
        let ctx = ClientContext {
            referrer: Some("https://duckduckgo.com".to_string()),
            ..ClientContext::default()
        };
        let submission = ContactSubmission::build(&test_fields(), &ctx);

        assert_eq!(submission.metadata.referrer, "https://duckduckgo.com");
    }

    #[test]
    fn timestamp_is_iso8601() {
        let submission = ContactSubmission::build(&test_fields(), &ClientContext::default());

        assert!(chrono::DateTime::parse_from_rfc3339(&submission.metadata.timestamp).is_ok());
    }

    #[test]
    fn metadata_serializes_in_camel_case() {
        let submission = ContactSubmission::build(&test_fields(), &ClientContext::default());
        let value = serde_json::to_value(&submission).unwrap();

        assert!(value["metadata"].get("userAgent").is_some());
        assert!(value["metadata"].get("user_agent").is_none());
    }
}
