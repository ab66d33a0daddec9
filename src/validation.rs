//! Form Validation
//!
//! Checks run by components before dispatching. The store itself accepts anything.

use crate::config::PortalConfig;
use crate::error::{PortalError, PortalResult};
use crate::models::{DiscussionDraft, Nationality};

fn invalid<T>(msg: &str) -> PortalResult<T> {
    Err(PortalError::Validation(msg.to_string()))
}

/// Returns (email, name) trimmed
pub fn validate_login(
    config: &PortalConfig,
    email: &str,
    name: &str,
) -> PortalResult<(String, String)> {
    let email = email.trim();
    if !config.allowed_email_domains.iter().any(|domain| email.ends_with(domain)) {
        return invalid("Please use your University of Galway email address");
    }
    let name = name.trim();
    if name.is_empty() {
        return invalid("Please enter your name");
    }
    Ok((email.to_string(), name.to_string()))
}

pub fn validate_onboarding(
    nationality: Option<Nationality>,
    degree: &str,
) -> PortalResult<(Nationality, String)> {
    let Some(nationality) = nationality else {
        return invalid("Please select your nationality type");
    };
    if degree.is_empty() {
        return invalid("Please select your degree programme");
    }
    Ok((nationality, degree.to_string()))
}

pub fn validate_task_title(title: &str) -> PortalResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return invalid("Please enter a task title");
    }
    Ok(title.to_string())
}

/// Title and details are required, a blank category becomes "General"
pub fn validate_discussion(
    title: &str,
    content: &str,
    category: &str,
) -> PortalResult<DiscussionDraft> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return invalid("Please add a title and details");
    }
    let category = category.trim();
    Ok(DiscussionDraft {
        title: title.to_string(),
        content: content.to_string(),
        category: if category.is_empty() { "General".to_string() } else { category.to_string() },
    })
}

pub fn validate_reply(content: &str) -> PortalResult<String> {
    if content.trim().is_empty() {
        return invalid("Reply cannot be empty");
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_accepts_both_domains() {
        let config = PortalConfig::default();
        for email in ["a@universityofgalway.ie", "b@nuigalway.ie"] {
            let (e, n) = validate_login(&config, email, "  Niamh ").unwrap();
            assert_eq!(e, email);
            assert_eq!(n, "Niamh");
        }
    }

    #[test]
    fn test_login_rejects_other_domain_before_name() {
        let config = PortalConfig::default();
        let err = validate_login(&config, "someone@gmail.com", "").unwrap_err();
        assert_eq!(err.message(), "Please use your University of Galway email address");
    }

    #[test]
    fn test_login_requires_name() {
        let config = PortalConfig::default();
        let err = validate_login(&config, "a@nuigalway.ie", "   ").unwrap_err();
        assert_eq!(err.message(), "Please enter your name");
    }

    #[test]
    fn test_onboarding_requires_both() {
        assert_eq!(
            validate_onboarding(None, "BA Arts").unwrap_err().message(),
            "Please select your nationality type"
        );
        assert_eq!(
            validate_onboarding(Some(Nationality::Eu), "").unwrap_err().message(),
            "Please select your degree programme"
        );
        assert_eq!(
            validate_onboarding(Some(Nationality::Usa), "BA Arts").unwrap(),
            (Nationality::Usa, "BA Arts".to_string())
        );
    }

    #[test]
    fn test_discussion_default_category() {
        let draft = validate_discussion("Title", "Body", "  ").unwrap();
        assert_eq!(draft.category, "General");
        assert!(validate_discussion("", "Body", "Visa").is_err());
        assert!(validate_discussion("Title", " ", "Visa").is_err());
    }

    #[test]
    fn test_task_title_and_reply() {
        assert_eq!(validate_task_title("  Buy a bike ").unwrap(), "Buy a bike");
        assert!(validate_task_title("").is_err());
        assert!(validate_reply("\n").is_err());
        assert_eq!(validate_reply("hello").unwrap(), "hello");
    }
}
