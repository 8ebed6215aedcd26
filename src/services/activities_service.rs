use regex::Regex;
use std::sync::OnceLock;
use tracing::{info, warn};

use crate::database::activity_catalog_repo::ActivityCatalog;
use crate::error::{CatalogError, Result};
use crate::models::{Activity, ActivityListing, SignupReceipt};

pub use crate::database::activity_catalog_repo::normalize;

pub const DEFAULT_EMAIL_DOMAIN: &str = "@mergington.edu";

/// Optional domain restriction layered on top of the email syntax check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupPolicy {
    pub enforce_domain_suffix: bool,
    pub domain_suffix: String,
}

impl Default for SignupPolicy {
    fn default() -> Self {
        Self {
            enforce_domain_suffix: false,
            domain_suffix: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }
}

impl SignupPolicy {
    pub fn restricted_to(domain_suffix: impl Into<String>) -> Self {
        Self {
            enforce_domain_suffix: true,
            domain_suffix: domain_suffix.into(),
        }
    }

    fn check(&self, email: &str) -> Result<()> {
        if !is_valid_email(email) {
            return Err(CatalogError::InvalidEmail {
                email: email.to_string(),
            });
        }
        if self.enforce_domain_suffix && !email.ends_with(&self.domain_suffix) {
            return Err(CatalogError::ForbiddenDomain {
                email: email.to_string(),
                domain: self.domain_suffix.clone(),
            });
        }
        Ok(())
    }
}

fn activity_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9\s]+$").expect("activity name pattern"))
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").expect("email pattern")
    })
}

/// Letters, digits and whitespace only.
pub fn is_valid_activity_name(name: &str) -> bool {
    activity_name_re().is_match(name)
}

pub fn is_valid_email(email: &str) -> bool {
    email_re().is_match(email)
}

pub fn list_activities(catalog: &ActivityCatalog) -> Result<ActivityListing> {
    catalog.list()
}

pub fn get_activity(catalog: &ActivityCatalog, name: &str) -> Result<Activity> {
    if !is_valid_activity_name(name) {
        return Err(CatalogError::InvalidName {
            name: name.to_string(),
        });
    }

    catalog
        .find(name)
        .ok_or_else(|| CatalogError::NotFound {
            name: name.to_string(),
        })?
        .snapshot()
}

pub fn signup_for_activity(
    catalog: &ActivityCatalog,
    policy: &SignupPolicy,
    name: &str,
    email: &str,
) -> Result<SignupReceipt> {
    policy.check(email)?;

    let entry = catalog.find(name).ok_or_else(|| CatalogError::NotFound {
        name: name.to_string(),
    })?;

    match entry.enroll(email) {
        Ok(count) => {
            info!(
                activity = %entry.name(),
                email = %email,
                participants = count,
                max_participants = entry.max_participants(),
                "signup accepted"
            );
            Ok(SignupReceipt {
                message: format!("Successfully signed up {} for {}", email, entry.name()),
                current_participants: count,
            })
        }
        Err(e) => {
            warn!(activity = %entry.name(), email = %email, "signup rejected: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed_activities::seeded_catalog;

    fn participants(catalog: &ActivityCatalog, name: &str) -> Vec<String> {
        get_activity(catalog, name).unwrap().participants
    }

    #[test]
    fn activity_name_validation() {
        assert!(is_valid_activity_name("Chess Club"));
        assert!(is_valid_activity_name("  chess\tclub 2 "));
        assert!(!is_valid_activity_name(""));
        assert!(!is_valid_activity_name("../etc"));
        assert!(!is_valid_activity_name("Chess!"));
        assert!(!is_valid_activity_name("Chess-Club"));
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("new@mergington.edu"));
        assert!(is_valid_email("first.last+tag@sub-domain.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@mergington.edu"));
    }

    #[test]
    fn get_resolves_case_and_whitespace_variants() {
        let catalog = seeded_catalog().unwrap();
        for variant in ["Chess Club", "chess club", "  CHESS   CLUB "] {
            assert_eq!(get_activity(&catalog, variant).unwrap().name, "Chess Club");
        }
    }

    #[test]
    fn get_rejects_punctuation_before_lookup() {
        let catalog = seeded_catalog().unwrap();
        for name in ["../etc", "Chess!", "Chess Club?"] {
            assert!(matches!(
                get_activity(&catalog, name),
                Err(CatalogError::InvalidName { .. })
            ));
        }
    }

    #[test]
    fn get_unknown_keeps_requested_name() {
        let catalog = seeded_catalog().unwrap();
        assert_eq!(
            get_activity(&catalog, "Nonexistent Club"),
            Err(CatalogError::NotFound {
                name: "Nonexistent Club".to_string()
            })
        );
    }

    #[test]
    fn signup_appends_and_reports_count() {
        let catalog = seeded_catalog().unwrap();
        let receipt = signup_for_activity(
            &catalog,
            &SignupPolicy::default(),
            "Chess Club",
            "new@mergington.edu",
        )
        .unwrap();

        assert_eq!(
            receipt.message,
            "Successfully signed up new@mergington.edu for Chess Club"
        );
        assert_eq!(receipt.current_participants, 3);
        let list = participants(&catalog, "Chess Club");
        assert_eq!(list.len(), 3);
        assert_eq!(list.last().map(String::as_str), Some("new@mergington.edu"));
    }

    #[test]
    fn signup_validation_order() {
        let catalog = seeded_catalog().unwrap();
        let policy = SignupPolicy::restricted_to("@mergington.edu");

        // Bad email wins over an unknown activity.
        assert!(matches!(
            signup_for_activity(&catalog, &policy, "Nope", "bad"),
            Err(CatalogError::InvalidEmail { .. })
        ));
        assert!(matches!(
            signup_for_activity(&catalog, &policy, "Nope", "kid@gmail.com"),
            Err(CatalogError::ForbiddenDomain { .. })
        ));
        assert!(matches!(
            signup_for_activity(&catalog, &policy, "Nope", "kid@mergington.edu"),
            Err(CatalogError::NotFound { .. })
        ));
    }

    #[test]
    fn domain_is_only_checked_when_enforced() {
        let catalog = seeded_catalog().unwrap();
        let receipt = signup_for_activity(
            &catalog,
            &SignupPolicy::default(),
            "Math Club",
            "visitor@example.com",
        )
        .unwrap();
        assert_eq!(receipt.current_participants, 1);
    }

    #[test]
    fn duplicate_signup_leaves_list_unchanged() {
        let catalog = seeded_catalog().unwrap();
        let before = participants(&catalog, "Chess Club");

        let err = signup_for_activity(
            &catalog,
            &SignupPolicy::default(),
            "chess club",
            "michael@mergington.edu",
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Student 'michael@mergington.edu' is already signed up for Chess Club"
        );
        assert_eq!(participants(&catalog, "Chess Club"), before);
    }

    #[test]
    fn full_activity_rejects_and_leaves_list_unchanged() {
        let catalog = seeded_catalog().unwrap();
        let policy = SignupPolicy::default();
        for i in 0..10 {
            signup_for_activity(
                &catalog,
                &policy,
                "Chess Club",
                &format!("student{}@mergington.edu", i),
            )
            .unwrap();
        }
        let before = participants(&catalog, "Chess Club");
        assert_eq!(before.len(), 12);

        let err = signup_for_activity(&catalog, &policy, "Chess Club", "late@mergington.edu")
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::ActivityFull {
                activity: "Chess Club".to_string()
            }
        );
        assert_eq!(participants(&catalog, "Chess Club"), before);
    }
}
