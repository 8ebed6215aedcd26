use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid activity name format: '{name}'")]
    InvalidName { name: String },

    #[error("Invalid email format: '{email}'")]
    InvalidEmail { email: String },

    #[error("Email '{email}' is not allowed, only '{domain}' addresses can sign up")]
    ForbiddenDomain { email: String, domain: String },

    #[error("Activity '{name}' not found")]
    NotFound { name: String },

    #[error("Student '{email}' is already signed up for {activity}")]
    AlreadySignedUp { email: String, activity: String },

    #[error("Activity '{activity}' is already full")]
    ActivityFull { activity: String },

    #[error("Invalid seed activity '{name}': {message}")]
    InvalidSeed { name: String, message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
