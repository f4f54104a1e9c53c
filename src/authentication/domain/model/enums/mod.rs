pub mod authentication_domain_error;
pub mod login_outcome;
