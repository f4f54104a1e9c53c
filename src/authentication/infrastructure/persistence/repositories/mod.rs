pub mod postgres;
pub mod user_credentials_repository;
