pub mod credential_check_service;
