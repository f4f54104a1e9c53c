pub mod check_credentials_query;
