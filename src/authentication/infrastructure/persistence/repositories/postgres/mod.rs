pub mod sqlx_user_credentials_repository_impl;
