use std::sync::Mutex;

use async_trait::async_trait;
use table_console::authentication::{
    domain::model::enums::authentication_domain_error::AuthenticationDomainError,
    infrastructure::persistence::repositories::user_credentials_repository::UserCredentialsRepository,
};

#[derive(Default)]
struct FakeUserCredentialsState {
    users: Vec<(String, String)>,
    lookups: Vec<String>,
    should_fail: bool,
}

pub struct FakeUserCredentialsRepository {
    state: Mutex<FakeUserCredentialsState>,
}

impl FakeUserCredentialsRepository {
    pub fn new(users: &[(&str, &str)], should_fail: bool) -> Self {
        Self {
            state: Mutex::new(FakeUserCredentialsState {
                users: users
                    .iter()
                    .map(|(u, p)| (u.to_string(), p.to_string()))
                    .collect(),
                lookups: Vec::new(),
                should_fail,
            }),
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.state.lock().expect("mutex poisoned").lookups.clone()
    }
}

#[async_trait]
impl UserCredentialsRepository for FakeUserCredentialsRepository {
    async fn find_username(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<String>, AuthenticationDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.lookups.push(username.to_string());

        if state.should_fail {
            return Err(AuthenticationDomainError::InfrastructureError(
                "relation \"userscredentials\" does not exist".to_string(),
            ));
        }

        Ok(state
            .users
            .iter()
            .find(|(u, p)| u == username && p == password)
            .map(|(u, _)| u.clone()))
    }
}
