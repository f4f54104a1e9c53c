#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoginOutcome {
    /// Carries the username as stored in the credentials table.
    Granted { username: String },
    Denied,
}

impl LoginOutcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }
}
