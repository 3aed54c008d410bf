use crate::validation::BuiltinRule;
use serde::{Deserialize, Serialize};

/// Account sign-up data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    username: String,
    email: String,
    password: String,
}

crate::validatable!(User {
    username: [BuiltinRule::NotEmpty, BuiltinRule::min_length(3)],
    email: [BuiltinRule::NotEmpty, BuiltinRule::Email],
    password: [BuiltinRule::NotEmpty, BuiltinRule::min_length(8)],
});

impl User {
    pub fn new<U, E, P>(username: U, email: E, password: P) -> Self
    where
        U: Into<String>,
        E: Into<String>,
        P: Into<String>,
    {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
