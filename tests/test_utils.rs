#![allow(dead_code)]

use rule_introspect::*;
use serde_json::{json, Value};

/// Route library logs through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn valid_user() -> User {
    User::new("johndoe", "john@example.com", "password123")
}

pub fn invalid_user() -> User {
    User::new("", "not-an-email", "short")
}

/// Manifest mirroring the `User` rule table
pub fn user_manifest() -> RuleManifest {
    let mut manifest = RuleManifest::new("1.0.0");
    manifest.add_target(
        "User",
        TargetManifest::new()
            .with_description("Account sign-up")
            .with_field("username", vec![BuiltinRule::NotEmpty, BuiltinRule::min_length(3)])
            .with_field("email", vec![BuiltinRule::NotEmpty, BuiltinRule::Email])
            .with_field("password", vec![BuiltinRule::NotEmpty, BuiltinRule::min_length(8)]),
    );
    manifest
}

pub fn user_manifest_json() -> &'static str {
    r#"{
        "version": "1.0.0",
        "targets": {
            "User": {
                "description": "Account sign-up",
                "fields": [
                    {"name": "username", "rules": [{"rule": "not_empty"}, {"rule": "min_length", "length": 3}]},
                    {"name": "email", "rules": [{"rule": "not_empty"}, {"rule": "email"}]},
                    {"name": "password", "rules": [{"rule": "not_empty"}, {"rule": "min_length", "length": 8}]}
                ]
            }
        }
    }"#
}

pub fn user_document(username: &str, email: &str, password: &str) -> Value {
    json!({
        "username": username,
        "email": email,
        "password": password,
    })
}

/// (field, rule) pairs of a failure list
pub fn failure_pairs(errors: &[ValidationError]) -> Vec<(String, String)> {
    errors
        .iter()
        .map(|e| (e.field.clone(), e.rule.clone()))
        .collect()
}
