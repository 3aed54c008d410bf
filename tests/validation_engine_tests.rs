use rule_introspect::*;
use serde_json::{json, Value};
use std::sync::Arc;
mod test_utils;
use test_utils::*;

#[test]
fn test_valid_user_has_no_errors() {
    init_logging();
    let engine = ValidationEngine::new();

    let errors = engine.validate(&valid_user());
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
}

#[test]
fn test_invalid_user_reports_four_failures() {
    init_logging();
    let engine = ValidationEngine::new();

    let errors = engine.validate(&invalid_user());
    assert_eq!(
        failure_pairs(&errors),
        vec![
            ("username".to_string(), "NotEmpty".to_string()),
            ("username".to_string(), "MinLength".to_string()),
            ("email".to_string(), "Email".to_string()),
            ("password".to_string(), "MinLength".to_string()),
        ]
    );
}

#[test]
fn test_invalid_user_messages() {
    let engine = ValidationEngine::new();

    let messages = engine.messages(&invalid_user());
    assert_eq!(
        messages,
        vec![
            "Validation failed for property 'username' with validator 'NotEmpty'",
            "Validation failed for property 'username' with validator 'MinLength'",
            "Validation failed for property 'email' with validator 'Email'",
            "Validation failed for property 'password' with validator 'MinLength'",
        ]
    );
}

#[test]
fn test_failures_carry_offending_value() {
    let errors = ValidationEngine::new().validate(&invalid_user());
    assert_eq!(errors[2].value, json!("not-an-email"));
    assert_eq!(errors[3].value, json!("short"));
}

#[test]
fn test_validation_is_idempotent() {
    let engine = ValidationEngine::new();
    let user = invalid_user();

    let first = engine.report(&user);
    let second = engine.report(&user);
    assert_eq!(first, second);
    assert_eq!(user, invalid_user());
}

#[test]
fn test_report_counts() {
    let report = ValidationEngine::new().report(&invalid_user());

    assert_eq!(report.target, "User");
    assert!(!report.valid);
    assert_eq!(report.fields_validated, 3);
    assert_eq!(report.rules_evaluated, 6);
    assert_eq!(report.errors.len(), 4);
}

#[test]
fn test_failure_count_matches_failing_pairs() {
    let engine = ValidationEngine::new();
    let cases = [
        ("johndoe", "john@example.com", "password123", 0),
        ("jd", "john@example.com", "password123", 1),
        ("johndoe", "", "password123", 2),
        ("", "", "", 6),
        ("johndoe", "john@example.com", "1234567", 1),
    ];

    for (username, email, password, expected) in cases {
        let user = User::new(username, email, password);
        let report = engine.report(&user);

        let failing_pairs = user
            .field_specs()
            .iter()
            .flat_map(|spec| spec.rules.iter().map(move |rule| rule.check(&spec.value)))
            .filter(|passed| !passed)
            .count();

        assert_eq!(report.errors.len(), expected, "case {:?}", (username, email, password));
        assert_eq!(report.errors.len(), failing_pairs);
    }
}

/// A custom rule, unknown to the engine
struct Uppercase;

impl ValidationRule for Uppercase {
    fn name(&self) -> &str {
        "Uppercase"
    }

    fn check(&self, value: &Value) -> bool {
        value
            .as_str()
            .map_or(false, |s| s.chars().all(|c| !c.is_lowercase()))
    }
}

#[derive(serde::Serialize)]
struct Ticket {
    code: String,
    owner: String,
}

rule_introspect::validatable!(Ticket {
    code: [BuiltinRule::NotEmpty, Uppercase, BuiltinRule::max_length(6)],
    owner: [BuiltinRule::Email],
});

#[test]
fn test_custom_rules_attach_like_builtins() {
    let ticket = Ticket {
        code: "abc1234".to_string(),
        owner: "ops@example.org".to_string(),
    };

    let errors = ValidationEngine::new().validate(&ticket);
    assert_eq!(
        failure_pairs(&errors),
        vec![
            ("code".to_string(), "Uppercase".to_string()),
            ("code".to_string(), "MaxLength".to_string()),
        ]
    );
}

#[test]
fn test_shared_rule_instances() {
    struct Pair {
        left: String,
        right: String,
    }

    impl Validatable for Pair {
        fn target_name(&self) -> &str {
            "Pair"
        }

        fn field_specs(&self) -> Vec<FieldSpec> {
            let shared: Arc<dyn ValidationRule> = Arc::new(BuiltinRule::min_length(2));
            vec![
                FieldSpec::new("left", json!(self.left)).with_shared_rule(shared.clone()),
                FieldSpec::new("right", json!(self.right)).with_shared_rule(shared),
            ]
        }
    }

    let pair = Pair {
        left: "a".to_string(),
        right: "bb".to_string(),
    };
    let errors = ValidationEngine::new().validate(&pair);
    assert_eq!(failure_pairs(&errors), vec![("left".to_string(), "MinLength".to_string())]);
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = ValidationEngine::with_config(EngineConfig::permissive()).unwrap();
    let user = invalid_user();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.validate(&user)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), 4);
        }
    });
}

#[test]
fn test_try_validate_accepts_well_formed_target() {
    let result = ValidationEngine::with_config(EngineConfig::strict())
        .unwrap()
        .try_validate(&invalid_user());
    assert_eq!(result.map(|errors| errors.len()), Ok(4));
}

#[test]
fn test_try_validate_field_limit() {
    let config = EngineConfig {
        max_fields: 2,
        ..EngineConfig::default()
    };

    let result = ValidationEngine::with_config(config)
        .unwrap()
        .try_validate(&valid_user());
    assert_eq!(
        result,
        Err(TargetError::TooManyFields("User".to_string(), 3, 2))
    );
}

#[test]
fn test_zero_limit_config_is_refused() {
    let config = EngineConfig {
        max_rules_per_field: 0,
        ..EngineConfig::default()
    };

    let error = ValidationEngine::with_config(config).unwrap_err();
    assert!(matches!(error, IntrospectError::Config(_)));
    assert_eq!(
        error.to_string(),
        "Invalid engine configuration: max_rules_per_field must be greater than 0"
    );
}
