pub mod rules;
pub mod field_spec;
pub mod validation_error;
pub mod validation_engine;

pub use rules::{BuiltinRule, RulePattern, ValidationRule};
pub use field_spec::{field_value, json_type, FieldSpec, Validatable};
pub use validation_error::{ValidationError, ValidationReport};
pub use validation_engine::ValidationEngine;

/// Attach validation rules to the fields of a struct.
///
/// Expands to a `Validatable` implementation whose field table lists the
/// named fields in the order written, each with its rules in the order
/// written. Field values are captured through `serde::Serialize`.
///
/// ```rust
/// use rule_introspect::validatable;
/// use rule_introspect::validation::{BuiltinRule, ValidationEngine};
///
/// #[derive(serde::Serialize)]
/// struct Signup {
///     handle: String,
///     contact: String,
/// }
///
/// validatable!(Signup {
///     handle: [BuiltinRule::NotEmpty, BuiltinRule::min_length(3)],
///     contact: [BuiltinRule::Email],
/// });
///
/// let signup = Signup { handle: "ab".into(), contact: "ab@example.com".into() };
/// assert_eq!(ValidationEngine::new().validate(&signup).len(), 1);
/// ```
#[macro_export]
macro_rules! validatable {
    ($target:ty { $( $field:ident : [ $( $rule:expr ),* $(,)? ] ),* $(,)? }) => {
        impl $crate::validation::Validatable for $target {
            fn target_name(&self) -> &str {
                stringify!($target)
            }

            fn field_specs(&self) -> ::std::vec::Vec<$crate::validation::FieldSpec> {
                ::std::vec![
                    $(
                        $crate::validation::FieldSpec::new(
                            stringify!($field),
                            $crate::validation::field_value(&self.$field),
                        )
                        $( .with_rule($rule) )*
                    ),*
                ]
            }
        }
    };
}
