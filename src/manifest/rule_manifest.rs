use crate::error::TargetError;
use crate::validation::{json_type, BuiltinRule, FieldSpec, Validatable};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Rule sets declared as data instead of code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleManifest {
    /// Manifest version (`major.minor.patch`)
    pub version: String,

    /// Target definitions by name
    #[serde(default)]
    pub targets: BTreeMap<String, TargetManifest>,
}

/// Fields of one target, in declaration order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TargetManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub fields: Vec<FieldManifest>,
}

/// A field name and the rules attached to it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldManifest {
    pub name: String,

    #[serde(default)]
    pub rules: Vec<BuiltinRule>,
}

impl RuleManifest {
    pub fn new<S: Into<String>>(version: S) -> Self {
        Self {
            version: version.into(),
            targets: BTreeMap::new(),
        }
    }

    pub fn add_target<S: Into<String>>(&mut self, name: S, target: TargetManifest) {
        self.targets.insert(name.into(), target);
    }

    pub fn get_target(&self, name: &str) -> Option<&TargetManifest> {
        self.targets.get(name)
    }

    pub fn target_names(&self) -> Vec<&String> {
        self.targets.keys().collect()
    }

    /// Pair the fields of a JSON object with the rules declared for
    /// `target`.
    ///
    /// Every field the manifest declares must be present in the document;
    /// a present `null` is kept and left for the rules to reject.
    pub fn bind(&self, target: &str, document: &Value) -> Result<BoundTarget, TargetError> {
        let manifest = self
            .get_target(target)
            .ok_or_else(|| TargetError::UnknownTarget(target.to_string()))?;

        let object = document.as_object().ok_or_else(|| {
            TargetError::NotAnObject(target.to_string(), json_type(document).to_string())
        })?;

        let mut fields = Vec::with_capacity(manifest.fields.len());
        for field in &manifest.fields {
            let value = object.get(&field.name).ok_or_else(|| {
                TargetError::MissingField(target.to_string(), field.name.clone())
            })?;
            fields.push(BoundField {
                name: field.name.clone(),
                value: value.clone(),
                rules: field.rules.clone(),
            });
        }

        Ok(BoundTarget {
            name: target.to_string(),
            fields,
        })
    }
}

impl TargetManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field<S: Into<String>>(mut self, name: S, rules: Vec<BuiltinRule>) -> Self {
        self.fields.push(FieldManifest {
            name: name.into(),
            rules,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
struct BoundField {
    name: String,
    value: Value,
    rules: Vec<BuiltinRule>,
}

/// A JSON document paired with the rules of its manifest target
#[derive(Debug, Clone, PartialEq)]
pub struct BoundTarget {
    name: String,
    fields: Vec<BoundField>,
}

impl Validatable for BoundTarget {
    fn target_name(&self) -> &str {
        &self.name
    }

    fn field_specs(&self) -> Vec<FieldSpec> {
        self.fields
            .iter()
            .map(|field| {
                field
                    .rules
                    .iter()
                    .cloned()
                    .fold(FieldSpec::new(field.name.clone(), field.value.clone()), |spec, rule| {
                        spec.with_rule(rule)
                    })
            })
            .collect()
    }
}
