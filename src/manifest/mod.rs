pub mod manifest_parser;
pub mod rule_manifest;

pub use manifest_parser::ManifestParser;
pub use rule_manifest::{BoundTarget, FieldManifest, RuleManifest, TargetManifest};
