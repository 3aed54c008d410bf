use crate::error::ManifestError;
use crate::manifest::RuleManifest;
use crate::validation::ValidationRule;
use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const PREVIEW_LENGTH: usize = 200;
const LARGE_MANIFEST_BYTES: u64 = 10_000_000;

/// Rule manifest parser for JSON and YAML formats
pub struct ManifestParser;

impl ManifestParser {
    /// Parse a rule manifest from a JSON string
    pub fn from_json(json_str: &str) -> Result<RuleManifest, ManifestError> {
        Self::from_json_with_context(json_str, None)
    }

    /// Parse a rule manifest from a JSON string with file context
    pub fn from_json_with_context(
        json_str: &str,
        file_path: Option<&str>,
    ) -> Result<RuleManifest, ManifestError> {
        let context = Self::context(file_path);
        debug!(
            "Attempting to parse rule manifest from JSON{} ({} bytes)",
            context,
            json_str.len()
        );

        if json_str.trim().is_empty() {
            error!("Rule manifest JSON string is empty{}", context);
            return Err(ManifestError::Parse(format!(
                "JSON parsing error{}: input string is empty",
                context
            )));
        }

        debug!("JSON content preview{}: {}", context, Self::preview(json_str));

        match serde_json::from_str::<RuleManifest>(json_str) {
            Ok(manifest) => {
                info!("Successfully parsed rule manifest from JSON{}", context);
                debug!(
                    "Parsed rule manifest version {} with {} targets",
                    manifest.version,
                    manifest.targets.len()
                );
                Ok(manifest)
            }
            Err(e) => {
                error!("Failed to parse rule manifest from JSON{}: {}", context, e);

                let detailed_error = match e.classify() {
                    serde_json::error::Category::Io => {
                        format!("JSON parsing error{} - I/O issue: {}", context, e)
                    }
                    serde_json::error::Category::Syntax => format!(
                        "JSON parsing error{} - Syntax error at line {}, column {}: {}",
                        context,
                        e.line(),
                        e.column(),
                        e
                    ),
                    serde_json::error::Category::Data => {
                        format!("JSON parsing error{} - Invalid data structure: {}", context, e)
                    }
                    serde_json::error::Category::Eof => {
                        format!("JSON parsing error{} - Unexpected end of file: {}", context, e)
                    }
                };

                Err(ManifestError::Parse(detailed_error))
            }
        }
    }

    /// Parse a rule manifest from a YAML string
    #[cfg(feature = "yaml-support")]
    pub fn from_yaml(yaml_str: &str) -> Result<RuleManifest, ManifestError> {
        Self::from_yaml_with_context(yaml_str, None)
    }

    /// Parse a rule manifest from a YAML string with file context
    #[cfg(feature = "yaml-support")]
    pub fn from_yaml_with_context(
        yaml_str: &str,
        file_path: Option<&str>,
    ) -> Result<RuleManifest, ManifestError> {
        let context = Self::context(file_path);
        debug!(
            "Attempting to parse rule manifest from YAML{} ({} bytes)",
            context,
            yaml_str.len()
        );

        if yaml_str.trim().is_empty() {
            error!("Rule manifest YAML string is empty{}", context);
            return Err(ManifestError::Parse(format!(
                "YAML parsing error{}: input string is empty",
                context
            )));
        }

        debug!("YAML content preview{}: {}", context, Self::preview(yaml_str));

        serde_yaml::from_str::<RuleManifest>(yaml_str)
            .map(|manifest| {
                info!("Successfully parsed rule manifest from YAML{}", context);
                manifest
            })
            .map_err(|e| {
                error!("Failed to parse rule manifest from YAML{}: {}", context, e);
                match e.location() {
                    Some(location) => ManifestError::Parse(format!(
                        "YAML parsing error{} - Syntax error at line {}, column {}: {}",
                        context,
                        location.line(),
                        location.column(),
                        e
                    )),
                    None => ManifestError::Parse(format!("YAML parsing error{}: {}", context, e)),
                }
            })
    }

    /// Load a rule manifest from file, picking the format from the extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<RuleManifest, ManifestError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        info!("Loading rule manifest from file: {}", display);

        let metadata = fs::metadata(path).map_err(|e| {
            error!("Cannot access rule manifest file '{}': {}", display, e);
            ManifestError::Io(format!("Failed to access file {}: {}", display, e))
        })?;
        debug!("File found: {} ({} bytes)", display, metadata.len());
        if metadata.len() == 0 {
            warn!("Rule manifest file is empty: {}", display);
        }
        if metadata.len() > LARGE_MANIFEST_BYTES {
            warn!(
                "Rule manifest file is very large ({} bytes): {}",
                metadata.len(),
                display
            );
        }

        let content = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read rule manifest file '{}': {}", display, e);
            ManifestError::Io(format!("Failed to read file {}: {}", display, e))
        })?;

        match Self::extension(path).as_deref() {
            Some("yaml") | Some("yml") => {
                info!("Detected YAML format for file: {}", display);
                #[cfg(feature = "yaml-support")]
                {
                    Self::from_yaml_with_context(&content, Some(&display))
                }
                #[cfg(not(feature = "yaml-support"))]
                {
                    error!("YAML support not enabled for file: {}", display);
                    Err(ManifestError::UnsupportedFormat(format!(
                        "YAML support not enabled (file: {}). Enable 'yaml-support' feature.",
                        display
                    )))
                }
            }
            Some("json") => {
                info!("Detected JSON format for file: {}", display);
                Self::from_json_with_context(&content, Some(&display))
            }
            _ => {
                info!("Unknown file extension for {}, defaulting to JSON format", display);
                Self::from_json_with_context(&content, Some(&display))
            }
        }
    }

    /// Load a rule manifest from file and validate it
    pub fn load_and_validate<P: AsRef<Path>>(path: P) -> Result<RuleManifest, ManifestError> {
        let path = path.as_ref();
        let manifest = Self::from_file(path)?;
        Self::validate_with_context(&manifest, Some(&path.display().to_string()))?;
        Ok(manifest)
    }

    /// Serialize a rule manifest to pretty JSON
    pub fn to_json(manifest: &RuleManifest) -> Result<String, ManifestError> {
        debug!("Serializing rule manifest to JSON");
        serde_json::to_string_pretty(manifest).map_err(|e| {
            error!("Failed to serialize rule manifest to JSON: {}", e);
            ManifestError::Parse(format!("JSON serialization error: {}", e))
        })
    }

    /// Serialize a rule manifest to YAML
    #[cfg(feature = "yaml-support")]
    pub fn to_yaml(manifest: &RuleManifest) -> Result<String, ManifestError> {
        debug!("Serializing rule manifest to YAML");
        serde_yaml::to_string(manifest).map_err(|e| {
            error!("Failed to serialize rule manifest to YAML: {}", e);
            ManifestError::Parse(format!("YAML serialization error: {}", e))
        })
    }

    /// Write a rule manifest to file (format based on extension)
    pub fn to_file<P: AsRef<Path>>(manifest: &RuleManifest, path: P) -> Result<(), ManifestError> {
        let path = path.as_ref();
        let content = match Self::extension(path).as_deref() {
            Some("yaml") | Some("yml") => {
                #[cfg(feature = "yaml-support")]
                {
                    Self::to_yaml(manifest)?
                }
                #[cfg(not(feature = "yaml-support"))]
                {
                    return Err(ManifestError::UnsupportedFormat(
                        "YAML support not enabled. Enable 'yaml-support' feature.".to_string(),
                    ));
                }
            }
            _ => Self::to_json(manifest)?,
        };

        fs::write(path, content)
            .map_err(|e| ManifestError::Io(format!("Failed to write file {}: {}", path.display(), e)))
    }

    /// Validate rule manifest structure and content
    pub fn validate(manifest: &RuleManifest) -> Result<(), ManifestError> {
        Self::validate_with_context(manifest, None)
    }

    /// Validate rule manifest structure and content with file context
    pub fn validate_with_context(
        manifest: &RuleManifest,
        file_path: Option<&str>,
    ) -> Result<(), ManifestError> {
        let context = Self::context(file_path);
        info!("Starting rule manifest validation{}", context);

        if manifest.version.is_empty() {
            error!("Rule manifest validation failed{}: version is required", context);
            return Err(ManifestError::Invalid(format!(
                "Manifest version is required{}",
                context
            )));
        }

        if !Self::is_valid_version(&manifest.version) {
            error!(
                "Rule manifest validation failed{}: invalid version format '{}'",
                context, manifest.version
            );
            return Err(ManifestError::Invalid(format!(
                "Invalid version format: {}{}",
                manifest.version, context
            )));
        }

        for (target_name, target) in &manifest.targets {
            if target_name.trim().is_empty() {
                return Err(ManifestError::Invalid(format!(
                    "Target name cannot be empty{}",
                    context
                )));
            }

            let mut seen = HashSet::new();
            for field in &target.fields {
                if field.name.trim().is_empty() {
                    return Err(ManifestError::Invalid(format!(
                        "Target '{}' declares a field with an empty name{}",
                        target_name, context
                    )));
                }
                if !seen.insert(field.name.as_str()) {
                    return Err(ManifestError::Invalid(format!(
                        "Target '{}' declares field '{}' more than once{}",
                        target_name, field.name, context
                    )));
                }
                for rule in &field.rules {
                    rule.validate_parameters().map_err(|reason| {
                        ManifestError::Invalid(format!(
                            "Field '{}.{}': {}{}",
                            target_name, field.name, reason, context
                        ))
                    })?;
                }
            }
            debug!("✓ Target '{}' is valid", target_name);
        }

        info!(
            "Validated rule manifest{}: version {}, {} targets",
            context,
            manifest.version,
            manifest.targets.len()
        );
        Ok(())
    }

    fn is_valid_version(version: &str) -> bool {
        let parts: Vec<&str> = version.split('.').collect();
        if parts.len() != 3 {
            return false;
        }

        parts.iter().all(|part| part.parse::<u32>().is_ok())
    }

    fn context(file_path: Option<&str>) -> String {
        file_path
            .map(|p| format!(" (file: {})", p))
            .unwrap_or_default()
    }

    fn preview(content: &str) -> String {
        match content.char_indices().nth(PREVIEW_LENGTH) {
            Some((idx, _)) => format!("{}...", &content[..idx]),
            None => content.to_string(),
        }
    }

    fn extension(path: &Path) -> Option<String> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        assert!(ManifestParser::is_valid_version("1.0.0"));
        assert!(!ManifestParser::is_valid_version("1.0"));
        assert!(!ManifestParser::is_valid_version("1.x.0"));
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long = "é".repeat(PREVIEW_LENGTH + 5);
        let preview = ManifestParser::preview(&long);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), PREVIEW_LENGTH + 3);
    }
}
