//! # rule-introspect
//!
//! Two small building blocks driven by statically declared metadata.
//!
//! ## Features
//!
//! - **Declarative validation**: rules attached to struct fields with the
//!   `validatable!` macro (or declared in a JSON/YAML rule manifest), evaluated
//!   by a `ValidationEngine` that reports every violation at once
//! - **Capability factories**: types tagged with a `CapabilityKey` are
//!   discovered from an explicit candidate list and instantiated by key
//!
//! ## Quick Start
//!
//! ```rust
//! use rule_introspect::prelude::*;
//!
//! let engine = ValidationEngine::new();
//! let user = User::new("", "not-an-email", "short");
//! for message in engine.messages(&user) {
//!     println!("{}", message);
//! }
//!
//! let factory = PaymentFactory::new().expect("built-in processors have unique keys");
//! let processor = factory.create("stripe").expect("stripe is registered");
//! assert!(processor.process(99.99));
//! ```

pub mod config;
pub mod error;
pub mod manifest;
pub mod models;
pub mod payment;
pub mod registry;
pub mod validation;

// Validation exports
pub use validation::{
    BuiltinRule, FieldSpec, Validatable, ValidationEngine, ValidationError, ValidationReport,
    ValidationRule,
};

// Registry exports
pub use registry::{Candidate, CapabilityKey, CapabilityRegistry};

// Manifest exports
pub use manifest::{BoundTarget, ManifestParser, RuleManifest, TargetManifest};

// Domain exports
pub use models::User;
pub use payment::{PaymentFactory, PaymentProcessor};

// Configuration exports
pub use config::EngineConfig;

// Error exports
pub use error::{IntrospectError, ManifestError, RegistryError, Result, TargetError};

/// Prelude module for convenient importing
pub mod prelude {
    pub use crate::{
        BuiltinRule, Candidate, CapabilityKey, CapabilityRegistry, EngineConfig, FieldSpec,
        IntrospectError, ManifestParser, PaymentFactory, PaymentProcessor, RegistryError, Result,
        RuleManifest, TargetError, User, Validatable, ValidationEngine, ValidationError,
        ValidationRule,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
