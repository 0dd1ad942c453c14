//! Error types for store operations and template resolution.

use thiserror::Error;

/// Result type alias for store and resolver operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur while administering or resolving templates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// No component template with this name exists.
    #[error("component template '{0}' not found")]
    ComponentTemplateNotFound(String),

    /// No index template with this name exists.
    #[error("index template '{0}' not found")]
    IndexTemplateNotFound(String),

    /// A `composed_of` entry could not be resolved and is not covered by
    /// `ignore_missing_component_templates`.
    #[error("index template '{index_template}' references missing component template '{name}'")]
    MissingComponentTemplate {
        name: String,
        index_template: String,
    },

    /// More than one matching index template shares the highest priority.
    /// The tie-break is deliberately unspecified upstream, so this is
    /// surfaced as a configuration error rather than resolved silently.
    #[error("multiple index templates match at priority {priority}: {}", .names.join(", "))]
    AmbiguousPriority { priority: i64, names: Vec<String> },
}
