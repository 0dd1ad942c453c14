//! Wire-exact models for the index/component template management API.
//!
//! This crate defines the JSON request/response body shapes for the
//! `_component_template` and `_index_template` management endpoints of an
//! Elasticsearch-compatible cluster. Field names follow the wire format
//! exactly; renaming a field here breaks wire compatibility.

pub mod models;
mod serde_helpers;

pub use models::{
    AcknowledgedResponse, Alias, AliasDefinition, ComponentTemplate, ComponentTemplateListResponse,
    ComponentTemplateNode, ComponentTemplateSummary, DataStreamLifecycle,
    DataStreamLifecycleDownsampling, DataStreamOptionsTemplate, DownsampleConfig,
    DownsamplingRound, DynamicMapping, DynamicMode, ErrorCause, ErrorResponse,
    FailureStoreTemplate, IndexSettings, IndexTemplate,
    IndexTemplateDataStreamConfiguration, IndexTemplateListResponse, IndexTemplateSummary,
    Metadata, NamedIndexTemplate, OverlappingTemplate, SimulateIndexResponse, SourceField,
    TypeMapping, VersionNumber,
};
pub use serde_helpers::Nullable;
