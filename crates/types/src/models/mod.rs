//! Typed models for the template management API.
//!
//! Organized by resource, mirroring the endpoint structure: component
//! templates, index templates, and the shared building blocks both kinds of
//! template compose (settings, mappings, aliases, lifecycle, data stream
//! options).

mod aliases;
mod common;
mod component_template;
mod data_stream;
mod index_template;
mod lifecycle;
mod mappings;
mod settings;
mod simulate;

pub use aliases::{Alias, AliasDefinition};
pub use common::{AcknowledgedResponse, ErrorCause, ErrorResponse, Metadata, VersionNumber};
pub use component_template::{
    ComponentTemplate, ComponentTemplateListResponse, ComponentTemplateNode,
    ComponentTemplateSummary,
};
pub use data_stream::{
    DataStreamOptionsTemplate, FailureStoreTemplate, IndexTemplateDataStreamConfiguration,
};
pub use index_template::{
    IndexTemplate, IndexTemplateListResponse, IndexTemplateSummary, NamedIndexTemplate,
};
pub use lifecycle::{
    DataStreamLifecycle, DataStreamLifecycleDownsampling, DownsampleConfig, DownsamplingRound,
};
pub use mappings::{DynamicMapping, DynamicMode, SourceField, TypeMapping};
pub use settings::IndexSettings;
pub use simulate::{OverlappingTemplate, SimulateIndexResponse};
