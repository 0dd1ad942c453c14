//! Per-field template merging.
//!
//! Merging folds a sequence of configuration sources into one accumulator
//! with last-wins semantics at field granularity, never whole-object
//! replacement: a later source that sets `number_of_shards` leaves an
//! earlier source's `number_of_replicas` in place.
//!
//! Granularity rules:
//! - settings: typed knobs field-by-field, raw extras key-by-key
//! - mappings: top-level controls field-by-field; `properties` per field
//!   name with recursive object merge inside a field's definition
//! - aliases: per alias name, a later source redefines a name wholesale
//! - lifecycle: field-by-field; a downsampling schedule is replaced whole
//! - data_stream_options: tri-state — explicit null clears what earlier
//!   sources contributed, absence leaves it untouched

use std::collections::BTreeMap;

use serde_json::Value;
use templatectl_types::{
    AliasDefinition, ComponentTemplateSummary, DataStreamLifecycle, DataStreamOptionsTemplate,
    IndexSettings, IndexTemplateSummary, Nullable, TypeMapping,
};

/// A configuration source that can be folded into the merge accumulator.
///
/// Component summaries carry settings keyed by index-name scope while index
/// template summaries carry them flat; `settings` normalizes both to an
/// ordered list of fragments.
pub(crate) trait TemplateSource {
    fn settings(&self) -> Vec<&IndexSettings>;
    fn mappings(&self) -> Option<&TypeMapping>;
    fn aliases(&self) -> Option<&BTreeMap<String, AliasDefinition>>;
    fn lifecycle(&self) -> Option<&DataStreamLifecycle>;
    fn data_stream_options(&self) -> Option<&Nullable<DataStreamOptionsTemplate>>;
}

impl TemplateSource for ComponentTemplateSummary {
    fn settings(&self) -> Vec<&IndexSettings> {
        self.settings
            .as_ref()
            .map(|keyed| keyed.values().collect())
            .unwrap_or_default()
    }

    fn mappings(&self) -> Option<&TypeMapping> {
        self.mappings.as_ref()
    }

    fn aliases(&self) -> Option<&BTreeMap<String, AliasDefinition>> {
        self.aliases.as_ref()
    }

    fn lifecycle(&self) -> Option<&DataStreamLifecycle> {
        self.lifecycle.as_ref()
    }

    fn data_stream_options(&self) -> Option<&Nullable<DataStreamOptionsTemplate>> {
        self.data_stream_options.as_ref()
    }
}

impl TemplateSource for IndexTemplateSummary {
    fn settings(&self) -> Vec<&IndexSettings> {
        self.settings.as_ref().into_iter().collect()
    }

    fn mappings(&self) -> Option<&TypeMapping> {
        self.mappings.as_ref()
    }

    fn aliases(&self) -> Option<&BTreeMap<String, AliasDefinition>> {
        self.aliases.as_ref()
    }

    fn lifecycle(&self) -> Option<&DataStreamLifecycle> {
        self.lifecycle.as_ref()
    }

    fn data_stream_options(&self) -> Option<&Nullable<DataStreamOptionsTemplate>> {
        self.data_stream_options.as_ref()
    }
}

/// Fold one source into the accumulator.
pub(crate) fn apply_source(acc: &mut IndexTemplateSummary, source: &impl TemplateSource) {
    for fragment in source.settings() {
        merge_settings(acc.settings.get_or_insert_with(Default::default), fragment);
    }

    if let Some(mappings) = source.mappings() {
        merge_mappings(acc.mappings.get_or_insert_with(Default::default), mappings);
    }

    if let Some(aliases) = source.aliases() {
        let merged = acc.aliases.get_or_insert_with(Default::default);
        for (name, definition) in aliases {
            merged.insert(name.clone(), definition.clone());
        }
    }

    if let Some(lifecycle) = source.lifecycle() {
        merge_lifecycle(acc.lifecycle.get_or_insert_with(Default::default), lifecycle);
    }

    match source.data_stream_options() {
        None => {}
        Some(Nullable::Null) => acc.data_stream_options = None,
        Some(Nullable::Value(options)) => {
            acc.data_stream_options = Some(Nullable::Value(options.clone()));
        }
    }
}

fn merge_settings(acc: &mut IndexSettings, src: &IndexSettings) {
    if src.number_of_shards.is_some() {
        acc.number_of_shards = src.number_of_shards;
    }
    if src.number_of_replicas.is_some() {
        acc.number_of_replicas = src.number_of_replicas;
    }
    if src.refresh_interval.is_some() {
        acc.refresh_interval = src.refresh_interval.clone();
    }
    if src.hidden.is_some() {
        acc.hidden = src.hidden;
    }
    if src.mode.is_some() {
        acc.mode = src.mode.clone();
    }
    for (key, value) in &src.other {
        match acc.other.get_mut(key) {
            Some(existing) => merge_json(existing, value),
            None => {
                acc.other.insert(key.clone(), value.clone());
            }
        }
    }
}

fn merge_mappings(acc: &mut TypeMapping, src: &TypeMapping) {
    if let Some(meta) = &src.meta {
        let merged = acc.meta.get_or_insert_with(Default::default);
        for (key, value) in meta {
            merged.insert(key.clone(), value.clone());
        }
    }
    if src.source.is_some() {
        acc.source = src.source.clone();
    }
    if src.dynamic.is_some() {
        acc.dynamic = src.dynamic;
    }
    if src.date_detection.is_some() {
        acc.date_detection = src.date_detection;
    }
    if src.numeric_detection.is_some() {
        acc.numeric_detection = src.numeric_detection;
    }
    if src.dynamic_templates.is_some() {
        acc.dynamic_templates = src.dynamic_templates.clone();
    }
    if let Some(properties) = &src.properties {
        let merged = acc.properties.get_or_insert_with(Default::default);
        for (field, definition) in properties {
            match merged.get_mut(field) {
                Some(existing) => merge_json(existing, definition),
                None => {
                    merged.insert(field.clone(), definition.clone());
                }
            }
        }
    }
}

fn merge_lifecycle(acc: &mut DataStreamLifecycle, src: &DataStreamLifecycle) {
    if src.data_retention.is_some() {
        acc.data_retention = src.data_retention.clone();
    }
    if src.enabled.is_some() {
        acc.enabled = src.enabled;
    }
    if src.downsampling.is_some() {
        acc.downsampling = src.downsampling.clone();
    }
    if let Some(rollover) = &src.rollover {
        let merged = acc.rollover.get_or_insert_with(Default::default);
        for (key, value) in rollover {
            merged.insert(key.clone(), value.clone());
        }
    }
}

/// Recursive last-wins merge for raw JSON fragments: objects merge per key,
/// anything else is replaced.
fn merge_json(dst: &mut Value, src: &Value) {
    match (dst, src) {
        (Value::Object(dst_map), Value::Object(src_map)) => {
            for (key, value) in src_map {
                match dst_map.get_mut(key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        dst_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (dst, src) => *dst = src.clone(),
    }
}
