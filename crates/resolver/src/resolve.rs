//! Template selection and composition.
//!
//! Given a candidate index or data stream name, resolution answers two
//! questions: which single index template applies, and what merged
//! configuration the cluster would create the index with.

use serde::Serialize;
use templatectl_types::{
    IndexTemplate, IndexTemplateDataStreamConfiguration, IndexTemplateSummary, OverlappingTemplate,
};
use tracing::{debug, instrument};

use crate::error::{Result, TemplateError};
use crate::merge::apply_source;
use crate::pattern::wildcard_match;
use crate::store::TemplateStore;

/// The outcome of resolving a candidate name against a store snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTemplate {
    /// Name of the winning index template.
    pub template_name: String,
    /// The fully merged configuration: every composed component template in
    /// list order, then the winning template's inline summary on top.
    pub template: IndexTemplateSummary,
    /// Data stream flags of the winning template, when present. Presence
    /// means the candidate would be created as a data stream.
    pub data_stream: Option<IndexTemplateDataStreamConfiguration>,
    /// Matching templates that lost selection on priority.
    pub overlapping: Vec<OverlappingTemplate>,
}

/// Resolve `candidate` against the store.
///
/// Returns `Ok(None)` when no index template matches; the candidate would be
/// created with system defaults, which is not an error. Fails when the
/// highest priority is shared by several matches, or when a `composed_of`
/// entry is missing and not covered by the template's
/// `ignore_missing_component_templates` list.
#[instrument(skip(store))]
pub fn resolve_for(store: &TemplateStore, candidate: &str) -> Result<Option<ResolvedTemplate>> {
    let Some((winner_name, winner)) = select_template(store, candidate)? else {
        debug!(candidate, "no index template matches, system defaults apply");
        return Ok(None);
    };
    debug!(
        candidate,
        template = winner_name,
        priority = winner.priority(),
        "selected index template"
    );

    let overlapping = store
        .index_templates()
        .filter(|(name, template)| {
            *name != winner_name && matches_any(template, candidate)
        })
        .map(|(name, template)| OverlappingTemplate {
            name: name.to_string(),
            index_patterns: template.index_patterns.clone(),
        })
        .collect();

    let mut merged = IndexTemplateSummary::default();
    for component_name in &winner.composed_of {
        match store.get_component_template(component_name) {
            Ok(node) => apply_source(&mut merged, &node.template),
            Err(_) if winner.ignores_missing(component_name) => {
                debug!(
                    component = component_name.as_str(),
                    "skipping missing component template on the ignore list"
                );
            }
            Err(_) => {
                return Err(TemplateError::MissingComponentTemplate {
                    name: component_name.clone(),
                    index_template: winner_name.to_string(),
                });
            }
        }
    }

    // The inline summary merges last and takes final precedence.
    if let Some(inline) = &winner.template {
        apply_source(&mut merged, inline);
    }

    Ok(Some(ResolvedTemplate {
        template_name: winner_name.to_string(),
        template: merged,
        data_stream: winner.data_stream.clone(),
        overlapping,
    }))
}

fn matches_any(template: &IndexTemplate, candidate: &str) -> bool {
    template
        .index_patterns
        .iter()
        .any(|pattern| wildcard_match(pattern, candidate))
}

/// Pick the single highest-priority match, or fail on a tie.
fn select_template<'a>(
    store: &'a TemplateStore,
    candidate: &str,
) -> Result<Option<(&'a str, &'a IndexTemplate)>> {
    let mut best: Option<(&str, &IndexTemplate)> = None;
    let mut tied: Vec<&str> = Vec::new();

    for (name, template) in store.index_templates() {
        if !matches_any(template, candidate) {
            continue;
        }
        match &best {
            None => best = Some((name, template)),
            Some((_, current)) if template.priority() > current.priority() => {
                best = Some((name, template));
                tied.clear();
            }
            Some((_, current)) if template.priority() == current.priority() => {
                tied.push(name);
            }
            Some(_) => {}
        }
    }

    match best {
        Some((name, template)) if !tied.is_empty() => {
            let mut names: Vec<String> = tied.iter().map(|n| n.to_string()).collect();
            names.insert(0, name.to_string());
            Err(TemplateError::AmbiguousPriority {
                priority: template.priority(),
                names,
            })
        }
        other => Ok(other),
    }
}
