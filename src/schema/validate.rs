use crate::components::ComponentKind;
use crate::foundation::error::{ReelError, ReelResult};
use crate::schema::model::{SceneComponent, SlotFill, SlotType, TemplateSchema};
use crate::schema::version::TEMPLATE_VERSION_STR;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// One step of a JSON-path-like location inside a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaPathElem {
    /// Object field with a fixed name.
    Field(&'static str),
    /// Object field with a data-defined name (prop names, slot ids).
    Key(String),
    /// Array index.
    Index(usize),
}

/// A non-fatal template or fill diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    /// Location of the offending value.
    pub path: Vec<SchemaPathElem>,
    /// Human-readable description.
    pub message: String,
}

impl LintIssue {
    fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }

    /// Rendered location, e.g. `$.scenes[0].components[2].componentId`.
    pub fn location(&self) -> String {
        format_path(&self.path)
    }
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[SchemaPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match p {
            SchemaPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SchemaPathElem::Key(name) => {
                s.push('.');
                s.push_str(name);
            }
            SchemaPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

/// The hard validity gate applied by [`crate::compose`].
///
/// A template is usable when its version is exactly `"1.0"` and it carries a `scenes` list.
/// Everything else is left to the permissive per-component fallbacks.
pub fn validate_template(template: &TemplateSchema) -> ReelResult<()> {
    match template.version.as_deref() {
        Some(TEMPLATE_VERSION_STR) => {}
        Some(other) => {
            return Err(ReelError::invalid_template(format!(
                "version must be \"{TEMPLATE_VERSION_STR}\" (got \"{other}\")"
            )));
        }
        None => {
            return Err(ReelError::invalid_template(format!(
                "version is missing (expected \"{TEMPLATE_VERSION_STR}\")"
            )));
        }
    }
    if template.scenes.is_none() {
        return Err(ReelError::invalid_template("scenes list is missing"));
    }
    Ok(())
}

/// Collect authoring diagnostics for a template. Never fails and never affects composition.
pub fn lint_template(template: &TemplateSchema) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    let mut seen = HashSet::<&str>::new();
    for (i, slot) in template.slots.iter().enumerate() {
        let path = [
            SchemaPathElem::Field("slots"),
            SchemaPathElem::Index(i),
            SchemaPathElem::Field("id"),
        ];
        if slot.id.trim().is_empty() {
            issues.push(LintIssue::at(&path, "slot id must be non-empty"));
        } else if !seen.insert(slot.id.as_str()) {
            issues.push(LintIssue::at(
                &path,
                format!("duplicate slot id \"{}\"", slot.id),
            ));
        }
    }

    let declared: HashSet<&str> = template.slots.iter().map(|s| s.id.as_str()).collect();
    for (si, scene) in template.scenes().iter().enumerate() {
        let scene_path = [SchemaPathElem::Field("scenes"), SchemaPathElem::Index(si)];
        let duration_path = [
            SchemaPathElem::Field("scenes"),
            SchemaPathElem::Index(si),
            SchemaPathElem::Field("durationSeconds"),
        ];
        match scene.duration_seconds {
            None => issues.push(LintIssue::at(
                &duration_path,
                "durationSeconds is missing; scene will be 0 frames long",
            )),
            Some(d) if !d.is_finite() || d <= 0.0 => issues.push(LintIssue::at(
                &duration_path,
                format!("durationSeconds must be > 0 (got {d}); scene will be 0 frames long"),
            )),
            Some(_) => {}
        }

        for (ci, component) in scene.components.iter().enumerate() {
            let mut path = scene_path.to_vec();
            path.push(SchemaPathElem::Field("components"));
            path.push(SchemaPathElem::Index(ci));
            lint_component(component, &declared, &mut path, &mut issues);
        }
    }

    issues
}

fn lint_component(
    component: &SceneComponent,
    declared: &HashSet<&str>,
    path: &mut Vec<SchemaPathElem>,
    issues: &mut Vec<LintIssue>,
) {
    let kind = ComponentKind::lookup(&component.component_id);
    if kind.is_none() {
        path.push(SchemaPathElem::Field("componentId"));
        issues.push(LintIssue::at(
            path,
            format!(
                "unknown component id \"{}\"; it will be skipped",
                component.component_id
            ),
        ));
        path.pop();
    }

    for (prop, slot_id) in &component.slot_bindings {
        if !declared.contains(slot_id.as_str()) {
            path.push(SchemaPathElem::Field("slotBindings"));
            path.push(SchemaPathElem::Key(prop.clone()));
            issues.push(LintIssue::at(
                path,
                format!("binding references undeclared slot \"{slot_id}\""),
            ));
            path.truncate(path.len() - 2);
        }
    }

    if kind == Some(ComponentKind::FadeTransition) {
        let children = crate::props::nested_components(&component.props);
        for (i, child) in children.iter().enumerate() {
            path.push(SchemaPathElem::Field("props"));
            path.push(SchemaPathElem::Field("children"));
            path.push(SchemaPathElem::Index(i));
            lint_component(child, declared, path, issues);
            path.truncate(path.len() - 3);
        }
    }
}

/// Check a set of fills against the template's slot declarations.
///
/// Fills are checked as the engine would see them: the last fill per slot id wins.
pub fn lint_fills(template: &TemplateSchema, fills: &[SlotFill]) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    let mut latest = HashMap::<&str, usize>::new();

    for (i, fill) in fills.iter().enumerate() {
        let Some(slot) = template.slot(&fill.slot_id) else {
            issues.push(LintIssue::at(
                &[SchemaPathElem::Index(i), SchemaPathElem::Field("slotId")],
                format!("fill references unknown slot \"{}\"", fill.slot_id),
            ));
            continue;
        };
        latest.insert(fill.slot_id.as_str(), i);

        if let Some(ty) = fill.slot_type
            && ty != slot.slot_type
        {
            issues.push(LintIssue::at(
                &[SchemaPathElem::Index(i), SchemaPathElem::Field("type")],
                format!(
                    "fill type {} does not match slot type {}",
                    slot_type_name(ty),
                    slot_type_name(slot.slot_type)
                ),
            ));
        }
    }

    for (i, fill) in fills.iter().enumerate() {
        if latest.get(fill.slot_id.as_str()) != Some(&i) {
            continue;
        }
        let Some(slot) = template.slot(&fill.slot_id) else {
            continue;
        };
        if slot.slot_type == SlotType::Text
            && let Some(max) = slot.constraints.as_ref().and_then(|c| c.max_length)
        {
            let len = fill.value.chars().count();
            if len > max {
                issues.push(LintIssue::at(
                    &[SchemaPathElem::Index(i), SchemaPathElem::Field("value")],
                    format!("text is {len} characters, slot allows at most {max}"),
                ));
            }
        }
    }

    for (si, slot) in template.slots.iter().enumerate() {
        if !slot.required {
            continue;
        }
        let filled = latest
            .get(slot.id.as_str())
            .is_some_and(|&i| !fills[i].value.is_empty());
        if !filled {
            issues.push(LintIssue::at(
                &[SchemaPathElem::Field("slots"), SchemaPathElem::Index(si)],
                format!("required slot \"{}\" has no value", slot.id),
            ));
        }
    }

    issues
}

fn slot_type_name(ty: SlotType) -> &'static str {
    match ty {
        SlotType::Image => "image",
        SlotType::Text => "text",
        SlotType::Video => "video",
        SlotType::Audio => "audio",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
