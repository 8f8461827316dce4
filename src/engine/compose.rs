use crate::components::ComponentKind;
use crate::engine::opts::ComposeOpts;
use crate::engine::tree::{AudioTrack, ComposeWarning, LayerEntry, RenderTree, SceneEntry};
use crate::foundation::error::{ReelError, ReelResult};
use crate::props::merge::merge_props;
use crate::props::nested_components;
use crate::schema::model::{
    Scene, SceneComponent, SlotFill, TemplateSchema, fills_from_json_value,
};
use crate::schema::validate::validate_template;
use crate::slots::resolver::SlotValues;
use crate::timeline::scheduler::{schedule, total_frames};

/// Compose a template and its fills into a [`RenderTree`].
///
/// Fails only with [`ReelError::InvalidTemplate`] (absent template, wrong version, missing
/// scenes) or [`ReelError::Validation`] for unusable `opts`. Unknown components are skipped and
/// recorded in [`RenderTree::warnings`]; empty slots fall back to static props and then to
/// component defaults.
#[tracing::instrument(skip_all, fields(fills = fills.len()))]
pub fn compose(
    template: Option<&TemplateSchema>,
    fills: &[SlotFill],
    music_url: Option<&str>,
    opts: &ComposeOpts,
) -> ReelResult<RenderTree> {
    opts.validate()?;
    let Some(template) = template else {
        return Err(ReelError::invalid_template("template is absent"));
    };
    validate_template(template)?;

    let mut values = SlotValues::resolve(fills);
    if opts.placeholder_previews {
        values.fill_placeholders(&template.slots);
    }

    let scenes = template.scenes();
    let schedule = schedule(scenes, opts.fps);
    let duration_frames = total_frames(&schedule);

    let mut warnings = Vec::new();
    let entries = schedule
        .iter()
        .map(|s| {
            let scene = &scenes[s.scene_index];
            let mut cx = SceneCx {
                scene_index: s.scene_index,
                scene,
                values: &values,
                warnings: &mut warnings,
            };
            SceneEntry {
                scene_id: scene.id.clone(),
                start_frame: s.range.start.0,
                duration_frames: s.range.len_frames(),
                background: scene
                    .components
                    .is_empty()
                    .then_some(opts.empty_scene_background),
                layers: cx.resolve_layers(&scene.components, &[]),
            }
        })
        .collect();

    let audio = music_url
        .filter(|u| !u.is_empty())
        .map(str::to_owned)
        .or_else(|| {
            opts.fallback_to_default_music
                .then(|| template.default_music.as_ref().map(|m| m.url.clone()))
                .flatten()
                .filter(|u| !u.is_empty())
        })
        .map(|url| AudioTrack {
            url,
            volume: opts.music_volume,
            start_frame: 0,
            duration_frames,
        });

    tracing::debug!(
        scenes = scenes.len(),
        duration_frames,
        warnings = warnings.len(),
        audio = audio.is_some(),
        "composed template"
    );

    Ok(RenderTree {
        fps: opts.fps,
        canvas: opts.canvas,
        duration_frames,
        scenes: entries,
        audio,
        warnings,
        schedule,
    })
}

/// Compose from already-decoded JSON records, the shape hosts hand over.
///
/// `template` may be `null`; `fills` may be a bare array or `{"fills": [...]}`.
pub fn compose_json(
    template: &serde_json::Value,
    fills: &serde_json::Value,
    music_url: Option<&str>,
    opts: &ComposeOpts,
) -> ReelResult<RenderTree> {
    let template = TemplateSchema::from_json_value(template.clone())?;
    let fills = if fills.is_null() {
        Vec::new()
    } else {
        fills_from_json_value(fills.clone())?
    };
    compose(Some(&template), &fills, music_url, opts)
}

struct SceneCx<'a> {
    scene_index: usize,
    scene: &'a Scene,
    values: &'a SlotValues,
    warnings: &'a mut Vec<ComposeWarning>,
}

impl SceneCx<'_> {
    /// Resolve a component list into layers sorted by `zIndex`. The sort is stable, so equal
    /// keys keep declaration order.
    fn resolve_layers(
        &mut self,
        components: &[SceneComponent],
        parent: &[usize],
    ) -> Vec<LayerEntry> {
        let mut ordered: Vec<(usize, &SceneComponent)> = components.iter().enumerate().collect();
        ordered.sort_by_key(|(_, c)| c.z_index);

        let mut layers = Vec::with_capacity(ordered.len());
        for (i, component) in ordered {
            let mut path = parent.to_vec();
            path.push(i);
            if let Some(layer) = self.resolve_component(component, path) {
                layers.push(layer);
            }
        }
        layers
    }

    fn resolve_component(
        &mut self,
        component: &SceneComponent,
        path: Vec<usize>,
    ) -> Option<LayerEntry> {
        let Some(kind) = ComponentKind::lookup(&component.component_id) else {
            tracing::warn!(
                scene_index = self.scene_index,
                scene_id = %self.scene.id,
                component_id = %component.component_id,
                ?path,
                "unknown component id, skipping"
            );
            self.warnings.push(ComposeWarning {
                scene_index: self.scene_index,
                scene_id: self.scene.id.clone(),
                component_path: path,
                component_id: component.component_id.clone(),
            });
            return None;
        };

        let mut resolved_props =
            merge_props(&component.props, &component.slot_bindings, self.values);
        let children = if kind.accepts_children() {
            resolved_props.remove("children");
            self.resolve_layers(&nested_components(&component.props), &path)
        } else {
            Vec::new()
        };

        let instance = kind.instantiate(
            &resolved_props,
            children.iter().map(|c| c.instance.clone()).collect(),
        );
        Some(LayerEntry {
            z_index: component.z_index,
            component_id: component.component_id.clone(),
            resolved_props,
            children,
            instance,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/compose.rs"]
mod tests;
