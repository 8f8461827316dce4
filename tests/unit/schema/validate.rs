use super::*;
use crate::schema::model::{ContentSlot, Scene, SlotConstraints};
use serde_json::json;

fn slot(id: &str, slot_type: SlotType, required: bool) -> ContentSlot {
    ContentSlot {
        id: id.to_owned(),
        slot_type,
        label: id.to_owned(),
        required,
        placeholder: None,
        constraints: None,
    }
}

fn template(slots: Vec<ContentSlot>, scenes: Vec<Scene>) -> TemplateSchema {
    TemplateSchema {
        version: Some("1.0".to_owned()),
        slots,
        scenes: Some(scenes),
        ..TemplateSchema::default()
    }
}

#[test]
fn gate_accepts_minimal_template() {
    validate_template(&template(Vec::new(), Vec::new())).unwrap();
}

#[test]
fn gate_rejects_version_and_scenes_problems() {
    let mut t = template(Vec::new(), Vec::new());
    t.version = None;
    let err = validate_template(&t).unwrap_err();
    assert!(err.is_invalid_template());
    assert!(err.to_string().contains("version is missing"));

    t.version = Some("1.1".to_owned());
    assert!(validate_template(&t).unwrap_err().to_string().contains("\"1.1\""));

    let mut t = template(Vec::new(), Vec::new());
    t.scenes = None;
    assert!(validate_template(&t).unwrap_err().is_invalid_template());
}

#[test]
fn lint_reports_authoring_problems_with_paths() {
    let t = template(
        vec![
            slot("hero", SlotType::Image, true),
            slot("hero", SlotType::Text, false),
            slot(" ", SlotType::Text, false),
        ],
        vec![
            Scene {
                id: "a".to_owned(),
                duration_seconds: None,
                components: vec![
                    SceneComponent::new("Confetti", 0),
                    SceneComponent::new("StaticImage", 0).with_binding("src", "missing"),
                ],
            },
            Scene {
                id: "b".to_owned(),
                duration_seconds: Some(-1.0),
                components: vec![SceneComponent::new("FadeTransition", 0).with_prop(
                    "children",
                    json!([{"componentId": "Nope"}]),
                )],
            },
        ],
    );

    let locations: Vec<String> = lint_template(&t).iter().map(LintIssue::location).collect();
    assert_eq!(
        locations,
        vec![
            "$.slots[1].id",
            "$.slots[2].id",
            "$.scenes[0].durationSeconds",
            "$.scenes[0].components[0].componentId",
            "$.scenes[0].components[1].slotBindings.src",
            "$.scenes[1].durationSeconds",
            "$.scenes[1].components[0].props.children[0].componentId",
        ]
    );
}

#[test]
fn clean_template_has_no_lints() {
    let t = template(
        vec![slot("hero", SlotType::Image, true)],
        vec![Scene {
            id: "a".to_owned(),
            duration_seconds: Some(3.0),
            components: vec![SceneComponent::new("StaticImage", 0).with_binding("src", "hero")],
        }],
    );
    assert!(lint_template(&t).is_empty());
}

#[test]
fn lint_fills_checks_against_latest_fill() {
    let mut title = slot("title", SlotType::Text, false);
    title.constraints = Some(SlotConstraints {
        max_length: Some(5),
        ..SlotConstraints::default()
    });
    let t = template(
        vec![slot("hero", SlotType::Image, true), title],
        Vec::new(),
    );

    let fills = [
        SlotFill::new("title", "way too long"),
        SlotFill::new("title", "short"),
        SlotFill::typed("hero", SlotType::Text, ""),
        SlotFill::new("ghost", "x"),
    ];
    let issues = lint_fills(&t, &fills);
    let rendered: Vec<String> = issues.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "$[2].type: fill type text does not match slot type image",
            "$[3].slotId: fill references unknown slot \"ghost\"",
            "$.slots[0]: required slot \"hero\" has no value",
        ]
    );
}

#[test]
fn lint_fills_reports_overlong_text() {
    let mut title = slot("title", SlotType::Text, false);
    title.constraints = Some(SlotConstraints {
        max_length: Some(3),
        ..SlotConstraints::default()
    });
    let t = template(vec![title], Vec::new());
    let issues = lint_fills(&t, &[SlotFill::new("title", "héllo")]);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].location(), "$[0].value");
    assert!(issues[0].message.contains("5 characters"));
}
