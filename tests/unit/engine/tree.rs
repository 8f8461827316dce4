use super::*;
use crate::engine::compose::compose;
use crate::engine::opts::ComposeOpts;
use crate::schema::model::{Scene, SceneComponent, SlotFill, TemplateSchema};
use serde_json::json;

fn tree(scenes: Vec<Scene>, fills: &[SlotFill]) -> RenderTree {
    let t = TemplateSchema {
        version: Some("1.0".to_owned()),
        scenes: Some(scenes),
        ..TemplateSchema::default()
    };
    compose(Some(&t), fills, None, &ComposeOpts::default()).unwrap()
}

fn scene(id: &str, secs: Option<f64>, components: Vec<SceneComponent>) -> Scene {
    Scene {
        id: id.to_owned(),
        duration_seconds: secs,
        components,
    }
}

#[test]
fn frames_map_to_scene_windows() {
    let tree = tree(
        vec![
            scene("a", Some(3.0), Vec::new()),
            scene("gap", None, Vec::new()),
            scene("b", Some(2.5), Vec::new()),
        ],
        &[],
    );
    assert_eq!(tree.duration_frames, 165);
    assert_eq!(tree.scenes[2].range(), FrameRange::from_start_len(90, 75));

    let f = tree.evaluate_frame(FrameIndex(89)).unwrap();
    assert_eq!((f.scene_index, f.scene_id.as_str(), f.scene_frame), (0, "a", 89));
    let f = tree.evaluate_frame(FrameIndex(90)).unwrap();
    assert_eq!((f.scene_index, f.scene_id.as_str(), f.scene_frame), (2, "b", 0));
    assert_eq!(tree.scene_at(FrameIndex(164)).map(|s| s.scene_id.as_str()), Some("b"));
    assert!(tree.scene_at(FrameIndex(165)).is_none());
}

#[test]
fn out_of_range_frame_is_an_error() {
    let tree = tree(vec![scene("a", Some(1.0), Vec::new())], &[]);
    let err = tree.evaluate_frame(FrameIndex(30)).unwrap_err();
    assert!(matches!(err, ReelError::Evaluation(_)));
}

#[test]
fn animated_text_scene_local_entrance() {
    let tree = tree(
        vec![
            scene("lead", Some(1.0), Vec::new()),
            scene(
                "s",
                Some(3.0),
                vec![
                    SceneComponent::new("AnimatedText", 0)
                        .with_prop("delay", json!(15))
                        .with_binding("text", "t"),
                ],
            ),
        ],
        &[SlotFill::new("t", "Hello")],
    );
    let opacity = |f: u64| tree.evaluate_frame(FrameIndex(30 + f)).unwrap().layers[0].paint.opacity();
    assert_eq!(opacity(0), 0.0);
    assert_eq!(opacity(15), 0.0);
    assert_eq!(opacity(30), 0.5);
    assert_eq!(opacity(45), 1.0);
}

#[test]
fn empty_text_paints_nothing_but_missing_image_paints_placeholder() {
    let tree = tree(
        vec![scene(
            "s",
            Some(1.0),
            vec![
                SceneComponent::new("AnimatedText", 0).with_binding("text", "t"),
                SceneComponent::new("TypewriterText", 1).with_prop("text", json!("")),
                SceneComponent::new("StaticImage", 2).with_binding("src", "img"),
                SceneComponent::new("KenBurnsImage", 3),
            ],
        )],
        &[SlotFill::new("t", ""), SlotFill::new("img", "")],
    );
    assert_eq!(tree.scenes[0].layers.len(), 4);
    let f = tree.evaluate_frame(FrameIndex(0)).unwrap();
    let ids: Vec<&str> = f.layers.iter().map(|l| l.component_id.as_str()).collect();
    assert_eq!(ids, vec!["StaticImage", "KenBurnsImage"]);
    assert!(f
        .layers
        .iter()
        .all(|l| matches!(l.paint, LayerPaint::Placeholder { .. })));
}

#[test]
fn ken_burns_uses_composition_time() {
    let tree = tree(
        vec![
            scene("a", Some(1.0), Vec::new()),
            scene(
                "b",
                Some(1.0),
                vec![SceneComponent::new("KenBurnsImage", 0).with_prop("src", json!("k.png"))],
            ),
        ],
        &[],
    );
    let f = tree.evaluate_frame(FrameIndex(30)).unwrap();
    match &f.layers[0].paint {
        LayerPaint::Image { scale, .. } => assert!((scale - 1.05).abs() < 1e-12),
        other => panic!("expected image, got {other:?}"),
    }
}

#[test]
fn evaluation_is_repeatable() {
    let tree = tree(
        vec![scene(
            "s",
            Some(2.0),
            vec![
                SceneComponent::new("GrainOverlay", 0),
                SceneComponent::new("TypewriterText", 1).with_prop("text", json!("Hello")),
            ],
        )],
        &[],
    );
    for f in [0, 7, 31, 59] {
        assert_eq!(
            tree.evaluate_frame(FrameIndex(f)).unwrap(),
            tree.evaluate_frame(FrameIndex(f)).unwrap()
        );
    }
}

#[test]
fn background_carried_into_frame() {
    let tree = tree(vec![scene("blank", Some(1.0), Vec::new())], &[]);
    let f = tree.evaluate_frame(FrameIndex(0)).unwrap();
    assert_eq!(f.background, Some(Rgba8Premul::opaque(0, 0, 0)));
    assert!(f.layers.is_empty());
}
