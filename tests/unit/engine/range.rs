use super::*;
use crate::engine::compose::compose;
use crate::engine::opts::ComposeOpts;
use crate::schema::model::{Scene, SceneComponent, TemplateSchema};
use serde_json::json;

fn sample_tree() -> RenderTree {
    let t = TemplateSchema {
        version: Some("1.0".to_owned()),
        scenes: Some(vec![
            Scene {
                id: "a".to_owned(),
                duration_seconds: Some(2.0),
                components: vec![
                    SceneComponent::new("KenBurnsImage", 0).with_prop("src", json!("a.png")),
                    SceneComponent::new("GrainOverlay", 1),
                ],
            },
            Scene {
                id: "b".to_owned(),
                duration_seconds: Some(1.5),
                components: vec![
                    SceneComponent::new("TypewriterText", 0).with_prop("text", json!("typing")),
                ],
            },
        ]),
        ..TemplateSchema::default()
    };
    compose(Some(&t), &[], None, &ComposeOpts::default()).unwrap()
}

#[test]
fn parallel_matches_sequential() {
    let tree = sample_tree();
    let range = tree.range();
    let seq = evaluate_range(&tree, range, &EvalThreading::default()).unwrap();
    let par = evaluate_range(
        &tree,
        range,
        &EvalThreading {
            parallel: true,
            chunk_size: 7,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(seq.len(), 105);
    assert_eq!(seq, par);
    assert!(seq.iter().enumerate().all(|(i, f)| f.frame.0 == i as u64));
}

#[test]
fn zero_chunk_size_is_normalized() {
    let tree = sample_tree();
    let range = FrameRange::from_start_len(10, 5);
    let out = evaluate_range(
        &tree,
        range,
        &EvalThreading {
            parallel: true,
            chunk_size: 0,
            threads: Some(1),
        },
    )
    .unwrap();
    assert_eq!(out.len(), 5);
    assert_eq!(out[0].frame, FrameIndex(10));
}

#[test]
fn invalid_ranges_and_threads_are_rejected() {
    let tree = sample_tree();
    assert!(evaluate_range(&tree, FrameRange::from_start_len(3, 0), &EvalThreading::default()).is_err());
    assert!(evaluate_range(&tree, FrameRange::from_start_len(100, 6), &EvalThreading::default()).is_err());
    let err = evaluate_range(
        &tree,
        FrameRange::from_start_len(0, 2),
        &EvalThreading {
            parallel: true,
            chunk_size: 1,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
}
