use super::*;
use serde_json::json;

fn props(v: serde_json::Value) -> PropMap {
    serde_json::from_value(v).unwrap()
}

fn at(frame: u64, duration: u64) -> TimeCtx {
    TimeCtx::single_scope(frame, duration)
}

#[test]
fn animated_text_fade_window_after_delay() {
    let text = AnimatedText::from_props(&props(json!({"text": "Hi", "delay": 15})));
    assert_eq!(text.entrance_at(at(0, 90)), (0.0, 0.0));
    assert_eq!(text.entrance_at(at(15, 90)).0, 0.0);
    assert_eq!(text.entrance_at(at(30, 90)).0, 0.5);
    assert_eq!(text.entrance_at(at(45, 90)).0, 1.0);
    assert_eq!(text.entrance_at(at(80, 90)).0, 1.0);
}

#[test]
fn animated_text_slide_up_offsets() {
    let text = AnimatedText::from_props(&props(json!({
        "text": "Hi",
        "animationType": "slide-up"
    })));
    assert_eq!(text.entrance_at(at(0, 90)), (0.0, 50.0));
    assert_eq!(text.entrance_at(at(15, 90)), (0.5, 25.0));
    assert_eq!(text.entrance_at(at(30, 90)), (1.0, 0.0));
    assert_eq!(text.entrance_at(at(60, 90)), (1.0, 0.0));
}

#[test]
fn animated_text_uses_scene_local_frames() {
    let text = AnimatedText::from_props(&props(json!({"text": "Hi"})));
    let t = TimeCtx {
        scene_frame: 15,
        scene_duration: 60,
        comp_frame: 115,
        comp_duration: 400,
    };
    assert_eq!(text.entrance_at(t).0, 0.5);
}

#[test]
fn animated_text_defaults() {
    let text = AnimatedText::from_props(&props(json!({"text": "Hi"})));
    assert_eq!(text.style.font_size, 48.0);
    assert_eq!(text.style.color, Rgba8Premul::opaque(255, 255, 255));
    assert_eq!(text.style.font_weight, "bold");
    assert_eq!(text.style.text_align, TextAlign::Center);
    assert_eq!(text.animation, TextAnimation::Fade);
    assert_eq!(text.delay, 0.0);
}

#[test]
fn empty_or_missing_text_paints_nothing() {
    for p in [json!({}), json!({"text": ""}), json!({"text": null})] {
        let p = props(p);
        assert_eq!(AnimatedText::from_props(&p).evaluate(at(40, 90)), None);
        assert_eq!(TypewriterText::from_props(&p).evaluate(at(40, 90)), None);
    }
}

#[test]
fn typewriter_reveals_at_constant_rate() {
    let tw = TypewriterText::from_props(&props(json!({"text": "Hello"})));
    assert_eq!(tw.visible_chars(at(0, 100)), 0);
    assert_eq!(tw.visible_chars(at(1, 100)), 1);
    assert_eq!(tw.visible_chars(at(40, 100)), 2);
    assert_eq!(tw.visible_chars(at(100, 100)), 5);
    assert_eq!(tw.visible_chars(at(500, 100)), 5);

    let paint = tw.evaluate(at(40, 100)).unwrap();
    match &paint {
        LayerPaint::Text { text, caret, .. } => {
            assert_eq!(text, "He");
            assert!(*caret, "caret is on during frames 30..45");
        }
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn typewriter_finishes_within_its_scene() {
    let tw = TypewriterText::from_props(&props(json!({"text": "Hello"})));
    let last = TimeCtx {
        scene_frame: 59,
        scene_duration: 60,
        comp_frame: 159,
        comp_duration: 300,
    };
    assert_eq!(tw.visible_chars(last), 5);
    assert!(matches!(
        tw.evaluate(last),
        Some(LayerPaint::Text { caret: false, .. })
    ));
}

#[test]
fn typewriter_caret_blinks() {
    let tw = TypewriterText::from_props(&props(json!({"text": "Hello"})));
    let off = tw.evaluate(at(20, 100)).unwrap();
    assert_eq!(off.display_text().as_deref(), Some("H"));
    let on = tw.evaluate(at(30, 100)).unwrap();
    assert_eq!(on.display_text().as_deref(), Some("He|"));
}

#[test]
fn typewriter_caret_only_while_incomplete() {
    let tw = TypewriterText::from_props(&props(json!({"text": "Hello"})));
    let early = tw.evaluate(at(10, 100)).unwrap();
    assert_eq!(early.display_text().as_deref(), Some("H|"));
    let done = tw.evaluate(at(100, 100)).unwrap();
    assert_eq!(done.display_text().as_deref(), Some("Hello"));
}

#[test]
fn typewriter_delay_shifts_reveal() {
    let tw = TypewriterText::from_props(&props(json!({"text": "abcd", "delay": 20})));
    // 4 chars over 80 frames.
    assert_eq!(tw.visible_chars(at(19, 100)), 0);
    assert_eq!(tw.visible_chars(at(20, 100)), 0);
    assert_eq!(tw.visible_chars(at(60, 100)), 2);
    assert_eq!(tw.visible_chars(at(100, 100)), 4);
}

#[test]
fn typewriter_delay_past_scene_end_shows_everything_at_delay() {
    let tw = TypewriterText::from_props(&props(json!({"text": "abc", "delay": 120})));
    assert_eq!(tw.visible_chars(at(119, 100)), 0);
    assert_eq!(tw.visible_chars(at(120, 100)), 3);
}

#[test]
fn typewriter_counts_unicode_scalars() {
    let tw = TypewriterText::from_props(&props(json!({"text": "héllo"})));
    let paint = tw.evaluate(at(40, 100)).unwrap();
    assert!(matches!(paint, LayerPaint::Text { ref text, .. } if text == "hé"));
}
