use glam::Vec3;

use skystage_core::config::TagRevealConfig;
use skystage_core::constants::DT;
use skystage_core::enums::TagStage;
use skystage_core::events::SceneEvent;

use crate::ease;
use crate::reveal::TagReveal;
use crate::tween::{ScaleTween, TweenState};
use crate::typewriter::Typewriter;

// ---- Easing ----

#[test]
fn test_out_quad_endpoints_and_shape() {
    assert_eq!(ease::out_quad(0.0), 0.0);
    assert_eq!(ease::out_quad(1.0), 1.0);
    // Ease-out front-loads the motion.
    assert!(ease::out_quad(0.5) > 0.5);
    // Clamped outside [0, 1].
    assert_eq!(ease::out_quad(-1.0), 0.0);
    assert_eq!(ease::out_quad(2.0), 1.0);
}

// ---- Scale tween ----

#[test]
fn test_tween_holds_during_delay_then_animates() {
    let mut tween = ScaleTween::delayed(10, 5, 0.0, 1.0, 1.0);
    assert_eq!(tween.advance(10), 0.0);
    assert_eq!(tween.advance(14), 0.0);
    assert!(matches!(tween.state, TweenState::Delaying { .. }));

    // Delay expires; animation starts at this tick.
    let v = tween.advance(15);
    assert_eq!(v, 0.0);
    assert!(matches!(tween.state, TweenState::Animating { .. }));

    // Midway through a 1s tween the eased value exceeds linear progress.
    let mid_tick = 15 + (0.5 / DT) as u64;
    let v = tween.advance(mid_tick);
    assert!(v > 0.5 && v < 1.0, "eased midpoint was {v}");
}

#[test]
fn test_tween_completes_and_clamps() {
    let mut tween = ScaleTween::delayed(0, 0, 0.0, 1.5, 0.5);
    let end_tick = (0.5 / DT) as u64 + 1;
    assert_eq!(tween.advance(end_tick), 1.5);
    assert!(tween.is_done());
    // Stays pinned after completion.
    assert_eq!(tween.advance(end_tick + 100), 1.5);
}

#[test]
fn test_tween_zero_duration_is_instant() {
    let mut tween = ScaleTween::delayed(0, 0, 0.0, 2.0, 0.0);
    assert_eq!(tween.advance(0), 2.0);
    assert!(tween.is_done());
}

// ---- Typewriter ----

/// Every step result must contain markup spans whole or not at all.
fn assert_no_partial_markup(revealed: &str) {
    let opens = revealed.matches('<').count();
    let closes = revealed.matches('>').count();
    assert_eq!(
        opens, closes,
        "partially revealed markup in {revealed:?}"
    );
}

#[test]
fn test_typewriter_reveals_in_order() {
    let mut tw = Typewriter::new("abc", DT);
    assert_eq!(tw.revealed(), "");
    tw.step(DT);
    assert_eq!(tw.revealed(), "a");
    tw.step(DT);
    assert_eq!(tw.revealed(), "ab");
    tw.step(DT);
    assert_eq!(tw.revealed(), "abc");
    assert!(tw.is_finished());
}

#[test]
fn test_typewriter_markup_spans_are_atomic() {
    let mut tw = Typewriter::new("Hi <b>there</b>", 0.01);
    while !tw.is_finished() {
        tw.step(DT);
        assert_no_partial_markup(tw.revealed());
    }
    assert_eq!(tw.revealed(), "Hi <b>there</b>");
}

#[test]
fn test_typewriter_trailing_markup_completes() {
    let mut tw = Typewriter::new("x<i>", 0.001);
    while !tw.is_finished() {
        tw.step(DT);
    }
    assert_eq!(tw.revealed(), "x<i>");
}

#[test]
fn test_typewriter_unmatched_bracket_is_plain_text() {
    let mut tw = Typewriter::new("a<b", 0.0);
    tw.step(DT);
    assert_eq!(tw.revealed(), "a<b");
    assert!(tw.is_finished());
}

#[test]
fn test_typewriter_cancel_stops_immediately() {
    let mut tw = Typewriter::new("hello world", 0.01);
    tw.step(DT);
    let partial = tw.revealed().to_string();
    assert!(!partial.is_empty() && partial.len() < "hello world".len());

    tw.cancel();
    assert!(tw.is_finished());
    tw.step(DT);
    tw.step(DT);
    assert_eq!(tw.revealed(), partial, "cancel must freeze the text");
}

#[test]
fn test_typewriter_empty_source_is_finished() {
    let tw = Typewriter::new("", 0.01);
    assert!(tw.is_finished());
}

#[test]
fn test_typewriter_zero_dt_reveals_nothing() {
    let mut tw = Typewriter::new("abc", 0.01);
    for _ in 0..10 {
        tw.step(0.0);
    }
    assert_eq!(tw.revealed(), "");
}

// ---- Tag reveal sequence ----

fn reveal_config() -> TagRevealConfig {
    TagRevealConfig {
        initial_delay_secs: 0.0,
        draw_secs: 0.25,
        labels: vec!["Title".into(), "Body <b>text</b>".into()],
        char_delay_secs: 0.005,
        start_anchor: Vec3::ZERO,
        end_anchor: Vec3::new(0.0, 1.0, 0.0),
    }
}

fn run_until(
    reveal: &mut TagReveal,
    anchors: (Vec3, Vec3),
    stage: TagStage,
    max_ticks: u32,
    events: &mut Vec<SceneEvent>,
) {
    for _ in 0..max_ticks {
        if reveal.stage == stage {
            return;
        }
        reveal.step(anchors, DT, events);
    }
    panic!("never reached {stage:?}, stuck at {:?}", reveal.stage);
}

#[test]
fn test_reveal_stages_run_in_strict_order() {
    let anchors = (Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
    let mut reveal = TagReveal::new(&reveal_config());
    let mut events = Vec::new();
    reveal.start(&mut events);

    let mut seen = vec![];
    for _ in 0..10_000 {
        reveal.step(anchors, DT, &mut events);
        for ev in events.drain(..) {
            if let SceneEvent::TagStageAdvanced { stage } = ev {
                seen.push(stage);
            }
        }
        if reveal.stage == TagStage::Done {
            break;
        }
    }

    assert_eq!(
        seen,
        vec![
            TagStage::InitialDelay,
            TagStage::StartDot,
            TagStage::LineDraw,
            TagStage::EndDot,
            TagStage::HeaderFill,
            TagStage::BodyFill,
            TagStage::TextReveal,
            TagStage::Done,
        ]
    );
    assert_eq!(reveal.header_fill, 1.0);
    assert_eq!(reveal.body_fill, 1.0);
    assert_eq!(reveal.typewriters[0].revealed(), "Title");
    assert_eq!(reveal.typewriters[1].revealed(), "Body <b>text</b>");
}

#[test]
fn test_reveal_line_tracks_anchors_except_during_draw() {
    let mut reveal = TagReveal::new(&reveal_config());
    let mut events = Vec::new();

    // Before the sequence starts, endpoints follow the anchors.
    let moved = (Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 0.0));
    reveal.step(moved, DT, &mut events);
    assert_eq!(reveal.line_start, moved.0);
    assert_eq!(reveal.line_end, moved.1);
    assert!(!reveal.line_visible);

    reveal.start(&mut events);
    run_until(&mut reveal, moved, TagStage::LineDraw, 1000, &mut events);
    assert!(reveal.line_visible);

    // During the draw the start endpoint pins to the captured anchor even
    // if the live anchor moves away.
    let moved_again = (Vec3::new(9.0, 9.0, 9.0), Vec3::new(9.0, 8.0, 9.0));
    reveal.step(moved_again, DT, &mut events);
    assert_eq!(reveal.line_start, moved.0);
    assert_ne!(reveal.line_end, moved_again.1);

    // After the draw, tracking resumes.
    run_until(&mut reveal, moved_again, TagStage::EndDot, 1000, &mut events);
    reveal.step(moved_again, DT, &mut events);
    assert_eq!(reveal.line_start, moved_again.0);
    assert_eq!(reveal.line_end, moved_again.1);
}

#[test]
fn test_reveal_cancel_freezes_visuals() {
    let anchors = (Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
    let mut reveal = TagReveal::new(&reveal_config());
    let mut events = Vec::new();
    reveal.start(&mut events);
    run_until(&mut reveal, anchors, TagStage::HeaderFill, 1000, &mut events);

    reveal.step(anchors, DT, &mut events);
    let frozen_fill = reveal.header_fill;
    assert!(frozen_fill > 0.0 && frozen_fill < 1.0);

    events.clear();
    reveal.cancel(&mut events);
    assert_eq!(events, vec![SceneEvent::TagRevealCancelled]);
    assert_eq!(reveal.stage, TagStage::Cancelled);

    // Further stepping changes nothing; later stages never ran.
    for _ in 0..100 {
        reveal.step(anchors, DT, &mut events);
    }
    assert_eq!(reveal.header_fill, frozen_fill);
    assert_eq!(reveal.body_fill, 0.0);
    assert!(reveal.typewriters.is_empty());
}

#[test]
fn test_reveal_cancel_when_idle_is_a_no_op() {
    let mut reveal = TagReveal::new(&reveal_config());
    let mut events = Vec::new();
    reveal.cancel(&mut events);
    assert!(events.is_empty());
    assert_eq!(reveal.stage, TagStage::Idle);
}

#[test]
fn test_reveal_with_no_labels_still_completes() {
    let config = TagRevealConfig {
        labels: Vec::new(),
        ..reveal_config()
    };
    let anchors = (Vec3::ZERO, Vec3::Y);
    let mut reveal = TagReveal::new(&config);
    let mut events = Vec::new();
    reveal.start(&mut events);
    run_until(&mut reveal, anchors, TagStage::Done, 10_000, &mut events);
    assert!(events.contains(&SceneEvent::TagRevealCompleted));
}
