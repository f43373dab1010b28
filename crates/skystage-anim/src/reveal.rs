//! Tag-reveal sequence — a strictly ordered multi-stage animation.
//!
//! Pipeline: initial delay, start-dot pop, line draw, end-dot pop,
//! header fill, body fill, concurrent typewriter reveals. Each stage
//! completes before the next begins; an abort freezes everything in
//! place. The connecting line tracks its two moving anchors every tick
//! except while the draw itself is in flight, which interpolates against
//! endpoint positions captured when the draw started.

use glam::Vec3;

use skystage_core::config::TagRevealConfig;
use skystage_core::constants::TAG_DOT_SCALE_SECS;
use skystage_core::enums::TagStage;
use skystage_core::events::SceneEvent;

use crate::typewriter::Typewriter;

/// State of one tag overlay's reveal sequence.
#[derive(Debug, Clone)]
pub struct TagReveal {
    initial_delay_secs: f32,
    draw_secs: f32,
    char_delay_secs: f32,
    label_sources: Vec<String>,

    pub stage: TagStage,
    /// Seconds spent in the current stage.
    stage_elapsed: f32,

    /// Line endpoints as the host should render them this tick.
    pub line_start: Vec3,
    pub line_end: Vec3,
    /// Line becomes visible when the draw starts and stays visible.
    pub line_visible: bool,
    /// Endpoints captured at draw start; the draw interpolates these.
    draw_from: Vec3,
    draw_to: Vec3,

    pub start_dot_scale: f32,
    pub end_dot_scale: f32,
    pub header_fill: f32,
    pub body_fill: f32,
    pub typewriters: Vec<Typewriter>,
}

impl TagReveal {
    pub fn new(config: &TagRevealConfig) -> Self {
        Self {
            initial_delay_secs: config.initial_delay_secs,
            draw_secs: config.draw_secs.max(f32::EPSILON),
            char_delay_secs: config.char_delay_secs,
            label_sources: config.labels.clone(),
            stage: TagStage::Idle,
            stage_elapsed: 0.0,
            line_start: config.start_anchor,
            line_end: config.end_anchor,
            line_visible: false,
            draw_from: Vec3::ZERO,
            draw_to: Vec3::ZERO,
            start_dot_scale: 0.0,
            end_dot_scale: 0.0,
            header_fill: 0.0,
            body_fill: 0.0,
            typewriters: Vec::new(),
        }
    }

    /// Begin the sequence, or restart it from scratch if already run.
    pub fn start(&mut self, events: &mut Vec<SceneEvent>) {
        self.line_visible = false;
        self.start_dot_scale = 0.0;
        self.end_dot_scale = 0.0;
        self.header_fill = 0.0;
        self.body_fill = 0.0;
        self.typewriters.clear();
        self.enter(TagStage::InitialDelay, events);
    }

    /// Abort the sequence. Visuals keep whatever values they reached.
    pub fn cancel(&mut self, events: &mut Vec<SceneEvent>) {
        if self.stage == TagStage::Idle || self.stage.is_terminal() {
            return;
        }
        for tw in &mut self.typewriters {
            tw.cancel();
        }
        self.stage = TagStage::Cancelled;
        events.push(SceneEvent::TagRevealCancelled);
    }

    /// Advance one tick. `anchors` are the current (possibly moving)
    /// start/end anchor positions.
    pub fn step(&mut self, anchors: (Vec3, Vec3), dt: f32, events: &mut Vec<SceneEvent>) {
        // Re-sync the full line to the live anchors whenever the draw
        // animation is not in flight.
        if self.stage != TagStage::LineDraw {
            self.line_start = anchors.0;
            self.line_end = anchors.1;
        }

        if self.stage == TagStage::Idle || self.stage.is_terminal() {
            return;
        }

        self.stage_elapsed += dt;

        match self.stage {
            TagStage::InitialDelay => {
                if self.stage_elapsed >= self.initial_delay_secs {
                    self.enter(TagStage::StartDot, events);
                }
            }
            TagStage::StartDot => {
                self.start_dot_scale = (self.stage_elapsed / TAG_DOT_SCALE_SECS).min(1.0);
                if self.start_dot_scale >= 1.0 {
                    self.begin_line_draw(anchors, events);
                }
            }
            TagStage::LineDraw => {
                let progress = (self.stage_elapsed / self.draw_secs).min(1.0);
                self.line_start = self.draw_from;
                self.line_end = self.draw_from.lerp(self.draw_to, progress);
                if progress >= 1.0 {
                    self.enter(TagStage::EndDot, events);
                }
            }
            TagStage::EndDot => {
                self.end_dot_scale = (self.stage_elapsed / TAG_DOT_SCALE_SECS).min(1.0);
                if self.end_dot_scale >= 1.0 {
                    self.enter(TagStage::HeaderFill, events);
                }
            }
            TagStage::HeaderFill => {
                self.header_fill = (self.stage_elapsed / self.draw_secs).min(1.0);
                if self.header_fill >= 1.0 {
                    self.enter(TagStage::BodyFill, events);
                }
            }
            TagStage::BodyFill => {
                self.body_fill = (self.stage_elapsed / self.draw_secs).min(1.0);
                if self.body_fill >= 1.0 {
                    self.typewriters = self
                        .label_sources
                        .iter()
                        .map(|label| Typewriter::new(label.clone(), self.char_delay_secs))
                        .collect();
                    self.enter(TagStage::TextReveal, events);
                }
            }
            TagStage::TextReveal => {
                for tw in &mut self.typewriters {
                    tw.step(dt);
                }
                if self.typewriters.iter().all(Typewriter::is_finished) {
                    self.enter(TagStage::Done, events);
                    events.push(SceneEvent::TagRevealCompleted);
                }
            }
            TagStage::Idle | TagStage::Done | TagStage::Cancelled => {}
        }
    }

    fn begin_line_draw(&mut self, anchors: (Vec3, Vec3), events: &mut Vec<SceneEvent>) {
        self.draw_from = anchors.0;
        self.draw_to = anchors.1;
        self.line_start = self.draw_from;
        self.line_end = self.draw_from;
        self.line_visible = true;
        self.enter(TagStage::LineDraw, events);
    }

    fn enter(&mut self, stage: TagStage, events: &mut Vec<SceneEvent>) {
        self.stage = stage;
        self.stage_elapsed = 0.0;
        events.push(SceneEvent::TagStageAdvanced { stage });
    }
}
