//! Timeline Records
//!
//! Durable, inspectable record of everything a stage was asked to do, in
//! issue order. Headless runs assert against this instead of pixels: the
//! count, order, duration and op content of events fully describe a
//! choreography.

use crate::animation::batch::PlayBatch;
use crate::animation::easing::RateFunction;
use crate::animation::tween::{TweenOp, TweenTarget};
use crate::scene::scene::Scene;

/// One op of a played window, with its target resolved to a node name.
#[derive(Debug, Clone, PartialEq)]
pub struct OpRecord {
    pub target: String,
    pub op: TweenOp,
}

/// Record of one resolved play window.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRecord {
    pub run_time: f32,
    pub rate_func: RateFunction,
    pub ops: Vec<OpRecord>,
}

impl BatchRecord {
    pub(crate) fn of(batch: &PlayBatch, scene: &Scene) -> Self {
        let mut ops = Vec::new();
        for tween in &batch.tweens {
            let target = match tween.target {
                TweenTarget::Node(handle) => scene
                    .get_node(handle)
                    .map_or_else(String::new, |node| node.name.to_string()),
                TweenTarget::Pose => "camera".to_owned(),
            };
            for op in &tween.ops {
                ops.push(OpRecord {
                    target: target.clone(),
                    op: op.clone(),
                });
            }
        }
        Self {
            run_time: batch.run_time,
            rate_func: batch.rate_func,
            ops,
        }
    }

    /// Whether any op in the window matches `predicate`.
    pub fn has_op(&self, mut predicate: impl FnMut(&TweenOp) -> bool) -> bool {
        self.ops.iter().any(|record| predicate(&record.op))
    }
}

/// An entry in a stage's run history.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineEvent {
    /// A node entered the displayed set outside any play window.
    Added { name: String },
    /// A play window resolved.
    Play(BatchRecord),
    /// An idle hold.
    Wait { seconds: f32 },
}

/// Issue-ordered history of a run.
#[derive(Debug, Default)]
pub struct Timeline {
    events: Vec<TimelineEvent>,
}

impl Timeline {
    pub(crate) fn push(&mut self, event: TimelineEvent) {
        self.events.push(event);
    }

    #[must_use]
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// Play windows only, in order.
    pub fn plays(&self) -> impl Iterator<Item = &BatchRecord> {
        self.events.iter().filter_map(|event| match event {
            TimelineEvent::Play(record) => Some(record),
            _ => None,
        })
    }

    /// Sum of all play-window durations and waits, in seconds.
    #[must_use]
    pub fn total_duration(&self) -> f32 {
        self.events
            .iter()
            .map(|event| match event {
                TimelineEvent::Play(record) => record.run_time,
                TimelineEvent::Wait { seconds } => *seconds,
                TimelineEvent::Added { .. } => 0.0,
            })
            .sum()
    }
}
