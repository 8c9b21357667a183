//! Cooperative deferred-task queue
//!
//! Goal handling, face reactions and the post-goal reset hold are not run
//! inline in the physics step; they are scheduled here and delivered when
//! their tick delay expires. The queue only advances while the clock is
//! unfrozen (the host does not tick it when paused), so pending delays
//! stretch across a pause exactly like suspended coroutines.

/// What to do when a deferred task expires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredKind {
    /// Hand the "ball fell on the ground" sequence to the game controller
    BallLanded,
    /// Trigger the struck player's face reaction
    FaceReaction,
    /// The post-goal freeze hold is over
    ResetHoldElapsed,
}

#[derive(Debug, Clone)]
struct DeferredTask {
    kind: DeferredKind,
    remaining: u32,
}

/// FIFO queue of tick-delayed tasks
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    tasks: Vec<DeferredTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task to expire after `delay_ticks` calls to [`advance`].
    /// A zero delay expires on the next advance.
    ///
    /// `BallLanded` is serialized: scheduling one while another is pending
    /// coalesces into the pending task, so a goal sequence can never be
    /// requested twice before the controller has seen the first.
    ///
    /// [`advance`]: Scheduler::advance
    pub fn schedule(&mut self, kind: DeferredKind, delay_ticks: u32) {
        if kind == DeferredKind::BallLanded && self.is_pending(DeferredKind::BallLanded) {
            log::debug!("coalesced duplicate BallLanded request");
            return;
        }
        self.tasks.push(DeferredTask {
            kind,
            remaining: delay_ticks,
        });
    }

    pub fn is_pending(&self, kind: DeferredKind) -> bool {
        self.tasks.iter().any(|t| t.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drop everything pending (scene reload)
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Advance one fixed tick; returns expired tasks in schedule order
    pub fn advance(&mut self) -> Vec<DeferredKind> {
        let mut expired = Vec::new();
        self.tasks.retain_mut(|task| {
            task.remaining = task.remaining.saturating_sub(1);
            if task.remaining == 0 {
                expired.push(task.kind);
                false
            } else {
                true
            }
        });
        expired
    }
}
