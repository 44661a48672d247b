use std::time::Instant;

use crate::state::{RenderFrame, SharedState};

/// Seam between the driver and whatever displays the game.
pub trait FramePresenter {
    fn present(&self, frame: RenderFrame);
    fn score_milestone(&self, score: u32, now: Instant);
}

/// Publishes snapshots into the state the egui app reads on every repaint.
pub struct SharedStatePresenter {
    shared_state: SharedState,
}

impl SharedStatePresenter {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl FramePresenter for SharedStatePresenter {
    fn present(&self, frame: RenderFrame) {
        self.shared_state.set_frame(frame);
    }

    fn score_milestone(&self, score: u32, now: Instant) {
        self.shared_state.raise_score_pop(score, now);
    }
}
