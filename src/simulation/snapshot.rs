use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::controller::SimulationController;

/// Everything a renderer or HUD reads after a tick, detached from the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSnapshot {
    pub body_positions: Vec<Vec2>,
    pub left_anchor: Vec2,
    pub right_anchor: Vec2,
    pub gravity: Vec2,
    pub damping: f32,
    pub lift_amount: f32,
    pub trigger_time: f32,
    pub elapsed: f32,
    pub impulse_applied: bool,
}

impl ChainSnapshot {
    pub fn capture(controller: &SimulationController) -> Self {
        Self {
            body_positions: controller.body_positions(),
            left_anchor: controller.left_anchor_position(),
            right_anchor: controller.right_anchor_position(),
            gravity: controller.gravity(),
            damping: controller.damping(),
            lift_amount: controller.lift_amount(),
            trigger_time: controller.trigger_time(),
            elapsed: controller.elapsed(),
            impulse_applied: controller.impulse_applied(),
        }
    }

    /// Segment endpoints for drawing springs, from the left anchor to the wall.
    pub fn spring_segments(&self) -> Vec<(Vec2, Vec2)> {
        let points: Vec<Vec2> = std::iter::once(self.left_anchor)
            .chain(self.body_positions.iter().copied())
            .chain(std::iter::once(self.right_anchor))
            .collect();
        points.windows(2).map(|w| (w[0], w[1])).collect()
    }
}
