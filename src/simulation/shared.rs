use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::controller::SimulationController;
use super::snapshot::ChainSnapshot;

/// Cloneable handle for driving one controller from several threads.
///
/// Every call holds the lock for its whole duration, so a reset or
/// parameter change never interleaves with a step or a snapshot.
#[derive(Clone)]
pub struct SharedSimulation {
    inner: Arc<Mutex<SimulationController>>,
}

impl SharedSimulation {
    pub fn new(controller: SimulationController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Exclusive access for batching several commands atomically.
    pub fn lock(&self) -> MutexGuard<'_, SimulationController> {
        self.inner.lock()
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut SimulationController) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn advance(&self, wall_dt: f32) {
        self.inner.lock().advance(wall_dt);
    }

    pub fn tick(&self) {
        self.inner.lock().tick();
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    pub fn trigger_impulse_now(&self) {
        self.inner.lock().trigger_impulse_now();
    }

    pub fn snapshot(&self) -> ChainSnapshot {
        self.inner.lock().snapshot()
    }
}
