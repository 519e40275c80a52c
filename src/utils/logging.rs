use log::{Level, log_enabled, warn};
use std::time::Instant;

/// Simple scoped timer for tracing hot sections.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Option<Instant>,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        let start = log_enabled!(Level::Trace).then(|| {
            log::trace!("start {label}");
            Instant::now()
        });
        Self { label, start }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if let Some(start) = self.start {
            log::trace!("end {} ({} µs)", self.label, start.elapsed().as_micros());
        }
    }
}

/// Reports wall time that `advance` could not simulate within its step cap.
pub fn warn_if_steps_dropped(dropped_time: f32, time_step: f32) {
    if dropped_time >= time_step {
        warn!(
            "advance fell behind: dropped {:.4} s ({} fixed steps of {:.4} s)",
            dropped_time,
            (dropped_time / time_step) as u32,
            time_step
        );
    }
}
