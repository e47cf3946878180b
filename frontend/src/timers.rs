use gloo_timers::callback::Timeout;

/// Something that can run a callback once after a delay.
pub trait TimerHost {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Handle to a scheduled callback. Cancelling is idempotent: only the first
/// call does anything, later calls (and calls after the timer fired) are no-ops.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Returns true when this call released the timer.
    pub fn cancel(&mut self) -> bool {
        match self.cancel.take() {
            Some(cancel) => {
                cancel();
                true
            }
            None => false,
        }
    }
}

/// `setTimeout` via gloo. Dropping a gloo `Timeout` clears it, so the handle
/// just owns the timeout until cancel.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl TimerHost for BrowserTimers {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let timeout = Timeout::new(delay_ms, callback);
        TimerHandle::new(move || drop(timeout))
    }
}
