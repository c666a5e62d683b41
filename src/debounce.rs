/// Single-slot debouncing for search input
use std::cell::RefCell;
use std::rc::Rc;

/// Something that can run a callback after a delay and cancel it
pub trait TimerHost {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

/// Runs only the most recently scheduled callback, once the quiet period has
/// passed without another call to [`Debouncer::schedule`].
///
/// At most one callback is pending at a time; scheduling cancels the previous
/// one. Dropping the debouncer cancels whatever is pending.
pub struct Debouncer<H: TimerHost> {
    host: H,
    quiet_period_ms: u32,
    pending: Rc<RefCell<Option<H::Handle>>>,
}

impl<H: TimerHost> Debouncer<H> {
    pub fn new(host: H, quiet_period_ms: u32) -> Self {
        Debouncer {
            host,
            quiet_period_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn schedule(&self, callback: impl FnOnce() + 'static)
    where
        H::Handle: 'static,
    {
        self.cancel();

        let slot = Rc::clone(&self.pending);
        let handle = self.host.schedule(
            self.quiet_period_ms,
            Box::new(move || {
                let _finished = slot.borrow_mut().take();
                callback();
            }),
        );
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending callback without running it
    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        if let Some(handle) = previous {
            self.host.cancel(handle);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

impl<H: TimerHost> Drop for Debouncer<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}
