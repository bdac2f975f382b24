use tracing::debug;

/// Identifier of one scheduled frame callback.
pub type FrameHandle = u64;

/// Capability to schedule a single frame callback.
///
/// The animation controller keeps at most one callback outstanding and
/// cancels it by handle.
pub trait FrameScheduler {
    /// Ask for one callback at the next frame. Returns its handle.
    fn request(&mut self) -> FrameHandle;

    /// Cancel a pending callback. Unknown handles are ignored.
    fn cancel(&mut self, handle: FrameHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Playback {
    Paused,
    Running(FrameHandle),
}

/// The play/pause state machine.
///
/// While running it owns the one outstanding frame handle; paused means no
/// callback is pending. The caller runs the actual advance-and-redraw cycle
/// whenever a method reports one is due, so the machine itself never touches
/// the engine or the surface.
pub struct Animation {
    state: Playback,
}

impl Animation {
    /// Starts paused. The caller decides when playback begins.
    pub fn new() -> Self {
        Self {
            state: Playback::Paused,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.state == Playback::Paused
    }

    /// Start the loop. Only valid while paused: schedules the next cycle
    /// and reports that one cycle should run now.
    pub fn play<S: FrameScheduler>(&mut self, scheduler: &mut S) -> bool {
        if let Playback::Running(_) = self.state {
            return false;
        }

        self.state = Playback::Running(scheduler.request());
        debug!("playback started");

        true
    }

    /// Stop the loop. Only valid while running: cancels the pending
    /// callback and clears the handle.
    pub fn pause<S: FrameScheduler>(&mut self, scheduler: &mut S) {
        if let Playback::Running(handle) = self.state {
            scheduler.cancel(handle);
            self.state = Playback::Paused;
            debug!("playback paused");
        }
    }

    /// Space-bar semantics. Reports whether a cycle should run now.
    pub fn toggle<S: FrameScheduler>(&mut self, scheduler: &mut S) -> bool {
        if self.is_paused() {
            self.play(scheduler)
        } else {
            self.pause(scheduler);
            false
        }
    }

    /// A scheduled callback fired. If it is the live one, schedule the next
    /// (the loop resubmits itself until paused) and report that a cycle
    /// should run. A stale handle, cancelled after it was already fired, is
    /// ignored.
    pub fn frame<S: FrameScheduler>(&mut self, fired: FrameHandle, scheduler: &mut S) -> bool {
        match self.state {
            Playback::Running(handle) if handle == fired => {
                self.state = Playback::Running(scheduler.request());
                true
            }
            _ => false,
        }
    }
}

/// Deadline-driven [`FrameScheduler`] for the terminal loop.
///
/// `request` arms the one pending callback; the loop calls
/// [`FramePacer::fire`] at each frame deadline and receives the armed
/// handle, if any.
pub struct FramePacer {
    armed: Option<FrameHandle>,
    next: FrameHandle,
}

impl FramePacer {
    pub fn new() -> Self {
        Self {
            armed: None,
            next: 0,
        }
    }

    /// Take the armed callback at the frame deadline.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.armed.take()
    }
}

impl FrameScheduler for FramePacer {
    fn request(&mut self) -> FrameHandle {
        let handle = self.next;
        self.next += 1;

        self.armed = Some(handle);

        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if self.armed == Some(handle) {
            self.armed = None;
        }
    }
}
