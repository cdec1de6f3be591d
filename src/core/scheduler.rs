/// Handle returned by the host for a pending frame callback.
pub type FrameId = i32;

/// Which callback the host should invoke on the next animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameKind {
    /// Continuous render loop.
    Tick,
    /// Deferred resize handling.
    Resize,
}

/// The host's frame-callback mechanism (`requestAnimationFrame` on the web).
pub trait FrameHost {
    /// Returns `None` when the host could not schedule the callback.
    fn request_frame(&mut self, kind: FrameKind) -> Option<FrameId>;
    fn cancel_frame(&mut self, id: FrameId);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Stopped,
    Running,
    /// A single frame was drawn and the loop is parked.
    StaticFrame,
}

/// What the caller must do after feeding the scheduler an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameAction {
    None,
    /// Draw exactly one frame now.
    DrawStatic,
}

/// Decides whether the particle loop runs.
///
/// Invariant: at most one `Tick` and at most one `Resize` callback are ever
/// pending with the host, regardless of how events interleave.
#[derive(Debug)]
pub struct RenderScheduler {
    state: SchedulerState,
    tick: Option<FrameId>,
    resize: Option<FrameId>,
    hidden: bool,
    reduced_motion: bool,
}

impl RenderScheduler {
    pub fn new(hidden: bool, reduced_motion: bool) -> Self {
        Self {
            state: SchedulerState::StaticFrame,
            tick: None,
            resize: None,
            hidden,
            reduced_motion,
        }
    }

    #[inline]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    #[inline]
    pub fn can_run(&self) -> bool {
        !self.hidden && !self.reduced_motion
    }

    #[inline]
    pub fn pending_tick(&self) -> Option<FrameId> {
        self.tick
    }

    #[inline]
    pub fn pending_resize(&self) -> Option<FrameId> {
        self.resize
    }

    /// Enter `Running` if allowed and not already running.
    pub fn start(&mut self, host: &mut impl FrameHost) {
        if self.state == SchedulerState::Running || !self.can_run() {
            return;
        }
        if let Some(id) = host.request_frame(FrameKind::Tick) {
            self.state = SchedulerState::Running;
            self.tick = Some(id);
        }
    }

    /// Idempotent; cancels the pending tick.
    pub fn stop(&mut self, host: &mut impl FrameHost) {
        if let Some(id) = self.tick.take() {
            host.cancel_frame(id);
        }
        if self.state == SchedulerState::Running {
            self.state = SchedulerState::Stopped;
        }
    }

    /// Stop the loop and ask for exactly one frame.
    pub fn draw_static(&mut self, host: &mut impl FrameHost) -> FrameAction {
        self.stop(host);
        self.state = SchedulerState::StaticFrame;
        FrameAction::DrawStatic
    }

    pub fn set_hidden(&mut self, hidden: bool, host: &mut impl FrameHost) -> FrameAction {
        self.hidden = hidden;
        if hidden {
            self.stop(host);
            self.state = SchedulerState::Stopped;
            return FrameAction::None;
        }
        if self.reduced_motion {
            return self.draw_static(host);
        }
        self.start(host);
        FrameAction::None
    }

    pub fn set_reduced_motion(&mut self, reduced: bool, host: &mut impl FrameHost) -> FrameAction {
        self.reduced_motion = reduced;
        if reduced {
            return self.draw_static(host);
        }
        if !self.hidden {
            self.start(host);
        }
        FrameAction::None
    }

    /// Debounced: a resize storm yields a single pending callback.
    pub fn request_resize(&mut self, host: &mut impl FrameHost) {
        if self.resize.is_some() {
            return;
        }
        self.resize = host.request_frame(FrameKind::Resize);
    }

    /// The deferred resize callback fired. The caller re-measures the canvas
    /// before acting on the returned `DrawStatic`, then calls `resume`.
    pub fn on_resize_frame(&mut self, host: &mut impl FrameHost) -> FrameAction {
        self.resize = None;
        self.draw_static(host)
    }

    /// Restart the loop after a static frame if conditions allow.
    pub fn resume(&mut self, host: &mut impl FrameHost) {
        if self.can_run() {
            self.start(host);
        }
    }

    /// The tick callback fired. Returns whether a frame should be drawn; the
    /// next tick is already queued when this returns `true`.
    pub fn on_tick(&mut self, host: &mut impl FrameHost) -> bool {
        self.tick = None;
        if self.state != SchedulerState::Running {
            return false;
        }
        match host.request_frame(FrameKind::Tick) {
            Some(id) => self.tick = Some(id),
            None => self.state = SchedulerState::Stopped,
        }
        true
    }

    /// Cancel everything; used on teardown.
    pub fn shutdown(&mut self, host: &mut impl FrameHost) {
        self.stop(host);
        if let Some(id) = self.resize.take() {
            host.cancel_frame(id);
        }
        self.state = SchedulerState::Stopped;
    }
}
