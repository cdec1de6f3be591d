use super::error::SetupError;

/// Snapshot of the media-query signals effects depend on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub reduced_motion: bool,
    pub fine_pointer: bool,
    pub can_hover: bool,
    pub narrow_viewport: bool,
    pub coarse_pointer: bool,
}

impl Capabilities {
    #[inline]
    pub fn allows_motion(&self) -> bool {
        !self.reduced_motion
    }

    /// Precise, hover-capable pointer (mouse or trackpad).
    #[inline]
    pub fn hover_fine(&self) -> bool {
        self.fine_pointer && self.can_hover
    }

    #[inline]
    pub fn collapse_accordions(&self) -> bool {
        self.narrow_viewport || self.coarse_pointer
    }
}

/// A page effect that can be torn down and rebuilt when capabilities change.
pub trait Effect {
    fn name(&self) -> &'static str;

    /// Whether the effect should run at all under `caps`.
    fn enabled(&self, _caps: &Capabilities) -> bool {
        true
    }

    fn start(&mut self, caps: &Capabilities) -> Result<(), SetupError>;

    /// Must be idempotent and detach everything `start` installed.
    fn stop(&mut self);
}

/// Owns the page's effects and re-hydrates them on capability changes.
pub struct Supervisor {
    effects: Vec<Box<dyn Effect>>,
    running: Vec<bool>,
    caps: Capabilities,
}

impl Supervisor {
    pub fn new(caps: Capabilities) -> Self {
        Self {
            effects: Vec::new(),
            running: Vec::new(),
            caps,
        }
    }

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    /// Register and immediately hydrate an effect.
    pub fn register(&mut self, effect: Box<dyn Effect>) {
        self.effects.push(effect);
        self.running.push(false);
        let i = self.effects.len() - 1;
        self.hydrate_one(i);
    }

    /// Names of the effects currently running.
    pub fn running(&self) -> Vec<&'static str> {
        self.effects
            .iter()
            .zip(&self.running)
            .filter(|(_, r)| **r)
            .map(|(e, _)| e.name())
            .collect()
    }

    /// Apply new capabilities: every effect is stopped and, if still enabled,
    /// started again. No-op when nothing changed.
    pub fn update(&mut self, caps: Capabilities) {
        if caps == self.caps {
            return;
        }
        log::info!("[fx] capabilities changed: {:?}", caps);
        self.caps = caps;
        for i in 0..self.effects.len() {
            self.hydrate_one(i);
        }
    }

    fn hydrate_one(&mut self, i: usize) {
        let caps = self.caps;
        let effect = &mut self.effects[i];
        effect.stop();
        self.running[i] = false;
        if !effect.enabled(&caps) {
            return;
        }
        match effect.start(&caps) {
            Ok(()) => self.running[i] = true,
            Err(e) => {
                e.report(effect.name());
                effect.stop();
            }
        }
    }

    /// Stop everything; used when the session is dropped.
    pub fn shutdown(&mut self) {
        for (effect, running) in self.effects.iter_mut().zip(self.running.iter_mut()) {
            effect.stop();
            *running = false;
        }
    }
}
