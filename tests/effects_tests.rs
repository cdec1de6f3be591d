// Host-side tests for capability-driven effect supervision.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod effects {
        include!("../src/core/effects.rs");
    }
}

use crate::core::effects::*;
use crate::core::error::{guard, SetupError};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Calls {
    log: Vec<String>,
}

/// Records lifecycle calls; `needs_motion` mimics effects that vanish under
/// reduced motion, `fail` one whose markup is missing.
struct Probe {
    name: &'static str,
    needs_motion: bool,
    fail: bool,
    calls: Rc<RefCell<Calls>>,
}

impl Probe {
    fn boxed(name: &'static str, needs_motion: bool, fail: bool, calls: &Rc<RefCell<Calls>>) -> Box<dyn Effect> {
        Box::new(Self {
            name,
            needs_motion,
            fail,
            calls: calls.clone(),
        })
    }
}

impl Effect for Probe {
    fn name(&self) -> &'static str {
        self.name
    }

    fn enabled(&self, caps: &Capabilities) -> bool {
        !self.needs_motion || caps.allows_motion()
    }

    fn start(&mut self, _caps: &Capabilities) -> Result<(), SetupError> {
        self.calls.borrow_mut().log.push(format!("start {}", self.name));
        if self.fail {
            return Err(SetupError::MissingElement(".nothing"));
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.calls.borrow_mut().log.push(format!("stop {}", self.name));
    }
}

fn reduced() -> Capabilities {
    Capabilities {
        reduced_motion: true,
        ..Capabilities::default()
    }
}

#[test]
fn capability_helpers() {
    let desktop = Capabilities {
        fine_pointer: true,
        can_hover: true,
        ..Capabilities::default()
    };
    assert!(desktop.hover_fine());
    assert!(desktop.allows_motion());
    assert!(!desktop.collapse_accordions());

    let phone = Capabilities {
        narrow_viewport: true,
        coarse_pointer: true,
        ..Capabilities::default()
    };
    assert!(!phone.hover_fine());
    assert!(phone.collapse_accordions());
    assert!(!reduced().allows_motion());
}

#[test]
fn register_hydrates_enabled_effects_only() {
    let calls = Rc::new(RefCell::new(Calls::default()));
    let mut sup = Supervisor::new(reduced());
    sup.register(Probe::boxed("parallax", true, false, &calls));
    sup.register(Probe::boxed("accordions", false, false, &calls));
    assert_eq!(sup.running(), vec!["accordions"]);
    assert!(!calls.borrow().log.contains(&"start parallax".to_string()));
}

#[test]
fn failed_start_is_not_running() {
    let calls = Rc::new(RefCell::new(Calls::default()));
    let mut sup = Supervisor::new(Capabilities::default());
    sup.register(Probe::boxed("videos", false, true, &calls));
    assert!(sup.running().is_empty());
    assert_eq!(calls.borrow().log.last().map(String::as_str), Some("stop videos"));
}

#[test]
fn capability_change_restarts_everything_enabled() {
    let calls = Rc::new(RefCell::new(Calls::default()));
    let mut sup = Supervisor::new(Capabilities::default());
    sup.register(Probe::boxed("parallax", true, false, &calls));
    sup.register(Probe::boxed("accordions", false, false, &calls));
    assert_eq!(sup.running(), vec!["parallax", "accordions"]);

    calls.borrow_mut().log.clear();
    sup.update(reduced());
    assert_eq!(sup.capabilities(), reduced());
    assert_eq!(sup.running(), vec!["accordions"]);
    assert_eq!(
        calls.borrow().log,
        vec!["stop parallax", "stop accordions", "start accordions"]
    );

    sup.update(Capabilities::default());
    assert_eq!(sup.running(), vec!["parallax", "accordions"]);
}

#[test]
fn unchanged_capabilities_are_a_no_op() {
    let calls = Rc::new(RefCell::new(Calls::default()));
    let mut sup = Supervisor::new(Capabilities::default());
    sup.register(Probe::boxed("cursor", false, false, &calls));
    calls.borrow_mut().log.clear();
    sup.update(Capabilities::default());
    assert!(calls.borrow().log.is_empty());
}

#[test]
fn shutdown_stops_all() {
    let calls = Rc::new(RefCell::new(Calls::default()));
    let mut sup = Supervisor::new(Capabilities::default());
    sup.register(Probe::boxed("a", false, false, &calls));
    sup.register(Probe::boxed("b", false, false, &calls));
    sup.shutdown();
    assert!(sup.running().is_empty());
    assert!(calls.borrow().log.ends_with(&["stop a".to_string(), "stop b".to_string()]));
}

#[test]
fn guard_swallows_errors() {
    assert_eq!(guard("test", Ok::<_, SetupError>(3)), Some(3));
    assert_eq!(guard::<u8>("test", Err(SetupError::Unsupported("canvas"))), None);
    assert_eq!(
        SetupError::MissingElement("#bg-canvas").to_string(),
        "missing element `#bg-canvas`"
    );
}
