use std::cell::RefCell;
use std::rc::Rc;

use rhai::{Engine, FLOAT, INT};

use cq_core::{MarkerPosition, WorldState};

#[derive(Debug, Default)]
struct WorldInner {
    state: WorldState,
    logs: Vec<String>,
}

// Capability surface handed to learner scripts. All mutation goes through the
// registered methods below; the handle itself carries no other reachable host
// state.
#[derive(Clone)]
pub struct WorldHandle {
    inner: Rc<RefCell<WorldInner>>,
}

impl WorldHandle {
    pub(crate) fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(WorldInner::default())),
        }
    }

    pub(crate) fn push_log(&self, line: impl Into<String>) {
        self.inner.borrow_mut().logs.push(line.into());
    }

    pub(crate) fn snapshot(&self) -> (WorldState, Vec<String>) {
        let inner = self.inner.borrow();
        (inner.state.clone(), inner.logs.clone())
    }

    fn log(&mut self, message: &str) {
        self.push_log(message.to_string());
    }

    fn set_light_state(&mut self, name: &str, on: bool) {
        let mut inner = self.inner.borrow_mut();
        inner.state.lights.insert(name.to_string(), on);
        inner
            .logs
            .push(format!("Lumière {} → {}", name, if on { "ON" } else { "OFF" }));
    }

    fn move_marker(&mut self, name: &str, x: f64, y: f64, label: String) {
        let mut inner = self.inner.borrow_mut();
        inner
            .state
            .markers
            .insert(name.to_string(), MarkerPosition { x, y });
        inner.logs.push(label);
    }

    fn increment_counter(&mut self, name: &str, delta: i64) -> i64 {
        let mut inner = self.inner.borrow_mut();
        let value = inner.state.counter(name) + delta;
        inner.state.counters.insert(name.to_string(), value);
        inner.logs.push(format!("Compteur {} = {}", name, value));
        value
    }

    fn push_event(&mut self, name: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.state.sequence.push(name.to_string());
        inner.logs.push(format!("Événement {}", name));
    }
}

pub(crate) fn register_world_api(engine: &mut Engine) {
    engine.register_type_with_name::<WorldHandle>("World");
    engine.register_fn("log", |world: &mut WorldHandle, message: &str| {
        world.log(message);
    });
    engine.register_fn(
        "setLightState",
        |world: &mut WorldHandle, name: &str, on: bool| {
            world.set_light_state(name, on);
        },
    );
    engine.register_fn(
        "moveMarker",
        |world: &mut WorldHandle, name: &str, x: INT, y: INT| {
            let label = format!("Marqueur {} déplacé ({}, {})", name, x, y);
            world.move_marker(name, x as f64, y as f64, label);
        },
    );
    engine.register_fn(
        "moveMarker",
        |world: &mut WorldHandle, name: &str, x: FLOAT, y: FLOAT| {
            let label = format!("Marqueur {} déplacé ({}, {})", name, x, y);
            world.move_marker(name, x, y, label);
        },
    );
    engine.register_fn("incrementCounter", |world: &mut WorldHandle, name: &str| {
        world.increment_counter(name, 1)
    });
    engine.register_fn(
        "incrementCounter",
        |world: &mut WorldHandle, name: &str, delta: INT| world.increment_counter(name, delta),
    );
    engine.register_fn("pushEvent", |world: &mut WorldHandle, name: &str| {
        world.push_event(name);
    });
}
