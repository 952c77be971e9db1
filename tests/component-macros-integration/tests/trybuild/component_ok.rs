use component_macros::component;
use di_abstractions::{annotated_components, Capability};

pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

impl Capability for dyn Clock {}

#[component(provides = Clock)]
#[derive(Default)]
struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        42
    }
}

fn main() {
    let components = annotated_components();
    let clock = components
        .iter()
        .find(|component| component.name == "fixedClock")
        .expect("fixedClock 未登记");
    let registration = (clock.registration)();
    let instance = registration.instantiate().unwrap();
    let clock = registration.downcast::<dyn Clock>(instance).unwrap();
    assert_eq!(clock.now(), 42);
    assert_eq!(FixedClock.now(), 42);
}
