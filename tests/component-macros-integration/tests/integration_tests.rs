//! Centralized integration tests for component-macros crate

use component_macros::component;
use core_domain::{ComputationCapability, DataCapability};
use di_abstractions::{
    annotated_components, BeanLookup, Capability, ComponentScanner, Injectable, PackageScanner,
};
use di_impl::BeanContainer;
use infrastructure_common::DependencyError;
use std::sync::Arc;

pub trait Greeter: Send + Sync + std::fmt::Debug {
    fn greet(&self) -> String;
}

impl Capability for dyn Greeter {}

pub trait Host: Send + Sync + std::fmt::Debug {
    fn welcome(&self) -> String;
}

impl Capability for dyn Host {}

mod greetings {
    use super::*;

    #[component(name = "english", provides = Greeter)]
    #[derive(Debug, Default)]
    pub struct EnglishGreeter;

    impl Greeter for EnglishGreeter {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    pub mod french {
        use super::super::*;

        #[component(provides = Greeter)]
        #[derive(Debug, Default)]
        pub struct FrenchGreeter;

        impl Greeter for FrenchGreeter {
            fn greet(&self) -> String {
                "bonjour".to_string()
            }
        }
    }
}

mod hosts {
    use super::*;

    #[component(name = "host", provides = Host, qualifier = "english")]
    #[derive(Debug)]
    pub struct DoorHost {
        greeter: Arc<dyn Greeter>,
    }

    impl Injectable for DoorHost {
        type Dependency = dyn Greeter;

        fn inject(dependency: Arc<Self::Dependency>) -> Self {
            Self {
                greeter: dependency,
            }
        }
    }

    impl Host for DoorHost {
        fn welcome(&self) -> String {
            format!("{}, come in", self.greeter.greet())
        }
    }
}

#[test]
fn test_component_registered_at_startup() {
    let components = annotated_components();
    let english = components
        .iter()
        .find(|component| component.name == "english")
        .unwrap();
    assert!(english.module_path.ends_with("::greetings"));
    assert_eq!(english.qualifier, None);

    let registration = (english.registration)();
    assert!(registration.provides::<dyn Greeter>());
    assert!(registration.identifier().ends_with("greetings::EnglishGreeter"));
}

#[test]
fn test_default_bean_name_is_decapitalized() {
    let definitions = PackageScanner.scan(&["french"]);
    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].name, "frenchGreeter");
}

#[test]
fn test_qualifier_becomes_constructor_ref() {
    let definitions = PackageScanner.scan(&["hosts"]);
    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].constructor_ref.as_deref(), Some("english"));
    assert!(definitions[0].registration.constructor_dependency().is_some());
    assert!(!definitions[0].registration.has_default_constructor());
}

#[test]
fn test_scanned_container_wires_qualifier() {
    let container =
        BeanContainer::from_definitions(PackageScanner.scan(&["greetings", "hosts"])).unwrap();
    assert_eq!(
        container.bean_names(),
        vec!["english", "frenchGreeter", "host"]
    );

    let host = container.resolve::<dyn Host>().unwrap();
    assert_eq!(host.welcome(), "hello, come in");

    let err = container.resolve::<dyn Greeter>().unwrap_err();
    assert!(matches!(err, DependencyError::AmbiguousComponent { .. }));
}

#[test]
fn test_missing_qualified_bean_fails() {
    let err = BeanContainer::from_definitions(PackageScanner.scan(&["hosts"])).unwrap_err();
    assert!(matches!(err, DependencyError::ComponentNotRegistered { .. }));
}

#[test]
fn test_domain_components_scanned_by_package() {
    let container =
        BeanContainer::from_definitions(PackageScanner.scan(&["dao", "metier"])).unwrap();
    assert_eq!(container.bean_names(), vec!["dao", "metier"]);

    let dao = container.resolve_by_name::<dyn DataCapability>("dao").unwrap();
    assert_eq!(dao.get_data(), 23.0);

    let metier = container.resolve::<dyn ComputationCapability>().unwrap();
    assert_eq!(metier.calcul().unwrap(), 529.0);
}

#[test]
fn test_ext_package_adds_second_data_bean() {
    let container =
        BeanContainer::from_definitions(PackageScanner.scan(&["ext", "dao", "metier"])).unwrap();
    assert!(container.contains_bean("sensorDao"));

    let err = container.resolve::<dyn DataCapability>().unwrap_err();
    assert!(matches!(err, DependencyError::AmbiguousComponent { .. }));

    // 业务 bean 按限定名注入 dao，不受第二个数据 bean 影响
    let metier = container
        .resolve_by_name::<dyn ComputationCapability>("metier")
        .unwrap();
    assert_eq!(metier.calcul().unwrap(), 529.0);
}
