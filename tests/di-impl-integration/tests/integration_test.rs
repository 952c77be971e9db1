//! Centralized integration tests for di-impl crate
use config_abstractions::{BeanDescriptor, ContainerDescriptor};
use core_domain::{ComputationCapability, DataCapability, DatabaseDao, MetierImpl, SensorDao};
use di_abstractions::{BeanDefinition, BeanLookup, ComponentRegistration, ComponentResolver};
use di_impl::{BeanContainer, TypeResolver};
use infrastructure_common::{DependencyError, InfrastructureError};
use infrastructure_composition::{
    render_report, standard_resolver, CompositionBuilder, DescriptorContext, ReflectMode,
};
use std::io::Write;
use std::sync::Arc;

const DAO: &str = "core_domain::dao::DatabaseDao";
const SENSOR: &str = "core_domain::ext::SensorDao";
const METIER: &str = "core_domain::metier::MetierImpl";

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_two_phase_resolution_by_hand() -> anyhow::Result<()> {
    let resolver = standard_resolver()?;

    let dao: Arc<dyn DataCapability> = Arc::from(resolver.resolve::<dyn DataCapability>(DAO)?);
    let mut metier = resolver.resolve::<dyn ComputationCapability>(METIER)?;
    assert!(matches!(
        metier.calcul(),
        Err(DependencyError::UnwiredDependency { .. })
    ));

    metier.set_dao(dao);
    assert_eq!(metier.calcul()?, 529.0);
    Ok(())
}

#[test]
fn test_single_phase_resolution_by_hand() -> anyhow::Result<()> {
    let resolver = standard_resolver()?;
    let dao: Arc<dyn DataCapability> = Arc::from(resolver.resolve::<dyn DataCapability>(SENSOR)?);
    let metier =
        resolver.resolve_with::<dyn ComputationCapability, dyn DataCapability>(METIER, dao)?;
    assert_eq!(metier.calcul()?, SensorDao::DATA * MetierImpl::FACTOR);
    Ok(())
}

#[test]
fn test_resolve_dao_as_computation_is_contract_mismatch() {
    let resolver = standard_resolver().unwrap();
    let err = resolver
        .resolve::<dyn ComputationCapability>(DAO)
        .unwrap_err();
    assert!(matches!(err, DependencyError::ContractMismatch { .. }));
}

#[test]
fn test_computation_without_dependent_constructor() {
    // 只有零参数构造器的注册：单阶段装配没有可用的构造器
    let resolver = TypeResolver::from_registrations(vec![
        ComponentRegistration::of::<DatabaseDao, dyn DataCapability>()
            .constructor(|| Ok(Box::new(DatabaseDao::new()) as Box<dyn DataCapability>))
            .build(),
        ComponentRegistration::of::<MetierImpl, dyn ComputationCapability>()
            .constructor(|| Ok(Box::new(MetierImpl::new()) as Box<dyn ComputationCapability>))
            .build(),
    ])
    .unwrap();

    let dao: Arc<dyn DataCapability> = Arc::new(DatabaseDao::new());
    let err = resolver
        .resolve_with::<dyn ComputationCapability, dyn DataCapability>(METIER, Arc::clone(&dao))
        .unwrap_err();
    assert!(matches!(err, DependencyError::ComponentCreationFailed { .. }));

    let mut metier = resolver.resolve::<dyn ComputationCapability>(METIER).unwrap();
    let err = resolver
        .inject::<dyn ComputationCapability, dyn DataCapability>(METIER, &mut metier, "dao", dao)
        .unwrap_err();
    assert!(matches!(err, DependencyError::ComponentCreationFailed { .. }));
}

#[test]
fn test_container_lookup_by_name_and_capability_share_singleton() {
    let resolver = standard_resolver().unwrap();
    let container = BeanContainer::from_definitions(vec![
        BeanDefinition::new("dao", resolver.registration(DAO).unwrap().clone()),
        BeanDefinition::new("metier", resolver.registration(METIER).unwrap().clone())
            .with_property("dao", "dao"),
    ])
    .unwrap();

    let by_name = container
        .resolve_by_name::<dyn ComputationCapability>("metier")
        .unwrap();
    let by_capability = container.resolve::<dyn ComputationCapability>().unwrap();
    assert!(Arc::ptr_eq(&by_name, &by_capability));

    let dao_a = container.resolve::<dyn DataCapability>().unwrap();
    let dao_b = container.resolve_by_name::<dyn DataCapability>("dao").unwrap();
    assert!(Arc::ptr_eq(&dao_a, &dao_b));
}

#[test]
fn test_descriptor_cycle_is_reported() {
    let descriptor = ContainerDescriptor {
        beans: vec![
            BeanDescriptor::new("a", METIER).with_property("dao", "b"),
            BeanDescriptor::new("b", METIER).with_property("dao", "a"),
        ],
    };
    let err = DescriptorContext::from_descriptor(&descriptor, &standard_resolver().unwrap())
        .unwrap_err();
    assert!(matches!(err, DependencyError::CircularDependency { .. }));
}

#[test]
fn test_driver_reflect_from_text_file() {
    let driver = CompositionBuilder::new().build().unwrap();
    let file = write_temp(".txt", &format!("{DAO}\n{METIER}\n"));

    let two_phase = driver.run_from_file(file.path(), ReflectMode::TwoPhase);
    let single_phase = driver.run_from_file(file.path(), ReflectMode::SinglePhase);
    assert_eq!(render_report(&two_phase), "RES=529.0");
    assert_eq!(render_report(&single_phase), "RES=529.0");

    let data_only = driver.run_from_file(file.path(), ReflectMode::DataOnly);
    assert_eq!(render_report(&data_only), "RES=23.0");
}

#[test]
fn test_driver_reflect_unknown_identifier() {
    let driver = CompositionBuilder::new().build().unwrap();
    let file = write_temp(".txt", &format!("dao::Nope\n{METIER}\n"));

    let result = driver.run_from_file(file.path(), ReflectMode::TwoPhase);
    assert!(render_report(&result).contains("dao::Nope"));
    assert!(matches!(
        result,
        Err(InfrastructureError::DependencyError {
            source: DependencyError::ComponentNotRegistered { .. }
        })
    ));
}

#[test]
fn test_driver_descriptor_json_and_yaml() {
    let driver = CompositionBuilder::new().build().unwrap();

    let json = write_temp(
        ".json",
        &format!(
            r#"{{ "beans": [
                {{ "id": "dao", "type": "{DAO}" }},
                {{ "id": "metier", "type": "{METIER}", "constructor-ref": "dao" }}
            ] }}"#
        ),
    );
    assert_eq!(
        render_report(&driver.run_descriptor(json.path(), "metier")),
        "RES=529.0"
    );

    let yaml = write_temp(
        ".yml",
        &format!(
            "beans:\n  - id: sensor\n    type: {SENSOR}\n  - id: metier\n    type: {METIER}\n    properties:\n      dao: sensor\n"
        ),
    );
    assert_eq!(
        render_report(&driver.run_descriptor(yaml.path(), "metier")),
        "RES=276.0"
    );
}

#[test]
fn test_driver_descriptor_unknown_bean_name() {
    let driver = CompositionBuilder::new().build().unwrap();
    let toml = write_temp(".toml", &format!("[[beans]]\nid = \"dao\"\ntype = \"{DAO}\"\n"));
    let result = driver.run_descriptor(toml.path(), "metier");
    assert!(matches!(
        result,
        Err(InfrastructureError::DependencyError {
            source: DependencyError::ComponentNotRegistered { .. }
        })
    ));
}

#[test]
fn test_driver_static_and_annotation_agree() {
    let driver = CompositionBuilder::new().build().unwrap();
    let static_result = driver.run_static().unwrap();
    let annotation_result = driver.run_annotation(&["dao", "metier"]).unwrap();
    assert_eq!(static_result, annotation_result);
}
