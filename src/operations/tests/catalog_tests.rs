//! Unit tests for catalog construction and lookup.

use rstest::rstest;

use crate::operations::catalog::{OperationCatalog, params};
use crate::operations::domain::{CatalogError, OperationDescriptor, ParameterType};

#[rstest]
fn every_registered_name_resolves_to_its_own_descriptor() {
    let catalog = OperationCatalog::new();

    for name in catalog.names() {
        let descriptor = catalog.find(name).expect("registered name should resolve");
        assert_eq!(descriptor.name(), name);
    }
}

#[rstest]
fn find_returns_none_for_unregistered_names() {
    let catalog = OperationCatalog::new();

    assert!(catalog.find("teleport").is_none());
}

#[rstest]
fn lookup_is_case_sensitive() {
    let catalog = OperationCatalog::new();

    assert!(catalog.find("imagepull").is_some());
    assert!(catalog.find("ImagePull").is_none());
}

#[rstest]
fn duplicate_operation_names_fail_construction() {
    let error = OperationCatalog::with_operations([
        OperationDescriptor::new("containerstop", false, true),
        OperationDescriptor::new("containerstop", false, true),
    ])
    .expect_err("duplicate names should be rejected, never overwritten");

    assert_eq!(
        error,
        CatalogError::DuplicateOperation("containerstop".to_owned())
    );
}

#[rstest]
fn with_operations_builds_a_findable_catalog() {
    let catalog = OperationCatalog::with_operations([
        OperationDescriptor::new("ping", false, true),
        OperationDescriptor::new("version", false, true),
    ])
    .expect("distinct names should build");

    assert_eq!(catalog.len(), 2);
    assert!(catalog.find("ping").is_some());
    assert_eq!(catalog.names(), vec!["ping", "version"]);
}

#[rstest]
fn global_catalog_is_a_single_shared_instance() {
    let first: *const OperationCatalog = OperationCatalog::global();
    let second: *const OperationCatalog = OperationCatalog::global();

    assert_eq!(first, second);
    assert!(!OperationCatalog::global().is_empty());
}

#[rstest]
fn builtin_table_matches_the_wire_contract_for_imagepull() {
    let descriptor = OperationCatalog::global()
        .find("imagepull")
        .expect("imagepull is built in");

    assert!(!descriptor.can_consume());
    assert!(descriptor.can_produce());
    assert_eq!(
        descriptor.parameter_type(params::REGISTRY),
        Some(ParameterType::Text)
    );
    assert_eq!(
        descriptor.parameter_type(params::TAG),
        Some(ParameterType::Text)
    );
    assert_eq!(
        descriptor.parameter_type(params::REPOSITORY),
        Some(ParameterType::Text)
    );
    assert_eq!(descriptor.parameters().len(), 3);
}

#[rstest]
#[case("containerstop", params::TIMEOUT, ParameterType::Integer)]
#[case("events", params::INITIAL_RANGE, ParameterType::LongInteger)]
#[case("containercreate", params::MEMORY_LIMIT, ParameterType::LongInteger)]
#[case("containerlog", params::TAIL, ParameterType::Integer)]
#[case("imagelist", params::SHOW_ALL, ParameterType::Boolean)]
fn builtin_table_declares_expected_parameter_types(
    #[case] operation: &str,
    #[case] parameter: &str,
    #[case] expected: ParameterType,
) {
    let descriptor = OperationCatalog::global()
        .find(operation)
        .expect("operation is built in");

    assert_eq!(descriptor.parameter_type(parameter), Some(expected));
}

#[rstest]
#[case("info")]
#[case("ping")]
#[case("version")]
fn parameterless_operations_have_empty_schemas(#[case] operation: &str) {
    let descriptor = OperationCatalog::global()
        .find(operation)
        .expect("operation is built in");

    assert!(descriptor.parameters().is_empty());
}

#[rstest]
fn names_are_sorted_and_cover_the_whole_table() {
    let catalog = OperationCatalog::new();
    let names = catalog.names();

    assert_eq!(names.len(), catalog.iter().count());
    assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(names.contains(&"containerstart"));
    assert!(names.contains(&"events"));
}

#[rstest]
fn catalog_serialises_as_a_name_keyed_map() {
    let rendered =
        serde_json::to_value(OperationCatalog::global()).expect("catalog should serialise");

    let entry = rendered
        .get("containerstop")
        .expect("serialised catalog should key by operation name");
    assert_eq!(
        entry.get("parameters").and_then(|p| p.get(params::TIMEOUT)),
        Some(&serde_json::json!("integer"))
    );
}
