//! Unit tests for descriptor construction and parameter coercion.

use rstest::rstest;
use serde_json::json;

use crate::operations::domain::{
    CatalogError, OperationDescriptor, ParameterType, ParameterValue,
};

#[rstest]
fn from_pairs_builds_a_lookupable_schema() {
    let descriptor = OperationDescriptor::from_pairs(
        "containerstop",
        false,
        true,
        [
            ("containerId", ParameterType::Text),
            ("timeout", ParameterType::Integer),
        ],
    )
    .expect("well-formed pairs should build");

    assert_eq!(descriptor.name(), "containerstop");
    assert!(!descriptor.can_consume());
    assert!(descriptor.can_produce());
    assert_eq!(
        descriptor.parameter_type("timeout"),
        Some(ParameterType::Integer)
    );
    assert!(descriptor.declares("containerId"));
    assert!(!descriptor.declares("bogus"));
}

#[rstest]
fn from_pairs_rejects_duplicate_parameter_names() {
    let error = OperationDescriptor::from_pairs(
        "containerstop",
        false,
        true,
        [
            ("containerId", ParameterType::Text),
            ("containerId", ParameterType::Integer),
        ],
    )
    .expect_err("duplicate parameter should be rejected at construction");

    assert_eq!(
        error,
        CatalogError::DuplicateParameter {
            operation: "containerstop".to_owned(),
            parameter: "containerId".to_owned(),
        }
    );
}

#[rstest]
fn descriptor_with_no_parameters_accepts_nothing() {
    let descriptor = OperationDescriptor::new("ping", false, true);

    assert!(descriptor.parameters().is_empty());
    assert_eq!(descriptor.parameter_type("anything"), None);
}

#[rstest]
#[case(ParameterType::Text, "latest", Some(ParameterValue::Text("latest".to_owned())))]
#[case(ParameterType::Text, "", Some(ParameterValue::Text(String::new())))]
#[case(ParameterType::Boolean, "true", Some(ParameterValue::Boolean(true)))]
#[case(ParameterType::Boolean, "FALSE", Some(ParameterValue::Boolean(false)))]
#[case(ParameterType::Boolean, "yes", None)]
#[case(ParameterType::Integer, "42", Some(ParameterValue::Integer(42)))]
#[case(ParameterType::Integer, "-7", Some(ParameterValue::Integer(-7)))]
#[case(ParameterType::Integer, "notanumber", None)]
#[case(ParameterType::Integer, "4294967296", None)]
#[case(ParameterType::LongInteger, "4294967296", Some(ParameterValue::Long(4_294_967_296)))]
#[case(ParameterType::LongInteger, "12.5", None)]
fn coercion_follows_the_declared_type(
    #[case] declared: ParameterType,
    #[case] raw: &str,
    #[case] expected: Option<ParameterValue>,
) {
    assert_eq!(declared.coerce(raw), expected);
}

#[rstest]
fn coerced_values_report_their_declared_type() {
    assert_eq!(
        ParameterValue::Integer(3).parameter_type(),
        ParameterType::Integer
    );
    assert_eq!(
        ParameterValue::Long(3).parameter_type(),
        ParameterType::LongInteger
    );
    assert_eq!(ParameterValue::Integer(3).as_integer(), Some(3));
    assert_eq!(ParameterValue::Boolean(true).as_boolean(), Some(true));
    assert_eq!(ParameterValue::Text("x".to_owned()).as_text(), Some("x"));
    assert_eq!(ParameterValue::Text("x".to_owned()).as_boolean(), None);
}

#[rstest]
fn parameter_types_serialise_as_snake_case_names() {
    let value = serde_json::to_value(ParameterType::LongInteger)
        .expect("parameter type should serialise");

    assert_eq!(value, json!("long_integer"));
}

#[rstest]
fn parameter_values_serialise_untagged() {
    let values = [
        serde_json::to_value(ParameterValue::Text("latest".to_owned())),
        serde_json::to_value(ParameterValue::Boolean(true)),
        serde_json::to_value(ParameterValue::Integer(5)),
    ];

    assert_eq!(
        values
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .expect("values should serialise"),
        vec![json!("latest"), json!(true), json!(5)]
    );
}

#[rstest]
fn descriptors_round_trip_through_serde() {
    let descriptor = OperationDescriptor::new("containerstop", false, true)
        .with_parameter("containerId", ParameterType::Text)
        .with_parameter("timeout", ParameterType::Integer);

    let encoded = serde_json::to_string(&descriptor).expect("descriptor should serialise");
    let decoded: OperationDescriptor =
        serde_json::from_str(&encoded).expect("descriptor should deserialise");

    assert_eq!(decoded, descriptor);
}

#[rstest]
fn descriptor_displays_as_its_wire_name() {
    let descriptor = OperationDescriptor::new("imagepull", false, true);

    assert_eq!(descriptor.to_string(), "imagepull");
}
