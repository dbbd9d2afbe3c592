//! The generated JSON Schema describes the fixture's serialized form.

use schemars::schema_for;
use specimen_core::TestObject;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

#[test]
fn fixture_validates_against_its_schema() {
    let schema = serde_json::to_value(schema_for!(TestObject)).unwrap();
    let instance = serde_json::to_value(TestObject::new()).unwrap();

    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn schema_rejects_wrongly_typed_field() {
    let schema = serde_json::to_value(schema_for!(TestObject)).unwrap();
    let mut instance = serde_json::to_value(TestObject::new()).unwrap();
    instance["id"] = serde_json::json!("not a number");

    let errors = validate_against_schema(&schema, &instance);
    assert!(!errors.is_empty());
}

#[test]
fn schema_lists_nested_definitions() {
    let schema = serde_json::to_value(schema_for!(TestObject)).unwrap();
    let defs = schema["$defs"].as_object().expect("schema has $defs");
    assert!(defs.contains_key("Address"));
    assert!(defs.contains_key("User"));
}
