//! Document shape tests across all four kinds
//!
//! Exercises the public transform entry points the way the batch runner
//! does: from source text or source files to serialized JSON.

mod helpers;

use helpers::write_source;
use mdc_import::transformers::{transform_file, transform_str};
use mdc_import::{Document, EntityKind};
use serde_json::{json, Value};
use tempfile::TempDir;

fn to_json(kind: EntityKind, xml: &str, slug: &str) -> Value {
    let document = transform_str(kind, xml, slug).unwrap();
    serde_json::to_value(&document).unwrap()
}

fn strip_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.remove("_key");
            map.values_mut().for_each(strip_keys);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_keys),
        _ => {}
    }
}

fn collect_keys(value: &Value, keys: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(key)) = map.get("_key") {
                keys.push(key.clone());
            }
            map.values().for_each(|v| collect_keys(v, keys));
        }
        Value::Array(items) => items.iter().for_each(|v| collect_keys(v, keys)),
        _ => {}
    }
}

const SERVICE: &str = r#"<service>
    <name>Adopt a Pet</name>
    <organization>org-animal-services</organization>
    <longDescription>&lt;p&gt;Pay &lt;b&gt;online&lt;/b&gt;.&lt;/p&gt;</longDescription>
    <category><mainCategory>Animals</mainCategory></category>
    <details><title>Steps</title><content>Visit the shelter</content></details>
    <phoneContainer><phone>311</phone></phoneContainer>
    <locations><location>Shelter</location></locations>
    <audience>a, b,,c </audience>
</service>"#;

#[test]
fn test_id_and_slug_for_every_kind() {
    let cases = [
        (EntityKind::Location, "<location><name>x</name></location>", "loc-main"),
        (EntityKind::Organization, "<organization><name>x</name></organization>", "org-main"),
        (EntityKind::Service, "<service><name>x</name></service>", "ser-main"),
        (EntityKind::Taxonomy, "<taxonomy><listName>x</listName></taxonomy>", "tax-main"),
    ];

    for (kind, xml, expected_id) in cases {
        let doc = to_json(kind, xml, "main");
        assert_eq!(doc["_id"], expected_id, "{}", kind);
        assert_eq!(doc["_type"], kind.root_element());
        assert_eq!(doc["slug"], json!({"_type": "slug", "current": "main"}));
        assert_eq!(doc["mduid"], "");
    }
}

#[test]
fn test_external_identifier_wins() {
    let doc = to_json(
        EntityKind::Service,
        "<service><mduid>SVC-100</mduid></service>",
        "adopt",
    );
    assert_eq!(doc["_id"], "SVC-100");
    assert_eq!(doc["slug"]["current"], "adopt");
}

#[test]
fn test_comma_list_splitting() {
    let doc = to_json(EntityKind::Service, SERVICE, "adopt");
    assert_eq!(doc["audience"], json!(["a", "b", "c"]));
}

#[test]
fn test_markup_flattening() {
    let doc = to_json(EntityKind::Service, SERVICE, "adopt");
    assert_eq!(doc["longDescription"][0]["children"][0]["text"], "Pay online.");
    assert_eq!(doc["organization"]["_ref"], "org-animal-services");
}

#[test]
fn test_idempotent_except_keys() {
    let mut first = to_json(EntityKind::Service, SERVICE, "adopt");
    let mut second = to_json(EntityKind::Service, SERVICE, "adopt");

    let mut keys = Vec::new();
    collect_keys(&first, &mut keys);
    assert!(keys.len() >= 6, "expected keys on blocks, spans and entries");
    let unique: std::collections::HashSet<_> = keys.iter().collect();
    assert_eq!(unique.len(), keys.len(), "keys are unique within a document");

    strip_keys(&mut first);
    strip_keys(&mut second);
    assert_eq!(first, second);
}

#[test]
fn test_blank_field_uses_default_not_omission() {
    let doc = to_json(
        EntityKind::Location,
        "<location><physicalAddress><state>   </state></physicalAddress></location>",
        "x",
    );
    assert_eq!(doc["physicalAddress"]["state"], "FL");

    let doc = to_json(EntityKind::Organization, "<organization><betaUrl> </betaUrl></organization>", "x");
    assert!(doc.get("betaUrl").is_none());
}

#[test]
fn test_ada_phone_only_scenario() {
    let doc = to_json(
        EntityKind::Organization,
        "<organization><ada><adaPhone>305-555-1234</adaPhone></ada></organization>",
        "x",
    );
    let ada = doc["ada"].as_object().unwrap();
    assert_eq!(ada["adaPhone"], "305-555-1234");
    assert_eq!(ada["adaName"], "");
    assert_eq!(ada["adaEmail"], "");
    assert!(!ada.contains_key("adaDisclaimer"));
}

#[test]
fn test_transform_file_uses_file_name_as_slug() {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path(), "animal-services", "<organization><name>Animal Services</name></organization>");

    let document = transform_file(EntityKind::Organization, &path).unwrap();
    assert!(matches!(document, Document::Organization(_)));
    assert_eq!(document.id(), "org-animal-services");
    assert_eq!(document.label(), "Animal Services");
}

#[test]
fn test_unreadable_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = transform_file(EntityKind::Location, &dir.path().join("missing")).unwrap_err();
    assert_eq!(err.code(), "READ_ERROR");
    assert!(!err.is_fatal());
}
