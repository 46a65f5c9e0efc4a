use modelschema::{Describe, Error, generate_schema};

///
/// User
///
/// The canonical scenario: every supported field shape plus required and
/// minimum annotations.
///

#[derive(Describe)]
#[allow(dead_code)]
struct User {
    #[schema(key = "name", required)]
    name: String,

    #[schema(key = "age", required, min = "0")]
    age: i32,

    #[schema(key = "email")]
    email: String,

    #[schema(key = "is_active")]
    is_active: bool,

    #[schema(key = "tags")]
    tags: Vec<String>,
}

const USER_SCHEMA: &str = r#"{
  "type": "object",
  "properties": {
    "name": {
      "type": "string"
    },
    "age": {
      "type": "integer",
      "minimum": 0
    },
    "email": {
      "type": "string"
    },
    "is_active": {
      "type": "boolean"
    },
    "tags": {
      "type": "array",
      "format": "string"
    }
  },
  "required": [
    "name",
    "age"
  ]
}"#;

#[test]
fn user_document_is_byte_exact_and_declaration_ordered() {
    let schema = generate_schema::<User>().unwrap();

    assert_eq!(schema, USER_SCHEMA);
}

#[test]
fn generation_is_deterministic() {
    let first = generate_schema::<User>().unwrap();
    let second = generate_schema::<User>().unwrap();

    assert_eq!(first, second);
}

#[test]
fn reference_models_resolve_to_the_record() {
    let by_value = generate_schema::<User>().unwrap();
    let by_reference = generate_schema::<&User>().unwrap();
    let boxed = generate_schema::<Box<User>>().unwrap();

    assert_eq!(by_value, by_reference);
    assert_eq!(by_value, boxed);
}

#[test]
fn double_indirection_is_rejected() {
    assert!(matches!(
        generate_schema::<&&User>(),
        Err(Error::InvalidModelKind)
    ));
}

#[test]
fn non_record_models_fail_with_the_fixed_message() {
    let err = generate_schema::<i32>().unwrap_err();

    assert_eq!(
        err.to_string(),
        "model must be a struct or a pointer to a struct"
    );
}

#[test]
fn omitted_and_unkeyed_fields_are_invisible() {
    #[derive(Describe)]
    #[allow(dead_code)]
    struct Account {
        #[schema(key = "-", required, min = "1")]
        secret: String,

        unkeyed: String,

        #[schema(key = "age")]
        age: i32,
    }

    let schema = generate_schema::<Account>().unwrap();
    let value: serde_json::Value = serde_json::from_str(&schema).unwrap();

    let properties = value["properties"].as_object().unwrap();
    assert_eq!(properties.len(), 1);
    assert!(properties.contains_key("age"));

    // `secret` was required, but an omitted field never reaches the
    // required list either; the key is dropped, not emitted empty.
    assert!(!schema.contains("required"));
}

#[test]
fn no_required_fields_drops_the_required_key() {
    #[derive(Describe)]
    #[allow(dead_code)]
    struct Pair {
        #[schema(key = "name")]
        name: String,

        #[schema(key = "age")]
        age: i32,
    }

    let schema = generate_schema::<Pair>().unwrap();
    let value: serde_json::Value = serde_json::from_str(&schema).unwrap();

    assert!(value.get("required").is_none());

    let keys: Vec<&String> = value["properties"].as_object().unwrap().keys().collect();
    assert_eq!(keys, ["name", "age"]);
}

#[test]
fn integer_minimum_is_parsed_exactly() {
    #[derive(Describe)]
    #[allow(dead_code)]
    struct AgeGate {
        #[schema(key = "age", min = "18")]
        age: i64,
    }

    let schema = generate_schema::<AgeGate>().unwrap();
    let value: serde_json::Value = serde_json::from_str(&schema).unwrap();

    assert_eq!(
        value["properties"]["age"],
        serde_json::json!({ "type": "integer", "minimum": 18 })
    );
    assert!(value.get("required").is_none());
}

#[test]
fn unparseable_minimum_is_dropped() {
    #[derive(Describe)]
    #[allow(dead_code)]
    struct Broken {
        #[schema(key = "age", min = "not-a-number")]
        age: u16,
    }

    let schema = generate_schema::<Broken>().unwrap();
    let value: serde_json::Value = serde_json::from_str(&schema).unwrap();

    assert_eq!(
        value["properties"]["age"],
        serde_json::json!({ "type": "integer" })
    );
}

#[test]
fn minimum_is_ignored_for_non_integer_fields() {
    #[derive(Describe)]
    #[allow(dead_code)]
    struct Labeled {
        #[schema(key = "label", min = "3")]
        label: String,
    }

    let schema = generate_schema::<Labeled>().unwrap();
    let value: serde_json::Value = serde_json::from_str(&schema).unwrap();

    assert_eq!(
        value["properties"]["label"],
        serde_json::json!({ "type": "string" })
    );
}

#[test]
fn unclassified_field_kinds_emit_untyped_properties() {
    #[derive(Describe)]
    #[allow(dead_code)]
    struct Inner {
        #[schema(key = "value")]
        value: i32,
    }

    #[derive(Describe)]
    #[allow(dead_code)]
    struct Outer {
        #[schema(key = "inner")]
        inner: Inner,

        #[schema(key = "scores")]
        scores: Vec<i32>,

        #[schema(key = "maybe")]
        maybe: Option<String>,
    }

    let schema = generate_schema::<Outer>().unwrap();
    let value: serde_json::Value = serde_json::from_str(&schema).unwrap();

    assert_eq!(value["properties"]["inner"], serde_json::json!({}));
    assert_eq!(value["properties"]["maybe"], serde_json::json!({}));

    // A sequence of non-strings carries no array marker either.
    assert_eq!(value["properties"]["scores"], serde_json::json!({}));
}
