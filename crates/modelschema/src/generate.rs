use crate::{
    Error,
    describe::Describe,
    node::{Field, Item, Kind, Primitive},
};
use indexmap::IndexMap;
use serde::Serialize;

///
/// Document
///
/// Root of the generated JSON Schema subset. Struct field order pins the
/// key order of the serialized output.
///

#[derive(Debug, Serialize)]
struct Document {
    #[serde(rename = "type")]
    ty: &'static str,

    properties: IndexMap<&'static str, Property>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    required: Vec<&'static str>,
}

///
/// Property
///

#[derive(Debug, Default, Serialize)]
struct Property {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    ty: Option<PropertyType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    minimum: Option<i64>,
}

///
/// PropertyType
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
enum PropertyType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
}

/// Generate a pretty-printed JSON Schema document for a model type.
///
/// The model must describe a named-field record, or a single reference to
/// one; any other shape fails with [`Error::InvalidModelKind`]. Properties
/// are emitted in field declaration order, and only fields carrying an
/// output key appear at all.
pub fn generate_schema<T: Describe>() -> Result<String, Error> {
    // Unwrap exactly one level of indirection; deeper nesting stays a
    // `Reference` and is rejected below.
    let kind = match T::describe() {
        Kind::Reference(inner) => *inner,
        kind => kind,
    };

    let Kind::Record(record) = kind else {
        return Err(Error::InvalidModelKind);
    };

    let mut properties = IndexMap::new();
    let mut required = Vec::new();

    for field in &record.fields {
        let Some(key) = field.output_key() else {
            continue;
        };

        properties.insert(key, property_for(field));

        if field.required && !required.contains(&key) {
            required.push(key);
        }
    }

    let document = Document {
        ty: "object",
        properties,
        required,
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

/// Classify a field into its output property.
///
/// Kinds outside the schema vocabulary produce an empty property rather
/// than an error; nested records and maps are a known gap. The minimum
/// annotation is consulted for integer kinds only, and a value that does
/// not parse as an integer is dropped silently.
fn property_for(field: &Field) -> Property {
    match field.item {
        Item::Primitive(Primitive::Text) => Property {
            ty: Some(PropertyType::String),
            ..Property::default()
        },
        Item::Primitive(Primitive::Bool) => Property {
            ty: Some(PropertyType::Boolean),
            ..Property::default()
        },
        Item::Primitive(primitive) if primitive.is_int() => Property {
            ty: Some(PropertyType::Integer),
            minimum: field.minimum.and_then(|raw| raw.parse().ok()),
            ..Property::default()
        },
        Item::Primitive(primitive) if primitive.is_float() => Property {
            ty: Some(PropertyType::Number),
            ..Property::default()
        },
        Item::List(Primitive::Text) => Property {
            ty: Some(PropertyType::Array),
            format: Some("string"),
            ..Property::default()
        },
        _ => Property::default(),
    }
}
