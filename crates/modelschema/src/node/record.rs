use crate::node::Item;
use serde::Serialize;
use std::slice::Iter;

/// Output-key sentinel that excludes a field from the generated document.
pub const OMIT_KEY: &str = "-";

///
/// Record
///

#[derive(Clone, Debug, Serialize)]
pub struct Record {
    pub ident: &'static str,
    pub fields: FieldList,
}

///
/// FieldList
///

#[derive(Clone, Debug, Serialize)]
pub struct FieldList {
    pub fields: &'static [Field],
}

impl FieldList {
    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Field> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

///
/// Field
///

#[derive(Clone, Debug, Serialize)]
pub struct Field {
    pub ident: &'static str,
    pub item: Item,

    /// Output key annotation; `None` leaves the field out of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<&'static str>,

    pub required: bool,

    /// Literal minimum-value annotation, parsed at generation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<&'static str>,
}

impl Field {
    /// Effective output key, or `None` when the field is invisible to the
    /// schema (no key, empty key, or the omit sentinel).
    #[must_use]
    pub fn output_key(&self) -> Option<&'static str> {
        match self.key {
            Some(key) if !key.is_empty() && key != OMIT_KEY => Some(key),
            _ => None,
        }
    }
}
