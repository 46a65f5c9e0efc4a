use crate::node::{Primitive, Record};
use serde::Serialize;

///
/// Kind
///
/// Resolved shape of a model type as reported by [`crate::Describe`].
/// `Reference` nests one level per indirection; the generator unwraps
/// exactly one.
///

#[derive(Clone, Debug, Serialize)]
pub enum Kind {
    Record(Record),
    Scalar(Primitive),
    Sequence(Box<Kind>),
    Reference(Box<Kind>),
}

impl Kind {
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }
}
