mod item;
mod kind;
mod record;

pub use item::{Item, Primitive};
pub use kind::Kind;
pub use record::{Field, FieldList, OMIT_KEY, Record};
