//! ## Crate layout
//! - `describe`: the [`Describe`] trait plus impls for the scalar, sequence,
//!   and reference shapes a caller can hand to the generator.
//! - `generate`: the schema builder and its JSON document types.
//! - `node`: static descriptor nodes emitted by `#[derive(Describe)]`.
//!
//! ```
//! use modelschema::{Describe, generate_schema};
//!
//! #[derive(Describe)]
//! struct Signup {
//!     #[schema(key = "name", required)]
//!     name: String,
//!     #[schema(key = "age", min = "0")]
//!     age: u32,
//! }
//!
//! let schema = generate_schema::<Signup>().unwrap();
//! assert!(schema.contains("\"minimum\": 0"));
//! ```

pub mod describe;
pub mod generate;
pub mod node;

// export so derive-emitted paths resolve inside this crate's own tests
extern crate self as modelschema;

pub use describe::Describe;
pub use generate::generate_schema;
pub use modelschema_derive::Describe;

use thiserror::Error as ThisError;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    /// The model resolved to something other than a named-field record
    /// after at most one level of indirection.
    #[error("model must be a struct or a pointer to a struct")]
    InvalidModelKind,

    /// The final serialization step failed. Not expected for descriptor
    /// nodes the derive emits; surfaced rather than swallowed.
    #[error(transparent)]
    Encoding(#[from] serde_json::Error),
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Describe, Error, generate_schema,
        node::{Field, FieldList, Item, Kind, OMIT_KEY, Primitive, Record},
    };
}
