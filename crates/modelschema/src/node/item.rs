use derive_more::Display;
use serde::Serialize;

///
/// Item
///
/// Shape classification for a single record field. Anything outside the
/// schema vocabulary (nested records, maps, optionals, sequences of
/// non-primitives) is `Unsupported` and surfaces as an untyped property.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Item {
    Primitive(Primitive),
    List(Primitive),
    Unsupported,
}

///
/// Primitive
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Primitive {
    Bool,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    Nat8,
    Nat16,
    Nat32,
    Nat64,
    Nat128,
    Text,
}

impl Primitive {
    #[must_use]
    pub const fn is_signed_int(self) -> bool {
        matches!(
            self,
            Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 | Self::Int128
        )
    }

    #[must_use]
    pub const fn is_unsigned_int(self) -> bool {
        matches!(
            self,
            Self::Nat8 | Self::Nat16 | Self::Nat32 | Self::Nat64 | Self::Nat128
        )
    }

    #[must_use]
    pub const fn is_int(self) -> bool {
        self.is_signed_int() || self.is_unsigned_int()
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }
}
