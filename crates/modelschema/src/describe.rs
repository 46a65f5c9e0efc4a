use crate::node::{Kind, Primitive};

///
/// Describe
///
/// Compile-time stand-in for runtime field reflection: a type reports its
/// shape as a [`Kind`] descriptor. Named-field structs get an impl from
/// `#[derive(Describe)]`; scalars, sequences, and references carry impls
/// here so the generator can reject them with a proper error instead of
/// refusing to compile.
///

pub trait Describe {
    /// Type descriptor for `Self`.
    fn describe() -> Kind;
}

// scalars

macro_rules! impl_describe_scalar {
    ($($ty:ty => $primitive:ident),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> Kind {
                    Kind::Scalar(Primitive::$primitive)
                }
            }
        )*
    };
}

impl_describe_scalar! {
    bool => Bool,
    f32 => Float32,
    f64 => Float64,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    i128 => Int128,
    isize => Int64,
    u8 => Nat8,
    u16 => Nat16,
    u32 => Nat32,
    u64 => Nat64,
    u128 => Nat128,
    usize => Nat64,
    str => Text,
    String => Text,
}

// sequences

impl<T: Describe> Describe for Vec<T> {
    fn describe() -> Kind {
        Kind::Sequence(Box::new(T::describe()))
    }
}

// references; each level of indirection adds exactly one `Reference`

impl<T: Describe + ?Sized> Describe for &T {
    fn describe() -> Kind {
        Kind::Reference(Box::new(T::describe()))
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe() -> Kind {
        Kind::Reference(Box::new(T::describe()))
    }
}
