use darling::{FromDeriveInput, FromField, ast::Data};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, GenericArgument, Ident, PathArguments, Type};

///
/// Model
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(schema), supports(struct_named))]
struct Model {
    ident: Ident,
    generics: syn::Generics,
    data: Data<(), ModelField>,
}

///
/// ModelField
///

#[derive(Debug, FromField)]
#[darling(attributes(schema))]
struct ModelField {
    ident: Option<Ident>,
    ty: Type,

    #[darling(default)]
    key: Option<String>,

    #[darling(default)]
    required: bool,

    #[darling(default)]
    min: Option<String>,
}

// derive_describe
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let model = match Model::from_derive_input(&input) {
        Ok(model) => model,
        Err(err) => return err.write_errors(),
    };

    expand(&model)
}

fn expand(model: &Model) -> TokenStream {
    let ident = &model.ident;
    let ident_str = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = model.generics.split_for_impl();

    let fields = model
        .data
        .as_ref()
        .take_struct()
        .expect("supports(struct_named) admits only structs")
        .fields;

    let field_nodes = fields.iter().map(|field| field_node(field));

    quote! {
        impl #impl_generics ::modelschema::Describe for #ident #ty_generics #where_clause {
            fn describe() -> ::modelschema::node::Kind {
                ::modelschema::node::Kind::Record(::modelschema::node::Record {
                    ident: #ident_str,
                    fields: ::modelschema::node::FieldList {
                        fields: &[#(#field_nodes),*],
                    },
                })
            }
        }
    }
}

fn field_node(field: &ModelField) -> TokenStream {
    let ident = field.ident.as_ref().expect("named field").to_string();
    let item = item_for(&field.ty);
    let key = quote_option_str(field.key.as_deref());
    let required = field.required;
    let minimum = quote_option_str(field.min.as_deref());

    quote! {
        ::modelschema::node::Field {
            ident: #ident,
            item: #item,
            key: #key,
            required: #required,
            minimum: #minimum,
        }
    }
}

/// Quote an `Option<&str>` as `Some(...)`/`None` tokens.
fn quote_option_str(opt: Option<&str>) -> TokenStream {
    match opt {
        Some(s) => quote!(Some(#s)),
        None => quote!(None),
    }
}

/// Classify a field type into its `Item` node. The match is syntactic:
/// a path whose last segment names a primitive, or `Vec` of one. Anything
/// else falls through to `Unsupported`.
fn item_for(ty: &Type) -> TokenStream {
    if let Some(primitive) = primitive_ident(ty) {
        return quote! {
            ::modelschema::node::Item::Primitive(::modelschema::node::Primitive::#primitive)
        };
    }

    if let Some(primitive) = vec_element(ty).and_then(primitive_ident) {
        return quote! {
            ::modelschema::node::Item::List(::modelschema::node::Primitive::#primitive)
        };
    }

    quote!(::modelschema::node::Item::Unsupported)
}

fn primitive_ident(ty: &Type) -> Option<Ident> {
    let Type::Path(path) = ty else {
        return None;
    };

    let segment = path.path.segments.last()?;
    if !matches!(segment.arguments, PathArguments::None) {
        return None;
    }

    let primitive = match segment.ident.to_string().as_str() {
        "String" | "str" => "Text",
        "bool" => "Bool",
        "f32" => "Float32",
        "f64" => "Float64",
        "i8" => "Int8",
        "i16" => "Int16",
        "i32" => "Int32",
        "i64" => "Int64",
        "i128" => "Int128",
        "isize" => "Int64",
        "u8" => "Nat8",
        "u16" => "Nat16",
        "u32" => "Nat32",
        "u64" => "Nat64",
        "u128" => "Nat128",
        "usize" => "Nat64",
        _ => return None,
    };

    Some(format_ident!("{primitive}"))
}

fn vec_element(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };

    let segment = path.path.segments.last()?;
    if segment.ident != "Vec" {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    match args.args.first()? {
        GenericArgument::Type(element) => Some(element),
        _ => None,
    }
}
