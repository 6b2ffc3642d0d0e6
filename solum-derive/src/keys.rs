//! Implementation of the `#[derive(Keys)]` macro.
//!
//! Generates one `{field}_key()` constructor per named field. The key yields
//! the field value; for a field declared as `Option<U>` or `Nullable<U>` it
//! yields `U` and reports the absent case as absent.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Fields, GenericArgument, Generics, Ident, PathArguments, Type,
    parse_macro_input,
};

/// How a field's declared type maps onto the picked type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape<'a> {
    /// The field is always present.
    Plain(&'a Type),
    /// `Option<U>`: `None` picks as absent.
    Optional(&'a Type),
    /// `Nullable<U>`: `Nil` picks as absent.
    Nullable(&'a Type),
}

/// Main implementation of the Keys derive macro.
pub fn derive_keys_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_struct_keys(name, generics, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Keys can only be derived for structs, not enums. Use #[derive(Guards)] for enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Keys cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates key constructors for a struct's fields.
fn generate_struct_keys(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let key_methods: Vec<TokenStream2> = named_fields
                .named
                .iter()
                .filter_map(|field| {
                    let field_name = field.ident.as_ref()?;
                    Some(generate_field_key(field_name, &field.ty))
                })
                .collect();

            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#key_methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "Keys can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "Keys cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}

/// Generates the key constructor for one field.
fn generate_field_key(field_name: &Ident, field_type: &Type) -> TokenStream2 {
    let method_name = format_ident!("{}_key", field_name);
    let documentation = format!("Returns a key picking the `{field_name}` field.");

    let (target_type, getter) = match classify_field(field_type) {
        FieldShape::Plain(target) => (
            target,
            quote! { |source: Self| ::core::option::Option::Some(source.#field_name) },
        ),
        FieldShape::Optional(target) => (target, quote! { |source: Self| source.#field_name }),
        FieldShape::Nullable(target) => (
            target,
            quote! { |source: Self| source.#field_name.into_value() },
        ),
    };

    quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::solum::nullable::Pick<Self, #target_type> + Copy {
            ::solum::nullable::Key::new(#getter)
        }
    }
}

/// Classifies a field type by its last path segment.
///
/// Only the spelling is inspected; a type alias of `Option` is treated as a
/// plain field.
pub fn classify_field(field_type: &Type) -> FieldShape<'_> {
    let Type::Path(type_path) = field_type else {
        return FieldShape::Plain(field_type);
    };
    if type_path.qself.is_some() {
        return FieldShape::Plain(field_type);
    }
    let Some(segment) = type_path.path.segments.last() else {
        return FieldShape::Plain(field_type);
    };
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return FieldShape::Plain(field_type);
    };
    if arguments.args.len() != 1 {
        return FieldShape::Plain(field_type);
    }
    let Some(GenericArgument::Type(inner)) = arguments.args.first() else {
        return FieldShape::Plain(field_type);
    };

    if segment.ident == "Option" {
        FieldShape::Optional(inner)
    } else if segment.ident == "Nullable" {
        FieldShape::Nullable(inner)
    } else {
        FieldShape::Plain(field_type)
    }
}
