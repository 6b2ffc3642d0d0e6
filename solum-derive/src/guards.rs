//! Implementation of the `#[derive(Guards)]` macro.
//!
//! Generates one `{variant}_guard()` constructor per single-field tuple
//! variant of an enum. Unit, struct and multi-field variants get no guard.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Variant, parse_macro_input};

/// Main implementation of the Guards derive macro.
pub fn derive_guards_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            generate_enum_guards(name, generics, data_enum.variants.iter())
        }
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Guards can only be derived for enums, not structs. Use #[derive(Keys)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Guards cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates guard constructors for an enum's variants.
fn generate_enum_guards<'a>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'a Variant>,
) -> TokenStream2 {
    let guard_methods: Vec<TokenStream2> = variants.filter_map(generate_variant_guard).collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#guard_methods)*
        }
    }
}

/// Generates the guard for one variant, if it carries exactly one unnamed field.
fn generate_variant_guard(variant: &Variant) -> Option<TokenStream2> {
    let Fields::Unnamed(fields) = &variant.fields else {
        return None;
    };
    if fields.unnamed.len() != 1 {
        return None;
    }
    let payload_type = &fields.unnamed.first()?.ty;

    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_guard", to_snake_case(&variant_name.to_string()));
    let documentation = format!("Returns a type guard accepting the `{variant_name}` variant.");

    Some(quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::solum::function::TypeGuard<Self, #payload_type> + Copy {
            |source: Self| match source {
                Self::#variant_name(value) => ::core::option::Option::Some(value),
                #[allow(unreachable_patterns)]
                _ => ::core::option::Option::None,
            }
        }
    })
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let characters: Vec<char> = input.chars().collect();

    for (index, &character) in characters.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous = characters[index - 1];
                let next_is_lowercase = characters
                    .get(index + 1)
                    .is_some_and(|next| next.is_lowercase());
                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous.is_lowercase() || (previous.is_uppercase() && next_is_lowercase) {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}
