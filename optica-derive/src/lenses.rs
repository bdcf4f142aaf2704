//! Implementation of the `#[derive(Lenses)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, Generics, Ident, parse_macro_input};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand_lenses(&input))
}

fn expand_lenses(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;

    match &input.data {
        Data::Struct(data_struct) => {
            generate_struct_lenses(name, &input.generics, &data_struct.fields)
        }
        Data::Enum(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs, not enums. Use #[derive(Prisms)] for enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Lenses cannot be derived for unions.").to_compile_error()
        }
    }
}

/// Generates lens constructors for a struct's fields.
fn generate_struct_lenses(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let lens_methods = named_fields.named.iter().map(generate_field_lens);
            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#lens_methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "Lenses cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}

fn generate_field_lens(field: &Field) -> TokenStream2 {
    let Some(field_name) = field.ident.as_ref() else {
        return syn::Error::new_spanned(field, "expected a named field").to_compile_error();
    };
    let field_type = &field.ty;
    let method_name = format_ident!("{}_lens", field_name);
    let documentation = format!("Returns a lens focusing on the `{field_name}` field.");

    quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        pub fn #method_name() -> ::optica::optics::FunctionLens<
            Self,
            #field_type,
            fn(&Self) -> #field_type,
            fn(Self, #field_type) -> Self,
        >
        where
            #field_type: ::core::clone::Clone,
        {
            let view: fn(&Self) -> #field_type =
                |source| ::core::clone::Clone::clone(&source.#field_name);
            let update: fn(Self, #field_type) -> Self = |mut source, value| {
                source.#field_name = value;
                source
            };
            ::optica::optics::FunctionLens::new(view, update)
        }
    }
}
