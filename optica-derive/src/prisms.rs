//! Implementation of the `#[derive(Prisms)]` macro.
//!
//! Every generated prism extracts an owned, cloned payload. Unit variants
//! focus on `()`, single-field tuple variants on the field itself, and
//! variants with several fields on a tuple of the fields in declaration
//! order.
//!
//! Each prism function carries a `Clone` where-clause on its payload field
//! types. A bound on a concrete type is checked at the derive site, so every
//! payload of the enum has to be `Clone`, whether or not its prism is used.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant, parse_macro_input};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand_prisms(&input))
}

fn expand_prisms(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;

    match &input.data {
        Data::Enum(data_enum) => {
            generate_enum_prisms(name, &input.generics, data_enum.variants.iter())
        }
        Data::Struct(_) => syn::Error::new_spanned(
            name,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Prisms cannot be derived for unions.").to_compile_error()
        }
    }
}

/// Generates prism constructors for an enum's variants.
fn generate_enum_prisms<'a>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'a Variant>,
) -> TokenStream2 {
    let prism_methods = variants.map(generate_variant_prism);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

/// The pieces of a variant needed to generate its prism.
struct VariantShape {
    payload_type: TokenStream2,
    field_types: Vec<Type>,
    pattern: TokenStream2,
    extracted: TokenStream2,
    constructed: TokenStream2,
    binding: TokenStream2,
}

fn variant_shape(variant: &Variant) -> VariantShape {
    let variant_name = &variant.ident;

    match &variant.fields {
        Fields::Unit => VariantShape {
            payload_type: quote! { () },
            field_types: Vec::new(),
            pattern: quote! { Self::#variant_name },
            extracted: quote! { () },
            constructed: quote! { Self::#variant_name },
            binding: quote! { () },
        },
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = fields.unnamed[0].ty.clone();
            VariantShape {
                payload_type: quote! { #field_type },
                field_types: vec![field_type],
                pattern: quote! { Self::#variant_name(value) },
                extracted: quote! { ::core::clone::Clone::clone(value) },
                constructed: quote! { Self::#variant_name(value) },
                binding: quote! { value },
            }
        }
        Fields::Unnamed(fields) => {
            let field_types: Vec<Type> = fields.unnamed.iter().map(|field| field.ty.clone()).collect();
            let bindings: Vec<Ident> = (0..field_types.len())
                .map(|index| format_ident!("field_{}", index))
                .collect();

            VariantShape {
                payload_type: quote! { (#(#field_types,)*) },
                pattern: quote! { Self::#variant_name(#(#bindings),*) },
                extracted: quote! { (#(::core::clone::Clone::clone(#bindings),)*) },
                constructed: quote! { Self::#variant_name(#(#bindings),*) },
                binding: quote! { (#(#bindings,)*) },
                field_types,
            }
        }
        Fields::Named(fields) => {
            let field_names: Vec<&Ident> =
                fields.named.iter().filter_map(|field| field.ident.as_ref()).collect();
            let field_types: Vec<Type> = fields.named.iter().map(|field| field.ty.clone()).collect();

            if field_types.len() == 1 {
                let field_name = field_names[0];
                let field_type = &field_types[0];
                return VariantShape {
                    payload_type: quote! { #field_type },
                    pattern: quote! { Self::#variant_name { #field_name } },
                    extracted: quote! { ::core::clone::Clone::clone(#field_name) },
                    constructed: quote! { Self::#variant_name { #field_name } },
                    binding: quote! { #field_name },
                    field_types,
                };
            }

            VariantShape {
                payload_type: quote! { (#(#field_types,)*) },
                pattern: quote! { Self::#variant_name { #(#field_names),* } },
                extracted: quote! { (#(::core::clone::Clone::clone(#field_names),)*) },
                constructed: quote! { Self::#variant_name { #(#field_names),* } },
                binding: quote! { (#(#field_names,)*) },
                field_types,
            }
        }
    }
}

/// Generates a prism constructor for a single enum variant.
fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));
    let documentation = format!("Returns a prism focusing on the `{variant_name}` variant.");

    let VariantShape {
        payload_type,
        field_types,
        pattern,
        extracted,
        constructed,
        binding,
    } = variant_shape(variant);

    quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        pub fn #method_name() -> ::optica::optics::FunctionPrism<
            Self,
            #payload_type,
            fn(&Self) -> ::core::option::Option<#payload_type>,
            fn(#payload_type) -> Self,
        >
        where
            #(#field_types: ::core::clone::Clone,)*
        {
            let extract: fn(&Self) -> ::core::option::Option<#payload_type> = |source| match source {
                #pattern => ::core::option::Option::Some(#extracted),
                #[allow(unreachable_patterns)]
                _ => ::core::option::Option::None,
            };
            let build: fn(#payload_type) -> Self = |#binding| #constructed;
            ::optica::optics::FunctionPrism::new(extract, build)
        }
    }
}

/// Converts a `PascalCase` identifier to `snake_case`.
///
/// Runs of capitals are treated as one word: `HTTPRequest` becomes
/// `http_request`.
fn to_snake_case(input: &str) -> String {
    let characters: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);

    for (index, &character) in characters.iter().enumerate() {
        if !character.is_uppercase() {
            result.push(character);
            continue;
        }

        if let Some(&previous) = index.checked_sub(1).and_then(|before| characters.get(before)) {
            let next_is_lowercase = characters
                .get(index + 1)
                .is_some_and(|next| next.is_lowercase());
            let starts_word = previous.is_lowercase()
                || previous.is_ascii_digit()
                || (previous.is_uppercase() && next_is_lowercase);
            if starts_word {
                result.push('_');
            }
        }
        result.extend(character.to_lowercase());
    }

    result
}
