//! Derive macro implementation for automatic Arbitrary trait derivation
//!
//! The generated impl collects the bundles of every field (across all enum
//! variants) into one tuple behind an `Arc`, shared by the generation and
//! reduction closures of the resulting bundle.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Error, Field, Fields, GenericParam, Ident, Index, LitStr, Result,
    parse_macro_input, parse_quote,
};

/// Main entry point for the Arbitrary derive macro
pub fn derive_arbitrary_impl(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_arbitrary_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// A struct body or one enum variant
struct Shape<'a> {
    path: TokenStream,
    fields: &'a Fields,
    /// Index of this shape's first field in the shared bundle tuple
    offset: usize,
}

/// Generate the Arbitrary implementation for the given input
fn generate_arbitrary_impl(input: &DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;

    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(Error::new_spanned(
            lifetime,
            "Arbitrary derive does not support lifetime parameters",
        ));
    }

    let mut generics = input.generics.clone();
    add_trait_bounds(&mut generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let field_sets: Vec<(TokenStream, &Fields)> = match &input.data {
        Data::Struct(data_struct) => vec![(quote! { #name }, &data_struct.fields)],
        Data::Enum(data_enum) => {
            if data_enum.variants.is_empty() {
                return Err(Error::new_spanned(
                    name,
                    "Cannot derive Arbitrary for empty enum",
                ));
            }
            data_enum
                .variants
                .iter()
                .map(|variant| {
                    let variant_name = &variant.ident;
                    (quote! { #name::#variant_name }, &variant.fields)
                })
                .collect()
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(
                input,
                "Arbitrary derive is not supported for unions",
            ));
        }
    };

    let mut bundles = Vec::new();
    let mut shapes = Vec::new();
    for (path, fields) in field_sets {
        shapes.push(Shape {
            path,
            fields,
            offset: bundles.len(),
        });
        for field in fields.iter() {
            bundles.push(field_bundle(field)?);
        }
    }

    let generate_body = match &input.data {
        Data::Enum(_) => generate_enum_body(&shapes),
        _ => construct(&shapes[0], |index, _| generate_field(index)),
    };
    let reduce_arms = shapes.iter().map(reduce_arm);

    Ok(quote! {
        impl #impl_generics ::quickprop::Arbitrary for #name #ty_generics #where_clause {
            fn bundle() -> ::quickprop::Bundle<Self> {
                let __fields = ::std::sync::Arc::new((#(#bundles,)*));
                let __generate_fields = ::std::sync::Arc::clone(&__fields);
                ::quickprop::Bundle::new(
                    move |__rng, __config| #generate_body,
                    move |__value: &Self| match __value {
                        #(#reduce_arms)*
                    },
                )
            }
        }
    })
}

/// Add necessary trait bounds to generic parameters
fn add_trait_bounds(generics: &mut syn::Generics) {
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(parse_quote!(::quickprop::Arbitrary));
            type_param.bounds.push(parse_quote!(::std::clone::Clone));
            type_param.bounds.push(parse_quote!('static));
        }
    }
}

/// Bundle expression for a field: its `Arbitrary` default or `#[arbitrary(with = "path")]`
fn field_bundle(field: &Field) -> Result<TokenStream> {
    let field_type = &field.ty;
    let mut with: Option<syn::Path> = None;

    for attr in &field.attrs {
        if !attr.path().is_ident("arbitrary") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("with") {
                let lit: LitStr = meta.value()?.parse()?;
                with = Some(lit.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported arbitrary attribute, expected `with = \"path\"`"))
            }
        })?;
    }

    Ok(match with {
        Some(path) => quote! { #path() },
        None => quote! { <#field_type as ::quickprop::Arbitrary>::bundle() },
    })
}

fn generate_field(index: usize) -> TokenStream {
    let index = Index::from(index);
    quote! { __generate_fields.#index.generate(__rng, __config) }
}

fn binding(local: usize) -> Ident {
    format_ident!("__field{}", local)
}

/// Build a value of `shape`, with `value(global_index, local_index)` for each field
fn construct<F>(shape: &Shape<'_>, value: F) -> TokenStream
where
    F: Fn(usize, usize) -> TokenStream,
{
    let path = &shape.path;
    let values = (0..shape.fields.len()).map(|local| value(shape.offset + local, local));

    match shape.fields {
        Fields::Named(fields_named) => {
            let names = fields_named.named.iter().map(|field| &field.ident);
            quote! { #path { #(#names: #values,)* } }
        }
        Fields::Unnamed(_) => quote! { #path(#(#values,)*) },
        Fields::Unit => quote! { #path },
    }
}

/// Pattern binding every field of `shape` to `__field{n}`
fn pattern(shape: &Shape<'_>) -> TokenStream {
    let path = &shape.path;
    let bindings = (0..shape.fields.len()).map(binding);

    match shape.fields {
        Fields::Named(fields_named) => {
            let names = fields_named.named.iter().map(|field| &field.ident);
            quote! { #path { #(#names: #bindings,)* } }
        }
        Fields::Unnamed(_) => quote! { #path(#(#bindings,)*) },
        Fields::Unit => quote! { #path },
    }
}

/// Draw a variant uniformly, then each of its fields
fn generate_enum_body(shapes: &[Shape<'_>]) -> TokenStream {
    let variant_count = shapes.len();
    let arms = shapes.iter().enumerate().map(|(index, shape)| {
        let value = construct(shape, |global, _| generate_field(global));
        quote! { #index => #value, }
    });

    quote! {
        match ::quickprop::rand::Rng::gen_range(&mut *__rng, 0..#variant_count) {
            #(#arms)*
            _ => unreachable!("variant index out of range"),
        }
    }
}

/// Match arm reducing the first reducible field of `shape`
fn reduce_arm(shape: &Shape<'_>) -> TokenStream {
    let pattern = pattern(shape);
    let attempts = (0..shape.fields.len()).map(|target| {
        let global = Index::from(shape.offset + target);
        let field = binding(target);
        let rebuilt = construct(shape, |_, local| {
            if local == target {
                quote! { __smaller }
            } else {
                let other = binding(local);
                quote! { ::std::clone::Clone::clone(#other) }
            }
        });
        quote! {
            if let ::std::option::Option::Some(__smaller) = __fields.#global.reduce(#field) {
                return ::std::option::Option::Some(#rebuilt);
            }
        }
    });

    quote! {
        #pattern => {
            #(#attempts)*
            ::std::option::Option::None
        }
    }
}
