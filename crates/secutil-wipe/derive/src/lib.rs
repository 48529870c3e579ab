// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Procedural macros for the `secutil-wipe` crate.
//!
//! Provides the `#[derive(Wipe)]` macro for automatic trait implementations.
//!
//! ## License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

use proc_macro::TokenStream;
use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DataEnum, DeriveInput, Field, Fields, Ident, Index, LitStr, Path, Type,
    parse_macro_input,
};

/// Derives `WipeMetadata`, `Wipeable`, `WipeProbe`, and optionally
/// `AssertWipeOnDrop` for a struct or an enum.
///
/// # Shapes
///
/// - Structs (named, tuple or unit) are aggregates: a deep wipe visits every
///   field in declaration order. A struct whose fields are all flat is itself
///   flat, so a shallow wipe through a reference zeroes all of it.
/// - Enums are tagged unions: a deep wipe visits only the fields of the
///   active variant. The discriminant is kept.
///
/// Shallow wipes of the value itself are refused, as for every compound
/// shape.
///
/// # Requirements
///
/// - Every field must implement `Wipe` (except fields with `#[wipe(skip)]`)
/// - Fields of type `&T` must be marked `#[wipe(skip)]`
///
/// # Optional Sentinel Field
///
/// - Named structs can include a field named `__sentinel: WipeSentinel`
/// - Tuple structs can include a field of type `WipeSentinel`
/// - If present, `AssertWipeOnDrop` is implemented for testing drop behavior
///
/// # Attributes
///
/// - `#[wipe(drop)]` on the type: also generates a `Drop` implementation that
///   deep-wipes the value
/// - `#[wipe(skip)]` on a field: leave the field alone
///
/// # Examples
///
/// ```rust
/// use secutil_wipe_core::{WipeProbe, WipeSentinel, wipe_deep};
/// use secutil_wipe_derive::Wipe;
///
/// #[derive(Wipe)]
/// #[wipe(drop)]
/// struct ApiKey {
///     key: Vec<u8>,
///     __sentinel: WipeSentinel,
/// }
///
/// let mut key = ApiKey {
///     key: vec![0x42; 32],
///     __sentinel: WipeSentinel::default(),
/// };
/// wipe_deep(&mut key).unwrap();
/// assert!(key.is_wiped());
/// ```
#[proc_macro_derive(Wipe, attributes(wipe))]
pub fn derive_wipe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input).unwrap_or_else(|e| e).into()
}

/// Finds the root crate path from a list of candidates.
///
/// A candidate is a Cargo package name, optionally followed by `::` and a
/// module path inside that package (`secutil::wipe`).
pub(crate) fn find_root_with_candidates(candidates: &[&'static str]) -> TokenStream2 {
    for &candidate in candidates {
        let (package, module) = match candidate.split_once("::") {
            Some((package, module)) => (package, Some(module)),
            None => (candidate, None),
        };

        let base = match crate_name(package) {
            Ok(FoundCrate::Itself) => quote!(crate),
            Ok(FoundCrate::Name(name)) => {
                let id = Ident::new(&name, Span::call_site());
                quote!(#id)
            }
            Err(_) => continue,
        };

        return match module.map(syn::parse_str::<Path>) {
            Some(Ok(path)) => quote!(#base::#path),
            Some(Err(_)) | None => base,
        };
    }

    let msg = "Wipe: could not find secutil-wipe or secutil-wipe-core. Add secutil-wipe to Cargo.toml.";
    let lit = LitStr::new(msg, Span::call_site());
    quote! { compile_error!(#lit); }
}

/// Detects if a type is `WipeSentinel` by checking the type path.
///
/// Used for tuple struct support where we identify the sentinel field by type.
pub(crate) fn is_wipe_sentinel_type(ty: &Type) -> bool {
    matches!(
        ty,
        Type::Path(type_path)
        if type_path.path.segments.last()
            .map(|seg| seg.ident == "WipeSentinel")
            .unwrap_or(false)
    )
}

/// Detects if a type is an immutable reference (&T).
///
/// Immutable references cannot be wiped since we don't have mutable access.
pub(crate) fn is_immut_reference_type(ty: &Type) -> bool {
    if let Type::Reference(r) = ty {
        r.mutability.is_none()
    } else {
        false
    }
}

/// Flags collected from `#[wipe(...)]` attributes.
#[derive(Default)]
struct WipeFlags {
    skip: bool,
    drop: bool,
}

fn parse_wipe_flags(attrs: &[Attribute]) -> syn::Result<WipeFlags> {
    let mut flags = WipeFlags::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("wipe")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                flags.skip = true;
                Ok(())
            } else if meta.path.is_ident("drop") {
                flags.drop = true;
                Ok(())
            } else {
                Err(meta.error("unsupported wipe attribute, expected `skip` or `drop`"))
            }
        })?;
    }

    Ok(flags)
}

fn type_flags(input: &DeriveInput) -> syn::Result<WipeFlags> {
    let flags = parse_wipe_flags(&input.attrs)?;
    if flags.skip {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`#[wipe(skip)]` applies to fields, not to the whole type",
        ));
    }

    Ok(flags)
}

fn is_skipped(field: &Field) -> syn::Result<bool> {
    let flags = parse_wipe_flags(&field.attrs)?;
    if flags.drop {
        return Err(syn::Error::new_spanned(
            field,
            "`#[wipe(drop)]` applies to the whole type, not to a field",
        ));
    }

    Ok(flags.skip)
}

fn describe_field(index: usize, field: &Field) -> String {
    match &field.ident {
        Some(ident) => format!("field `{}`", ident),
        None => format!("field at index {}", index),
    }
}

/// Rejects `&T` fields that are not skipped.
fn check_field(index: usize, field: &Field, skipped: bool) -> syn::Result<()> {
    if is_immut_reference_type(&field.ty) && !skipped {
        return Err(syn::Error::new_spanned(
            &field.ty,
            format!(
                "{} has type `&T` (immutable reference) which cannot be wiped. \
                 Add `#[wipe(skip)]` to exclude it from wiping.",
                describe_field(index, field)
            ),
        ));
    }

    Ok(())
}

/// Sentinel field information.
struct SentinelState {
    index: usize,
    access: TokenStream2,
}

/// Expands the DeriveInput into the trait implementations.
fn expand(input: DeriveInput) -> Result<TokenStream2, TokenStream2> {
    // 1) Resolve the crate that exports the traits (prefer secutil-wipe-core)
    let root = find_root_with_candidates(&["secutil-wipe-core", "secutil-wipe", "secutil::wipe"]);

    let flags = type_flags(&input).map_err(|e| e.to_compile_error())?;

    let body = match &input.data {
        Data::Struct(data) => expand_struct(&input, &data.fields, &root),
        Data::Enum(data) => expand_enum(&input, data, &root),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Wipe can only be derived for structs and enums. \
             Untagged unions do not say which field is active.",
        )),
    }
    .map_err(|e| e.to_compile_error())?;

    // 2) Optionally wipe on drop
    let drop_impl = if flags.drop {
        let name = &input.ident;
        let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
        quote! {
            impl #impl_generics Drop for #name #ty_generics #where_clause {
                fn drop(&mut self) {
                    #root::wipe_deep_unchecked(self);
                }
            }
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        #body
        #drop_impl
    })
}

fn expand_struct(
    input: &DeriveInput,
    fields: &Fields,
    root: &TokenStream2,
) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let all_fields: Vec<(usize, &Field)> = fields.iter().enumerate().collect();

    // 1) Identify the __sentinel field (optional)
    let sentinel_ident = format_ident!("__sentinel");
    let mut maybe_sentinel_state: Option<SentinelState> = None;

    for (i, f) in &all_fields {
        let is_sentinel = match &f.ident {
            Some(ident) => *ident == sentinel_ident,
            None => is_wipe_sentinel_type(&f.ty),
        };

        if is_sentinel {
            let access = match &f.ident {
                Some(ident) => quote! { self.#ident },
                None => {
                    let idx = Index::from(*i);
                    quote! { self.#idx }
                }
            };
            maybe_sentinel_state = Some(SentinelState { index: *i, access });
            break;
        }
    }

    let sentinel_idx = maybe_sentinel_state.as_ref().map(|s| s.index);

    // 2) Validate fields and split off the skipped ones
    let mut wiped: Vec<(usize, &Field)> = Vec::with_capacity(all_fields.len());
    let mut any_skipped = false;

    for (i, f) in &all_fields {
        let skipped = is_skipped(f)?;
        check_field(*i, f, skipped)?;

        if skipped {
            any_skipped = true;
        } else {
            wiped.push((*i, *f));
        }
    }

    // 3) Field accessors:
    //    - wiped fields (sentinel included): WipeMetadata, Wipeable
    //    - probed fields (sentinel excluded): WipeProbe
    let member = |i: usize, f: &Field| match &f.ident {
        Some(ident) => quote! { #ident },
        None => {
            let idx = Index::from(i);
            quote! { #idx }
        }
    };

    let wiped_members: Vec<TokenStream2> = wiped.iter().map(|(i, f)| member(*i, *f)).collect();
    let probed_members: Vec<TokenStream2> = wiped
        .iter()
        .filter(|(i, _)| Some(*i) != sentinel_idx)
        .map(|(i, f)| member(*i, *f))
        .collect();

    let wiped_len = wiped_members.len();
    let probed_len = probed_members.len();

    // 4) Flat only when every field is flat. Skipped fields, and generic
    //    parameters the bound can't be checked for, keep it off.
    let has_type_params = input.generics.type_params().next().is_some();
    let field_types: Vec<&Type> = wiped.iter().map(|(_, f)| &f.ty).collect();
    let flat = if any_skipped || has_type_params {
        quote! { false }
    } else {
        quote! { true #( && <#field_types as #root::WipeMetadata>::CAN_BE_BULK_WIPED )* }
    };

    let output = quote! {
        unsafe impl #impl_generics #root::WipeMetadata for #struct_name #ty_generics #where_clause {
            const CAN_BE_BULK_WIPED: bool = #flat;
        }

        impl #impl_generics #root::Wipeable for #struct_name #ty_generics #where_clause {
            fn shape(&self) -> #root::Shape {
                #root::Shape::Aggregate
            }

            fn check_wipe(&self) -> ::core::result::Result<(), #root::WipeError> {
                let fields: [&dyn #root::Wipeable; #wiped_len] = [
                    #( #root::collections::to_wipeable_dyn_ref(&self.#wiped_members) ),*
                ];
                #root::collections::check_collection(&mut fields.into_iter())
            }

            fn wipe_referent(&mut self) -> ::core::result::Result<(), #root::WipeError> {
                #root::wipe_flat_referent(self)
            }

            fn wipe_nested(&mut self) {
                if <Self as #root::WipeMetadata>::CAN_BE_BULK_WIPED {
                    return;
                }

                let fields: [&mut dyn #root::Wipeable; #wiped_len] = [
                    #( #root::collections::to_wipeable_dyn_mut(&mut self.#wiped_members) ),*
                ];
                #root::collections::wipe_collection(&mut fields.into_iter());
            }

            fn wipe_storage(&mut self) {
                #root::wipe_flat(self);
            }
        }

        impl #impl_generics #root::WipeProbe for #struct_name #ty_generics #where_clause {
            fn is_wiped(&self) -> bool {
                let fields: [&dyn #root::WipeProbe; #probed_len] = [
                    #( #root::collections::to_wipe_probe_dyn_ref(&self.#probed_members) ),*
                ];
                #root::collections::collection_wiped(&mut fields.into_iter())
            }
        }
    };

    // 5) Conditionally implement AssertWipeOnDrop if sentinel is present
    let assert_impl = match maybe_sentinel_state {
        Some(sentinel_state) => {
            let sentinel_access = sentinel_state.access;
            quote! {
                impl #impl_generics #root::AssertWipeOnDrop for #struct_name #ty_generics #where_clause {
                    fn clone_sentinel(&self) -> #root::WipeSentinel {
                        #sentinel_access.clone()
                    }

                    fn assert_wipe_on_drop(self) {
                        #root::assert::assert_wipe_on_drop(self);
                    }
                }
            }
        }
        None => quote! {},
    };

    Ok(quote! {
        #output
        #assert_impl
    })
}

/// One match arm per variant, binding the non-skipped fields as
/// `__wipe_field_N`.
struct VariantArm {
    pattern: TokenStream2,
    bindings: Vec<Ident>,
}

fn variant_arms(data: &DataEnum) -> syn::Result<Vec<VariantArm>> {
    let mut arms = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        let variant_name = &variant.ident;
        let mut bindings = Vec::new();
        let mut parts = Vec::new();

        for (i, f) in variant.fields.iter().enumerate() {
            let skipped = is_skipped(f)?;
            check_field(i, f, skipped)?;

            let binding = format_ident!("__wipe_field_{}", i);
            let part = match (&f.ident, skipped) {
                (Some(ident), true) => quote! { #ident: _ },
                (Some(ident), false) => quote! { #ident: #binding },
                (None, true) => quote! { _ },
                (None, false) => quote! { #binding },
            };

            parts.push(part);
            if !skipped {
                bindings.push(binding);
            }
        }

        let pattern = match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { #( #parts ),* } },
            Fields::Unnamed(_) => quote! { Self::#variant_name ( #( #parts ),* ) },
            Fields::Unit => quote! { Self::#variant_name },
        };

        arms.push(VariantArm { pattern, bindings });
    }

    Ok(arms)
}

fn expand_enum(
    input: &DeriveInput,
    data: &DataEnum,
    root: &TokenStream2,
) -> syn::Result<TokenStream2> {
    let enum_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let arms = variant_arms(data)?;

    let check_arms = arms.iter().map(|arm| {
        let pattern = &arm.pattern;
        let bindings = &arm.bindings;
        let len = bindings.len();
        quote! {
            #pattern => {
                let fields: [&dyn #root::Wipeable; #len] = [
                    #( #root::collections::to_wipeable_dyn_ref(#bindings) ),*
                ];
                #root::collections::check_collection(&mut fields.into_iter())
            }
        }
    });

    let nested_arms = arms.iter().map(|arm| {
        let pattern = &arm.pattern;
        let bindings = &arm.bindings;
        let len = bindings.len();
        quote! {
            #pattern => {
                let fields: [&mut dyn #root::Wipeable; #len] = [
                    #( #root::collections::to_wipeable_dyn_mut(#bindings) ),*
                ];
                #root::collections::wipe_collection(&mut fields.into_iter());
            }
        }
    });

    let probe_arms = arms.iter().map(|arm| {
        let pattern = &arm.pattern;
        let bindings = &arm.bindings;
        let len = bindings.len();
        quote! {
            #pattern => {
                let fields: [&dyn #root::WipeProbe; #len] = [
                    #( #root::collections::to_wipe_probe_dyn_ref(#bindings) ),*
                ];
                #root::collections::collection_wiped(&mut fields.into_iter())
            }
        }
    });

    // An enum without variants has no value to wipe.
    let (check_body, nested_body, probe_body) = if data.variants.is_empty() {
        (
            quote! { match *self {} },
            quote! { match *self {} },
            quote! { match *self {} },
        )
    } else {
        (
            quote! { match self { #( #check_arms )* } },
            quote! { match self { #( #nested_arms )* } },
            quote! { match self { #( #probe_arms )* } },
        )
    };

    Ok(quote! {
        // The discriminant must survive, so an enum is never memset.
        unsafe impl #impl_generics #root::WipeMetadata for #enum_name #ty_generics #where_clause {
            const CAN_BE_BULK_WIPED: bool = false;
        }

        impl #impl_generics #root::Wipeable for #enum_name #ty_generics #where_clause {
            fn shape(&self) -> #root::Shape {
                #root::Shape::Union
            }

            fn check_wipe(&self) -> ::core::result::Result<(), #root::WipeError> {
                #check_body
            }

            fn wipe_nested(&mut self) {
                #nested_body
            }
        }

        impl #impl_generics #root::WipeProbe for #enum_name #ty_generics #where_clause {
            fn is_wiped(&self) -> bool {
                #probe_body
            }
        }
    })
}
