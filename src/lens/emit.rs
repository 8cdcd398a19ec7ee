//! Turns descriptors into lens, optional and prism accessors.
//!
//! Accessors are stored with function-pointer types so the generated
//! structs can be named. The closures that fill them never capture, which
//! is what lets them coerce to those pointers.

use std::collections::HashSet;

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Generics, Ident, Visibility, parse_quote};
use tracing::debug;

use super::descriptor::{
    EnumDescriptor, FieldDescriptor, Optionality, StructDescriptor, TypeDescriptor,
};
use crate::error::GenerateError;

/// The parsed output templates, built once per run and shared by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LensTemplates {
    runtime: syn::Path,
}

impl LensTemplates {
    /// Default crate providing `optics::{FunctionLens, FunctionPrism, LensPrismComposition}`.
    pub const DEFAULT_RUNTIME: &'static str = "lambars";

    /// Parses `runtime`, the path of the crate the generated code imports
    /// its optics from.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidRuntimePath`] when `runtime` is not a
    /// Rust path.
    pub fn new(runtime: &str) -> Result<Self, GenerateError> {
        syn::parse_str::<syn::Path>(runtime)
            .map(|runtime| Self { runtime })
            .map_err(|_| GenerateError::InvalidRuntimePath {
                path: runtime.to_string(),
            })
    }

    /// The runtime crate path.
    pub const fn runtime(&self) -> &syn::Path {
        &self.runtime
    }

    /// Renders the accessors for every descriptor as a formatted module
    /// body (inner attributes and imports included, banner excluded).
    ///
    /// # Errors
    ///
    /// Fails when the generated tokens do not parse as a Rust file, which
    /// means a descriptor carried something the emitter cannot express.
    pub fn render(&self, descriptors: &[TypeDescriptor]) -> syn::Result<String> {
        let preamble = self.preamble();
        let items = descriptors.iter().map(|descriptor| match descriptor {
            TypeDescriptor::Struct(descriptor) => struct_accessors(descriptor),
            TypeDescriptor::Enum(descriptor) => enum_prisms(descriptor),
        });
        let file: syn::File = syn::parse2(quote! {
            #preamble
            #(#items)*
        })?;
        Ok(prettyplease::unparse(&file))
    }

    fn preamble(&self) -> TokenStream {
        let runtime = &self.runtime;
        quote! {
            #![allow(dead_code, unreachable_patterns, unused_imports, clippy::type_complexity)]

            use super::*;
            use std::rc::Rc;
            use #runtime::optics::{FunctionLens, FunctionPrism, LensPrismComposition};

            type FieldLens<S, A> = FunctionLens<S, A, fn(&S) -> &A, fn(S, A) -> S>;

            type FieldPrism<S, A> =
                FunctionPrism<S, A, fn(&S) -> Option<&A>, fn(A) -> S, fn(S) -> Option<A>>;

            type FieldOptional<S, A, B> = LensPrismComposition<FieldLens<S, A>, FieldPrism<A, B>, A>;

            fn field_lens<S, A>(get: fn(&S) -> &A, set: fn(S, A) -> S) -> FieldLens<S, A> {
                FunctionLens::new(get, set)
            }

            fn field_prism<S, A>(
                preview: fn(&S) -> Option<&A>,
                review: fn(A) -> S,
                preview_owned: fn(S) -> Option<A>,
            ) -> FieldPrism<S, A> {
                FunctionPrism::new(preview, review, preview_owned)
            }

            /// Focuses on the value inside `Some`.
            fn some_prism<A>() -> FieldPrism<Option<A>, A> {
                field_prism(Option::as_ref, Some, |source| source)
            }

            /// Treats the default value as absent.
            fn zero_prism<A: Default + PartialEq>() -> FieldPrism<A, A> {
                field_prism(
                    |source| if *source == A::default() { None } else { Some(source) },
                    |value| value,
                    |source| if source == A::default() { None } else { Some(source) },
                )
            }
        }
    }
}

impl Default for LensTemplates {
    fn default() -> Self {
        Self {
            runtime: syn::Path::from(Ident::new(Self::DEFAULT_RUNTIME, Span::call_site())),
        }
    }
}

/// Private source items become visible to the parent module only; restricted
/// ones crate-wide.
fn generated_visibility(visibility: &Visibility) -> TokenStream {
    match visibility {
        Visibility::Public(_) => quote!(pub),
        Visibility::Restricted(_) => quote!(pub(crate)),
        Visibility::Inherited => quote!(pub(super)),
    }
}

fn field_visibility(field: &FieldDescriptor, item_visibility: &TokenStream) -> TokenStream {
    if field.public {
        item_visibility.clone()
    } else {
        quote!(pub(super))
    }
}

/// `make_person`, from `Person`.
fn snake_name(name: &Ident) -> String {
    to_snake_case(&name.unraw().to_string())
}

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

/// An identifier for `name`, raw when `name` is a keyword.
fn field_ident(name: &str) -> Ident {
    match name {
        "self" | "super" | "crate" | "Self" => format_ident!("{name}_"),
        _ => syn::parse_str::<Ident>(name)
            .unwrap_or_else(|_| Ident::new_raw(name, Span::call_site())),
    }
}

fn doc(text: &str) -> TokenStream {
    let text = format!(" {text}");
    quote!(#[doc = #text])
}

/// Constructor generics: the item's own, plus `Item<..>: Clone` when the
/// item is generic and `clone_bound` is set.
fn constructor_generics(name: &Ident, generics: &Generics, clone_bound: bool) -> Generics {
    let mut generics = generics.clone();
    if clone_bound && !generics.params.is_empty() {
        let (_, type_generics, _) = generics.split_for_impl();
        let predicate: syn::WherePredicate = parse_quote!(#name #type_generics: Clone);
        generics.make_where_clause().predicates.push(predicate);
    }
    generics
}

/// Getter and setter closures for `field` on `source`.
fn accessor_closures(
    field: &FieldDescriptor,
    source: &TokenStream,
    shared: bool,
) -> (TokenStream, TokenStream) {
    let path = &field.path;
    let ty = &field.ty;
    let getter = quote!(|source: &#source| &source.#(#path).*);
    let setter = if shared {
        quote! {
            |mut source: #source, value: #ty| {
                Rc::make_mut(&mut source).#(#path).* = value;
                source
            }
        }
    } else {
        quote! {
            |mut source: #source, value: #ty| {
                source.#(#path).* = value;
                source
            }
        }
    };
    (getter, setter)
}

/// Declarations and initialisers of one lens struct over `source`.
fn lens_members(
    fields: &[FieldDescriptor],
    source: &TokenStream,
    item_visibility: &TokenStream,
    shared: bool,
) -> (Vec<TokenStream>, Vec<TokenStream>) {
    let mut declarations = Vec::new();
    let mut initialisers = Vec::new();
    // A real field named `foo_o` keeps its lens over the optional of `foo`.
    let field_names: HashSet<String> = fields
        .iter()
        .map(|field| field.name.unraw().to_string())
        .collect();
    let mut emitted = HashSet::new();

    for field in fields {
        let name = &field.name;
        if !emitted.insert(name.unraw().to_string()) {
            debug!(field = %name, "duplicate accessor name, skipping");
            continue;
        }
        let ty = &field.ty;
        let visibility = field_visibility(field, item_visibility);
        let (getter, setter) = accessor_closures(field, source, shared);

        declarations.push(quote!(#visibility #name: FieldLens<#source, #ty>));
        initialisers.push(quote!(#name: field_lens(#getter, #setter)));

        if !field.has_optional() {
            continue;
        }
        let optional = format_ident!("{}_o", name.unraw());
        let optional_name = optional.to_string();
        if field_names.contains(&optional_name) || !emitted.insert(optional_name) {
            debug!(field = %name, optional = %optional, "optional collides with a field, skipping");
            continue;
        }
        let (focus, prism) = match &field.optionality {
            Optionality::Option { inner } => (quote!(#inner), quote!(some_prism())),
            Optionality::OmitEmpty | Optionality::Required => (quote!(#ty), quote!(zero_prism())),
        };
        declarations.push(quote!(#visibility #optional: FieldOptional<#source, #ty, #focus>));
        initialisers.push(quote! {
            #optional: LensPrismComposition::new(field_lens(#getter, #setter), #prism)
        });
    }

    (declarations, initialisers)
}

fn struct_accessors(descriptor: &StructDescriptor) -> TokenStream {
    let name = &descriptor.name;
    let snake = snake_name(name);
    let visibility = generated_visibility(&descriptor.visibility);
    let generics = &descriptor.generics;
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let lenses = format_ident!("{}Lenses", name.unraw());
    let make_lenses = format_ident!("make_{}_lenses", snake);
    let source = quote!(#name #type_generics);
    let (declarations, initialisers) =
        lens_members(&descriptor.fields, &source, &visibility, false);
    let lenses_doc = doc(&format!("Lenses over the fields of [`{name}`]."));
    let make_doc = doc(&format!("Creates the lenses of [`{name}`]."));

    let owned = quote! {
        #lenses_doc
        #[derive(Clone)]
        #visibility struct #lenses #generics #where_clause {
            #(#declarations,)*
        }

        #make_doc
        #visibility fn #make_lenses #impl_generics() -> #lenses #type_generics #where_clause {
            #lenses {
                #(#initialisers,)*
            }
        }
    };

    if !descriptor.cloneable {
        debug!(name = %name, "struct is not Clone, skipping shared lenses");
        return owned;
    }

    let ref_lenses = format_ident!("{}RefLenses", name.unraw());
    let make_ref_lenses = format_ident!("make_{}_ref_lenses", snake);
    let shared_source = quote!(Rc<#name #type_generics>);
    let (declarations, initialisers) =
        lens_members(&descriptor.fields, &shared_source, &visibility, true);
    let constructor = constructor_generics(name, generics, true);
    let (_, _, constructor_where) = constructor.split_for_impl();
    let ref_doc = doc(&format!(
        "Lenses over the fields of a shared [`{name}`]; setters copy on write."
    ));
    let make_ref_doc = doc(&format!("Creates the shared lenses of [`{name}`]."));

    quote! {
        #owned

        #ref_doc
        #[derive(Clone)]
        #visibility struct #ref_lenses #generics #where_clause {
            #(#declarations,)*
        }

        #make_ref_doc
        #visibility fn #make_ref_lenses #impl_generics() -> #ref_lenses #type_generics #constructor_where {
            #ref_lenses {
                #(#initialisers,)*
            }
        }
    }
}

fn enum_prisms(descriptor: &EnumDescriptor) -> TokenStream {
    let name = &descriptor.name;
    let generics = &descriptor.generics;
    if descriptor.variants.is_empty() && !generics.params.is_empty() {
        debug!(name = %name, "generic enum has no supported variants, skipping");
        return TokenStream::new();
    }

    let visibility = generated_visibility(&descriptor.visibility);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
    let prisms = format_ident!("{}Prisms", name.unraw());
    let make_prisms = format_ident!("make_{}_prisms", snake_name(name));
    let source = quote!(#name #type_generics);

    let mut declarations = Vec::new();
    let mut initialisers = Vec::new();
    let mut emitted = HashSet::new();
    for variant in &descriptor.variants {
        let variant_name = &variant.name;
        let field = field_ident(&snake_name(variant_name));
        if !emitted.insert(field.to_string()) {
            debug!(variant = %variant_name, prism = %field, "duplicate prism name, skipping");
            continue;
        }
        let focus = &variant.focus;
        declarations.push(quote!(#visibility #field: FieldPrism<#source, #focus>));

        let prism = if variant.has_value {
            quote! {
                field_prism(
                    |source: &#source| match source {
                        #name::#variant_name(value) => Some(value),
                        _ => None,
                    },
                    |value: #focus| #name::#variant_name(value),
                    |source: #source| match source {
                        #name::#variant_name(value) => Some(value),
                        _ => None,
                    },
                )
            }
        } else {
            quote! {
                field_prism(
                    |source: &#source| match source {
                        #name::#variant_name => Some(&()),
                        _ => None,
                    },
                    |_: ()| #name::#variant_name,
                    |source: #source| match source {
                        #name::#variant_name => Some(()),
                        _ => None,
                    },
                )
            }
        };
        initialisers.push(quote!(#field: #prism));
    }

    let prisms_doc = doc(&format!("Prisms over the variants of [`{name}`]."));
    let make_doc = doc(&format!("Creates the prisms of [`{name}`]."));

    quote! {
        #prisms_doc
        #[derive(Clone)]
        #visibility struct #prisms #generics #where_clause {
            #(#declarations,)*
        }

        #make_doc
        #visibility fn #make_prisms #impl_generics() -> #prisms #type_generics #where_clause {
            #prisms {
                #(#initialisers,)*
            }
        }
    }
}
