//! The metadata pass: annotated items in, typed descriptors out.
//!
//! Everything the emitter branches on (optionality, comparability,
//! promotion of flattened fields) is decided here, so emission never has to
//! look at attributes again.

use std::collections::{HashMap, HashSet};

use syn::visit_mut::{self, VisitMut};
use syn::{
    Fields, GenericArgument, Generics, Ident, Item, ItemEnum, ItemStruct, PathArguments, Type,
    Visibility, parse_quote,
};
use tracing::debug;

use super::annotation::{Markers, SerdeField, SourceLines, first_line, has_doc_marker};

/// Largest tuple treated as comparable (the `Default` impls stop there).
const MAX_COMPARABLE_TUPLE: usize = 12;

/// Largest array treated as comparable (the `Default` impls stop there).
const MAX_COMPARABLE_ARRAY: usize = 32;

const COMPARABLE_SCALARS: &[&str] = &[
    "bool", "char", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64",
    "i128", "isize", "f32", "f64", "String",
];

/// One annotated item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// A struct marked for lenses.
    Struct(StructDescriptor),
    /// An enum marked for prisms.
    Enum(EnumDescriptor),
}

impl TypeDescriptor {
    /// The item name.
    pub const fn name(&self) -> &Ident {
        match self {
            Self::Struct(descriptor) => &descriptor.name,
            Self::Enum(descriptor) => &descriptor.name,
        }
    }
}

/// A struct with named fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructDescriptor {
    /// Struct name.
    pub name: Ident,
    /// Declared visibility.
    pub visibility: Visibility,
    /// Declared generics, bounds and where clause included.
    pub generics: Generics,
    /// Fields in declaration order, promoted fields directly after the
    /// field they were flattened from.
    pub fields: Vec<FieldDescriptor>,
    /// Whether the file derives or implements `Clone` for the struct.
    pub cloneable: bool,
}

/// How a field may be absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Optionality {
    /// Always present.
    Required,
    /// `Option<inner>`.
    Option {
        /// The wrapped type.
        inner: Type,
    },
    /// Skipped by serde when empty.
    OmitEmpty,
}

/// One field of a [`StructDescriptor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Accessor name.
    pub name: Ident,
    /// Field access path from the struct: `[field]`, or `[outer, field]`
    /// for a promoted field.
    pub path: Vec<Ident>,
    /// Field type.
    pub ty: Type,
    /// Whether every field along `path` is `pub`.
    pub public: bool,
    /// How the field may be absent.
    pub optionality: Optionality,
    /// Whether the type is syntactically known to be `PartialEq + Default`.
    pub comparable: bool,
}

impl FieldDescriptor {
    /// Whether the field gets an `_o` optional accessor.
    pub const fn has_optional(&self) -> bool {
        self.comparable || !matches!(self.optionality, Optionality::Required)
    }

    /// Whether this field was promoted from a flattened field.
    pub fn is_promoted(&self) -> bool {
        self.path.len() > 1
    }
}

/// An enum with its unit and single-field tuple variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumDescriptor {
    /// Enum name.
    pub name: Ident,
    /// Declared visibility.
    pub visibility: Visibility,
    /// Declared generics.
    pub generics: Generics,
    /// Supported variants, in declaration order.
    pub variants: Vec<VariantDescriptor>,
}

/// One enum variant a prism can focus on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantDescriptor {
    /// Variant name.
    pub name: Ident,
    /// The focused type: `()` for unit variants.
    pub focus: Type,
    /// Whether the variant carries a value.
    pub has_value: bool,
}

/// Raw field information before promotion.
struct RawField {
    name: Ident,
    ty: Type,
    public: bool,
    serde: SerdeField,
}

/// Collects descriptors for every annotated top-level item of `file`.
pub fn describe_file(file: &syn::File, source: &str, markers: &Markers) -> Vec<TypeDescriptor> {
    let lines = SourceLines::new(source);
    let structs: HashMap<String, &ItemStruct> = file
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Struct(item) => Some((item.ident.to_string(), item)),
            _ => None,
        })
        .collect();
    let cloneable = cloneable_types(file);

    file.items
        .iter()
        .filter_map(|item| match item {
            Item::Struct(item)
                if is_marked(&item.attrs, item.struct_token.span.start().line, &lines, &markers.lens) =>
            {
                describe_struct(item, &structs, &cloneable).map(TypeDescriptor::Struct)
            }
            Item::Enum(item)
                if is_marked(&item.attrs, item.enum_token.span.start().line, &lines, &markers.prism) =>
            {
                Some(TypeDescriptor::Enum(describe_enum(item)))
            }
            _ => None,
        })
        .collect()
}

fn is_marked(
    attributes: &[syn::Attribute],
    keyword_line: usize,
    lines: &SourceLines<'_>,
    marker: &str,
) -> bool {
    has_doc_marker(attributes, marker)
        || lines.has_comment_marker(marker, first_line(attributes, keyword_line), keyword_line)
}

/// Names of the types that derive `Clone` or have a `Clone` impl in the file.
fn cloneable_types(file: &syn::File) -> HashSet<String> {
    let mut names = HashSet::new();
    for item in &file.items {
        match item {
            Item::Struct(item) if derives_clone(&item.attrs) => {
                names.insert(item.ident.to_string());
            }
            Item::Impl(item) => {
                let implements_clone = item
                    .trait_
                    .as_ref()
                    .and_then(|(_, path, _)| path.segments.last())
                    .is_some_and(|segment| segment.ident == "Clone");
                if let (true, Type::Path(self_type)) = (implements_clone, item.self_ty.as_ref())
                    && let Some(segment) = self_type.path.segments.last()
                {
                    names.insert(segment.ident.to_string());
                }
            }
            _ => {}
        }
    }
    names
}

fn derives_clone(attributes: &[syn::Attribute]) -> bool {
    attributes
        .iter()
        .filter(|attribute| attribute.path().is_ident("derive"))
        .any(|attribute| {
            let mut found = false;
            let parsed = attribute.parse_nested_meta(|meta| {
                if meta.path.segments.last().is_some_and(|segment| segment.ident == "Clone") {
                    found = true;
                }
                Ok(())
            });
            parsed.is_ok() && found
        })
}

/// Replaces `Self` with the concrete item type, since the accessors are
/// declared outside the item's impl scope.
struct ReplaceSelf {
    item: Type,
}

impl ReplaceSelf {
    fn new(name: &Ident, generics: &Generics) -> Self {
        let (_, type_generics, _) = generics.split_for_impl();
        Self {
            item: parse_quote!(#name #type_generics),
        }
    }

    fn apply(&mut self, ty: &Type) -> Type {
        let mut ty = ty.clone();
        self.visit_type_mut(&mut ty);
        ty
    }
}

impl VisitMut for ReplaceSelf {
    fn visit_type_mut(&mut self, ty: &mut Type) {
        if let Type::Path(path) = ty
            && path.qself.is_none()
            && path.path.is_ident("Self")
        {
            *ty = self.item.clone();
            return;
        }
        visit_mut::visit_type_mut(self, ty);
    }
}

fn raw_fields(item: &ItemStruct) -> Option<Vec<RawField>> {
    let Fields::Named(fields) = &item.fields else {
        return None;
    };
    let mut replace_self = ReplaceSelf::new(&item.ident, &item.generics);
    Some(
        fields
            .named
            .iter()
            .filter_map(|field| {
                Some(RawField {
                    name: field.ident.clone()?,
                    ty: replace_self.apply(&field.ty),
                    public: matches!(field.vis, Visibility::Public(_)),
                    serde: SerdeField::from_attributes(&field.attrs),
                })
            })
            .collect(),
    )
}

fn describe_struct(
    item: &ItemStruct,
    structs: &HashMap<String, &ItemStruct>,
    cloneable: &HashSet<String>,
) -> Option<StructDescriptor> {
    let Some(raw) = raw_fields(item) else {
        debug!(name = %item.ident, "skipping struct without named fields");
        return None;
    };
    if raw.is_empty() && !item.generics.params.is_empty() {
        debug!(name = %item.ident, "skipping generic struct without fields");
        return None;
    }

    let mut seen: HashSet<String> = raw.iter().map(|field| field.name.to_string()).collect();
    let mut fields = Vec::with_capacity(raw.len());
    for field in &raw {
        fields.push(FieldDescriptor {
            name: field.name.clone(),
            path: vec![field.name.clone()],
            ty: field.ty.clone(),
            public: field.public,
            optionality: optionality(&field.ty, &field.serde),
            comparable: is_comparable(&field.ty),
        });
        if field.serde.flatten {
            fields.extend(promote(field, structs, &mut seen));
        }
    }

    Some(StructDescriptor {
        name: item.ident.clone(),
        visibility: item.vis.clone(),
        generics: item.generics.clone(),
        fields,
        cloneable: cloneable.contains(&item.ident.to_string()),
    })
}

/// Fields of the struct flattened into `outer`, one hop only.
fn promote(
    outer: &RawField,
    structs: &HashMap<String, &ItemStruct>,
    seen: &mut HashSet<String>,
) -> Vec<FieldDescriptor> {
    let Some(embedded) = plain_type_name(&outer.ty).and_then(|name| structs.get(&name)) else {
        debug!(field = %outer.name, "flattened type is not a struct in this file, not promoted");
        return Vec::new();
    };
    if !embedded.generics.params.is_empty() {
        debug!(field = %outer.name, "flattened struct is generic, not promoted");
        return Vec::new();
    }
    let Some(inner_fields) = raw_fields(embedded) else {
        return Vec::new();
    };

    inner_fields
        .into_iter()
        .filter(|inner| seen.insert(inner.name.to_string()))
        .map(|inner| FieldDescriptor {
            optionality: optionality(&inner.ty, &inner.serde),
            comparable: is_comparable(&inner.ty),
            public: outer.public && inner.public,
            path: vec![outer.name.clone(), inner.name.clone()],
            name: inner.name,
            ty: inner.ty,
        })
        .collect()
}

/// The name of a type written as a bare identifier (`Address`).
fn plain_type_name(ty: &Type) -> Option<String> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let ident = path.path.get_ident()?;
    Some(ident.to_string())
}

fn optionality(ty: &Type, serde: &SerdeField) -> Optionality {
    if let Some(inner) = option_inner(ty) {
        return Optionality::Option {
            inner: inner.clone(),
        };
    }
    if serde.omit_empty {
        return Optionality::OmitEmpty;
    }
    Optionality::Required
}

/// `T` for `Option<T>`, `std::option::Option<T>` and `core::option::Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segments: Vec<String> = path
        .path
        .segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect();
    let is_option = match segments.as_slice() {
        [only] => only == "Option",
        [root, module, last] => {
            (root == "std" || root == "core") && module == "option" && last == "Option"
        }
        _ => false,
    };
    if !is_option {
        return None;
    }
    let PathArguments::AngleBracketed(arguments) = &path.path.segments.last()?.arguments else {
        return None;
    };
    match arguments.args.iter().collect::<Vec<_>>().as_slice() {
        [GenericArgument::Type(inner)] => Some(inner),
        _ => None,
    }
}

/// Conservative, syntax-only comparability: the type must be known to be
/// `PartialEq + Default` without resolving any name.
pub fn is_comparable(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => {
            path.qself.is_none()
                && path
                    .path
                    .get_ident()
                    .is_some_and(|ident| COMPARABLE_SCALARS.contains(&ident.to_string().as_str()))
        }
        Type::Reference(reference) => {
            reference.mutability.is_none()
                && matches!(reference.elem.as_ref(), Type::Path(path) if path.path.is_ident("str"))
        }
        Type::Tuple(tuple) => {
            !tuple.elems.is_empty()
                && tuple.elems.len() <= MAX_COMPARABLE_TUPLE
                && tuple.elems.iter().all(is_comparable)
        }
        Type::Array(array) => {
            array_length(&array.len).is_some_and(|length| length <= MAX_COMPARABLE_ARRAY)
                && is_comparable(&array.elem)
        }
        Type::Paren(paren) => is_comparable(&paren.elem),
        Type::Group(group) => is_comparable(&group.elem),
        _ => false,
    }
}

fn array_length(expression: &syn::Expr) -> Option<usize> {
    let syn::Expr::Lit(literal) = expression else {
        return None;
    };
    let syn::Lit::Int(integer) = &literal.lit else {
        return None;
    };
    integer.base10_parse().ok()
}

fn describe_enum(item: &ItemEnum) -> EnumDescriptor {
    let mut replace_self = ReplaceSelf::new(&item.ident, &item.generics);
    let variants = item
        .variants
        .iter()
        .filter_map(|variant| match &variant.fields {
            Fields::Unit => Some(VariantDescriptor {
                name: variant.ident.clone(),
                focus: parse_quote!(()),
                has_value: false,
            }),
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                fields.unnamed.first().map(|field| VariantDescriptor {
                    name: variant.ident.clone(),
                    focus: replace_self.apply(&field.ty),
                    has_value: true,
                })
            }
            _ => {
                debug!(
                    name = %item.ident,
                    variant = %variant.ident,
                    "skipping variant that is neither unit nor a single-field tuple"
                );
                None
            }
        })
        .collect();

    EnumDescriptor {
        name: item.ident.clone(),
        visibility: item.vis.clone(),
        generics: item.generics.clone(),
        variants,
    }
}
