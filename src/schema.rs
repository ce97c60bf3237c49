//! The declarative side of a sum type: which variants exist, what fields they carry, and how a
//! value reports the variant it was built as.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;


/// One declared field of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    pub name: &'static str,
    /// The field's type as written in the declaration, before generic substitution.
    pub ty: &'static str,
    pub has_default: bool,
}

/// One declared variant: a name and its ordered field schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantSpec {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl VariantSpec {
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// The number of fields that have no default and so must be supplied.
    pub fn required(&self) -> usize {
        self.fields.iter().filter(|field| !field.has_default).count()
    }

    pub fn is_unit(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks a field up by name, returning its position in the schema.
    pub fn field(&self, name: &str) -> Option<(usize, &'static FieldSpec)> {
        self.fields.iter().enumerate().find(|(_, field)| field.name == name)
    }
}

impl fmt::Display for VariantSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)?;
        if self.is_unit() {
            return Ok(());
        }

        f.write_str("(")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field.name, field.ty)?;
            if field.has_default {
                f.write_str(" = ..")?;
            }
        }
        f.write_str(")")
    }
}


/// The tag type of a sum type: a fieldless enum with exactly one tag per declared variant.
///
/// Implemented by `sum_types!` for the tag enum it generates.
pub trait Tag: Copy + Eq + Ord + Hash + fmt::Debug + 'static {
    /// Every tag, in declaration order.
    const ALL: &'static [Self];

    fn spec(self) -> &'static VariantSpec;

    fn name(self) -> &'static str {
        self.spec().name
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.name() == name)
    }
}


/// A closed sum type whose values can report which variant they were constructed as.
///
/// `sum_types!` implements this for every union it declares. It is also implemented for shared
/// references, so that case analysis can borrow the scrutinee instead of consuming it.
pub trait SumType {
    type Tag: Tag;

    /// The declared name of the sum type, e.g. `Option`.
    const NAME: &'static str;
    /// The declared generic parameters, e.g. `["T", "E"]`.
    const PARAMS: &'static [&'static str];

    fn tag(&self) -> Self::Tag;

    fn variant_name(&self) -> &'static str {
        self.tag().name()
    }

    fn is(&self, tag: Self::Tag) -> bool {
        self.tag() == tag
    }

    fn descriptor() -> Descriptor<Self::Tag>
    where
        Self: Sized,
    {
        Descriptor {
            name: Self::NAME,
            params: Self::PARAMS,
            tags: PhantomData,
        }
    }
}

impl<'s, S: SumType> SumType for &'s S {
    type Tag = S::Tag;

    const NAME: &'static str = S::NAME;
    const PARAMS: &'static [&'static str] = S::PARAMS;

    fn tag(&self) -> S::Tag {
        (**self).tag()
    }
}


/// The full declaration of one sum type, recovered from its generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor<T: Tag> {
    pub name: &'static str,
    pub params: &'static [&'static str],
    tags: PhantomData<T>,
}

impl<T: Tag> Descriptor<T> {
    pub fn tags(&self) -> &'static [T] {
        T::ALL
    }

    pub fn variants(&self) -> impl Iterator<Item = &'static VariantSpec> {
        T::ALL.iter().map(|tag| tag.spec())
    }

    pub fn lookup(&self, variant: &str) -> Option<T> {
        T::from_name(variant)
    }
}

impl<T: Tag> fmt::Display for Descriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)?;
        if !self.params.is_empty() {
            write!(f, "<{}>", self.params.join(", "))?;
        }

        f.write_str(" {")?;
        for (i, variant) in self.variants().enumerate() {
            f.write_str(if i > 0 { ", " } else { " " })?;
            write!(f, "{}", variant)?;
        }
        f.write_str(" }")
    }
}


/// Checks at compile time that no two names in a list coincide.
///
/// The generated code asserts this over each variant's field names.
pub const fn names_unique(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if str_eq(names[i], names[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
