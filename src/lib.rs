//! # The `sum_types` macro - closed sum types with case analysis, declared as data.
//!
//! This crate contains a macro for declaring closed sum types: a fixed set of named variants, each
//! carrying an ordered list of typed fields. You write the declaration once, as a table of
//! variants and field schemas, and get back a Rust enum you can construct and `match` on, a tag
//! type naming its variants, and enough metadata to build and inspect values at runtime. The
//! [`option`] and [`result`] modules are two sum types declared this way, with the usual
//! combinator vocabulary (`map`, `and_then`, `unwrap_or` and friends) on top.
//!
//! # The DSL
//!
//! Let's take a look at a small example:
//!
//! ```rust
//! # #[macro_use] extern crate sum_types;
//! sum_types! {
//!     data Shape: ShapeTag {
//!         Circle(radius: f64),
//!         Rect(width: f64, height: f64 = 1.0),
//!         Empty,
//!     }
//! }
//! # fn main() {}
//! ```
//!
//! There are two things to notice here. The first is `Shape: ShapeTag`. `Shape` is the sum type
//! being declared, and `ShapeTag` is the name of its tag type - a fieldless enum with one
//! variant per declared variant. `macro_rules!` has no way to make up new identifiers, so you
//! have to supply this one yourself. It is on *you* to keep it from clashing with anything else in
//! scope.
//!
//! The second is the body. Each line declares a variant: a name, then optionally a parenthesized
//! list of `field: Type` pairs. A variant with no fields (`Empty`) is a unit variant. When we
//! write `height: f64 = 1.0`, the `= 1.0` declares a default, which the dynamic constructor
//! (more on that later) fills in when the field is left out. Field names have to be unique
//! within their variant; a duplicate is a compile-time error. To better demonstrate, here is
//! (roughly) what the above invocation expands to, minus the trait impls:
//!
//! ```rust
//! pub enum Shape {
//!     Circle(f64),
//!     Rect(f64, f64),
//!     Empty,
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
//! pub enum ShapeTag {
//!     Circle,
//!     Rect,
//!     Empty,
//! }
//! # fn main() {}
//! ```
//!
//! `Shape` is the common type every variant unifies under, so a `Shape::Circle(2.0)` and a
//! `Shape::Empty` can go anywhere a `Shape` is expected. The tuple-variant constructors are
//! ordinary Rust, which means the compiler checks their arity for us: `Shape::Rect(1.0)` simply
//! doesn't compile.
//!
//! On top of that, `sum_types!` implements [`SumType`] for `Shape` (so any value can tell you
//! its tag, and the type can describe itself through a [`Descriptor`]) and [`Tag`] for
//! `ShapeTag` (so each tag knows its [`VariantSpec`]).
//!
//! ## Case analysis
//!
//! Since the union is a plain enum, the best way to take one apart is a plain `match`. Fields
//! bind by position, nested patterns recurse, and the compiler refuses to build a `match` that
//! forgets a variant, because the set of variants is closed:
//!
//! ```rust
//! # #[macro_use] extern crate sum_types;
//! # sum_types! {
//! #     data Shape: ShapeTag {
//! #         Circle(radius: f64),
//! #         Rect(width: f64, height: f64 = 1.0),
//! #         Empty,
//! #     }
//! # }
//! fn area(shape: &Shape) -> f64 {
//!     match *shape {
//!         Shape::Circle(radius) => 3.0 * radius * radius,
//!         Shape::Rect(width, height) => width * height,
//!         Shape::Empty => 0.0,
//!     }
//! }
//!
//! # fn main() {
//! assert_eq!(area(&Shape::Rect(2.0, 3.0)), 6.0);
//! assert_eq!(area(&Shape::Circle(1.0)), 3.0);
//! # }
//! ```
//!
//! Sometimes, though, the arms aren't known until runtime, or a partial match is exactly what
//! you want and you'd like to hear about a miss instead of failing to compile. For that there is
//! [`Match`], along with the [`case!`] and [`match_cases!`] macros. Arms are tried in order, the
//! first one to match wins, and running out of arms is a [`NonExhaustiveMatchError`]:
//!
//! ```rust
//! # #[macro_use] extern crate sum_types;
//! # sum_types! {
//! #     data Shape: ShapeTag {
//! #         Circle(radius: f64),
//! #         Rect(width: f64, height: f64 = 1.0),
//! #         Empty,
//! #     }
//! # }
//! use sum_types::{Match, NonExhaustiveMatchError};
//!
//! # fn main() {
//! let square = Shape::Rect(2.0, 2.0);
//!
//! let kind = Match::on(&square)
//!     .case(case!(Shape::Rect(w, h) if w == h => "square"))
//!     .case(case!(Shape::Rect(..) => "rectangle"))
//!     .when(ShapeTag::Circle, |_| "circle")
//!     .run();
//! assert_eq!(kind, Ok("square"));
//!
//! let missed = match_cases!(&Shape::Empty; Shape::Circle(r) => *r);
//! assert_eq!(missed, Err(NonExhaustiveMatchError { sum_type: "Shape", variant: "Empty" }));
//! # }
//! ```
//!
//! ## Building values at runtime
//!
//! Every declared sum type also gets `construct` and `construct_named`, which take an [`Args`]
//! bundle of positional and named values instead of a typed argument list. Defaults fill in
//! whatever was left out, and anything that doesn't fit the variant's schema comes back as an
//! [`ArityError`] instead of a compile error:
//!
//! ```rust
//! # #[macro_use] extern crate sum_types;
//! # sum_types! {
//! #     data Shape: ShapeTag where #[derive(Debug, PartialEq)] {
//! #         Circle(radius: f64),
//! #         Rect(width: f64, height: f64 = 1.0),
//! #         Empty,
//! #     }
//! # }
//! use sum_types::{ArityError, ConstructError};
//!
//! # fn main() {
//! assert_eq!(Shape::construct(ShapeTag::Rect, args![4.0]), Ok(Shape::Rect(4.0, 1.0)));
//! assert_eq!(
//!     Shape::construct_named("Rect", args![; height = 2.0, width = 3.0]),
//!     Ok(Shape::Rect(3.0, 2.0))
//! );
//! assert!(matches!(
//!     Shape::construct(ShapeTag::Circle, args![]),
//!     Err(ConstructError::Arity(ArityError::Missing { field: "radius", .. }))
//! ));
//! # }
//! ```
//!
//! Since arguments travel as `Box<dyn Any>`, this path requires every generic parameter of the
//! sum type to be `'static`.
//!
//! ## Generics, attributes, and doc comments
//!
//! Sum types can take type parameters, which are threaded into the field types. Attributes can
//! be attached to the generated union with a `where` clause-like list after the tag name (the
//! reason for the odd placement is that putting them in front would leave no unambiguous way to
//! pick out doc comments). Attributes written as `#[tag: ...]` are routed to the tag enum
//! instead. Doc comments go in front, as usual, and on individual variants too:
//!
//! ```rust
//! # #[macro_use] extern crate sum_types;
//! sum_types! {
//!     /// Either a value of type `L` or a value of type `R`.
//!     data Either<L, R>: Side where #[derive(Debug, Clone, PartialEq)] #[tag: repr(u8)] {
//!         /// The left-hand value.
//!         Left(value: L),
//!         /// The right-hand value.
//!         Right(value: R),
//!     }
//! }
//!
//! # fn main() {
//! use sum_types::SumType;
//!
//! let either: Either<i32, &str> = Either::Right("right");
//! assert_eq!(either.tag(), Side::Right);
//! assert_eq!(Side::Right as u8, 1);
//! assert_eq!(Either::<i32, &str>::descriptor().to_string(), "Either<L, R> { Left(value: L), Right(value: R) }");
//! # }
//! ```
//!
//! The tag enum always derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `PartialOrd` and `Ord`, and implements `Display` by printing the variant name.
//!
//! ## Features
//!
//! - `log` (on by default): failed dynamic constructions, non-exhaustive dynamic matches and
//!   failed unwraps are reported as `debug` records under the `sum_types` target through the
//!   `log` facade.


macro_rules! diag {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::debug!(target: "sum_types", $($arg)+);
    };
}


/// The `sum_types` macro declares one or more closed sum types.
///
/// Each `data` block produces:
///     1. A `pub enum` with one tuple variant per declared variant, fields in declared order.
///     2. A fieldless `pub enum` tag type, named by you, with one variant per declared variant.
///     3. Implementations of [`SumType`] for the union and [`Tag`] for the tag type.
///     4. `construct` and `construct_named` associated functions for building variants from
///        [`Args`] at runtime.
///     5. A compile-time check that no variant declares the same field name twice.
///
/// You should probably read the top-level documentation before you look at this larger example.
///
/// ```
/// # #[macro_use]
/// # extern crate sum_types;
/// use sum_types::{SumType, Tag};
///
/// sum_types! {
///     /// A JSON-ish document tree.
///     data Value: Kind where #[derive(Debug, Clone, PartialEq)] {
///         Null,
///         Bool(value: bool),
///         Number(value: f64 = 0.0),
///         Text(value: String),
///         List(items: Vec<Value>),
///     }
///
///     // Several declarations can share one invocation, and generic parameters are threaded
///     // into every field that mentions them.
///     data Tree<T>: Node where #[derive(Debug, Clone, PartialEq)] {
///         Leaf(value: T),
///         Branch(left: Box<Tree<T>>, right: Box<Tree<T>>),
///     }
/// }
///
/// fn depth<T>(tree: &Tree<T>) -> usize {
///     match tree {
///         Tree::Leaf(_) => 1,
///         Tree::Branch(left, right) => 1 + depth(left).max(depth(right)),
///     }
/// }
///
/// # fn main() {
/// let list = Value::List(vec![Value::Null, Value::Bool(true), Value::Number(2.5)]);
/// assert_eq!(list.tag(), Kind::List);
/// assert_eq!(Kind::ALL, &[Kind::Null, Kind::Bool, Kind::Number, Kind::Text, Kind::List]);
/// assert_eq!(Kind::Number.spec().required(), 0);
/// assert_eq!(Value::construct(Kind::Number, args![]), Ok(Value::Number(0.0)));
///
/// let tree = Tree::Branch(Box::new(Tree::Leaf(1)), Box::new(Tree::Branch(
///     Box::new(Tree::Leaf(2)),
///     Box::new(Tree::Leaf(3)),
/// )));
/// assert_eq!(depth(&tree), 3);
/// assert_eq!(Tree::<i32>::PARAMS, &["T"]);
/// # }
/// ```
///
/// # Restrictions
///
/// Field names must be unique within a variant. A duplicate is rejected while the declaration is
/// compiled, by a constant assertion naming the offending variant:
///
/// ```compile_fail,E0080
/// # #[macro_use] extern crate sum_types;
/// sum_types! {
///     data Point: PointTag {
///         Pt(x: i32, x: i32),
///     }
/// }
/// # fn main() {}
/// ```
///
/// Variants are ordinary tuple constructors, so calling one with the wrong number of fields does
/// not compile either. Only `construct` fills in defaults:
///
/// ```compile_fail,E0061
/// # #[macro_use] extern crate sum_types;
/// sum_types! {
///     data Shape: ShapeTag {
///         Rect(width: f64, height: f64 = 1.0),
///     }
/// }
/// # fn main() {
/// let rect = Shape::Rect(1.0);
/// # }
/// ```
///
/// Every declared type parameter has to appear in at least one field. The union is a plain enum,
/// and Rust rejects an enum with an unused parameter; wrap it in a `PhantomData` field instead:
///
/// ```compile_fail,E0392
/// # #[macro_use] extern crate sum_types;
/// sum_types! {
///     data Marker<T>: MarkerTag {
///         A,
///         B,
///     }
/// }
/// # fn main() {}
/// ```
///
/// ```
/// # #[macro_use] extern crate sum_types;
/// use std::marker::PhantomData;
///
/// sum_types! {
///     data Marker<T>: MarkerTag {
///         A(marker: PhantomData<T> = PhantomData),
///         B,
///     }
/// }
/// # fn main() {
/// assert!(Marker::<u8>::construct(MarkerTag::A, args![]).is_ok());
/// # }
/// ```
#[macro_export]
macro_rules! sum_types {
    ($(#$docs:tt)* data $name:ident $(<$($param:ident),+ $(,)?>)?: $tag:ident where $(#$attr:tt)+ { $($variants:tt)* } $($rest:tt)*) => {
        $crate::_sumty_data!([$($docs)*] [$($attr)*] $name [$($($param),+)?] $tag; $($variants)*);
        $crate::sum_types!($($rest)*);
    };
    ($(#$docs:tt)* data $name:ident $(<$($param:ident),+ $(,)?>)?: $tag:ident { $($variants:tt)* } $($rest:tt)*) => {
        $crate::_sumty_data!([$($docs)*] [] $name [$($($param),+)?] $tag; $($variants)*);
        $crate::sum_types!($($rest)*);
    };

    () => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! _sumty_data {
    ([$($docs:tt)*] [$($attr:tt)*] $name:ident [$($param:ident),*] $tag:ident;
        $($(#$vattr:tt)* $variant:ident $(($($field:ident: $fty:ty $(= $default:expr)?),* $(,)?))?),* $(,)?) => {
        $crate::_sumty_filter_data! { []
            $(#$docs)*
            $(#$attr)*
            pub enum $name<$($param),*> {
                $($(#$vattr)* $variant $(($($fty),*))?,)*
            }
        }

        $crate::_sumty_filter_tag! {
            [
                #[doc = concat!("The variants of `", stringify!($name), "`, without their fields.")]
                #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            ]
            $(#$attr)*
            pub enum $tag {
                $($variant,)*
            }
        }

        impl<$($param),*> $crate::SumType for $name<$($param),*> {
            type Tag = $tag;

            const NAME: &'static str = stringify!($name);
            const PARAMS: &'static [&'static str] = &[$(stringify!($param)),*];

            fn tag(&self) -> $tag {
                match *self {
                    $(Self::$variant { .. } => $tag::$variant,)*
                }
            }
        }

        impl $crate::Tag for $tag {
            const ALL: &'static [Self] = &[$($tag::$variant),*];

            fn spec(self) -> &'static $crate::VariantSpec {
                match self {
                    $($tag::$variant => {
                        static SPEC: $crate::VariantSpec = $crate::VariantSpec {
                            name: stringify!($variant),
                            fields: &[$($($crate::FieldSpec {
                                name: stringify!($field),
                                ty: stringify!($fty),
                                has_default: $crate::_sumty_has_default!($($default)?),
                            }),*)?],
                        };
                        &SPEC
                    })*
                }
            }
        }

        #[allow(unreachable_code)]
        impl ::core::fmt::Display for $tag {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::Tag::name(*self))
            }
        }

        $(
            const _: () = ::core::assert!(
                $crate::names_unique(&[$($(stringify!($field)),*)?]),
                concat!("duplicate field name in ", stringify!($name), "::", stringify!($variant))
            );
        )*

        impl<$($param: 'static),*> $name<$($param),*> {
            /// Builds the variant named by `tag` from dynamically supplied arguments.
            ///
            /// Positional arguments bind to fields in declaration order, named arguments bind by
            /// field name, and declared defaults fill in the rest.
            #[allow(dead_code, unreachable_code)]
            pub fn construct(
                tag: $tag,
                args: $crate::Args,
            ) -> ::core::result::Result<Self, $crate::ConstructError> {
                #[allow(unused_mut, unused_variables)]
                let mut binder = $crate::Binder::new(stringify!($name), $crate::Tag::spec(tag), args)?;
                ::core::result::Result::Ok(match tag {
                    $($tag::$variant => Self::$variant $(($(
                        binder.bind::<$fty>(stringify!($field), $crate::_sumty_default!($fty $(, $default)?))?
                    ),*))?,)*
                })
            }

            /// Like `construct`, with the variant looked up by name.
            #[allow(dead_code, unreachable_code)]
            pub fn construct_named(
                variant: &str,
                args: $crate::Args,
            ) -> ::core::result::Result<Self, $crate::ConstructError> {
                match <$tag as $crate::Tag>::from_name(variant) {
                    ::core::option::Option::Some(tag) => Self::construct(tag, args),
                    ::core::option::Option::None => ::core::result::Result::Err(
                        $crate::ConstructError::UnknownVariant {
                            sum_type: stringify!($name),
                            variant: variant.into(),
                        },
                    ),
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! _sumty_has_default {
    () => { false };
    ($default:expr) => { true };
}

#[doc(hidden)]
#[macro_export]
macro_rules! _sumty_default {
    ($fty:ty) => { ::core::option::Option::None::<fn() -> $fty> };
    ($fty:ty, $default:expr) => { ::core::option::Option::Some((|| $default) as fn() -> $fty) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! _sumty_filter_data {
    ([$($preceding:tt)*] #[tag: $attr:meta] $($more:tt)*) => ($crate::_sumty_filter_data!([$($preceding)*] $($more)*););
    ([$($preceding:tt)*] #$attr:tt $($more:tt)*) => ($crate::_sumty_filter_data!([$($preceding)* #$attr] $($more)*););
    ([$($preceding:tt)*] $($decl:tt)*) => ($($preceding)* $($decl)*);
}

#[doc(hidden)]
#[macro_export]
macro_rules! _sumty_filter_tag {
    ([$($preceding:tt)*] #[tag: $attr:meta] $($more:tt)*) => ($crate::_sumty_filter_tag!([$($preceding)* #[$attr]] $($more)*););
    ($preceding:tt #$attr:tt $($more:tt)*) => ($crate::_sumty_filter_tag!($preceding $($more)*);); // Union attributes stay on the union.
    ([$($preceding:tt)*] $($decl:tt)*) => ($($preceding)* $($decl)*);
}


#[macro_use]
mod case;
#[macro_use]
mod construct;
mod error;
mod schema;

pub mod option;
pub mod result;

pub use case::{Case, Match};
pub use construct::{Args, Binder};
pub use error::{ArityError, ConstructError, NonExhaustiveMatchError, UnwrappingError};
pub use schema::{names_unique, Descriptor, FieldSpec, SumType, Tag, VariantSpec};
