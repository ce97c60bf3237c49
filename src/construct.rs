//! Building variants from arguments supplied at runtime, by position or by name.
//!
//! The tuple-variant constructors of a generated union are checked by the compiler and are the
//! way to build values in ordinary code. This module backs the `construct` functions that
//! `sum_types!` also generates, which take an [`Args`] bundle instead, fill in declared
//! defaults, and report arity mistakes as [`ArityError`]s rather than compile errors.

use std::any::{self, Any};
use std::fmt;

use crate::error::{ArityError, ConstructError};
use crate::schema::VariantSpec;


/// Arguments for a dynamic variant construction: positional values first, then named ones.
#[derive(Default)]
pub struct Args {
    positional: Vec<Box<dyn Any>>,
    named: Vec<(String, Box<dyn Any>)>,
}

impl Args {
    pub fn new() -> Self {
        Args::default()
    }

    /// Appends a positional argument.
    pub fn arg<V: Any>(mut self, value: V) -> Self {
        self.positional.push(Box::new(value));
        self
    }

    /// Appends an argument addressed to the field called `name`.
    pub fn named<V: Any>(mut self, name: impl Into<String>, value: V) -> Self {
        self.named.push((name.into(), Box::new(value)));
        self
    }

    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Args")
            .field("positional", &self.positional.len())
            .field("named", &self.named.iter().map(|(name, _)| name).collect::<Vec<_>>())
            .finish()
    }
}


/// Builds an [`Args`] bundle: positional values, then optionally `;` and `name = value` pairs.
///
/// ```rust
/// # #[macro_use] extern crate sum_types;
/// # fn main() {
/// let args = args![1.0, 2.0; label = "box"];
/// assert_eq!(args.len(), 3);
/// # }
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)? $(; $($name:ident = $named:expr),* $(,)?)?) => {
        $crate::Args::new()
            $(.arg($value))*
            $($(.named(stringify!($name), $named))*)?
    };
}


/// Hands out the arguments of one construction call field by field, in schema order.
///
/// Used by generated code; each field of the variant is bound exactly once through
/// [`Binder::bind`].
#[doc(hidden)]
pub struct Binder {
    sum_type: &'static str,
    spec: &'static VariantSpec,
    positional: Vec<Option<Box<dyn Any>>>,
    named: Vec<(String, Box<dyn Any>)>,
    cursor: usize,
}

impl Binder {
    /// Rejects argument lists that cannot fit the variant before any field is bound.
    pub fn new(
        sum_type: &'static str,
        spec: &'static VariantSpec,
        args: Args,
    ) -> Result<Self, ConstructError> {
        let Args { positional, named } = args;

        if positional.len() > spec.arity() {
            return Err(fail(ArityError::TooMany {
                sum_type,
                variant: spec.name,
                expected: spec.arity(),
                given: positional.len(),
            }));
        }

        for (i, (name, _)) in named.iter().enumerate() {
            if spec.field(name).is_none() {
                return Err(fail(ArityError::Unexpected {
                    sum_type,
                    variant: spec.name,
                    field: name.clone(),
                }));
            }
            if named[..i].iter().any(|(earlier, _)| earlier == name) {
                return Err(fail(ArityError::Duplicate {
                    sum_type,
                    variant: spec.name,
                    field: name.clone(),
                }));
            }
        }

        Ok(Binder {
            sum_type,
            spec,
            positional: positional.into_iter().map(Some).collect(),
            named,
            cursor: 0,
        })
    }

    /// Binds the next field: its positional argument, else its named argument, else its default.
    pub fn bind<F: Any>(
        &mut self,
        field: &'static str,
        default: Option<fn() -> F>,
    ) -> Result<F, ConstructError> {
        let index = self.cursor;
        self.cursor += 1;
        debug_assert_eq!(self.spec.fields.get(index).map(|spec| spec.name), Some(field));

        let positional = self.positional.get_mut(index).and_then(Option::take);
        let named = self
            .named
            .iter()
            .position(|(name, _)| name == field)
            .map(|i| self.named.swap_remove(i).1);

        let value = match (positional, named) {
            (Some(_), Some(_)) => {
                return Err(fail(ArityError::Duplicate {
                    sum_type: self.sum_type,
                    variant: self.spec.name,
                    field: field.to_owned(),
                }))
            }
            (Some(value), None) | (None, Some(value)) => value,
            (None, None) => {
                return match default {
                    Some(default) => Ok(default()),
                    None => Err(fail(ArityError::Missing {
                        sum_type: self.sum_type,
                        variant: self.spec.name,
                        field,
                    })),
                }
            }
        };

        value.downcast::<F>().map(|value| *value).map_err(|_| {
            let err = ConstructError::FieldType {
                sum_type: self.sum_type,
                variant: self.spec.name,
                field,
                expected: any::type_name::<F>(),
            };
            diag!("{}", err);
            err
        })
    }
}

fn fail(err: ArityError) -> ConstructError {
    diag!("{}", err);
    err.into()
}
