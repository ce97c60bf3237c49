//! Failure signals raised by variant construction, case analysis and the unwrap family.

use thiserror::Error;

/// A variant constructor was handed the wrong set of fields.
///
/// This is always a programming error on the caller's side. Construction fails outright; no
/// partially-built value escapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArityError {
    #[error("{sum_type}::{variant} is missing required field `{field}`")]
    Missing {
        sum_type: &'static str,
        variant: &'static str,
        field: &'static str,
    },
    #[error("{sum_type}::{variant} takes {expected} positional fields but {given} were given")]
    TooMany {
        sum_type: &'static str,
        variant: &'static str,
        expected: usize,
        given: usize,
    },
    #[error("{sum_type}::{variant} has no field named `{field}`")]
    Unexpected {
        sum_type: &'static str,
        variant: &'static str,
        field: String,
    },
    #[error("{sum_type}::{variant} got multiple values for field `{field}`")]
    Duplicate {
        sum_type: &'static str,
        variant: &'static str,
        field: String,
    },
}

/// Everything that can go wrong when building a variant from dynamically supplied arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
    #[error(transparent)]
    Arity(#[from] ArityError),
    #[error("{sum_type}::{variant} field `{field}` expects a value of type `{expected}`")]
    FieldType {
        sum_type: &'static str,
        variant: &'static str,
        field: &'static str,
        expected: &'static str,
    },
    #[error("{sum_type} has no variant named `{variant}`")]
    UnknownVariant {
        sum_type: &'static str,
        variant: String,
    },
}

/// Dynamic case analysis ran out of arms before one matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("non-exhaustive match on {sum_type}: no arm matched variant `{variant}`")]
pub struct NonExhaustiveMatchError {
    pub sum_type: &'static str,
    pub variant: &'static str,
}

/// An unwrap-family operation was called on the wrong variant.
///
/// The `try_` forms (`try_unwrap`, `try_expect`, `try_unwrap_err`, `try_expect_err`) return this
/// error as a value. The plain forms panic with its message instead, so the panic payload is a
/// `String`, not an `UnwrappingError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.operation, .found, .message))]
pub struct UnwrappingError {
    operation: &'static str,
    found: &'static str,
    message: Option<String>,
}

impl UnwrappingError {
    pub fn new(operation: &'static str, found: &'static str) -> Self {
        UnwrappingError {
            operation,
            found,
            message: None,
        }
    }

    pub fn with_message(operation: &'static str, found: &'static str, message: &str) -> Self {
        UnwrappingError {
            operation,
            found,
            message: Some(message.to_owned()),
        }
    }

    /// The operation that failed, e.g. `unwrap_err`.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// The variant the operation was called on, e.g. `Option::Nothing`.
    pub fn found(&self) -> &'static str {
        self.found
    }

    /// The caller's message, if the failure came from `expect` or `expect_err`.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

fn describe(operation: &str, found: &str, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("called `{}` on a `{}` value", operation, found),
    }
}

#[cold]
#[track_caller]
pub(crate) fn unwrap_failed(err: UnwrappingError) -> ! {
    diag!("{} failed on {}", err.operation(), err.found());
    panic!("{}", err)
}
