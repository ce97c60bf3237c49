//! An optional value, declared as a sum type.
//!
//! [`Option`] is `Some(value)` or `Nothing`. It is generated by `sum_types!` like any other sum
//! type, so it carries an [`OptionTag`], a descriptor, and dynamic constructors alongside the
//! combinators below. Every combinator consumes the option and returns a new value; none of them
//! mutate anything, and side effects only happen inside the closures you pass in.
//!
//! ```rust
//! use sum_types::option::Option;
//!
//! let port = Option::Some("8080")
//!     .and_then(|text| text.parse::<u16>().ok().into())
//!     .map(|port| port + 1)
//!     .unwrap_or(80);
//! assert_eq!(port, 8081);
//! ```

use crate::error::{self, UnwrappingError};
use crate::result::Result;


sum_types! {
    /// Either `Some` value of type `T`, or `Nothing`.
    data Option<T>: OptionTag where #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)] {
        /// Some value of type `T`.
        Some(value: T),
        /// No value.
        Nothing,
    }
}

impl<T> Option<T> {
    pub fn is_some(&self) -> bool {
        match self {
            Option::Some(_) => true,
            Option::Nothing => false,
        }
    }

    pub fn is_nothing(&self) -> bool {
        !self.is_some()
    }

    /// Returns the contained value, or an [`UnwrappingError`] if there is none.
    pub fn try_unwrap(self) -> core::result::Result<T, UnwrappingError> {
        match self {
            Option::Some(value) => Ok(value),
            Option::Nothing => Err(UnwrappingError::new("unwrap", "Option::Nothing")),
        }
    }

    /// Returns the contained value, or an [`UnwrappingError`] carrying `message` if there is none.
    pub fn try_expect(self, message: &str) -> core::result::Result<T, UnwrappingError> {
        match self {
            Option::Some(value) => Ok(value),
            Option::Nothing => Err(UnwrappingError::with_message("expect", "Option::Nothing", message)),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrappingError`]'s message if the option is `Nothing`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(err) => error::unwrap_failed(err),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the option is `Nothing`.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self.try_expect(message) {
            Ok(value) => value,
            Err(err) => error::unwrap_failed(err),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Option::Some(value) => value,
            Option::Nothing => default,
        }
    }

    pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Option::Some(value) => value,
            Option::Nothing => default(),
        }
    }

    /// Applies `f` to the contained value. `f` is not called on `Nothing`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
        match self {
            Option::Some(value) => Option::Some(f(value)),
            Option::Nothing => Option::Nothing,
        }
    }

    /// Chains a computation that may itself produce nothing.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
        match self {
            Option::Some(value) => f(value),
            Option::Nothing => Option::Nothing,
        }
    }

    /// Keeps `self` if it holds a value, otherwise falls back to `f()`.
    pub fn or_else(self, f: impl FnOnce() -> Option<T>) -> Option<T> {
        match self {
            Option::Some(value) => Option::Some(value),
            Option::Nothing => f(),
        }
    }

    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Option::Some(value) => Result::Ok(value),
            Option::Nothing => Result::Err(err),
        }
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Option::Some(value) => Option::Some(value),
            Option::Nothing => Option::Nothing,
        }
    }

    /// Pulls at most one element out of `sequence`.
    ///
    /// ```rust
    /// use sum_types::option::Option;
    ///
    /// let mut digits = vec![7, 8, 9].into_iter();
    /// assert_eq!(Option::next(&mut digits), Option::Some(7));
    /// assert_eq!(digits.as_slice(), &[8, 9]);
    /// ```
    pub fn next<I>(sequence: &mut I) -> Option<T>
    where
        I: Iterator<Item = T>,
    {
        sequence.next().into()
    }
}

impl<T, E> Option<Result<T, E>> {
    /// Turns an optional result into a result of an option; the inverse of
    /// [`Result::transpose`].
    pub fn transpose(self) -> Result<Option<T>, E> {
        match self {
            Option::Some(Result::Ok(value)) => Result::Ok(Option::Some(value)),
            Option::Some(Result::Err(err)) => Result::Err(err),
            Option::Nothing => Result::Ok(Option::Nothing),
        }
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        Option::Nothing
    }
}

impl<T> From<core::option::Option<T>> for Option<T> {
    fn from(option: core::option::Option<T>) -> Self {
        match option {
            Some(value) => Option::Some(value),
            None => Option::Nothing,
        }
    }
}

impl<T> From<Option<T>> for core::option::Option<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Option::Some(value) => Some(value),
            Option::Nothing => None,
        }
    }
}
