//! Success or failure, declared as a sum type.
//!
//! [`Result`] is `Ok(value)` or `Err(value)`, generated by `sum_types!` and given the usual
//! combinators. `map_or` takes its default as a ready-made value while `map_or_else` takes a
//! function of the error, mirroring the standard library.

use crate::error::{self, UnwrappingError};
use crate::option::Option;


sum_types! {
    /// Either a success holding a `T` or a failure holding an `E`.
    data Result<T, E>: ResultTag where #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)] {
        /// The success value.
        Ok(value: T),
        /// The error value.
        Err(value: E),
    }
}

impl<T, E> Result<T, E> {
    pub fn is_ok(&self) -> bool {
        match self {
            Result::Ok(_) => true,
            Result::Err(_) => false,
        }
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    pub fn try_unwrap(self) -> core::result::Result<T, UnwrappingError> {
        match self {
            Result::Ok(value) => Ok(value),
            Result::Err(_) => Err(UnwrappingError::new("unwrap", "Result::Err")),
        }
    }

    pub fn try_expect(self, message: &str) -> core::result::Result<T, UnwrappingError> {
        match self {
            Result::Ok(value) => Ok(value),
            Result::Err(_) => Err(UnwrappingError::with_message("expect", "Result::Err", message)),
        }
    }

    pub fn try_unwrap_err(self) -> core::result::Result<E, UnwrappingError> {
        match self {
            Result::Err(err) => Ok(err),
            Result::Ok(_) => Err(UnwrappingError::new("unwrap_err", "Result::Ok")),
        }
    }

    pub fn try_expect_err(self, message: &str) -> core::result::Result<E, UnwrappingError> {
        match self {
            Result::Err(err) => Ok(err),
            Result::Ok(_) => Err(UnwrappingError::with_message("expect_err", "Result::Ok", message)),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrappingError`]'s message if the result is an `Err`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(err) => error::unwrap_failed(err),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the result is an `Err`.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self.try_expect(message) {
            Ok(value) => value,
            Err(err) => error::unwrap_failed(err),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrappingError`]'s message if the result is `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(value) => value,
            Err(err) => error::unwrap_failed(err),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the result is `Ok`.
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self.try_expect_err(message) {
            Ok(value) => value,
            Err(err) => error::unwrap_failed(err),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Result::Ok(value) => value,
            Result::Err(_) => default,
        }
    }

    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Result::Ok(value) => value,
            Result::Err(err) => f(err),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Result::Ok(value) => Option::Some(value),
            Result::Err(_) => Option::Nothing,
        }
    }

    pub fn err(self) -> Option<E> {
        match self {
            Result::Ok(_) => Option::Nothing,
            Result::Err(err) => Option::Some(err),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> {
        match self {
            Result::Ok(value) => Result::Ok(f(value)),
            Result::Err(err) => Result::Err(err),
        }
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Result<T, F> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(err) => Result::Err(f(err)),
        }
    }

    /// Applies `f` to the success value, or returns `default` for an error.
    ///
    /// `default` is an already-evaluated value, so it is computed even when the result is `Ok`.
    /// Use [`Result::map_or_else`] to compute it from the error instead.
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Result::Ok(value) => f(value),
            Result::Err(_) => default,
        }
    }

    pub fn map_or_else<U>(self, default: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Result::Ok(value) => f(value),
            Result::Err(err) => default(err),
        }
    }

    /// Returns `res` if `self` is `Ok`, otherwise the error of `self`.
    pub fn and<U>(self, res: Result<U, E>) -> Result<U, E> {
        match self {
            Result::Ok(_) => res,
            Result::Err(err) => Result::Err(err),
        }
    }

    /// Chains a fallible computation onto the success value. `f` is never called on an error.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> {
        match self {
            Result::Ok(value) => f(value),
            Result::Err(err) => Result::Err(err),
        }
    }

    /// Returns `self` if it is `Ok`, otherwise `res`.
    pub fn or<F>(self, res: Result<T, F>) -> Result<T, F> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(_) => res,
        }
    }

    pub fn or_else<F>(self, f: impl FnOnce(E) -> Result<T, F>) -> Result<T, F> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(err) => f(err),
        }
    }

    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(err) => Result::Err(err),
        }
    }
}

impl<T, E> Result<Option<T>, E> {
    /// Turns a result of an option into an optional result.
    ///
    /// ```rust
    /// use sum_types::option::Option;
    /// use sum_types::result::Result;
    ///
    /// let found: Result<Option<i32>, &str> = Result::Ok(Option::Some(5));
    /// assert_eq!(found.transpose(), Option::Some(Result::Ok(5)));
    ///
    /// let empty: Result<Option<i32>, &str> = Result::Ok(Option::Nothing);
    /// assert_eq!(empty.transpose(), Option::Nothing);
    ///
    /// let failed: Result<Option<i32>, &str> = Result::Err("x");
    /// assert_eq!(failed.transpose(), Option::Some(Result::Err("x")));
    /// ```
    pub fn transpose(self) -> Option<Result<T, E>> {
        match self {
            Result::Ok(value) => match value {
                Option::Some(inner) => Option::Some(Result::Ok(inner)),
                Option::Nothing => Option::Nothing,
            },
            Result::Err(err) => Option::Some(Result::Err(err)),
        }
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Result::Ok(value),
            Err(err) => Result::Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Result::Ok(value) => Ok(value),
            Result::Err(err) => Err(err),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SumType, Tag};

    fn ok(value: i32) -> Result<i32, &'static str> {
        Result::Ok(value)
    }

    fn err(message: &'static str) -> Result<i32, &'static str> {
        Result::Err(message)
    }

    #[test]
    fn tag_tests() {
        assert!(ok(1).is_ok());
        assert!(!ok(1).is_err());
        assert!(err("x").is_err());
        assert_eq!(err("x").tag(), ResultTag::Err);
        assert_eq!(ResultTag::ALL, &[ResultTag::Ok, ResultTag::Err]);
    }

    #[test]
    fn unwrap_family() {
        assert_eq!(ok(1).unwrap(), 1);
        assert_eq!(err("x").unwrap_err(), "x");
        assert_eq!(ok(1).expect("fine"), 1);
        assert_eq!(err("x").expect_err("fine"), "x");
        assert_eq!(err("x").unwrap_or(7), 7);
        assert_eq!(err("four").unwrap_or_else(|e| e.len() as i32), 4);

        let failure = err("x").try_unwrap().unwrap_err();
        assert_eq!(failure.found(), "Result::Err");
        let failure = ok(1).try_expect_err("wanted an error").unwrap_err();
        assert_eq!(failure.message(), Some("wanted an error"));
        assert_eq!(failure.operation(), "expect_err");
    }

    #[test]
    #[should_panic(expected = "called `unwrap` on a `Result::Err` value")]
    fn unwrap_on_err_panics() {
        err("x").unwrap();
    }

    #[test]
    #[should_panic(expected = "config must load")]
    fn expect_on_err_panics_with_message() {
        err("x").expect("config must load");
    }

    #[test]
    #[should_panic(expected = "called `unwrap_err` on a `Result::Ok` value")]
    fn unwrap_err_on_ok_panics() {
        ok(1).unwrap_err();
    }

    #[test]
    #[should_panic(expected = "wanted an error")]
    fn expect_err_on_ok_panics_with_message() {
        ok(1).expect_err("wanted an error");
    }

    #[test]
    fn conversions_to_option() {
        assert_eq!(ok(1).ok(), Option::Some(1));
        assert_eq!(err("x").ok(), Option::Nothing);
        assert_eq!(err("x").err(), Option::Some("x"));
        assert_eq!(ok(1).err(), Option::Nothing);
    }

    #[test]
    fn map_or_takes_a_ready_value() {
        assert_eq!(ok(2).map_or(0, |v| v * 10), 20);
        assert_eq!(err("x").map_or(0, |v| v * 10), 0);
        assert_eq!(err("four").map_or_else(|e| e.len() as i32, |v| v * 10), 4);
    }

    #[test]
    fn and_or() {
        assert_eq!(ok(1).and(ok(2)), ok(2));
        assert_eq!(err("a").and(ok(2)), err("a"));
        assert_eq!(ok(1).or(err("b")), ok(1));
        assert_eq!(err("a").or(ok(3)), ok(3));
        assert_eq!(err("a").or_else(|e| Result::<i32, usize>::Err(e.len())), Result::Err(1));
        assert_eq!(ok(5).map_err(|e| e.len()), Result::<i32, usize>::Ok(5));
    }

    #[test]
    fn and_then_short_circuits() {
        let mut calls = 0;
        let chained = err("stop").and_then(|v| {
            calls += 1;
            ok(v + 1)
        });
        assert_eq!(chained, err("stop"));
        assert_eq!(calls, 0);
        assert_eq!(ok(1).and_then(|v| ok(v + 1)), ok(2));
    }

    #[test]
    fn std_conversions() {
        let ours: Result<u8, ()> = core::result::Result::Ok(1).into();
        assert_eq!(ours, Result::Ok(1));
        let back: core::result::Result<u8, ()> = ours.into();
        assert_eq!(back, Ok(1));
        assert_eq!(Result::<i32, &str>::NAME, "Result");
        assert_eq!(Result::<i32, &str>::PARAMS, &["T", "E"]);
    }
}
