//! Dynamic case analysis over sum types.
//!
//! A union generated by `sum_types!` is a plain Rust enum, so a native `match` over it is
//! checked for exhaustiveness by the compiler, and that is what the `Option` and `Result`
//! combinators use. The types here cover the other situation: when the arms are assembled at
//! runtime, or when a partial match should be reported as a value instead of refusing to
//! compile. Arms are tried in order and the first one that matches wins.

use crate::error::NonExhaustiveMatchError;
use crate::schema::SumType;


/// One arm of a case analysis: either produces a result from the scrutinee or hands it back.
pub struct Case<'a, S, R> {
    arm: Box<dyn FnOnce(S) -> Result<R, S> + 'a>,
}

impl<'a, S, R> Case<'a, S, R> {
    /// An arm from a closure that returns `Err(scrutinee)` when it does not apply.
    ///
    /// [`case!`](crate::case!) writes such closures from a pattern.
    pub fn new(arm: impl FnOnce(S) -> Result<R, S> + 'a) -> Self {
        Case { arm: Box::new(arm) }
    }

    /// An arm matching every variant.
    pub fn wildcard(body: impl FnOnce(S) -> R + 'a) -> Self {
        Case::new(|scrutinee| Ok(body(scrutinee)))
    }

    pub fn try_match(self, scrutinee: S) -> Result<R, S> {
        (self.arm)(scrutinee)
    }
}

impl<'a, S: SumType + 'a, R> Case<'a, S, R> {
    /// An arm matching one variant by tag alone, without destructuring it.
    pub fn when(tag: S::Tag, body: impl FnOnce(S) -> R + 'a) -> Self {
        Case::new(move |scrutinee: S| {
            if scrutinee.is(tag) {
                Ok(body(scrutinee))
            } else {
                Err(scrutinee)
            }
        })
    }
}


/// An ordered list of arms waiting to be run against one scrutinee.
pub struct Match<'a, S, R> {
    scrutinee: S,
    arms: Vec<Case<'a, S, R>>,
}

impl<'a, S: SumType + 'a, R> Match<'a, S, R> {
    pub fn on(scrutinee: S) -> Self {
        Match {
            scrutinee,
            arms: Vec::new(),
        }
    }

    /// Appends an arm given as a closure, typically one written with [`case!`](crate::case!).
    pub fn case(self, arm: impl FnOnce(S) -> Result<R, S> + 'a) -> Self {
        self.arm(Case::new(arm))
    }

    /// Appends an already-built arm.
    pub fn arm(mut self, arm: Case<'a, S, R>) -> Self {
        self.arms.push(arm);
        self
    }

    pub fn when(self, tag: S::Tag, body: impl FnOnce(S) -> R + 'a) -> Self {
        self.arm(Case::when(tag, body))
    }

    /// Runs the arms in order. Fails if none of them matched.
    pub fn run(self) -> Result<R, NonExhaustiveMatchError> {
        let mut scrutinee = self.scrutinee;
        for arm in self.arms {
            scrutinee = match arm.try_match(scrutinee) {
                Ok(result) => return Ok(result),
                Err(unmatched) => unmatched,
            };
        }

        let err = NonExhaustiveMatchError {
            sum_type: S::NAME,
            variant: scrutinee.variant_name(),
        };
        diag!("{}", err);
        Err(err)
    }

    /// Runs the arms in order, falling back to `body` if none of them matched.
    pub fn otherwise(self, body: impl FnOnce(S) -> R + 'a) -> R {
        let mut scrutinee = self.scrutinee;
        for arm in self.arms {
            scrutinee = match arm.try_match(scrutinee) {
                Ok(result) => return result,
                Err(unmatched) => unmatched,
            };
        }
        body(scrutinee)
    }
}


/// Writes an arm closure from a pattern, an optional guard, and a body.
///
/// The closure returns `Ok(body)` when the pattern applies and hands the scrutinee back as
/// `Err` otherwise, which is the shape [`Match::case`] and [`Case::new`] expect. The pattern is
/// an ordinary Rust pattern, so nested variants are matched structurally:
/// `case!(Option::Some(Option::Some(inner)) => inner)` only applies when both layers are
/// `Some`. `case!(_ => ..)` is a wildcard.
#[macro_export]
macro_rules! case {
    ($pat:pat $(if $guard:expr)? => $body:expr) => {
        |scrutinee| match scrutinee {
            $pat $(if $guard)? => ::core::result::Result::Ok($body),
            #[allow(unreachable_patterns)]
            unmatched => ::core::result::Result::Err(unmatched),
        }
    };
}

/// Runs a dynamic case analysis: the scrutinee, `;`, then comma-separated `pattern => body` arms.
///
/// Evaluates to `Result<R, NonExhaustiveMatchError>`.
///
/// ```rust
/// # #[macro_use] extern crate sum_types;
/// use sum_types::option::Option;
///
/// # fn main() {
/// let nested = Option::Some(Option::Some(3));
/// let inner = match_cases!(&nested;
///     Option::Some(Option::Some(inner)) => *inner,
///     Option::Some(Option::Nothing) => 0,
/// );
/// assert_eq!(inner, Ok(3));
///
/// let missing = match_cases!(&nested; Option::Nothing => 0);
/// assert!(missing.is_err());
/// # }
/// ```
#[macro_export]
macro_rules! match_cases {
    ($scrutinee:expr; $($pat:pat $(if $guard:expr)? => $body:expr),+ $(,)?) => {
        $crate::Match::on($scrutinee)
            $(.case($crate::case!($pat $(if $guard)? => $body)))+
            .run()
    };
}
