#[macro_use]
extern crate sum_types;

use sum_types::{SumType, Tag};


sum_types! {
    /// This is a doc comment. It should be compiled into a comment *only* on the generated `Nat`
    /// enum, and never on `NatTag`.
    data Nat: NatTag where #[derive(Debug, Clone, PartialEq)] {
        /// Zero.
        P,
        /// Twice `N`, plus one.
        I(n: Box<Nat> = Box::new(Nat::P)),
        /// Twice `N`.
        O(n: Box<Nat> = Box::new(Nat::P)),
    }

    /// As this is also a doc comment, it should also be compiled into a comment *only* on the
    /// generated `Parity` enum.
    data Parity: ParityTag {
        Even,
        Odd,
    }
}


fn value(nat: &Nat) -> usize {
    match nat {
        Nat::P => 0,
        Nat::I(n) => 2 * value(n) + 1,
        Nat::O(n) => 2 * value(n),
    }
}

fn parity(nat: &Nat) -> Parity {
    match nat {
        Nat::I(_) => Parity::Odd,
        Nat::P | Nat::O(_) => Parity::Even,
    }
}


#[test]
fn documented_declarations_still_work() {
    let six = Nat::O(Box::new(Nat::I(Box::new(Nat::I(Box::new(Nat::P))))));
    assert_eq!(value(&six), 6);
    assert_eq!(parity(&six).tag(), ParityTag::Even);
    assert_eq!(Nat::construct(NatTag::I, args![]), Ok(Nat::I(Box::new(Nat::P))));
}

#[test]
fn doc_comments_do_not_leak_into_the_schema() {
    assert_eq!(NatTag::ALL.len(), 3);
    assert_eq!(NatTag::I.spec().to_string(), "I(n: Box<Nat> = ..)");
    assert_eq!(Parity::descriptor().to_string(), "Parity { Even, Odd }");
}
