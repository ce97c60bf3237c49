#[macro_use]
extern crate sum_types;

use sum_types::{SumType, Tag};


sum_types! {
    data Int: IntTag where #[derive(Debug, Clone, PartialEq)] {
        Term,
        Zero(x: Box<Int> = Box::new(Int::Term)),
        Plus(x: Box<Int> = Box::new(Int::Term)),
        Minus(x: Box<Int> = Box::new(Int::Term)),
    }

    data IntPair: IntPairTag where #[derive(Debug, Clone, PartialEq)] {
        Int2(first: Int, second: Int),
    }

    data Entry<K, V>: EntryTag where #[derive(Debug, PartialEq)] {
        Vacant(key: K),
        Occupied(key: K, value: V),
    }
}


/// Balanced ternary: each digit wraps the more significant ones.
fn reify(int: &Int) -> isize {
    match int {
        Int::Term => 0,
        Int::Zero(x) => 3 * reify(x),
        Int::Plus(x) => 3 * reify(x) + 1,
        Int::Minus(x) => 3 * reify(x) - 1,
    }
}

fn first(pair: &IntPair) -> &Int {
    match pair {
        IntPair::Int2(first, _) => first,
    }
}

fn second(pair: &IntPair) -> &Int {
    match pair {
        IntPair::Int2(_, second) => second,
    }
}


#[test]
fn fields_bind_by_position() {
    // 1 - 3 = -2, written least significant digit first.
    let minus_two = Int::Plus(Box::new(Int::Minus(Box::new(Int::Term))));
    let four = Int::Plus(Box::new(Int::Plus(Box::new(Int::Term))));
    let pair = IntPair::Int2(minus_two, four);

    assert_eq!(reify(first(&pair)), -2);
    assert_eq!(reify(second(&pair)), 4);
}

#[test]
fn every_parameter_is_threaded_through() {
    let vacant: Entry<&str, u32> = Entry::Vacant("a");
    let occupied = Entry::Occupied("b", 2u32);

    assert_eq!(vacant.tag(), EntryTag::Vacant);
    assert_eq!(occupied.variant_name(), "Occupied");
    assert_eq!(Entry::<&str, u32>::PARAMS, &["K", "V"]);
    assert_eq!(EntryTag::Occupied.spec().to_string(), "Occupied(key: K, value: V)");
}

#[test]
fn multi_field_construction() {
    assert_eq!(
        Entry::<String, u32>::construct_named("Occupied", args!["k".to_owned(), 7u32]),
        Ok(Entry::Occupied("k".to_owned(), 7))
    );
    assert_eq!(
        IntPair::construct(IntPairTag::Int2, args![; second = Int::Term, first = Int::Zero(Box::new(Int::Term))]),
        Ok(IntPair::Int2(Int::Zero(Box::new(Int::Term)), Int::Term))
    );
    assert_eq!(reify(&Int::construct(IntTag::Minus, args![]).unwrap()), -1);
}
