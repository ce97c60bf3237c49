#[macro_use]
extern crate sum_types;

use sum_types::SumType;


mod routed {
    sum_types! {
        data Nat: NatTag where #[derive(Debug, Default)] #[tag: repr(u8)] {
            #[default]
            Z,
            S(n: Box<Nat>),
        }
    }
}

mod tagged_only {
    sum_types! {
        data Level: LevelTag where #[tag: repr(i16)] {
            Low,
            High,
        }
    }
}

mod stacked {
    sum_types! {
        data Message: MessageTag where #[derive(Debug)] #[derive(Clone)] #[tag: repr(u32)] #[allow(dead_code)] {
            Ping,
            Text(body: String),
        }
    }
}


#[test]
fn tag_attributes_reach_only_the_tag() {
    use routed::{Nat, NatTag};

    assert_eq!(NatTag::Z as u8, 0);
    assert_eq!(NatTag::S as u8, 1);
    assert_eq!(Nat::default().tag(), NatTag::Z);
    assert_eq!(format!("{:?}", Nat::S(Box::new(Nat::Z))), "S(Z)");
}

#[test]
fn union_without_attributes() {
    use tagged_only::{Level, LevelTag};

    assert_eq!(LevelTag::High as i16, 1);
    assert_eq!(Level::High.tag(), LevelTag::High);
}

#[test]
fn attributes_can_be_stacked() {
    use stacked::{Message, MessageTag};

    let text = Message::Text("hello".to_owned());
    let copy = text.clone();
    assert_eq!(copy.tag(), MessageTag::Text);
    assert_eq!(MessageTag::Text as u32, 1);
    assert_eq!(MessageTag::Ping.to_string(), "Ping");
    assert!(matches!(Message::Ping, Message::Ping));
}
