extern crate bit_vec;

#[macro_use]
extern crate sum_types;


use bit_vec::BitVec;
use sum_types::SumType;


#[derive(Debug)]
pub struct State {
    loc: usize,
    bits: BitVec,
}

impl State {
    fn blank(len: usize) -> State {
        State {
            loc: 0,
            bits: BitVec::from_elem(len, false),
        }
    }

    fn tape(&self) -> String {
        self.bits.iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }
}

#[derive(Debug, PartialEq)]
pub enum Fault {
    OffTheLeft,
    OffTheRight,
}


sum_types! {
    data Program: Instruction where #[derive(Debug, Clone, PartialEq)] {
        Empty,
        Left(next: Box<Program> = Box::new(Program::Empty)),
        Right(next: Box<Program> = Box::new(Program::Empty)),
        Flip(next: Box<Program> = Box::new(Program::Empty)),
        Loop(body: Box<Program> = Box::new(Program::Empty), next: Box<Program> = Box::new(Program::Empty)),
    }
}


fn run(program: &Program, state: &mut State) -> Result<(), Fault> {
    match program {
        Program::Empty => Ok(()),
        Program::Left(next) => {
            if state.loc == 0 {
                return Err(Fault::OffTheLeft);
            }
            state.loc -= 1;
            run(next, state)
        }
        Program::Right(next) => {
            if state.loc + 1 >= state.bits.len() {
                return Err(Fault::OffTheRight);
            }
            state.loc += 1;
            run(next, state)
        }
        Program::Flip(next) => {
            let bit = state.bits.get(state.loc).unwrap_or(false);
            state.bits.set(state.loc, !bit);
            run(next, state)
        }
        Program::Loop(body, next) => {
            while state.bits.get(state.loc) == Some(true) {
                run(body, state)?;
            }
            run(next, state)
        }
    }
}


macro_rules! sf {
    (< $($prog:tt)*) => { Program::Left(Box::new(sf!($($prog)*))) };
    (> $($prog:tt)*) => { Program::Right(Box::new(sf!($($prog)*))) };
    (* $($prog:tt)*) => { Program::Flip(Box::new(sf!($($prog)*))) };
    ([$($body:tt)*] $($prog:tt)*) => { Program::Loop(Box::new(sf!($($body)*)), Box::new(sf!($($prog)*))) };
    () => { Program::Empty };
}


#[test]
fn skipped_loop() {
    let program = sf! { > * > * > * > [ * < ] };
    let mut state = State::blank(8);
    run(&program, &mut state).unwrap();

    assert_eq!(state.tape(), "01110000");
    assert_eq!(state.loc, 4);
}

#[test]
fn loop_sweeps_back() {
    let program = sf! { > * > * > * [ * < ] };
    let mut state = State::blank(8);
    run(&program, &mut state).unwrap();

    assert_eq!(state.tape(), "00000000");
    assert_eq!(state.loc, 0);
}

#[test]
fn loop_runs_until_a_clear_cell() {
    let program = sf! { > * < * [ > ] };
    let mut state = State::blank(4);
    run(&program, &mut state).unwrap();

    assert_eq!(state.tape(), "1100");
    assert_eq!(state.loc, 2);
}

#[test]
fn falling_off_the_tape() {
    assert_eq!(run(&sf! { < }, &mut State::blank(4)), Err(Fault::OffTheLeft));
    assert_eq!(run(&sf! { > > > > }, &mut State::blank(4)), Err(Fault::OffTheRight));
}

#[test]
fn defaults_terminate_programs() {
    assert_eq!(Program::construct(Instruction::Loop, args![]), Ok(sf! { [] }));
    assert_eq!(
        Program::construct(Instruction::Flip, args![Box::new(sf! { > })]),
        Ok(sf! { * > })
    );
    assert_eq!(sf! { * [ > ] }.tag(), Instruction::Flip);
}
