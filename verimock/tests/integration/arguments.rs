use verimock::{any, eq, Any};

#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub name: String,
    pub seat: u8,
}

#[verimock::mock]
pub trait Shuttle {
    fn board(&self, passenger: &Passenger) -> bool;
    fn route(&self, a: u8, b: u16, c: u32, d: u64, e: i8, f: String) -> String;
    fn distance(&self, (from, to): (u32, u32)) -> u32 {
        to - from
    }
    fn _idle(&self);
}

#[test]
fn reference_arguments_are_cloned() {
    let shuttle = MockShuttle::default();
    let alice = Passenger {
        name: "Alice".to_string(),
        seat: 3,
    };
    shuttle.mock_board(alice.clone()).returns(true);
    shuttle.mock_board(Any).returns(false);

    assert!(shuttle.board(&alice));
    assert!(!shuttle.board(&Passenger {
        name: "Bob".to_string(),
        seat: 4
    }));
    shuttle.mock_board(alice).assert_called(1);
}

#[test]
fn many_arguments() {
    let shuttle = MockShuttle::default();
    shuttle
        .mock_route(1, any(), eq(3), any(), -1, "loop")
        .returns_with(|a: u8, b: u16, c: u32, d: u64, e: i8, f: String| {
            format!("{a}-{b}-{c}-{d}-{e}-{f}")
        });

    assert_eq!(
        shuttle.route(1, 2, 3, 4, -1, "loop".to_string()),
        "1-2-3-4--1-loop"
    );
    assert_eq!(
        shuttle.mock.log()[0].to_string(),
        "Shuttle::route(1, 2, 3, 4, -1, \"loop\")"
    );
}

#[test]
fn patterns_are_renamed() {
    let shuttle = MockShuttle::default();
    shuttle.mock_distance(Any).calls_real_impl();

    assert_eq!(shuttle.distance((10, 25)), 15);
    shuttle.mock_distance((10, 25)).assert_called(1);
}

#[test]
fn leading_underscore() {
    let shuttle = MockShuttle::default();
    shuttle.mock__idle().returns(());

    shuttle._idle();
    shuttle.mock__idle().assert_called(1);
}
