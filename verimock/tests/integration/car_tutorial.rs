use std::fmt;

use verimock::{any, capture, create_mock, or, CaptureSequence, CaptureSlot, Times};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
        };
        f.write_str(name)
    }
}

#[verimock::mock]
pub trait Car {
    fn drive(&self, direction: Direction, speed: u64) -> String;

    fn cruise(&self, direction: Direction) -> String {
        self.drive(direction, 30)
    }
}

pub struct RealCar;

impl Car for RealCar {
    fn drive(&self, direction: Direction, speed: u64) -> String {
        format!("Driving {direction} at {speed} km/h")
    }
}

#[test]
fn real_car() {
    assert_eq!(RealCar.drive(Direction::East, 55), "Driving EAST at 55 km/h");
    assert_eq!(RealCar.cruise(Direction::North), "Driving NORTH at 30 km/h");
}

#[test]
fn some_verify_uses() {
    let car = create_mock::<MockCar>();
    car.mock_drive(Direction::North, 30)
        .returns("Driving north!".to_string());

    car.drive(Direction::North, 30);

    car.mock_drive(Direction::North, 30)
        .assert_called(Times::default());
    car.mock_drive(any(), any()).assert_called(Times::at_least(1));
    car.mock_drive(any(), any()).assert_called(Times::at_most(3));
    car.mock_drive(any(), any()).assert_called(1);

    assert_eq!(car.drive(Direction::North, 30), "Driving north!");
}

#[test]
fn group_verify() {
    let car = MockCar::default();
    car.mock_drive(Direction::North, any())
        .returns("Driving north!".to_string());
    car.mock_drive(Direction::South, any())
        .returns("Driving south!".to_string());
    car.mock_drive(Direction::East, any())
        .returns("Driving east!".to_string());
    car.mock_drive(Direction::West, any())
        .returns("Driving west!".to_string());

    car.drive(Direction::North, 30);
    car.drive(Direction::South, 30);
    car.drive(Direction::East, 30);
    car.drive(Direction::West, 30);

    car.mock_drive(Direction::North, any()).assert_called(1);
    car.mock_drive(Direction::South, any()).assert_called(1);

    // east and west are not verified yet
    assert_eq!(
        car.mock.confirm_verified().unwrap_err().to_string(),
        "Car has unverified calls: Car::drive(East, 30), Car::drive(West, 30)"
    );

    verimock::verify_order(
        &car,
        &[
            car.mock_drive(Direction::North, any()).spec(),
            car.mock_drive(Direction::East, any()).spec(),
        ],
    );

    verimock::verify_sequence(
        &car,
        &[
            car.mock_drive(Direction::North, any()).spec(),
            car.mock_drive(Direction::South, any()).spec(),
            car.mock_drive(Direction::East, any()).spec(),
            car.mock_drive(Direction::West, any()).spec(),
        ],
    );

    verimock::confirm_verified(&car);

    verimock::exclude_records(&car, car.mock_drive(Direction::West, any()).spec());
    car.drive(Direction::West, 80);
    verimock::confirm_verified(&car);
}

#[test]
fn or_matcher() {
    let car = MockCar::default();
    car.mock_drive(or([Direction::East, Direction::West]), 30)
        .returns("Driving somewhere at speed 30!".to_string());

    assert_eq!(car.drive(Direction::East, 30), "Driving somewhere at speed 30!");
    assert_eq!(car.drive(Direction::West, 30), "Driving somewhere at speed 30!");
}

#[test]
#[should_panic(expected = "mock not found for Car::drive(North, 30)")]
fn or_matcher_rejects_other_values() {
    let car = MockCar::default();
    car.mock_drive(or([Direction::East, Direction::West]), 30)
        .returns("Driving somewhere at speed 30!".to_string());

    car.drive(Direction::North, 30);
}

#[test]
fn single_and_multiple_argument_capture() {
    let car = create_mock::<MockCar>();
    let slot = CaptureSlot::new();
    car.mock_drive(any(), capture(&slot))
        .returns("Driving!".to_string());

    car.drive(Direction::East, 55);
    assert_eq!(slot.captured(), Some(55));

    let speeds = CaptureSequence::new();
    car.mock_drive(any(), capture(&speeds))
        .returns("Driving...".to_string());

    car.drive(Direction::East, 10);
    car.drive(Direction::West, 20);
    car.drive(Direction::North, 30);
    car.drive(Direction::South, 40);

    assert_eq!(speeds.values(), vec![10, 20, 30, 40]);
    // the later stub shadows the first one
    assert_eq!(slot.captured(), Some(55));
}

#[test]
fn capture_is_skipped_when_other_arguments_do_not_match() {
    let car = MockCar::default();
    let speed = CaptureSlot::new();
    car.mock_drive(any(), any()).returns("fallback".to_string());
    car.mock_drive(Direction::North, capture(&speed))
        .returns("north".to_string());

    assert_eq!(car.drive(Direction::South, 90), "fallback");
    assert!(!speed.is_captured());

    assert_eq!(car.drive(Direction::North, 45), "north");
    assert_eq!(speed.captured(), Some(45));
}

#[test]
fn order_allows_gaps_but_sequence_does_not() {
    let car = MockCar::default();
    car.mock_drive(any(), any()).returns(String::new());
    for direction in [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ] {
        car.drive(direction, 30);
    }

    let north = car.mock_drive(Direction::North, any()).spec();
    let east = car.mock_drive(Direction::East, any()).spec();

    assert!(car.mock.verify_order(&[north.clone(), east.clone()]).is_ok());
    assert!(car.mock.verify_order(&[east.clone(), north.clone()]).is_err());
    assert_eq!(
        car.mock
            .verify_sequence(&[north, east])
            .unwrap_err()
            .to_string(),
        "calls do not match the expected sequence\n  expected: Car::drive(North, any()), Car::drive(East, any())\n  actual: Car::drive(North, 30), Car::drive(South, 30), Car::drive(East, 30), Car::drive(West, 30)"
    );
}

#[test]
fn sequence_in_another_order_fails() {
    let car = MockCar::default();
    car.mock_drive(any(), any()).returns(String::new());
    car.drive(Direction::North, 30);
    car.drive(Direction::East, 30);

    let north = car.mock_drive(Direction::North, any()).spec();
    let east = car.mock_drive(Direction::East, any()).spec();

    assert!(car.mock.verify_sequence(&[east.clone(), north.clone()]).is_err());
    assert!(car.mock.verify_sequence(&[north, east]).is_ok());
    verimock::confirm_verified(&car);
}

#[test]
fn mocks_do_not_share_calls() {
    let car = MockCar::default();
    let other = MockCar::default();
    car.mock_drive(any(), any()).returns(String::new());
    car.drive(Direction::West, 50);

    assert!(other.mock.log().is_empty());
    verimock::confirm_verified(&other);
    other.mock_drive(any(), any()).assert_called(0);
    car.mock_drive(Direction::West, 50).assert_called(1);
}

#[test]
#[should_panic(
    expected = "Expected Car::drive(any(), any()) to be called 2 times, but it was called 1 times"
)]
fn exact_count_mismatch() {
    let car = MockCar::default();
    car.mock_drive(any(), any()).returns(String::new());
    car.drive(Direction::North, 30);

    car.mock_drive(any(), any()).assert_called(2);
}

#[test]
fn verify_with_capture() {
    let car = MockCar::default();
    car.mock_drive(any(), any()).returns(String::new());
    car.drive(Direction::North, 30);
    car.drive(Direction::South, 70);

    let directions = CaptureSequence::new();
    car.mock_drive(capture(&directions), any()).assert_called(2);

    assert_eq!(directions.values(), vec![Direction::North, Direction::South]);
}
