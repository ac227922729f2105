use verimock::{any, Defaults};

#[verimock::mock]
pub trait Wipers {
    fn start(&self, speed: u8);
    fn status(&self) -> String;
    fn cycles(&self) -> u64;
}

#[test]
fn relaxed_mock_answers_registered_types() {
    let wipers = MockWipers::relaxed(Defaults::unit().with(String::new).with(|| 0u64));

    wipers.start(2);
    assert_eq!(wipers.status(), "");
    assert_eq!(wipers.cycles(), 0);
    wipers.mock_start(2).assert_called(1);
}

#[test]
fn stubs_take_precedence_over_defaults() {
    let wipers = MockWipers::relaxed(Defaults::new().with(|| "idle".to_string()));
    wipers.mock_status().returns("wiping".to_string());

    assert_eq!(wipers.status(), "wiping");
}

#[test]
fn unit_defaults_relax_unit_methods_only() {
    let wipers = MockWipers::relaxed(Defaults::unit());
    assert!(wipers.mock.is_relaxed());

    wipers.start(1);
    wipers.start(3);
    wipers.mock_start(any()).assert_called(2);
}

#[test]
#[should_panic(expected = "mock not found for Wipers::cycles()")]
fn unregistered_type_still_fails() {
    let wipers = MockWipers::relaxed(Defaults::unit());
    wipers.cycles();
}

#[test]
#[should_panic(expected = "mock not found for Wipers::start(1)")]
fn strict_mock_fails_for_unit_methods() {
    let wipers = MockWipers::default();
    assert!(!wipers.mock.is_relaxed());
    wipers.start(1);
}
