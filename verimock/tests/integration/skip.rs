use verimock::Any;

pub struct Engine {
    pub cylinders: u8,
}

#[verimock::mock(skip_args(Engine), skip_fns(horn))]
pub trait Garage {
    fn service(&self, engine: &Engine, hours: u32) -> u32;

    fn horn(&self) -> String {
        "beep".to_string()
    }

    fn capacity() -> usize {
        2
    }
}

#[test]
fn skipped_arguments_are_not_recorded() {
    let garage = MockGarage::default();
    garage.mock_service(3).returns(120);

    assert_eq!(garage.service(&Engine { cylinders: 4 }, 3), 120);
    garage.mock_service(Any).assert_called(1);
    assert_eq!(garage.mock.log()[0].to_string(), "Garage::service(3)");
}

#[test]
fn skipped_methods_keep_their_body() {
    let garage = MockGarage::default();

    assert_eq!(garage.horn(), "beep");
    assert_eq!(MockGarage::capacity(), 2);
    assert!(garage.mock.log().is_empty());
}
