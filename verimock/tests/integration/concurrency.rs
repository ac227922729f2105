use std::thread;

use verimock::{any, CaptureSequence};

#[verimock::mock]
pub trait Sensor {
    fn sample(&self, channel: u32) -> u32;
}

#[test]
fn calls_from_many_threads_are_all_recorded() {
    let sensor = MockSensor::default();
    let channels = CaptureSequence::new();
    sensor
        .mock_sample(verimock::capture(&channels))
        .returns_with(|channel: u32| channel * 2);

    let handles: Vec<_> = (0..8)
        .map(|channel| {
            let sensor = sensor.clone();
            thread::spawn(move || sensor.sample(channel))
        })
        .collect();
    let mut results: Vec<u32> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    results.sort();

    assert_eq!(results, vec![0, 2, 4, 6, 8, 10, 12, 14]);
    assert_eq!(channels.len(), 8);
    sensor.mock_sample(any()).assert_called(8);

    let seqs: Vec<u64> = sensor.mock.log().iter().map(|call| call.seq()).collect();
    assert_eq!(seqs, (0..8).collect::<Vec<u64>>());
    verimock::confirm_verified(&sensor);
}
