mod arguments;
mod car_tutorial;
mod concurrency;
mod relaxed;
mod skip;
