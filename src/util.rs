pub mod math;
pub mod timer;
pub mod trace;
