pub mod clock;

pub use clock::{FixedClock, SystemClock, WallClock};
