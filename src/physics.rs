pub mod gravity;

pub use gravity::{acceleration, net_acceleration};
