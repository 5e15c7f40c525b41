pub mod latency;
pub mod shared;

pub use latency::{Latency, LatencyProfile, NoLatency, Operation, SimulatedLatency};
pub use shared::Shared;
