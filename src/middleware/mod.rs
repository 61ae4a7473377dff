pub mod request_tracker;

pub use request_tracker::{RequestMetrics, RequestTracker};
