// Domain layer: request/result value types and the estimator port. No I/O.

pub mod model;
pub mod ports;
