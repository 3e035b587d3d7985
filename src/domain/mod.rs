// Domain layer: the record model and the traits the driver depends on.

pub mod model;
pub mod ports;
