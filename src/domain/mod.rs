// Domain layer: sign model and the input port.

pub mod model;
pub mod ports;
