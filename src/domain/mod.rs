// Domain layer: course model, the course table and the source port.

pub mod catalog;
pub mod model;
pub mod ports;
