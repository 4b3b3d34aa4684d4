// Domain layer: the value types and the ports the demo driver is written against.

pub mod cents;
pub mod point;
pub mod ports;

pub use cents::Cents;
pub use point::Point3;
