// Domain layer: price bands, quotes, menu choices and the validator port.

pub mod model;
pub mod ports;
