// Domain layer: the segment value type, the session report and the settings port.

pub mod model;
pub mod ports;
pub mod segment;
