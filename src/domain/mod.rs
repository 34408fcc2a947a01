// Domain layer: the Person model and the greeting template table.

pub mod greeting;
pub mod model;
