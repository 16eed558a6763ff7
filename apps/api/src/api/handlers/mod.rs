// HTTP handlers, one module per resource

pub mod developers;
pub mod health;
