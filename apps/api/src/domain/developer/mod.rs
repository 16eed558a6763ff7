// Developer domain module
// Contains the developer aggregate, its retirement snapshot, value objects
// and the level band rule

#![allow(clippy::module_inception)]

pub mod developer;
pub mod retired;
pub mod validation;
pub mod value_objects;

pub use developer::Developer;
pub use retired::RetiredDeveloper;
pub use value_objects::{DeveloperLevel, DeveloperSkillType, EmploymentStatus};
