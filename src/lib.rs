pub mod domain;
pub mod utils;

pub use domain::greeting::supported_languages;
pub use domain::model::Person;
pub use utils::error::{GreeterError, Result};
