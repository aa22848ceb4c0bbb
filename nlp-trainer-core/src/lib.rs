pub mod catalog;
pub mod domain;
pub mod error;
pub mod explanation;
pub mod validation;

pub use catalog::*;
pub use domain::*;
pub use error::*;
pub use explanation::*;
pub use validation::*;
