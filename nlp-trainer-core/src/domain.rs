pub mod task;
pub mod request;
pub mod groups;
pub mod results;

pub use task::*;
pub use request::*;
pub use groups::*;
pub use results::*;
