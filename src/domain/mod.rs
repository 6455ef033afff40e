pub mod error;
pub mod lang;
pub mod model;
pub mod traits;
