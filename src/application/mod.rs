pub mod input;
pub mod translate;
