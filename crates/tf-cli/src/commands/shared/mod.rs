pub mod identity;
pub mod limit;
pub mod parse;
