pub mod catalog;
pub mod fetch;
