pub mod api;
pub mod gallery;
