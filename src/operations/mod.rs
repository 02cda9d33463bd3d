pub mod add;
pub mod browse;
pub mod import;
pub mod remove;
pub mod summary;
