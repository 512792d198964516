pub mod budget;
pub mod list;
