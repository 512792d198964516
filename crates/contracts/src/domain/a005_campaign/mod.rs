pub mod aggregate;
pub mod budget;
