pub mod admin;
pub mod product;
