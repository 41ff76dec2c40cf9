pub mod login;
pub mod products;
pub mod view;
