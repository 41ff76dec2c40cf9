pub mod core {
    pub mod config;
    pub mod error;
    pub mod state;
    pub mod routes;
    pub mod startup;
    pub mod tracing_init;
}

pub mod models;
pub mod stores;
pub mod security;
pub mod utils;
pub mod handlers;
