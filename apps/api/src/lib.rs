pub mod analysis;
pub mod assessment;
pub mod auth;
pub mod client;
pub mod config;
pub mod db;
pub mod debug;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod scoring;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;
