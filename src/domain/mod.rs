pub mod app;
pub mod card;
pub mod credentials;
pub mod error;
pub mod functions;
pub mod message;
pub mod strategy;
pub mod utils;
