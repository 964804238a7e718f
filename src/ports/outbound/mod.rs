pub mod blob_store;
pub mod card_catalog;
pub mod image_api;
pub mod queue;
pub mod secret_store;
pub mod social;
