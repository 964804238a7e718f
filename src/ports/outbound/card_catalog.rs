use crate::domain::card::CatalogCard;
use crate::domain::strategy::CardQuery;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
#[error("Error querying the card catalog: {0}")]
pub struct CatalogError(String);

impl CatalogError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CardCatalog {
    async fn set_codes(&self) -> Result<Vec<String>, CatalogError>;
    /// An empty result is not an error here, callers decide what it means.
    async fn cards(&self, query: &CardQuery) -> Result<Vec<CatalogCard>, CatalogError>;
}
