use crate::domain::card::CatalogCard;
use crate::domain::error::AcquireError;
use crate::domain::strategy::Strategy;
use crate::domain::utils::random;
use crate::ports::outbound::card_catalog::CardCatalog;

/// Runs the strategy's catalog query and picks one of the matching cards.
pub async fn select<CC: CardCatalog + Send + Sync>(
    catalog: &CC,
    strategy: &Strategy,
) -> Result<CatalogCard, AcquireError> {
    let mut query = strategy.query();
    if strategy.wants_random_set() {
        let set_codes = catalog.set_codes().await?;
        let Some(set_code) = random::pick(set_codes) else {
            return Err(AcquireError::NoMatch(String::from("set list")));
        };
        log::debug!("Picked set {set_code} for '{strategy}'");
        query = query.in_set(&set_code);
    }

    let candidates: Vec<CatalogCard> = catalog
        .cards(&query)
        .await?
        .into_iter()
        .filter(|card| query.matches(card))
        .collect();

    log::debug!("{} candidates for '{strategy}'", candidates.len());

    random::pick(candidates).ok_or_else(|| AcquireError::NoMatch(strategy.to_string()))
}
