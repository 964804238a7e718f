mod mtgio;

use crate::adapters::outbound::card_catalog::mtgio::MtgIo;
use crate::ports::outbound::card_catalog::CardCatalog;

#[must_use]
pub fn init_card_catalog(http_client: reqwest::Client) -> impl CardCatalog {
    MtgIo::new(http_client)
}
