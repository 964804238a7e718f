mod scryfall;

use crate::adapters::outbound::image_api::scryfall::Scryfall;
use crate::ports::outbound::image_api::ImageApi;

#[must_use]
pub fn init_image_api(http_client: reqwest::Client) -> impl ImageApi {
    Scryfall::new(http_client)
}
