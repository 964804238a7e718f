use crate::ports::outbound::image_api::{ImageApi, ImageApiError, ImageEntry};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

const NAMED_URL: &str = "https://api.scryfall.com/cards/named";

#[derive(Debug, Deserialize)]
struct ImageUris {
    png: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CardFace {
    image_uris: Option<ImageUris>,
}

#[derive(Debug, Deserialize)]
struct ScryfallCard {
    id: String,
    image_uris: Option<ImageUris>,
    card_faces: Option<Vec<CardFace>>,
}

impl ScryfallCard {
    /// Double faced cards only carry images per face, the front face wins.
    fn png(self) -> Option<String> {
        self.image_uris
            .and_then(|uris| uris.png)
            .or_else(|| {
                self.card_faces?
                    .into_iter()
                    .next()?
                    .image_uris?
                    .png
            })
    }
}

pub struct Scryfall {
    http_client: reqwest::Client,
}

impl Scryfall {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl ImageApi for Scryfall {
    async fn find_exact(
        &self,
        name: &str,
        set_code: &str,
    ) -> Result<Option<ImageEntry>, ImageApiError> {
        let set = set_code.to_lowercase();
        let response = self
            .http_client
            .get(NAMED_URL)
            .query(&[("exact", name), ("set", set.as_str())])
            .send()
            .await
            .map_err(|why| ImageApiError::new(format!("Lookup of {name} failed: {why}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            log::info!("Scryfall has no exact match for {name} ({set_code})");
            return Ok(None);
        }

        let card = response
            .error_for_status()
            .map_err(|why| ImageApiError::new(format!("Lookup of {name} failed: {why}")))?
            .json::<ScryfallCard>()
            .await
            .map_err(|why| ImageApiError::new(format!("Unreadable card {name}: {why}")))?;

        let id = card.id.clone();
        Ok(card.png().map(|url| ImageEntry { id, url }))
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, ImageApiError> {
        let bytes = self
            .http_client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|why| ImageApiError::new(format!("Download of {url} failed: {why}")))?
            .bytes()
            .await
            .map_err(|why| ImageApiError::new(format!("Download of {url} failed: {why}")))?;

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_faced_png() {
        let body = r#"{
            "object": "card",
            "id": "ce711943-c1a1-43a0-8b89-8d169cfb8e06",
            "name": "Lightning Bolt",
            "image_uris": {
                "small": "https://cards.scryfall.io/small/front/c/e/ce711943.jpg",
                "png": "https://cards.scryfall.io/png/front/c/e/ce711943.png"
            }
        }"#;

        let card: ScryfallCard = serde_json::from_str(body).unwrap();
        assert_eq!(card.id, "ce711943-c1a1-43a0-8b89-8d169cfb8e06");
        assert_eq!(
            card.png().as_deref(),
            Some("https://cards.scryfall.io/png/front/c/e/ce711943.png")
        );
    }

    #[test]
    fn test_double_faced_png_uses_front() {
        let body = r#"{
            "id": "11bf83bb-c95b-4b4f-9a56-ce7a1816307a",
            "name": "Delver of Secrets // Insectile Aberration",
            "card_faces": [
                {"name": "Delver of Secrets", "image_uris": {"png": "https://cards.scryfall.io/png/front/1/1/11bf83bb.png"}},
                {"name": "Insectile Aberration", "image_uris": {"png": "https://cards.scryfall.io/png/back/1/1/11bf83bb.png"}}
            ]
        }"#;

        let card: ScryfallCard = serde_json::from_str(body).unwrap();
        assert_eq!(
            card.png().as_deref(),
            Some("https://cards.scryfall.io/png/front/1/1/11bf83bb.png")
        );
    }

    #[test]
    fn test_card_without_images() {
        let card: ScryfallCard = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(card.png(), None);
    }
}
