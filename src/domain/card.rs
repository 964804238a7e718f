use serde::{Deserialize, Serialize};

/// A single entry returned by the card catalog.
#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogCard {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub rarity: String,
    pub set_code: String,
    pub set_name: String,
    pub subtypes: Vec<String>,
    pub type_line: String,
    pub image_url: Option<String>,
}

impl CatalogCard {
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

#[cfg_attr(test, derive(Clone, PartialEq))]
#[derive(Debug)]
pub struct ResolvedImage {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Catalog metadata joined with the high resolution image that will be stored.
#[derive(Debug)]
pub struct CardRecord {
    name: String,
    artist: String,
    rarity: String,
    set_code: String,
    set_name: String,
    type_line: String,
    image: Vec<u8>,
    filename: String,
}

impl CardRecord {
    #[must_use]
    pub fn new(card: CatalogCard, image: ResolvedImage) -> Self {
        Self {
            name: card.name,
            artist: card.artist,
            rarity: card.rarity,
            set_code: card.set_code,
            set_name: card.set_name,
            type_line: card.type_line,
            image: image.bytes,
            filename: image.filename,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    #[must_use]
    pub fn rarity(&self) -> &str {
        &self.rarity
    }

    #[must_use]
    pub fn set_code(&self) -> &str {
        &self.set_code
    }

    #[must_use]
    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    #[must_use]
    pub fn type_line(&self) -> &str {
        &self.type_line
    }

    #[must_use]
    pub fn image(&self) -> &[u8] {
        &self.image
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn into_image(self) -> Vec<u8> {
        self.image
    }
}
