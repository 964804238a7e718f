use crate::domain::card::CatalogCard;
use crate::domain::strategy::CardQuery;
use crate::ports::outbound::card_catalog::{CardCatalog, CatalogError};
use async_trait::async_trait;
use serde::Deserialize;

const BASE_URL: &str = "https://api.magicthegathering.io/v1";
const PAGE_SIZE: usize = 100;
const MAX_PAGES: usize = 100;

#[derive(Debug, Deserialize)]
struct SetsPage {
    sets: Vec<SetEntry>,
}

#[derive(Debug, Deserialize)]
struct SetEntry {
    code: String,
}

#[derive(Debug, Deserialize)]
struct CardsPage {
    cards: Vec<CardEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardEntry {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(default)]
    artist: String,
    #[serde(default)]
    rarity: String,
    set: String,
    #[serde(default)]
    set_name: String,
    #[serde(default)]
    subtypes: Vec<String>,
    #[serde(rename = "type", default)]
    type_line: String,
    image_url: Option<String>,
}

impl From<CardEntry> for CatalogCard {
    fn from(entry: CardEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            artist: entry.artist,
            rarity: entry.rarity,
            set_code: entry.set,
            set_name: entry.set_name,
            subtypes: entry.subtypes,
            type_line: entry.type_line,
            image_url: entry.image_url,
        }
    }
}

pub struct MtgIo {
    http_client: reqwest::Client,
}

impl MtgIo {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    async fn page(&self, query: &CardQuery, page: usize) -> Result<CardsPage, CatalogError> {
        let mut params = query_params(query);
        params.push(("page", page.to_string()));
        params.push(("pageSize", PAGE_SIZE.to_string()));

        self.http_client
            .get(format!("{BASE_URL}/cards"))
            .query(&params)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|why| CatalogError::new(format!("Card request failed: {why}")))?
            .json::<CardsPage>()
            .await
            .map_err(|why| CatalogError::new(format!("Unreadable card page: {why}")))
    }
}

#[async_trait]
impl CardCatalog for MtgIo {
    async fn set_codes(&self) -> Result<Vec<String>, CatalogError> {
        let sets = self
            .http_client
            .get(format!("{BASE_URL}/sets"))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|why| CatalogError::new(format!("Set request failed: {why}")))?
            .json::<SetsPage>()
            .await
            .map_err(|why| CatalogError::new(format!("Unreadable set list: {why}")))?;

        Ok(sets.sets.into_iter().map(|set| set.code).collect())
    }

    async fn cards(&self, query: &CardQuery) -> Result<Vec<CatalogCard>, CatalogError> {
        let mut cards = Vec::new();
        for page in 1..=MAX_PAGES {
            let found = self.page(query, page).await?.cards;
            let last_page = found.len() < PAGE_SIZE;
            cards.extend(found.into_iter().map(CatalogCard::from));
            if last_page {
                break;
            }
        }

        log::debug!("Catalog returned {} cards for {query:?}", cards.len());
        Ok(cards)
    }
}

fn query_params(query: &CardQuery) -> Vec<(&'static str, String)> {
    [
        ("set", &query.set),
        ("rarity", &query.rarity),
        ("artist", &query.artist),
        ("types", &query.types),
        ("subtypes", &query.subtypes),
    ]
    .into_iter()
    .filter_map(|(name, value)| Some((name, value.clone()?)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_skip_unset() {
        let query = CardQuery {
            set: Some(String::from("isd|soi|emn")),
            rarity: Some(String::from("Rare|Mythic Rare")),
            ..CardQuery::default()
        };

        assert_eq!(
            query_params(&query),
            vec![
                ("set", String::from("isd|soi|emn")),
                ("rarity", String::from("Rare|Mythic Rare")),
            ]
        );
        assert!(query_params(&CardQuery::default()).is_empty());
    }

    #[test]
    fn test_parse_cards_page() {
        let body = r#"{
            "cards": [
                {
                    "name": "Olivia Voldaren",
                    "manaCost": "{2}{B}{R}",
                    "type": "Legendary Creature — Vampire",
                    "subtypes": ["Vampire"],
                    "rarity": "Mythic Rare",
                    "set": "ISD",
                    "setName": "Innistrad",
                    "artist": "Eric Deschamps",
                    "imageUrl": "http://gatherer.wizards.com/Handlers/Image.ashx?multiverseid=247235&type=card",
                    "id": "1e3b4c3c-2bd3-5a3c-8ec4-53c2e3a4c8f6"
                },
                {
                    "name": "Delver of Secrets",
                    "type": "Creature — Human Wizard",
                    "rarity": "Common",
                    "set": "ISD",
                    "setName": "Innistrad",
                    "artist": "Matt Stewart",
                    "id": "6a7b4b4c-2d0e-5c54-a9c0-2d6b0e2e4f8a"
                }
            ]
        }"#;

        let page: CardsPage = serde_json::from_str(body).unwrap();
        let cards: Vec<CatalogCard> = page.cards.into_iter().map(CatalogCard::from).collect();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Olivia Voldaren");
        assert_eq!(cards[0].set_code, "ISD");
        assert_eq!(cards[0].set_name, "Innistrad");
        assert_eq!(cards[0].type_line, "Legendary Creature — Vampire");
        assert_eq!(cards[0].subtypes, vec![String::from("Vampire")]);
        assert!(cards[0].has_image());
        assert!(cards[1].subtypes.is_empty());
        assert!(!cards[1].has_image());
    }

    #[test]
    fn test_parse_sets_page() {
        let body = r#"{"sets": [
            {"code": "10E", "name": "Tenth Edition", "type": "core"},
            {"code": "ISD", "name": "Innistrad", "type": "expansion"}
        ]}"#;

        let page: SetsPage = serde_json::from_str(body).unwrap();
        let codes: Vec<String> = page.sets.into_iter().map(|set| set.code).collect();

        assert_eq!(codes, vec![String::from("10E"), String::from("ISD")]);
    }
}
