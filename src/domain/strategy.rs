use crate::domain::card::CatalogCard;
use crate::domain::utils::random;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

pub const UNCOMMON: &str = "Uncommon";
pub const RARE: &str = "Rare";
pub const MYTHIC_RARE: &str = "Mythic Rare";

const INNISTRAD_SETS: &str = "isd|soi|emn";
const HASHTAGS: &str = "#Magic #MTG !";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artist {
    MagaliVilleneuve,
    ChrisRallis,
    ChaseStone,
    WillianMurai,
}

impl Artist {
    pub const ALL: [Artist; 4] = [
        Artist::MagaliVilleneuve,
        Artist::ChrisRallis,
        Artist::ChaseStone,
        Artist::WillianMurai,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Artist::MagaliVilleneuve => "Magali Villeneuve",
            Artist::ChrisRallis => "Chris Rallis",
            Artist::ChaseStone => "Chase Stone",
            Artist::WillianMurai => "Willian Murai",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            Artist::MagaliVilleneuve => "magali-villeneuve",
            Artist::ChrisRallis => "chris-rallis",
            Artist::ChaseStone => "chase-stone",
            Artist::WillianMurai => "willian-murai",
        }
    }

    fn handle(&self) -> Option<&'static str> {
        match self {
            Artist::MagaliVilleneuve => Some("@Cathaoir1"),
            _ => None,
        }
    }
}

/// Filters understood by the card catalog. Every field holds either a single
/// value or `|` separated alternatives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardQuery {
    pub set: Option<String>,
    pub rarity: Option<String>,
    pub artist: Option<String>,
    pub types: Option<String>,
    pub subtypes: Option<String>,
}

impl CardQuery {
    #[must_use]
    pub fn in_set(mut self, set_code: &str) -> Self {
        self.set = Some(set_code.to_string());
        self
    }

    /// Whether a catalog entry actually satisfies this query. The catalog does
    /// partial matching on some fields so results are checked again locally.
    #[must_use]
    pub fn matches(&self, card: &CatalogCard) -> bool {
        let set = self
            .set
            .as_deref()
            .map_or(true, |set| any_of(set, |code| code.eq_ignore_ascii_case(&card.set_code)));
        let rarity = self
            .rarity
            .as_deref()
            .map_or(true, |rarity| any_of(rarity, |wanted| wanted == card.rarity));
        let artist = self.artist.as_deref().map_or(true, |artist| {
            any_of(artist, |wanted| {
                card.artist.to_lowercase().contains(&wanted.to_lowercase())
            })
        });
        let types = self
            .types
            .as_deref()
            .map_or(true, |types| any_of(types, |wanted| card.type_line.contains(wanted)));
        let subtypes = self.subtypes.as_deref().map_or(true, |subtypes| {
            any_of(subtypes, |wanted| card.subtypes.iter().any(|s| s == wanted))
        });

        set && rarity && artist && types && subtypes
    }
}

fn any_of<F: Fn(&str) -> bool>(alternatives: &str, predicate: F) -> bool {
    alternatives.split('|').map(str::trim).any(predicate)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    FullyRandom,
    Rare,
    Mythic,
    Planeswalker,
    RareFromInnistrad,
    Uncommon,
    Vampire,
    Artist(Artist),
    FromSet(String),
    RareFromSet(String),
}

impl Strategy {
    /// Every strategy that can be picked without extra input.
    #[must_use]
    pub fn roster() -> Vec<Strategy> {
        let mut roster = vec![
            Strategy::FullyRandom,
            Strategy::Rare,
            Strategy::Mythic,
            Strategy::Planeswalker,
            Strategy::RareFromInnistrad,
            Strategy::Uncommon,
            Strategy::Vampire,
        ];
        roster.extend(Artist::ALL.into_iter().map(Strategy::Artist));
        roster
    }

    #[must_use]
    pub fn wants_random_set(&self) -> bool {
        matches!(
            self,
            Strategy::FullyRandom | Strategy::Rare | Strategy::Uncommon
        )
    }

    #[must_use]
    pub fn query(&self) -> CardQuery {
        let query = CardQuery::default();
        match self {
            Strategy::FullyRandom => query,
            Strategy::Rare => CardQuery {
                rarity: Some(RARE.to_string()),
                ..query
            },
            Strategy::Mythic => CardQuery {
                rarity: Some(MYTHIC_RARE.to_string()),
                ..query
            },
            Strategy::Planeswalker => CardQuery {
                types: Some(String::from("Planeswalker")),
                ..query
            },
            Strategy::RareFromInnistrad => CardQuery {
                set: Some(INNISTRAD_SETS.to_string()),
                rarity: Some(format!("{RARE}|{MYTHIC_RARE}")),
                ..query
            },
            Strategy::Uncommon => CardQuery {
                rarity: Some(UNCOMMON.to_string()),
                ..query
            },
            Strategy::Vampire => CardQuery {
                subtypes: Some(String::from("Vampire")),
                ..query
            },
            Strategy::Artist(artist) => CardQuery {
                artist: Some(artist.name().to_string()),
                ..query
            },
            Strategy::FromSet(set_code) => query.in_set(set_code),
            Strategy::RareFromSet(set_code) => CardQuery {
                rarity: Some(RARE.to_string()),
                ..query.in_set(set_code)
            },
        }
    }

    /// Text posted alongside the card describing how it was picked.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{self} {HASHTAGS}")
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::FullyRandom => write!(f, "Let's fetch a random card from a random set"),
            Strategy::Rare => write!(f, "Let's fetch a random Rare card from a random set"),
            Strategy::Mythic => write!(f, "Let's fetch a random Mythic card from a random set"),
            Strategy::Planeswalker => write!(f, "Let's fetch a random Planeswalker card"),
            Strategy::RareFromInnistrad => {
                write!(f, "Let's fetch a random rare cards from Innistrad sets")
            }
            Strategy::Uncommon => {
                write!(f, "Let's fetch a random Uncommon card from a random set")
            }
            Strategy::Vampire => write!(f, "Let's fetch a random Vampire card"),
            Strategy::Artist(artist) => match artist.handle() {
                Some(handle) => write!(
                    f,
                    "Let's fetch a card from {} ({handle}), so talented !",
                    artist.name()
                ),
                None => write!(f, "Let's fetch a card from {}, so talented !", artist.name()),
            },
            Strategy::FromSet(set_code) => write!(
                f,
                "Let's fetch a random card from a given set (here: {set_code})"
            ),
            Strategy::RareFromSet(set_code) => write!(
                f,
                "Let's fetch a random Rare card from a given set (here: {set_code})"
            ),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown strategy '{0}'")]
pub struct UnknownStrategy(String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if let Some(set_code) = value.strip_prefix("set:") {
            return Ok(Strategy::FromSet(set_code.trim().to_uppercase()));
        }
        if let Some(set_code) = value.strip_prefix("rare-set:") {
            return Ok(Strategy::RareFromSet(set_code.trim().to_uppercase()));
        }
        if let Some(slug) = value.strip_prefix("artist:") {
            return Artist::ALL
                .into_iter()
                .find(|artist| artist.slug() == slug.trim())
                .map(Strategy::Artist)
                .ok_or_else(|| UnknownStrategy(s.to_string()));
        }

        match value {
            "fully-random" => Ok(Strategy::FullyRandom),
            "rare" => Ok(Strategy::Rare),
            "mythic" => Ok(Strategy::Mythic),
            "planeswalker" => Ok(Strategy::Planeswalker),
            "innistrad-rare" => Ok(Strategy::RareFromInnistrad),
            "uncommon" => Ok(Strategy::Uncommon),
            "vampire" => Ok(Strategy::Vampire),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Picks one of the roster strategies using the operating system's RNG.
#[must_use]
pub fn random_strategy() -> Strategy {
    random::pick(Strategy::roster()).unwrap_or(Strategy::FullyRandom)
}
