//! Catalog DTOs and the set of catalogs the API publishes.
//!
//! # Design
//! These types mirror the API's JSON but are defined independently of the
//! mock server crate. Integration tests catch any schema drift between the
//! two.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A named list of strings published by the API, such as every card name or
/// every creature type.
///
/// `total_values` is reported by the server and is not checked against
/// `data.len()`. Order of `data` is preserved exactly as received and
/// duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub uri: String,
    pub total_values: u64,
    pub data: Vec<String>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.data.iter()
    }

    /// Whether the reported count agrees with the number of entries received.
    pub fn is_consistent(&self) -> bool {
        self.total_values == self.data.len() as u64
    }
}

impl IntoIterator for Catalog {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// The JSON error object the API returns alongside non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScryfallError {
    pub code: String,
    pub status: u16,
    pub details: String,
    /// Extra classification, e.g. `ambiguous`. Absent on most errors.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Every catalog served under `/catalog/{name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    CardNames,
    ArtistNames,
    WordBank,
    Supertypes,
    CardTypes,
    ArtifactTypes,
    BattleTypes,
    CreatureTypes,
    EnchantmentTypes,
    LandTypes,
    PlaneswalkerTypes,
    SpellTypes,
    Powers,
    Toughnesses,
    Loyalties,
    Watermarks,
    KeywordAbilities,
    KeywordActions,
    AbilityWords,
    FlavorWords,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 20] = [
        CatalogKind::CardNames,
        CatalogKind::ArtistNames,
        CatalogKind::WordBank,
        CatalogKind::Supertypes,
        CatalogKind::CardTypes,
        CatalogKind::ArtifactTypes,
        CatalogKind::BattleTypes,
        CatalogKind::CreatureTypes,
        CatalogKind::EnchantmentTypes,
        CatalogKind::LandTypes,
        CatalogKind::PlaneswalkerTypes,
        CatalogKind::SpellTypes,
        CatalogKind::Powers,
        CatalogKind::Toughnesses,
        CatalogKind::Loyalties,
        CatalogKind::Watermarks,
        CatalogKind::KeywordAbilities,
        CatalogKind::KeywordActions,
        CatalogKind::AbilityWords,
        CatalogKind::FlavorWords,
    ];

    /// The segment that follows `/catalog/` in the request path.
    pub fn path_segment(self) -> &'static str {
        match self {
            CatalogKind::CardNames => "card-names",
            CatalogKind::ArtistNames => "artist-names",
            CatalogKind::WordBank => "word-bank",
            CatalogKind::Supertypes => "supertypes",
            CatalogKind::CardTypes => "card-types",
            CatalogKind::ArtifactTypes => "artifact-types",
            CatalogKind::BattleTypes => "battle-types",
            CatalogKind::CreatureTypes => "creature-types",
            CatalogKind::EnchantmentTypes => "enchantment-types",
            CatalogKind::LandTypes => "land-types",
            CatalogKind::PlaneswalkerTypes => "planeswalker-types",
            CatalogKind::SpellTypes => "spell-types",
            CatalogKind::Powers => "powers",
            CatalogKind::Toughnesses => "toughnesses",
            CatalogKind::Loyalties => "loyalties",
            CatalogKind::Watermarks => "watermarks",
            CatalogKind::KeywordAbilities => "keyword-abilities",
            CatalogKind::KeywordActions => "keyword-actions",
            CatalogKind::AbilityWords => "ability-words",
            CatalogKind::FlavorWords => "flavor-words",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for CatalogKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CatalogKind::ALL
            .into_iter()
            .find(|kind| kind.path_segment() == s)
            .ok_or_else(|| ApiError::UnknownCatalog(s.to_string()))
    }
}
