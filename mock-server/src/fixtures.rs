//! Catalog bodies served by default, as the production API returns them.
//!
//! Kept as raw JSON so quirks survive untouched: the creature-types body
//! reports 11 values but carries 12.

pub const CARD_NAMES: &str = r#"{"object": "catalog", "uri": "https://api.scryfall.com/catalog/card-names", "total_values": 7, "data": ["\"Ach! Hans, Run!\"", "\"Rumors of My Death . . .\"", "1996 World Champion", "A Display of My Dark Power", "A Reckoning Approaches", "AWOL", "Abandon Hope"]}"#;

pub const WORD_BANK: &str = r#"{"object": "catalog", "uri": "https://api.scryfall.com/catalog/word-bank", "total_values": 11, "data": ["abandon", "abandoned", "abattoir", "abbey", "abbot", "abc's", "abdallah", "abduction", "aberrant", "aberration", "abeyance"]}"#;

pub const CREATURE_TYPES: &str = r#"{"object": "catalog", "uri": "https://api.scryfall.com/catalog/creature-types", "total_values": 11, "data": ["Advisor", "Aetherborn", "Ally", "Angel", "Antelope", "Ape", "Archer", "Archon", "Artificer", "Assassin", "Assembly-Worker", "Atog"]}"#;

pub const PLANESWALKER_TYPES: &str = r#"{"object": "catalog", "uri": "https://api.scryfall.com/catalog/planeswalker-types", "total_values": 10, "data": ["Ajani", "Angrath", "Arlinn", "Ashiok", "Bolas", "Chandra", "Dack", "Daretti", "Domri", "Dovin"]}"#;

pub const LAND_TYPES: &str = r#"{"object": "catalog", "uri": "https://api.scryfall.com/catalog/land-types", "total_values": 13, "data": ["Desert", "Forest", "Gate", "Island", "Lair", "Locus", "Mine", "Mountain", "Plains", "Power-Plant", "Swamp", "Tower", "Urza’s"]}"#;

pub const SPELL_TYPES: &str = r#"{"object": "catalog", "uri": "https://api.scryfall.com/catalog/spell-types", "total_values": 2, "data": ["Arcane", "Trap"]}"#;

/// `(catalog name, body)` pairs for every default fixture.
pub const ALL: [(&str, &str); 6] = [
    ("card-names", CARD_NAMES),
    ("word-bank", WORD_BANK),
    ("creature-types", CREATURE_TYPES),
    ("planeswalker-types", PLANESWALKER_TYPES),
    ("land-types", LAND_TYPES),
    ("spell-types", SPELL_TYPES),
];
