//! Deterministic name generation using curated word lists.
//!
//! Provides person names for customers, company names for brands and
//! suppliers, and marketing phrases for product and campaign names.
//! All generation is deterministic (same RNG seed = same names).

use crate::rng::StageRng;

/// Deterministic name generator using curated lists
pub struct NameGenerator;

impl NameGenerator {
    pub fn first_name(rng: &mut StageRng) -> &'static str {
        *rng.pick(FIRST_NAMES)
    }

    pub fn last_name(rng: &mut StageRng) -> &'static str {
        *rng.pick(LAST_NAMES)
    }

    /// Brand or supplier name, e.g. "Nordic Outfitters Group" or "Moreau Goods Ltd".
    pub fn company_name(rng: &mut StageRng) -> String {
        let trade = rng.pick(COMPANY_TRADES);
        let suffix = rng.pick(COMPANY_SUFFIXES);
        if rng.chance(0.5) {
            format!("{} {trade} {suffix}", rng.pick(COMPANY_PREFIXES))
        } else {
            format!("{} {trade} {suffix}", Self::last_name(rng))
        }
    }

    /// Three-word marketing phrase, e.g. "Seamless Eco-friendly Collection".
    pub fn catch_phrase(rng: &mut StageRng) -> String {
        format!(
            "{} {} {}",
            rng.pick(PHRASE_ADJECTIVES),
            rng.pick(PHRASE_DESCRIPTORS),
            rng.pick(PHRASE_NOUNS)
        )
    }

    /// Lower-case slug word for page paths.
    pub fn word(rng: &mut StageRng) -> &'static str {
        *rng.pick(PAGE_WORDS)
    }

    pub fn color(rng: &mut StageRng) -> &'static str {
        *rng.pick(COLORS)
    }
}

const FIRST_NAMES: &[&str] = &[
    "Joao", "Maria", "Tiago", "Ines", "Rui", "Beatriz", "Pedro", "Carolina",
    "Alejandro", "Lucia", "Javier", "Carmen", "Pablo", "Elena", "Diego", "Sofia",
    "Louis", "Camille", "Hugo", "Chloe", "Julien", "Manon", "Antoine", "Lea",
    "Lukas", "Hannah", "Felix", "Lena", "Jonas", "Mia", "Maximilian", "Emma",
    "Marco", "Giulia", "Luca", "Chiara", "Matteo", "Francesca", "Davide", "Alessia",
    "Oliver", "Amelia", "Harry", "Isla", "George", "Olivia", "Jack", "Grace",
    "Noah", "Charlotte", "Thomas", "Alice", "Daniel", "Laura", "Samuel", "Anna",
];

const LAST_NAMES: &[&str] = &[
    "Silva", "Santos", "Ferreira", "Pereira", "Oliveira", "Costa", "Rodrigues", "Martins",
    "Garcia", "Fernandez", "Lopez", "Martinez", "Sanchez", "Perez", "Gomez", "Ruiz",
    "Martin", "Bernard", "Dubois", "Moreau", "Laurent", "Lefebvre", "Girard", "Roux",
    "Muller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker",
    "Rossi", "Russo", "Ferrari", "Esposito", "Bianchi", "Romano", "Colombo", "Ricci",
    "Smith", "Jones", "Taylor", "Brown", "Williams", "Wilson", "Evans", "Walker",
];

const COMPANY_PREFIXES: &[&str] = &[
    "Nordic", "Atlantic", "Iberian", "Alpine", "Urban", "Coastal", "Royal",
    "Modern", "Classic", "Bright", "Golden", "Green", "Euro", "Prime", "Summit",
];

const COMPANY_TRADES: &[&str] = &[
    "Outfitters", "Electronics", "Home", "Living", "Goods", "Trading", "Sports",
    "Beauty", "Foods", "Motors", "Toys", "Books", "Supply", "Craft", "Textiles",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "Ltd", "GmbH", "SA", "SARL", "SpA", "Lda", "Group", "Co", "Holdings", "Partners",
];

const PHRASE_ADJECTIVES: &[&str] = &[
    "Advanced", "Seamless", "Smart", "Premium", "Essential", "Ultimate", "Compact",
    "Ergonomic", "Durable", "Refined", "Innovative", "Versatile", "Classic", "Bold",
];

const PHRASE_DESCRIPTORS: &[&str] = &[
    "Eco-friendly", "Wireless", "Lightweight", "Handcrafted", "Modular", "All-day",
    "Performance", "Everyday", "Signature", "Pro", "Heritage", "Next-gen",
];

const PHRASE_NOUNS: &[&str] = &[
    "Collection", "Series", "Edition", "Line", "Range", "Selection", "Set",
    "Launch", "Campaign", "Experience", "Essentials", "Drop",
];

const PAGE_WORDS: &[&str] = &[
    "home", "deals", "sale", "new", "products", "category", "search", "cart",
    "checkout", "account", "wishlist", "brands", "offers", "blog", "help", "returns",
];

const COLORS: &[&str] = &[
    "black", "white", "gray", "silver", "navy", "blue", "teal", "green",
    "olive", "yellow", "orange", "red", "maroon", "purple", "fuchsia", "lime",
];
