//! Deterministic contact and network details: emails, phones, street
//! addresses, SKUs, IP addresses and user agents.

use crate::rng::StageRng;

pub struct ContactGenerator;

impl ContactGenerator {
    /// `first.last<NN>@domain`, lower-cased.
    pub fn email(first: &str, last: &str, rng: &mut StageRng) -> String {
        let domain = rng.pick(EMAIL_DOMAINS);
        let n = rng.int_inclusive(1, 99);
        format!(
            "{}.{}{n}@{domain}",
            first.to_lowercase(),
            last.to_lowercase()
        )
    }

    pub fn phone_number(rng: &mut StageRng) -> String {
        format!(
            "({:03}) {:03}-{:04}",
            rng.int_inclusive(201, 989),
            rng.int_inclusive(200, 999),
            rng.int_inclusive(0, 9999)
        )
    }

    pub fn street_address(rng: &mut StageRng) -> String {
        format!(
            "{} {} {}",
            rng.int_inclusive(1, 9999),
            rng.pick(STREET_NAMES),
            rng.pick(STREET_SUFFIXES)
        )
    }

    pub fn city(rng: &mut StageRng) -> &'static str {
        *rng.pick(CITIES)
    }

    pub fn state_abbr(rng: &mut StageRng) -> &'static str {
        *rng.pick(STATE_ABBRS)
    }

    pub fn postal_code(rng: &mut StageRng) -> String {
        format!("{:05}", rng.int_inclusive(501, 99950))
    }

    /// Two-letter ISO 3166 country code.
    pub fn country_code(rng: &mut StageRng) -> &'static str {
        *rng.pick(COUNTRY_CODES)
    }

    /// `SKU-` + two letters, two digits, `-`, four digits.
    pub fn sku(rng: &mut StageRng) -> String {
        let letter = |rng: &mut StageRng| (b'A' + rng.next_u64_below(26) as u8) as char;
        let a = letter(&mut *rng);
        let b = letter(&mut *rng);
        format!(
            "SKU-{a}{b}{:02}-{:04}",
            rng.int_inclusive(0, 99),
            rng.int_inclusive(0, 9999)
        )
    }

    /// Public-looking IPv4 address (first octet avoids 0, 10, 127 and 224+).
    pub fn ipv4(rng: &mut StageRng) -> String {
        let mut first = rng.int_inclusive(1, 223);
        if first == 10 || first == 127 {
            first += 1;
        }
        format!(
            "{first}.{}.{}.{}",
            rng.int_inclusive(0, 255),
            rng.int_inclusive(0, 255),
            rng.int_inclusive(1, 254)
        )
    }

    pub fn user_agent(rng: &mut StageRng) -> &'static str {
        *rng.pick(USER_AGENTS)
    }
}

const EMAIL_DOMAINS: &[&str] = &[
    "example.com", "example.org", "example.net", "mail.example.com", "shop.example.eu",
];

const STREET_NAMES: &[&str] = &[
    "Oak", "Maple", "Cedar", "Pine", "Elm", "Lake", "Hill", "Park", "Church", "Mill",
    "River", "Sunset", "Harbor", "Meadow", "Forest", "Bridge", "Station", "Market",
];

const STREET_SUFFIXES: &[&str] = &["Street", "Avenue", "Road", "Lane", "Drive", "Court", "Way"];

const CITIES: &[&str] = &[
    "Lisbon", "Porto", "Braga", "Madrid", "Barcelona", "Valencia", "Seville", "Paris",
    "Lyon", "Marseille", "Toulouse", "Berlin", "Munich", "Hamburg", "Cologne", "Rome",
    "Milan", "Naples", "Turin", "London", "Manchester", "Bristol", "Leeds", "Edinburgh",
];

const STATE_ABBRS: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV",
    "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN",
    "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
];

const COUNTRY_CODES: &[&str] = &[
    "PT", "ES", "FR", "DE", "IT", "GB", "IE", "NL", "BE", "AT", "CH", "SE", "DK",
    "NO", "FI", "PL", "CZ", "US", "CA", "BR", "MX", "JP", "AU", "IN",
];

const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_5) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Mobile Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36 Edg/120.0",
    "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
];
