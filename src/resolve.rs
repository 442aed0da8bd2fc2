//! Official to common country names.
//!
//! Wikipedia titles its country articles by the short name ("Russia", not "Russian
//! Federation"), so names are resolved before the article is requested.

/// Turns an official country name into the name its article lives under.
pub trait NameResolver: Send + Sync {
    fn common_name(&self, official: &str) -> String;
}

/// Leaves names as given, apart from trimming.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl NameResolver for IdentityResolver {
    fn common_name(&self, official: &str) -> String {
        official.trim().to_string()
    }
}

/// Case-insensitive lookup in a fixed table. Names not in the table pass through.
#[derive(Debug, Clone)]
pub struct StaticResolver {
    names: Vec<(String, String)>,
}

const KNOWN_NAMES: &[(&str, &str)] = &[
    ("United States of America", "United States"),
    ("United Kingdom of Great Britain and Northern Ireland", "United Kingdom"),
    ("Russian Federation", "Russia"),
    ("People's Republic of China", "China"),
    ("Republic of Korea", "South Korea"),
    ("Democratic People's Republic of Korea", "North Korea"),
    ("Islamic Republic of Iran", "Iran"),
    ("Syrian Arab Republic", "Syria"),
    ("Lao People's Democratic Republic", "Laos"),
    ("Viet Nam", "Vietnam"),
    ("Republic of Moldova", "Moldova"),
    ("United Republic of Tanzania", "Tanzania"),
    ("Bolivarian Republic of Venezuela", "Venezuela"),
    ("Plurinational State of Bolivia", "Bolivia"),
    ("Kingdom of the Netherlands", "Netherlands"),
    ("Federal Republic of Germany", "Germany"),
    ("French Republic", "France"),
    ("Türkiye", "Turkey"),
    ("Côte d'Ivoire", "Ivory Coast"),
];

impl StaticResolver {
    pub fn new<I, K, V>(names: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let names = names
            .into_iter()
            .map(|(official, common)| (official.into().to_lowercase(), common.into()))
            .collect();
        Self { names }
    }
}

impl Default for StaticResolver {
    fn default() -> Self {
        Self::new(KNOWN_NAMES.iter().copied())
    }
}

impl NameResolver for StaticResolver {
    fn common_name(&self, official: &str) -> String {
        let official = official.trim();
        let key = official.to_lowercase();
        self.names
            .iter()
            .find(|(known, _)| *known == key)
            .map(|(_, common)| common.clone())
            .unwrap_or_else(|| official.to_string())
    }
}
