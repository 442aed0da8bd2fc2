use std::fmt;

use chrono::Local;
use reqwest::Client;

use crate::normalize;
use crate::parse::{parse_infobox, Infobox, Layout};
use crate::request::request_article;
use crate::resolve::NameResolver;
use crate::{info_time, Result, WIKI_URL_PREFIX};

/// The infobox fields we read, with the label keyword and layout each one is found by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Population,
    Gdp,
    Hdi,
    Currency,
    Capital,
    Languages,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Population,
        Field::Gdp,
        Field::Hdi,
        Field::Currency,
        Field::Capital,
        Field::Languages,
    ];

    /// Substring matched against the row header.
    pub fn keyword(self) -> &'static str {
        match self {
            Field::Population => "Population",
            Field::Gdp => "GDP",
            Field::Hdi => "HDI",
            Field::Currency => "Currency",
            Field::Capital => "Capital",
            Field::Languages => "language",
        }
    }

    pub fn layout(self) -> Layout {
        match self {
            Field::Population | Field::Gdp => Layout::NextRow,
            _ => Layout::SameRow,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Population => "population",
            Field::Gdp => "gdp",
            Field::Hdi => "hdi",
            Field::Currency => "currency",
            Field::Capital => "capital",
            Field::Languages => "languages",
        }
    }

    /// Raw cell text for this field, if the infobox has one.
    pub fn raw(self, infobox: &Infobox) -> Option<String> {
        infobox.find_field(self.keyword(), self.layout())
    }
}

/// Everything we could read about one country. `None` is "unknown".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryFacts {
    pub name: String,
    pub population: Option<u64>,
    pub gdp: Option<u64>,
    pub hdi: Option<f64>,
    pub currency: Option<String>,
    pub capital: Option<String>,
    pub languages: Option<String>,
}

impl CountryFacts {
    /// Every field is looked up and normalized on its own; a miss only blanks that field.
    pub fn from_infobox(name: impl Into<String>, infobox: &Infobox) -> Self {
        let raw = |field: Field| field.raw(infobox);
        Self {
            name: name.into(),
            population: raw(Field::Population).and_then(|s| normalize::count(&s)),
            gdp: raw(Field::Gdp).and_then(|s| normalize::monetary(&s)),
            hdi: raw(Field::Hdi).and_then(|s| normalize::ratio(&s)),
            currency: raw(Field::Currency).and_then(|s| normalize::currency_code(&s)),
            capital: raw(Field::Capital).and_then(|s| normalize::place_name(&s)),
            languages: raw(Field::Languages).and_then(|s| normalize::languages(&s)),
        }
    }

    /// No infobox on the page, nothing known.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The cleaned language list split into entries.
    pub fn language_list(&self) -> Vec<String> {
        self.languages
            .as_deref()
            .map(normalize::split_languages)
            .unwrap_or_default()
    }

    fn value(&self, field: Field) -> Option<String> {
        match field {
            Field::Population => self.population.map(|v| v.to_string()),
            Field::Gdp => self.gdp.map(|v| v.to_string()),
            Field::Hdi => self.hdi.map(|v| v.to_string()),
            Field::Currency => self.currency.clone(),
            Field::Capital => self.capital.clone(),
            Field::Languages => self.languages.clone(),
        }
    }
}

impl fmt::Display for CountryFacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for field in Field::ALL {
            let value = self.value(field);
            writeln!(f, "  {:<12}: {}", field.name(), value.as_deref().unwrap_or("unknown"))?;
        }
        Ok(())
    }
}

/// Resolves the name, requests the article under `base_url` and reads its infobox.
/// Only the request itself can fail; missing or odd fields come back as `None`.
pub async fn scrape_country(
    client: &Client,
    base_url: &str,
    resolver: &dyn NameResolver,
    name: &str,
) -> Result<CountryFacts> {
    let start_time = Local::now();
    let title = resolver.common_name(name);

    let html = request_article(client, base_url, &title).await?;
    let facts = match parse_infobox(html).await? {
        Some(infobox) => CountryFacts::from_infobox(title, &infobox),
        None => {
            info_time!("No infobox found for {title}");
            CountryFacts::unknown(title)
        }
    };

    info_time!(start_time, "Scraped {}", facts.name);
    Ok(facts)
}

/// Scrapes the countries one after another from Wikipedia with a shared client.
pub async fn scrape_countries(
    names: &[String],
    resolver: &dyn NameResolver,
) -> Result<Vec<CountryFacts>> {
    let client = Client::new();
    let mut all_facts = Vec::with_capacity(names.len());
    for name in names {
        all_facts.push(scrape_country(&client, WIKI_URL_PREFIX, resolver, name).await?);
    }
    Ok(all_facts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::Row;

    fn sample() -> Infobox {
        Infobox::from_rows(vec![
            Row::new(Some("Capital"), Some("Paris48°51′N 2°21′E")),
            Row::new(Some("Official language"), Some("French[a]")),
            Row::new(Some("Currency"), Some("Euro (€) (EUR)")),
            Row::new(Some("Population"), None),
            Row::new(Some("• 2024 estimate"), Some("68,373,433[5] (20th)")),
            Row::new(Some("GDP (nominal)"), None),
            Row::new(Some("• Total"), Some("$3.130 trillion[7] (7th)")),
            Row::new(Some("HDI (2022)"), Some("0.910[8] very high")),
        ])
    }

    #[test]
    fn from_infobox_reads_every_field() {
        let facts = CountryFacts::from_infobox("France", &sample());
        assert_eq!(facts.population, Some(68_373_433));
        assert_eq!(facts.gdp, Some(3_130_000_000_000));
        assert_eq!(facts.hdi, Some(0.910));
        assert_eq!(facts.currency.as_deref(), Some("EUR"));
        assert_eq!(facts.capital.as_deref(), Some("Paris"));
        assert_eq!(facts.languages.as_deref(), Some("French"));
        assert_eq!(facts.language_list(), ["French"]);
    }

    #[test]
    fn one_bad_field_leaves_the_rest() {
        let infobox = Infobox::from_rows(vec![
            Row::new(Some("Capital"), Some("none")),
            Row::new(Some("Population"), None),
            Row::new(Some("• Estimate"), Some("no data")),
            Row::new(Some("HDI"), Some("0.5")),
        ]);
        let facts = CountryFacts::from_infobox("Nowhere", &infobox);
        assert_eq!(facts.capital, None);
        assert_eq!(facts.population, None);
        assert_eq!(facts.gdp, None);
        assert_eq!(facts.currency, None);
        assert_eq!(facts.hdi, Some(0.5));
        assert!(facts.language_list().is_empty());
    }

    #[test]
    fn display_marks_unknown_fields() {
        let mut facts = CountryFacts::unknown("Atlantis");
        facts.population = Some(42);
        let out = facts.to_string();
        assert!(out.starts_with("Atlantis\n"));
        assert!(out.contains("population  : 42"));
        assert!(out.contains("gdp         : unknown"));
    }

    #[test]
    fn field_layouts() {
        assert_eq!(Field::Population.layout(), Layout::NextRow);
        assert_eq!(Field::Gdp.layout(), Layout::NextRow);
        assert!(Field::ALL[2..].iter().all(|f| f.layout() == Layout::SameRow));
    }
}
