use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tokio::task::spawn_blocking;

use crate::{Error, Result, INFOBOX_SELECTOR};

static FOOTNOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("FOOTNOTE_RE should compile"));

/// Where a field's value cell sits relative to the row carrying its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `<tr><th>Capital</th><td>...</td></tr>`
    SameRow,
    /// A full-width header row, with the value in the `td` of the row below it.
    NextRow,
}

/// One `tr` of the infobox, with nested markup collapsed to text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub header: Option<String>,
    pub data: Option<String>,
}

impl Row {
    pub fn new(header: Option<&str>, data: Option<&str>) -> Self {
        Self {
            header: header.map(str::to_owned),
            data: data.map(str::to_owned),
        }
    }
}

/// The rows of a page's infobox, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Infobox {
    pub rows: Vec<Row>,
}

impl Infobox {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Parses a whole document and collects the rows of its first infobox.
    /// Returns `Ok(None)` if the page has no infobox.
    pub fn from_html(html: &str) -> Result<Option<Self>> {
        let doc = Html::parse_document(html);

        let table_selector = create_selector(INFOBOX_SELECTOR)?;
        let row_selector = create_selector("tr")?;
        let header_selector = create_selector("th")?;
        let data_selector = create_selector("td")?;

        let Some(table) = doc.select(&table_selector).next() else {
            return Ok(None);
        };

        let rows = table
            .select(&row_selector)
            .map(|tr| Row {
                header: first_text(tr, &header_selector),
                data: first_text(tr, &data_selector),
            })
            .collect();

        Ok(Some(Self { rows }))
    }

    /// Finds the first row whose header contains `keyword` and that has a value cell where
    /// `layout` says it should be. The cell text comes back without footnote markers and trimmed.
    ///
    /// A matching header with no cell in place is skipped, so a later row with the same
    /// keyword can still answer.
    pub fn find_field(&self, keyword: &str, layout: Layout) -> Option<String> {
        self.rows.iter().enumerate().find_map(|(i, row)| {
            if !row.header.as_deref()?.contains(keyword) {
                return None;
            }
            let cell = match layout {
                Layout::SameRow => row.data.as_deref(),
                Layout::NextRow => self.rows.get(i + 1)?.data.as_deref(),
            }?;
            Some(clean_text(cell))
        })
    }
}

/// Parses the document on the blocking pool, the parsed DOM isn't `Send`.
pub async fn parse_infobox(html: String) -> Result<Option<Infobox>> {
    spawn_blocking(move || Infobox::from_html(&html)).await?
}

/// Removes footnote indicators like `[12]` or `[note 3]` and trims the result.
pub fn clean_text(text: &str) -> String {
    FOOTNOTE_RE.replace_all(text, "").trim().to_string()
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseMissingSelector(sel_str.into()))
}

fn first_text(row: ElementRef<'_>, selector: &Selector) -> Option<String> {
    row.select(selector)
        .next()
        .map(|cell| cell.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <table class="infobox ib-country vcard">
          <tbody>
            <tr><th colspan="2">United States of America</th></tr>
            <tr><th>Capital</th><td>Washington, D.C.<br>38°53′N 77°01′W</td></tr>
            <tr><th>Official languages</th><td>None at the federal level<sup>[a]</sup></td></tr>
            <tr><th colspan="2"><a href="/wiki/Demographics">Population</a></th></tr>
            <tr><th>• 2020 census</th><td>331,449,281<sup>[9]</sup> (3rd)</td></tr>
            <tr><th>HDI (2021)</th><td><span>0.921</span> very high · 21st</td></tr>
          </tbody>
        </table>
        <table class="wikitable"><tr><th>Population</th><td>1</td></tr></table>
        </body></html>
    "#;

    #[test]
    fn clean_text_strips_footnotes() {
        assert_eq!(clean_text("1,234 [5]"), "1,234");
        assert_eq!(clean_text("  0.921[3][note 1] (very high) "), "0.921 (very high)");
        assert_eq!(clean_text("Euro (EUR)"), "Euro (EUR)");
    }

    #[test]
    fn from_html_collects_rows_in_order() {
        let infobox = Infobox::from_html(PAGE).unwrap().unwrap();
        assert_eq!(infobox.rows.len(), 6);
        assert_eq!(infobox.rows[0].header.as_deref(), Some("United States of America"));
        assert_eq!(infobox.rows[0].data, None);
        assert_eq!(infobox.rows[3].header.as_deref(), Some("Population"));
    }

    #[test]
    fn from_html_without_infobox_is_none() {
        let page = "<html><body><table><tr><th>Population</th></tr></table></body></html>";
        assert_eq!(Infobox::from_html(page).unwrap(), None);
    }

    #[test]
    fn find_field_same_and_next_row() {
        let infobox = Infobox::from_html(PAGE).unwrap().unwrap();

        assert_eq!(
            infobox.find_field("Population", Layout::NextRow).as_deref(),
            Some("331,449,281 (3rd)")
        );
        assert_eq!(
            infobox.find_field("HDI", Layout::SameRow).as_deref(),
            Some("0.921 very high · 21st")
        );
        assert_eq!(
            infobox.find_field("language", Layout::SameRow).as_deref(),
            Some("None at the federal level")
        );
        assert_eq!(
            infobox.find_field("Capital", Layout::SameRow).as_deref(),
            Some("Washington, D.C.38°53′N 77°01′W")
        );
    }

    #[test]
    fn find_field_is_case_sensitive_and_misses_cleanly() {
        let infobox = Infobox::from_html(PAGE).unwrap().unwrap();
        assert_eq!(infobox.find_field("population", Layout::NextRow), None);
        assert_eq!(infobox.find_field("Currency", Layout::SameRow), None);
    }

    #[test]
    fn find_field_skips_matches_without_a_cell() {
        let infobox = Infobox::from_rows(vec![
            Row::new(Some("GDP (PPP)"), None),
            Row::new(Some("GDP (nominal)"), Some("$21.43 trillion[4]")),
        ]);
        // The first GDP row has no cell of its own, the second one does.
        assert_eq!(
            infobox.find_field("GDP", Layout::SameRow).as_deref(),
            Some("$21.43 trillion")
        );
        // Last row has nothing below it.
        let tail = Infobox::from_rows(vec![Row::new(Some("Population"), None)]);
        assert_eq!(tail.find_field("Population", Layout::NextRow), None);
    }
}
