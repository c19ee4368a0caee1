//! Site data document.
//!
//! Every field is optional and no value type is enforced. Absent text fields
//! read as the empty string unless an accessor documents another default.
//! Numbers and booleans in text fields are kept in their JSON spelling;
//! `false`, `0`, arrays and objects read as absent. List fields that are
//! missing, `null`, or not arrays read as empty, and an object field holding
//! anything but an object reads as its default.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Default avatar path used when the person has none.
const DEFAULT_AVATAR: &str = "assets/img/avatar.jpg";

/// Default news title.
const DEFAULT_NEWS_TITLE: &str = "Update";

/// The whole site data document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteData {
    #[serde(deserialize_with = "object_or_default")]
    pub person: Person,
    #[serde(deserialize_with = "seq_or_empty")]
    pub news: Vec<NewsItem>,
    #[serde(deserialize_with = "seq_or_empty")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "seq_or_empty")]
    pub employment: Vec<EmploymentEntry>,
    #[serde(deserialize_with = "seq_or_empty")]
    pub publications: Vec<Publication>,
}

/// Profile owner and contact channels.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Person {
    #[serde(deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub tagline: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub intro: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub avatar: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub phone: Option<String>,
    /// Scholar profile URL.
    #[serde(deserialize_with = "scalar_text")]
    pub scholar: Option<String>,
    /// Code-hosting profile URL.
    #[serde(deserialize_with = "scalar_text")]
    pub github: Option<String>,
}

impl Person {
    #[must_use]
    pub fn name(&self) -> &str {
        text(self.name.as_ref())
    }

    #[must_use]
    pub fn tagline(&self) -> &str {
        text(self.tagline.as_ref())
    }

    #[must_use]
    pub fn intro(&self) -> &str {
        text(self.intro.as_ref())
    }

    /// Avatar image reference, falling back to the bundled placeholder.
    #[must_use]
    pub fn avatar(&self) -> &str {
        non_empty(self.avatar.as_ref()).unwrap_or(DEFAULT_AVATAR)
    }

    #[must_use]
    pub fn email(&self) -> &str {
        text(self.email.as_ref())
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        text(self.phone.as_ref())
    }

    #[must_use]
    pub fn scholar(&self) -> &str {
        text(self.scholar.as_ref())
    }

    #[must_use]
    pub fn github(&self) -> &str {
        text(self.github.as_ref())
    }
}

/// One entry of the news feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    #[serde(deserialize_with = "scalar_text")]
    pub title: Option<String>,
    /// Lexically sortable date, e.g. ISO 8601.
    #[serde(deserialize_with = "scalar_text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub text: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub image_alt: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub link: Option<String>,
}

impl NewsItem {
    /// Title, `"Update"` when absent or empty.
    #[must_use]
    pub fn title(&self) -> &str {
        non_empty(self.title.as_ref()).unwrap_or(DEFAULT_NEWS_TITLE)
    }

    #[must_use]
    pub fn date(&self) -> &str {
        text(self.date.as_ref())
    }

    #[must_use]
    pub fn text(&self) -> &str {
        text(self.text.as_ref())
    }

    /// Image reference with surrounding whitespace removed, if any remains.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|image| !image.is_empty())
    }

    /// Alternative text for the image, falling back to the title.
    #[must_use]
    pub fn image_alt(&self) -> &str {
        non_empty(self.image_alt.as_ref()).unwrap_or_else(|| self.title())
    }

    /// External link, if present and not blank.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .filter(|link| !link.trim().is_empty())
    }
}

/// One row of the education timeline.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    /// Display string such as `"2018 - 2022"`.
    #[serde(deserialize_with = "scalar_text")]
    pub range: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub degree: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub place: Option<String>,
    #[serde(deserialize_with = "text_list")]
    pub details: Vec<String>,
}

impl EducationEntry {
    #[must_use]
    pub fn range(&self) -> &str {
        text(self.range.as_ref())
    }

    #[must_use]
    pub fn degree(&self) -> &str {
        text(self.degree.as_ref())
    }

    #[must_use]
    pub fn place(&self) -> &str {
        text(self.place.as_ref())
    }
}

/// One row of the employment history.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EmploymentEntry {
    #[serde(deserialize_with = "scalar_text")]
    pub range: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub place: Option<String>,
    #[serde(deserialize_with = "text_list")]
    pub bullets: Vec<String>,
}

impl EmploymentEntry {
    #[must_use]
    pub fn range(&self) -> &str {
        text(self.range.as_ref())
    }

    #[must_use]
    pub fn title(&self) -> &str {
        text(self.title.as_ref())
    }

    #[must_use]
    pub fn place(&self) -> &str {
        text(self.place.as_ref())
    }
}

/// One publication.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Publication {
    #[serde(deserialize_with = "scalar_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub venue: Option<String>,
    pub year: Option<Year>,
    /// Bare DOI identifier such as `10.1/xyz`, not a URL.
    #[serde(deserialize_with = "scalar_text")]
    pub doi: Option<String>,
    #[serde(deserialize_with = "object_or_default")]
    pub links: PublicationLinks,
}

impl Publication {
    #[must_use]
    pub fn title(&self) -> &str {
        text(self.title.as_ref())
    }

    #[must_use]
    pub fn venue(&self) -> &str {
        text(self.venue.as_ref())
    }

    /// Numeric year used for ordering; 0 when absent or unparsable.
    #[must_use]
    pub fn year_key(&self) -> i64 {
        self.year.as_ref().map_or(0, Year::sort_key)
    }

    /// Year as displayed next to the venue.
    #[must_use]
    pub fn year_label(&self) -> String {
        self.year.as_ref().map(Year::label).unwrap_or_default()
    }

    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        non_empty(self.doi.as_ref())
    }
}

/// Optional links attached to a publication.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PublicationLinks {
    #[serde(deserialize_with = "scalar_text")]
    pub pdf: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub code: Option<String>,
}

impl PublicationLinks {
    #[must_use]
    pub fn pdf(&self) -> Option<&str> {
        non_empty(self.pdf.as_ref())
    }

    #[must_use]
    pub fn code(&self) -> Option<&str> {
        non_empty(self.code.as_ref())
    }
}

/// Publication year, usually a JSON number or a numeric-like string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(f64),
    Text(String),
    /// Any other JSON value. Sorts as 0.
    Other(serde_json::Value),
}

impl Year {
    /// Integer value of the year.
    ///
    /// Numbers are truncated toward zero. Strings use their leading integer
    /// (`" 2019"` and `"2019b"` give 2019); anything without one gives 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn sort_key(&self) -> i64 {
        match self {
            Self::Number(n) => n.trunc() as i64,
            Self::Text(s) => leading_integer(s).unwrap_or(0),
            Self::Other(_) => 0,
        }
    }

    /// Display form; empty for an empty string, zero, `false`, or a
    /// structured value.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Number(n) if n.abs() < f64::EPSILON => String::new(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::Other(value) => scalar(value).unwrap_or_default(),
        }
    }
}

/// Parse the integer prefix of a string after optional whitespace and sign.
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value = rest[..digits_end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

fn text(field: Option<&String>) -> &str {
    field.map_or("", String::as_str)
}

fn non_empty(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|value| !value.is_empty())
}

/// Deserialize an object field, reading anything else as the default.
fn object_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(T::default()),
        value @ serde_json::Value::Object(_) => {
            Ok(serde_json::from_value(value).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Malformed object, using defaults");
                T::default()
            }))
        }
        other => {
            tracing::warn!(found = value_kind(&other), "Expected an object, using defaults");
            Ok(T::default())
        }
    }
}

/// Deserialize a text field from any JSON scalar.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar(&serde_json::Value::deserialize(deserializer)?))
}

/// Deserialize a list of text lines. Elements without a text form are skipped.
fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<serde_json::Value> = seq_or_empty(deserializer)?;
    Ok(values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let line = scalar(value);
            if line.is_none() {
                tracing::warn!(index, found = value_kind(value), "Skipping list line without text");
            }
            line
        })
        .collect())
}

/// Text form of a JSON scalar. `null`, `false`, zero, arrays and objects
/// have none.
fn scalar(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON) => None,
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    }
}

/// Deserialize a list leniently.
///
/// Anything that is not an array reads as empty, and array elements that do
/// not match the entry shape are skipped.
fn seq_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Null => return Ok(Vec::new()),
        other => {
            tracing::warn!(found = value_kind(&other), "Expected a list, treating as empty");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping malformed list entry");
                None
            }
        })
        .collect())
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(json: &str) -> SiteData {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let data = parse("{}");
        assert_eq!(data, SiteData::default());
        assert_eq!(data.person.name(), "");
        assert_eq!(data.person.avatar(), "assets/img/avatar.jpg");
    }

    #[test]
    fn test_null_sections_read_as_empty() {
        let data = parse(r#"{"person": null, "news": null, "education": null}"#);
        assert!(data.news.is_empty());
        assert!(data.education.is_empty());
        assert_eq!(data.person, Person::default());
    }

    #[test]
    fn test_non_array_news_reads_as_empty() {
        let data = parse(r#"{"news": {"title": "not a list"}}"#);
        assert!(data.news.is_empty());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let data = parse(r#"{"employment": ["oops", {"title": "Engineer"}]}"#);
        assert_eq!(data.employment.len(), 1);
        assert_eq!(data.employment[0].title(), "Engineer");
    }

    #[test]
    fn test_full_document() {
        let data = parse(
            r#"{
                "person": {"name": "Ada", "email": "ada@example.com", "scholar": "https://scholar.example/ada"},
                "news": [{"date": "2024-01-01", "title": "A", "link": "https://example.com"}],
                "education": [{"range": "2010 - 2014", "degree": "BSc", "details": ["Thesis"]}],
                "employment": [{"range": "2015 -", "title": "Engineer", "bullets": []}],
                "publications": [{"title": "Paper", "year": "2020", "doi": "10.1/xyz", "links": {"pdf": "p.pdf"}}]
            }"#,
        );

        assert_eq!(data.person.name(), "Ada");
        assert_eq!(data.news[0].link(), Some("https://example.com"));
        assert_eq!(data.education[0].details, vec!["Thesis".to_owned()]);
        assert!(data.employment[0].bullets.is_empty());
        let publication = &data.publications[0];
        assert_eq!(publication.year_key(), 2020);
        assert_eq!(publication.doi(), Some("10.1/xyz"));
        assert_eq!(publication.links.pdf(), Some("p.pdf"));
        assert_eq!(publication.links.code(), None);
    }

    #[test]
    fn test_news_defaults() {
        let item = NewsItem {
            image: Some("  img/a.png ".to_owned()),
            link: Some("   ".to_owned()),
            ..NewsItem::default()
        };
        assert_eq!(item.title(), "Update");
        assert_eq!(item.image(), Some("img/a.png"));
        assert_eq!(item.image_alt(), "Update");
        assert_eq!(item.link(), None);
    }

    #[test]
    fn test_news_image_alt_prefers_explicit_value() {
        let item = NewsItem {
            title: Some("Talk".to_owned()),
            image_alt: Some("Stage photo".to_owned()),
            ..NewsItem::default()
        };
        assert_eq!(item.image_alt(), "Stage photo");
    }

    #[test]
    fn test_year_from_number_and_string() {
        let data = parse(
            r#"{"publications": [{"year": 2021}, {"year": "2019"}, {"year": " 2018b"}, {"year": "n/a"}, {}]}"#,
        );
        let keys: Vec<_> = data.publications.iter().map(Publication::year_key).collect();
        assert_eq!(keys, vec![2021, 2019, 2018, 0, 0]);
    }

    #[test]
    fn test_year_label() {
        assert_eq!(Year::Number(2021.0).label(), "2021");
        assert_eq!(Year::Number(0.0).label(), "");
        assert_eq!(Year::Text("in press".to_owned()).label(), "in press");
        assert_eq!(Publication::default().year_label(), "");
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("2020"), Some(2020));
        assert_eq!(leading_integer("-12x"), Some(-12));
        assert_eq!(leading_integer("+7"), Some(7));
        assert_eq!(leading_integer("x2020"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn test_scalar_text_fields_keep_numbers() {
        let data = parse(r#"{"person": {"name": "Ada", "phone": 5551234, "email": true}}"#);
        assert_eq!(data.person.name(), "Ada");
        assert_eq!(data.person.phone(), "5551234");
        assert_eq!(data.person.email(), "true");
    }

    #[test]
    fn test_falsy_and_structured_text_read_as_absent() {
        let data = parse(r#"{"person": {"name": ["Ada"], "phone": 0, "email": false, "tagline": {}}}"#);
        assert_eq!(data.person, Person::default());
        assert_eq!(data.person.avatar(), "assets/img/avatar.jpg");
    }

    #[test]
    fn test_numeric_news_title_keeps_entry() {
        let data = parse(r#"{"news": [{"title": 2024, "date": 20240101}, {"title": "B"}]}"#);
        assert_eq!(data.news.len(), 2);
        assert_eq!(data.news[0].title(), "2024");
        assert_eq!(data.news[0].date(), "20240101");
        assert_eq!(data.news[0].image_alt(), "2024");
        assert_eq!(data.news[1].title(), "B");
    }

    #[test]
    fn test_boolean_year_keeps_entry() {
        let data = parse(r#"{"publications": [{"title": "A", "year": true}, {"title": "B", "year": 2020}]}"#);
        assert_eq!(data.publications.len(), 2);
        let first = &data.publications[0];
        assert_eq!(first.year_key(), 0);
        assert_eq!(first.year_label(), "true");
        assert_eq!(data.publications[1].year_key(), 2020);
    }

    #[test]
    fn test_structured_year_has_no_label() {
        let data = parse(r#"{"publications": [{"year": false}, {"year": [2020]}, {"year": {"y": 1}}]}"#);
        assert_eq!(data.publications.len(), 3);
        for publication in &data.publications {
            assert_eq!(publication.year_key(), 0);
            assert_eq!(publication.year_label(), "");
        }
    }

    #[test]
    fn test_non_object_person_reads_as_default() {
        let data = parse(r#"{"person": "Ada", "news": [{"title": "A"}]}"#);
        assert_eq!(data.person, Person::default());
        assert_eq!(data.news.len(), 1);
    }

    #[test]
    fn test_non_object_links_read_as_empty() {
        let data = parse(r#"{"publications": [{"title": "P", "links": ["p.pdf"], "doi": 42}]}"#);
        let publication = &data.publications[0];
        assert_eq!(publication.links, PublicationLinks::default());
        assert_eq!(publication.doi(), Some("42"));
    }

    #[test]
    fn test_text_lists_keep_scalar_lines() {
        let data = parse(
            r#"{"education": [{"degree": "BSc", "details": ["Thesis", 3.5, null, {"x": 1}]}],
                "employment": [{"title": "Engineer", "bullets": "not a list"}]}"#,
        );
        assert_eq!(data.education[0].details, vec!["Thesis".to_owned(), "3.5".to_owned()]);
        assert!(data.employment[0].bullets.is_empty());
    }

    #[test]
    fn test_null_links_read_as_empty() {
        let data = parse(r#"{"publications": [{"title": "P", "links": null}]}"#);
        assert_eq!(data.publications[0].links, PublicationLinks::default());
    }
}
