use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Formats accepted for `date_created`, tried in order.
const DATE_FORMATS: &[&str] = &["%d %B, %Y", "%d %b, %Y", "%d %B %Y"];

/// A single contact record.
///
/// `date_created` and `avatar` are display values: the date is kept exactly as
/// entered and only parsed on demand when sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub starred: bool,
}

impl Contact {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            tags: Vec::new(),
            labels: Vec::new(),
            date_created: String::new(),
            avatar: String::new(),
            starred: false,
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_labels<I, T>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_date_created(mut self, date: impl Into<String>) -> Self {
        self.date_created = date.into();
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn starred(mut self, starred: bool) -> Self {
        self.starred = starred;
        self
    }

    /// Avatar fallback: the first character of every word in the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// Best-effort parse of `date_created` ("13 Jan, 2019", "3 July, 2020").
    pub fn created_on(&self) -> Option<NaiveDate> {
        let raw = self.date_created.trim();
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letter_of_each_word() {
        let c = Contact::new("1", "Charlie Chaplin", "c@x.com", "+1");
        assert_eq!(c.initials(), "CC");

        let single = Contact::new("2", "Prince", "p@x.com", "+1");
        assert_eq!(single.initials(), "P");

        let spaced = Contact::new("3", "  Huma   Therman ", "h@x.com", "+1");
        assert_eq!(spaced.initials(), "HT");
    }

    #[test]
    fn parses_short_and_long_month_names() {
        let short = Contact::new("1", "A", "a", "1").with_date_created("13 Jan, 2019");
        assert_eq!(short.created_on(), NaiveDate::from_ymd_opt(2019, 1, 13));

        let long = Contact::new("2", "B", "b", "2").with_date_created("3 July, 2020");
        assert_eq!(long.created_on(), NaiveDate::from_ymd_opt(2020, 7, 3));
    }

    #[test]
    fn unparseable_date_is_none() {
        let c = Contact::new("1", "A", "a", "1").with_date_created("sometime");
        assert_eq!(c.created_on(), None);
    }

    #[test]
    fn deserializes_camel_case_with_optional_fields() {
        let json = r#"{"id":"7","name":"Jaquline Joker","email":"j@jampack.com","phone":"+145","dateCreated":"3 July, 2020"}"#;
        let c: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(c.date_created, "3 July, 2020");
        assert!(c.tags.is_empty());
        assert!(!c.starred);
    }
}
