use crate::error::{Result, RolodexError};
use crate::model::Contact;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Column the table is ordered by. `None` keeps source order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    None,
    DateCreated,
    Name,
    Email,
}

impl FromStr for SortKey {
    type Err = RolodexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Ok(SortKey::None),
            "datecreated" | "date-created" | "date" => Ok(SortKey::DateCreated),
            "name" => Ok(SortKey::Name),
            "email" => Ok(SortKey::Email),
            _ => Err(RolodexError::UnknownSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::None => "none",
            SortKey::DateCreated => "dateCreated",
            SortKey::Name => "name",
            SortKey::Email => "email",
        };
        f.write_str(name)
    }
}

/// Stable sort by `key`. Contacts with unparseable dates sort after dated ones.
pub fn sort_contacts(contacts: &mut [Contact], key: SortKey) {
    match key {
        SortKey::None => {}
        SortKey::Name => contacts.sort_by_cached_key(|c| c.name.to_lowercase()),
        SortKey::Email => contacts.sort_by_cached_key(|c| c.email.to_lowercase()),
        SortKey::DateCreated => contacts.sort_by(|a, b| match (a.created_on(), b.created_on()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_contacts;

    fn ids(contacts: &[Contact]) -> Vec<&str> {
        contacts.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn none_keeps_source_order() {
        let mut contacts = sample_contacts();
        sort_contacts(&mut contacts, SortKey::None);
        assert_eq!(ids(&contacts), vec!["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }

    #[test]
    fn sorts_by_name() {
        let mut contacts = sample_contacts();
        sort_contacts(&mut contacts, SortKey::Name);
        assert_eq!(contacts.first().unwrap().name, "Charlie Chaplin");
        assert_eq!(contacts.last().unwrap().name, "Morgan Freeman");
    }

    #[test]
    fn sorts_by_email() {
        let mut contacts = sample_contacts();
        sort_contacts(&mut contacts, SortKey::Email);
        assert_eq!(contacts.first().unwrap().email, "charlie@leernoca.monster");
        assert_eq!(contacts.last().unwrap().email, "morgan@jampack.com");
    }

    #[test]
    fn sorts_by_date_with_stable_ties() {
        let mut contacts = sample_contacts();
        sort_contacts(&mut contacts, SortKey::DateCreated);
        // 13 Jan 2019, 14 Jan 2019, 21 Feb 2019, 30 Mar 2019, 24 Jun 2019 (2 then 8), ...
        assert_eq!(
            ids(&contacts),
            vec!["1", "6", "3", "4", "2", "8", "5", "9", "7"]
        );
    }

    #[test]
    fn undated_contacts_sort_last() {
        let mut contacts = vec![
            Contact::new("a", "A", "a", "1").with_date_created("unknown"),
            Contact::new("b", "B", "b", "2").with_date_created("1 Jan, 2000"),
        ];
        sort_contacts(&mut contacts, SortKey::DateCreated);
        assert_eq!(ids(&contacts), vec!["b", "a"]);
    }

    #[test]
    fn parses_keys() {
        assert_eq!("dateCreated".parse::<SortKey>().unwrap(), SortKey::DateCreated);
        assert_eq!("date-created".parse::<SortKey>().unwrap(), SortKey::DateCreated);
        assert_eq!("Name".parse::<SortKey>().unwrap(), SortKey::Name);
        assert!(matches!(
            "phone".parse::<SortKey>(),
            Err(RolodexError::UnknownSortKey(_))
        ));
    }
}
