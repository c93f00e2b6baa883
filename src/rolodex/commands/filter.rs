use crate::model::Contact;

/// Case-insensitive substring match over name, email, phone, tags and labels.
///
/// An empty query matches every contact.
pub fn matches(contact: &Contact, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let hit = |field: &str| field.to_lowercase().contains(&needle);

    hit(&contact.name)
        || hit(&contact.email)
        || hit(&contact.phone)
        || contact.tags.iter().any(|t| hit(t))
        || contact.labels.iter().any(|l| hit(l))
}

/// Returns the contacts matching `query`, preserving source order.
pub fn filter_contacts(contacts: &[Contact], query: &str) -> Vec<Contact> {
    contacts
        .iter()
        .filter(|c| matches(c, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_contacts;

    fn names(contacts: &[Contact]) -> Vec<&str> {
        contacts.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let all = sample_contacts();
        assert_eq!(filter_contacts(&all, "").len(), all.len());
    }

    #[test]
    fn email_domain_finds_four_contacts() {
        let result = filter_contacts(&sample_contacts(), "jampack.com");
        let mut found = names(&result);
        found.sort();
        assert_eq!(
            found,
            vec![
                "Danial Craig",
                "Jaquline Joker",
                "Katharine Jones",
                "Morgan Freeman"
            ]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = filter_contacts(&sample_contacts(), "CHARLIE");
        assert_eq!(names(&result), vec!["Charlie Chaplin"]);
    }

    #[test]
    fn matches_tags_and_labels() {
        let by_tag = filter_contacts(&sample_contacts(), "angular");
        assert_eq!(names(&by_tag), vec!["Dean Shaw", "Huma Therman"]);

        let by_label = filter_contacts(&sample_contacts(), "human res");
        assert_eq!(names(&by_label), vec!["John Brother"]);
    }

    #[test]
    fn matches_phone_fragment() {
        let result = filter_contacts(&sample_contacts(), "+741");
        assert_eq!(names(&result), vec!["Charlie Chaplin", "Katharine Jones"]);
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_contacts(&sample_contacts(), "zzz-nobody").is_empty());
    }

    #[test]
    fn filtered_set_is_exactly_the_matching_subset() {
        let all = sample_contacts();
        for query in ["a", "design", "52", "PROMO", "@", "x"] {
            let q = query.to_lowercase();
            let fields_hit = |c: &Contact| {
                c.name.to_lowercase().contains(&q)
                    || c.email.to_lowercase().contains(&q)
                    || c.phone.to_lowercase().contains(&q)
                    || c.tags.iter().any(|t| t.to_lowercase().contains(&q))
                    || c.labels.iter().any(|l| l.to_lowercase().contains(&q))
            };

            let filtered = filter_contacts(&all, query);
            for c in &all {
                let kept = filtered.iter().any(|f| f.id == c.id);
                assert_eq!(kept, fields_hit(c), "{} with {query:?}", c.name);
            }
        }
    }
}
