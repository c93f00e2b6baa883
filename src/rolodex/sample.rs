//! Built-in contact list used when no data file is configured.

use crate::model::Contact;

const AVATAR_CHARLIE: &str = "assets/avatar-charlie.jpg";
const AVATAR_DANIAL: &str = "assets/avatar-danial.jpg";
const AVATAR_DEAN: &str = "assets/avatar-dean.jpg";
const AVATAR_HENCE: &str = "assets/avatar-hence.jpg";

pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::new("1", "Charlie Chaplin", "charlie@leernoca.monster", "+741 56 7896")
            .with_tags(["Collaborator"])
            .with_labels(["Inventory"])
            .with_date_created("13 Jan, 2019")
            .with_avatar(AVATAR_CHARLIE),
        Contact::new("2", "Danial Craig", "danialc@jampack.com", "+145 52 5689")
            .with_tags(["Collaborator"])
            .with_labels(["Developer"])
            .with_date_created("24 Jun, 2019")
            .with_avatar(AVATAR_DANIAL),
        Contact::new("3", "Dean Shaw", "dean-shaw@poww.me", "+234 48 2365")
            .with_tags(["Collaborator", "Angular Developer"])
            .with_labels(["Design"])
            .with_date_created("21 Feb, 2019")
            .with_avatar(AVATAR_DEAN)
            .starred(true),
        Contact::new("4", "Hence Work", "contact@hencework.com", "+145 52 5463")
            .with_tags(["Promotion"])
            .with_labels(["Design"])
            .with_date_created("30 Mar, 2019")
            .with_avatar(AVATAR_HENCE)
            .starred(true),
        Contact::new("5", "Huma Therman", "huma@clariesup.au", "+234 48 2365")
            .with_tags(["Collaborator", "Angular Developer"])
            .with_labels(["Developer"])
            .with_date_created("13 Jan, 2020")
            .with_avatar(AVATAR_CHARLIE)
            .starred(true),
        Contact::new("6", "John Brother", "john@cryodrakon.info", "+456 52 4862")
            .with_tags(["Promotion", "Collaborator"])
            .with_labels(["Human Resource"])
            .with_date_created("14 Jan, 2019")
            .with_avatar(AVATAR_DANIAL),
        Contact::new("7", "Jaquline Joker", "jaquljoker@jampack.com", "+145 53 4715")
            .with_tags(["Promotion", "Collaborator"])
            .with_labels(["Design"])
            .with_date_created("3 July, 2020")
            .with_avatar(AVATAR_DEAN),
        Contact::new("8", "Katharine Jones", "joneskath@jampack.com", "+741 56 7896")
            .with_tags(["Promotion"])
            .with_labels(["Inventory"])
            .with_date_created("24 Jun, 2019")
            .with_avatar(AVATAR_HENCE),
        Contact::new("9", "Morgan Freeman", "morgan@jampack.com", "+145 52 5689")
            .with_tags(["Promotion", "Collaborator"])
            .with_labels(["Design"])
            .with_date_created("13 Jan, 2020")
            .with_avatar(AVATAR_CHARLIE)
            .starred(true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_has_nine_unique_contacts() {
        let contacts = sample_contacts();
        assert_eq!(contacts.len(), 9);
        let ids: HashSet<_> = contacts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn every_sample_date_parses() {
        assert!(sample_contacts().iter().all(|c| c.created_on().is_some()));
    }
}
