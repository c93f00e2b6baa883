use crate::error::{Result, RolodexError};
use crate::model::Contact;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const CSV_HEADER: &str = "id,name,email,phone,tags,labels,date_created,starred";
const LIST_SEPARATOR: &str = ";";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = RolodexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(RolodexError::Api(format!("Unknown export format: {other}"))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => f.write_str("csv"),
            ExportFormat::Json => f.write_str("json"),
        }
    }
}

pub fn export(contacts: &[&Contact], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => Ok(to_csv(contacts)),
        ExportFormat::Json => {
            let mut out = serde_json::to_string_pretty(contacts)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn to_csv(contacts: &[&Contact]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for c in contacts {
        let fields = [
            csv_field(&c.id),
            csv_field(&c.name),
            csv_field(&c.email),
            csv_field(&c.phone),
            csv_field(&c.tags.join(LIST_SEPARATOR)),
            csv_field(&c.labels.join(LIST_SEPARATOR)),
            csv_field(&c.date_created),
            c.starred.to_string(),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    let needs_quotes = value
        .chars()
        .any(|ch| matches!(ch, ',' | '"' | ';' | '\n' | '\r'));
    if needs_quotes {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_contacts;

    #[test]
    fn csv_has_header_and_quotes_dates() {
        let contacts = sample_contacts();
        let refs: Vec<&Contact> = contacts.iter().take(1).collect();
        let csv = export(&refs, ExportFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            "1,Charlie Chaplin,charlie@leernoca.monster,+741 56 7896,Collaborator,Inventory,\"13 Jan, 2019\",false"
        );
    }

    #[test]
    fn csv_joins_multiple_tags_and_escapes_quotes() {
        let c = Contact::new("x", "The \"Boss\"", "b@x.com", "1")
            .with_tags(["Promotion", "Collaborator"]);
        let csv = export(&[&c], ExportFormat::Csv).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "x,\"The \"\"Boss\"\"\",b@x.com,1,\"Promotion;Collaborator\",,,false"
        );
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let contacts = sample_contacts();
        let refs: Vec<&Contact> = contacts.iter().skip(6).take(1).collect();
        let json = export(&refs, ExportFormat::Json).unwrap();
        let parsed: Vec<Contact> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].name, "Jaquline Joker");
        assert!(json.contains("\"dateCreated\": \"3 July, 2020\""));
    }

    #[test]
    fn empty_export_is_header_only() {
        let csv = export(&[], ExportFormat::Csv).unwrap();
        assert_eq!(csv, format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
