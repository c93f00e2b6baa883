//! Interactive table session.
//!
//! Each input line is one UI interaction (typing in the search box, ticking a
//! checkbox, clicking next). The line becomes a [`ViewEvent`], the view is
//! updated, and the table is drawn again. Bad input prints an error and the
//! session carries on.

use super::render::{render_contacts, render_messages, render_table};
use rolodex::api::{CmdMessage, PageSize, RolodexApi, SortKey};
use rolodex::error::{Result, RolodexError};
use rolodex::store::ContactSource;
use rolodex::view::{ContactsView, ViewEvent};
use std::io::{BufRead, Write};
use tracing::debug;

pub const BROWSE_HELP: &str = "\
search <text>   filter by name, email, phone, tag or label
clear           clear the search
select <id>     tick a contact        unselect <id>   untick a contact
all             tick every match      none            untick everything
next | prev     change page           page <n>        jump to page
size <n>        rows per page (5, 10, 20, 50)
sort <key>      none, dateCreated, name, email
show <id>       full contact details
help            this text             quit            leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Event(ViewEvent),
    Show(String),
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<BrowseCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let required = |what: &str| -> Result<String> {
        if rest.is_empty() {
            Err(RolodexError::Api(format!("{word} needs {what}")))
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match word.to_lowercase().as_str() {
        "search" | "/" => BrowseCommand::Event(ViewEvent::Search(rest.to_string())),
        "clear" => BrowseCommand::Event(ViewEvent::Search(String::new())),
        "select" => BrowseCommand::Event(ViewEvent::Toggle {
            id: required("a contact id")?,
            checked: true,
        }),
        "unselect" => BrowseCommand::Event(ViewEvent::Toggle {
            id: required("a contact id")?,
            checked: false,
        }),
        "all" => BrowseCommand::Event(ViewEvent::SelectAll(true)),
        "none" => BrowseCommand::Event(ViewEvent::SelectAll(false)),
        "next" | "n" => BrowseCommand::Event(ViewEvent::NextPage),
        "prev" | "p" => BrowseCommand::Event(ViewEvent::PrevPage),
        "page" => {
            let raw = required("a page number")?;
            let page = raw
                .parse()
                .map_err(|_| RolodexError::Api(format!("Invalid page number: {raw}")))?;
            BrowseCommand::Event(ViewEvent::GoTo(page))
        }
        "size" => BrowseCommand::Event(ViewEvent::PageSize(
            required("a page size")?.parse::<PageSize>()?,
        )),
        "sort" => BrowseCommand::Event(ViewEvent::SortBy(
            required("a sort key")?.parse::<SortKey>()?,
        )),
        "show" => BrowseCommand::Show(required("a contact id")?),
        "help" | "?" => BrowseCommand::Help,
        "quit" | "q" | "exit" => BrowseCommand::Quit,
        other => return Err(RolodexError::Api(format!("Unknown command: {other}"))),
    };
    Ok(Some(command))
}

/// Runs a session until `quit` or end of input.
pub fn run_session<S, R, W>(
    api: &RolodexApi<S>,
    mut view: ContactsView,
    input: R,
    out: &mut W,
    use_color: bool,
    prompt: bool,
) -> Result<ContactsView>
where
    S: ContactSource,
    R: BufRead,
    W: Write,
{
    let contacts = api.contacts()?;
    write!(out, "{}", render_table(&view.snapshot(&contacts), use_color))?;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                let message = CmdMessage::error(e.to_string());
                write!(out, "{}", render_messages(&[message], use_color))?;
                continue;
            }
        };
        debug!(?command, "browse command");

        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => write!(out, "{BROWSE_HELP}")?,
            BrowseCommand::Show(id) => match api.contact(&id) {
                Ok(contact) => write!(out, "{}", render_contacts(&[contact], use_color))?,
                Err(e) => {
                    let message = CmdMessage::error(e.to_string());
                    write!(out, "{}", render_messages(&[message], use_color))?;
                }
            },
            BrowseCommand::Event(event) => {
                view.apply(&contacts, event);
                writeln!(out)?;
                write!(out, "{}", render_table(&view.snapshot(&contacts), use_color))?;
            }
        }
    }

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex::store::memory::InMemoryStore;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn session(script: &str) -> (String, ContactsView) {
        let api = RolodexApi::new(InMemoryStore::sample(), PathBuf::from("/nonexistent"));
        let view = ContactsView::new(PageSize::new(5).unwrap(), SortKey::None);
        let mut out = Vec::new();
        let view = run_session(&api, view, Cursor::new(script), &mut out, false, false).unwrap();
        (String::from_utf8(out).unwrap(), view)
    }

    #[test]
    fn parses_events() {
        assert_eq!(
            parse_command("search jampack.com").unwrap(),
            Some(BrowseCommand::Event(ViewEvent::Search("jampack.com".into())))
        );
        assert_eq!(
            parse_command("  select 4 ").unwrap(),
            Some(BrowseCommand::Event(ViewEvent::Toggle {
                id: "4".into(),
                checked: true
            }))
        );
        assert_eq!(
            parse_command("page 3").unwrap(),
            Some(BrowseCommand::Event(ViewEvent::GoTo(3)))
        );
        assert_eq!(
            parse_command("sort name").unwrap(),
            Some(BrowseCommand::Event(ViewEvent::SortBy(SortKey::Name)))
        );
        assert_eq!(parse_command("q").unwrap(), Some(BrowseCommand::Quit));
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn search_keeps_multi_word_terms() {
        assert_eq!(
            parse_command("search angular developer").unwrap(),
            Some(BrowseCommand::Event(ViewEvent::Search(
                "angular developer".into()
            )))
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("size 7").is_err());
        assert!(parse_command("sort phone").is_err());
        assert!(parse_command("page two").is_err());
        assert!(parse_command("select").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn session_pages_and_searches() {
        let (out, view) = session("next\nsearch jampack.com\nall\nquit\nnext\n");
        assert!(out.contains("1 – 5 of 9"));
        assert!(out.contains("6 – 9 of 9"));
        assert!(out.contains("1 – 4 of 4"));
        assert!(out.contains("4 selected"));
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.selection().len(), 4);
    }

    #[test]
    fn session_reports_errors_and_continues() {
        let (out, view) = session("size 3\nshow 42\nsize 20\n");
        assert!(out.contains("Invalid page size"));
        assert!(out.contains("Contact not found: 42"));
        assert_eq!(view.page_size().get(), 20);
    }

    #[test]
    fn session_shows_contact_details() {
        let (out, _) = session("show 9\n");
        assert!(out.contains("morgan@jampack.com"));
        assert!(out.contains("13 Jan, 2020"));
    }
}
