use annotator_core::{ArticleStatus, Msg};

/// A parsed line of user input.
pub(crate) enum Command {
    Msg(Msg),
    Help,
    Quit,
    Unknown(String),
}

pub(crate) fn help_text() -> &'static str {
    "commands:\n\
     \x20 refresh                      reload the article table\n\
     \x20 sort <column>                sort the table (repeat to flip direction)\n\
     \x20 open <id>                    open a coded article for editing\n\
     \x20 status <name|id>             set the article status\n\
     \x20 comment <text>               set the article comment\n\
     \x20 code <unit> <field> <code>   set a code value on a unit coding\n\
     \x20 text <unit> <field> <text>   set a text value on a unit coding\n\
     \x20 addunit [sentence]           add a unit coding\n\
     \x20 delunit <unit>               remove a unit coding\n\
     \x20 save | discard | close       persist, revert or close the editor\n\
     \x20 help | quit"
}

pub(crate) fn parse(line: &str) -> Command {
    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        "refresh" => Command::Msg(Msg::TableRefreshRequested),
        "sort" if !rest.is_empty() => Command::Msg(Msg::SortChanged(rest.to_string())),
        "open" => match rest.parse() {
            Ok(id) => Command::Msg(Msg::RowActivated(id)),
            Err(_) => Command::Unknown(trimmed.to_string()),
        },
        "status" => match parse_status(rest) {
            Some(status) => Command::Msg(Msg::StatusEdited(status)),
            None => Command::Unknown(trimmed.to_string()),
        },
        "comment" => Command::Msg(Msg::CommentEdited(rest.to_string())),
        "code" => {
            let mut parts = rest.split_whitespace();
            match (
                parts.next().and_then(|s| s.parse().ok()),
                parts.next().and_then(|s| s.parse().ok()),
                parts.next().and_then(|s| s.parse().ok()),
            ) {
                (Some(unit), Some(field), Some(code)) => Command::Msg(Msg::CodingValueEdited {
                    unit,
                    field,
                    code: Some(code),
                    text: None,
                }),
                _ => Command::Unknown(trimmed.to_string()),
            }
        }
        "text" => {
            let mut parts = rest.splitn(3, char::is_whitespace);
            match (
                parts.next().and_then(|s| s.parse().ok()),
                parts.next().and_then(|s| s.parse().ok()),
                parts.next(),
            ) {
                (Some(unit), Some(field), Some(text)) => Command::Msg(Msg::CodingValueEdited {
                    unit,
                    field,
                    code: None,
                    text: Some(text.to_string()),
                }),
                _ => Command::Unknown(trimmed.to_string()),
            }
        }
        "addunit" => Command::Msg(Msg::UnitCodingAdded {
            sentence: rest.parse().ok(),
        }),
        "delunit" => match rest.parse() {
            Ok(unit) => Command::Msg(Msg::UnitCodingRemoved { unit }),
            Err(_) => Command::Unknown(trimmed.to_string()),
        },
        "save" => Command::Msg(Msg::SaveRequested),
        "discard" => Command::Msg(Msg::DiscardRequested),
        "close" => Command::Msg(Msg::CloseRequested),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

fn parse_status(input: &str) -> Option<ArticleStatus> {
    if let Ok(id) = input.parse::<u64>() {
        return Some(ArticleStatus::from_id(id));
    }
    match input.to_lowercase().as_str() {
        "notstarted" | "not-started" => Some(ArticleStatus::NotStarted),
        "inprogress" | "in-progress" => Some(ArticleStatus::InProgress),
        "complete" | "done" => Some(ArticleStatus::Complete),
        "irrelevant" => Some(ArticleStatus::Irrelevant),
        _ => None,
    }
}
