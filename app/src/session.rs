//! Interactive session: the roster view, add-member form and download
//! buttons driven from a line editor.

use std::path::PathBuf;

use roster::NewMemberForm;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use crate::commands;
use crate::render::{render_card, render_details, render_roster};
use crate::state::AppState;

const HELP: &str = "\
Commands:
  list               show the family tree
  show <id>          member details
  add                add a family member
  download [dir]     write the data file (default: current directory)
  save-account       save to an external account
  help               this text
  quit               leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    List,
    Show(String),
    Add,
    Download(Option<PathBuf>),
    SaveAccount,
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err("empty command".to_string());
        };
        let rest: Vec<&str> = words.collect();

        match (head, rest.as_slice()) {
            ("list" | "ls", []) => Ok(Self::List),
            ("show", [id]) => Ok(Self::Show(id.to_string())),
            ("show", _) => Err("usage: show <id>".to_string()),
            ("add", []) => Ok(Self::Add),
            ("download", []) => Ok(Self::Download(None)),
            ("download", [dir]) => Ok(Self::Download(Some(PathBuf::from(dir)))),
            ("save-account", []) => Ok(Self::SaveAccount),
            ("help" | "?", []) => Ok(Self::Help),
            ("quit" | "exit", []) => Ok(Self::Quit),
            _ => Err(format!("unknown command: {}", line.trim())),
        }
    }
}

/// Outcome of prompting for the form fields
enum FormInput {
    Filled,
    Cancelled,
}

pub fn run_session(state: &AppState) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut form = NewMemberForm::new();

    match commands::roster::get_roster(state) {
        Ok(view) => println!("{}", render_roster(&view)),
        Err(err) => eprintln!("{err}"),
    }
    println!("Type `help` for commands.");

    loop {
        let line = match editor.readline("family-tree> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        if line.trim().is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line.as_str());

        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        debug!("Session command: {:?}", command);

        match command {
            SessionCommand::List => match commands::roster::get_roster(state) {
                Ok(view) => println!("{}", render_roster(&view)),
                Err(err) => eprintln!("{err}"),
            },
            SessionCommand::Show(id) => match commands::roster::get_member(state, &id) {
                Ok(Some(card)) => println!("{}", render_details(&card)),
                Ok(None) => println!("no member with id {id}"),
                Err(err) => eprintln!("{err}"),
            },
            SessionCommand::Add => {
                if let FormInput::Cancelled = fill_form(&mut editor, state, &mut form)? {
                    println!("cancelled");
                    continue;
                }
                match commands::roster::add_member(state, &mut form) {
                    Ok(card) => println!("added {}", render_card(&card)),
                    Err(err) => println!("{err}"),
                }
            }
            SessionCommand::Download(dir) => {
                let dir = dir.unwrap_or_else(|| PathBuf::from("."));
                match commands::export::download_data(state, &dir) {
                    Ok(result) => println!(
                        "wrote {} members to {} ({} bytes)",
                        result.members, result.path, result.file_bytes
                    ),
                    Err(err) => eprintln!("{err}"),
                }
            }
            SessionCommand::SaveAccount => match commands::account::save_to_account(state) {
                Ok(notice) => println!("{}", notice.message),
                Err(err) => eprintln!("{err}"),
            },
            SessionCommand::Help => println!("{HELP}"),
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

/// Prompt for each form field, prefilled with what the form already holds
fn fill_form(
    editor: &mut DefaultEditor,
    state: &AppState,
    form: &mut NewMemberForm,
) -> anyhow::Result<FormInput> {
    let options = commands::config::get_generation_options(state);
    let choices: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();

    let generation_prompt = format!("Generation ({}): ", choices.join(", "));

    let fields: [(&str, &mut String); 4] = [
        ("Name: ", &mut form.name),
        ("Role: ", &mut form.role),
        ("Year Range: ", &mut form.year_range),
        (generation_prompt.as_str(), &mut form.generation),
    ];
    for (prompt, value) in fields {
        match editor.readline_with_initial(prompt, (value.as_str(), "")) {
            Ok(input) => *value = input,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                return Ok(FormInput::Cancelled)
            }
            Err(err) => return Err(err.into()),
        }
    }

    if !choices.contains(&form.generation.trim()) {
        warn!("Generation {} is not one of the offered options", form.generation);
    }
    Ok(FormInput::Filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(SessionCommand::parse("list"), Ok(SessionCommand::List));
        assert_eq!(
            SessionCommand::parse("  show  father "),
            Ok(SessionCommand::Show("father".into()))
        );
        assert_eq!(SessionCommand::parse("download"), Ok(SessionCommand::Download(None)));
        assert_eq!(
            SessionCommand::parse("download /tmp/out"),
            Ok(SessionCommand::Download(Some(PathBuf::from("/tmp/out"))))
        );
        assert_eq!(SessionCommand::parse("save-account"), Ok(SessionCommand::SaveAccount));
        assert_eq!(SessionCommand::parse("exit"), Ok(SessionCommand::Quit));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(SessionCommand::parse("").is_err());
        assert!(SessionCommand::parse("show").is_err());
        assert!(SessionCommand::parse("add extra").is_err());
        assert!(SessionCommand::parse("delete father").is_err());
    }
}
