use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::BufRead;
use vetclinic_types::{OwnerId, PetId};

use super::status;
use crate::app::{Action, App, Destination, FormKind, Section};
use crate::args::FieldArgs;
use crate::context::ExecutionContext;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::SubmitFrom;

const PROMPT: &str = "vetclinic> ";

const HELP: &str = "\
Commands:
  pets                     list pets
  owners                   list owners
  pet <id>                 pet details, visits and trend chart
  owner <id>               owner details and their pets
  new-pet                  add-pet form
  new-owner                add-owner form
  new-record               add-record form
  add-pet k=v ...          add a pet
  add-owner k=v ...        add an owner
  add-record k=v ...       add a health record
  status                   check the API
  help                     this list
  quit                     leave the shell
Values with spaces go in quotes: address=\"Moscow, Lenina 1\"";

#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    Pets,
    Owners,
    Pet {
        id: PetId,
    },
    Owner {
        id: OwnerId,
    },
    NewPet,
    NewOwner,
    NewRecord,
    AddPet {
        #[command(flatten)]
        fields: FieldArgs,
    },
    AddOwner {
        #[command(flatten)]
        fields: FieldArgs,
    },
    AddRecord {
        #[command(flatten)]
        fields: FieldArgs,
    },
    Status,
    Help,
    #[command(alias = "exit")]
    Quit,
}

enum Step {
    Act(Action),
    Status,
    Help,
    Quit,
}

impl From<ShellCommand> for Step {
    fn from(command: ShellCommand) -> Self {
        let navigate = |d| Step::Act(Action::Navigate(d));
        let submit = |kind, fields: FieldArgs| Step::Act(Action::Submit(kind, fields.resolve()));
        match command {
            ShellCommand::Pets => navigate(Destination::PetList),
            ShellCommand::Owners => navigate(Destination::OwnerList),
            ShellCommand::Pet { id } => navigate(Destination::PetDetail(id)),
            ShellCommand::Owner { id } => navigate(Destination::OwnerDetail(id)),
            ShellCommand::NewPet => navigate(Destination::AddPet),
            ShellCommand::NewOwner => navigate(Destination::AddOwner),
            ShellCommand::NewRecord => navigate(Destination::AddRecord),
            ShellCommand::AddPet { fields } => submit(FormKind::AddPet, fields),
            ShellCommand::AddOwner { fields } => submit(FormKind::AddOwner, fields),
            ShellCommand::AddRecord { fields } => submit(FormKind::AddRecord, fields),
            ShellCommand::Status => Step::Status,
            ShellCommand::Help => Step::Help,
            ShellCommand::Quit => Step::Quit,
        }
    }
}

/// Split a line into words. Single and double quotes group words; a
/// backslash escapes the next character.
pub(crate) fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (_, '\\') => {
                let escaped = chars.next().ok_or("line ends with a backslash")?;
                current.push(escaped);
                in_word = true;
            }
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("missing closing {}", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn parse(line: &str) -> Result<Option<Step>, String> {
    let words = split_line(line)?;
    if words.is_empty() {
        return Ok(None);
    }
    ShellLine::try_parse_from(words)
        .map(|parsed| Some(parsed.command.into()))
        .map_err(|e| e.to_string().trim_end().to_string())
}

struct Shell<'a> {
    app: App,
    ctx: &'a ExecutionContext,
}

impl<'a> Shell<'a> {
    /// Run one line. `false` ends the session.
    async fn execute(&mut self, line: &str) -> bool {
        let step = match parse(line) {
            Ok(Some(step)) => step,
            Ok(None) => return true,
            Err(message) => {
                eprintln!("{}", message);
                eprintln!("Type 'help' for the list of commands.");
                return true;
            }
        };

        match step {
            Step::Act(action) => {
                self.app.dispatch(action).await;
            }
            Step::Status => {
                let renderer = ConsoleRenderer::new(self.ctx.json_mode());
                let api = self.app.api().clone();
                if let Err(e) = status::report(api.as_ref(), self.ctx.api_base(), &renderer).await
                {
                    eprintln!("Error: {}", e);
                }
            }
            Step::Help => println!("{}", HELP),
            Step::Quit => return false,
        }
        true
    }
}

pub async fn handle(ctx: &ExecutionContext) -> Result<()> {
    let app = ctx.app(SubmitFrom::Shell)?;
    let mut shell = Shell { app, ctx };

    if !ctx.json_mode() {
        println!(
            "vetclinic shell on {}. Type 'help' for commands.",
            ctx.api_base()
        );
    }
    shell.app.start(Section::PetList).await;

    if std::io::stdin().is_terminal() {
        let mut editor = DefaultEditor::new()?;
        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    if !shell.execute(&line).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }
    } else {
        for line in std::io::stdin().lock().lines() {
            if !shell.execute(&line?).await {
                break;
            }
        }
    }

    Ok(())
}
