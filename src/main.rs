//! Terminal host for the staffdesk console.
//!
//! Reads one command per line from stdin, feeds it to the [`Console`], and
//! prints the re-rendered view whenever the console asks for it.
//!
//! # Commands
//!
//! ```text
//! search key=value...   keyword, start, end, department, status
//! clear                 reset the search panel and search everything
//! new                   open the create dialog
//! detail <id>           open a row read-only
//! edit <id>             open a row for editing
//! set <field> <value>   change a field of the open dialog
//! confirm | cancel      close the dialog
//! select <id>...        replace the selection
//! toggle <id>           flip one row's checkbox
//! delete                delete the selected rows
//! page <n> | size <n>   pagination (pages count from 1)
//! lang <en|zh>          switch the display locale
//! dismiss               hide the notice
//! help | quit
//! ```
//!
//! Configuration comes from `STAFFDESK_*` environment variables and the TOML
//! file named by `STAFFDESK_CONFIG`.

#![allow(clippy::multiple_crate_versions)]

use staffdesk::app::{DialogMode, SearchPanel};
use staffdesk::domain::FieldEdit;
use staffdesk::observability::init_tracing;
use staffdesk::{initialize, ui, Config, Console, Event, Locale, Theme};
use std::io::{self, Write};
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
search key=value...   keyword, start, end, department, status
clear                 reset the search panel and search everything
new                   open the create dialog
detail <id>           open a row read-only
edit <id>             open a row for editing
set <field> <value>   change a field of the open dialog
confirm | cancel      close the dialog
select <id>...        replace the selection
toggle <id>           flip one row's checkbox
delete                delete the selected rows
page <n> | size <n>   pagination (pages count from 1)
lang <en|zh>          switch the display locale
dismiss               hide the notice
help | quit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Draft field assignments followed by a search.
    Search(Vec<(String, String)>),
    Clear,
    New,
    Delete,
    Console(Event),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err("empty command".to_string());
    };
    let args: Vec<&str> = words.collect();

    let single = |what: &str| -> Result<String, String> {
        match args.as_slice() {
            [value] => Ok((*value).to_string()),
            _ => Err(format!("usage: {verb} <{what}>")),
        }
    };
    let number = |what: &str| -> Result<usize, String> {
        single(what)?
            .parse::<usize>()
            .map_err(|_| format!("{what} must be a number"))
    };

    let command = match verb {
        "search" => {
            let pairs = args
                .iter()
                .map(|arg| {
                    arg.split_once('=')
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .ok_or_else(|| format!("expected key=value, got `{arg}`"))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Command::Search(pairs)
        }
        "clear" => Command::Clear,
        "new" => Command::New,
        "delete" => Command::Delete,
        "detail" | "edit" => Command::Console(Event::OpenRow {
            mode: verb.parse::<DialogMode>()?,
            id: single("id")?,
        }),
        "set" => {
            let [field, rest @ ..] = args.as_slice() else {
                return Err("usage: set <field> <value>".to_string());
            };
            let value = rest.join(" ");
            let edit = FieldEdit::parse(field, &value)
                .ok_or_else(|| format!("cannot set `{field}` to `{value}`"))?;
            Command::Console(Event::EditField(edit))
        }
        "confirm" => Command::Console(Event::ConfirmDialog),
        "cancel" => Command::Console(Event::CancelDialog),
        "select" => Command::Console(Event::SelectRows(
            args.iter().map(ToString::to_string).collect(),
        )),
        "toggle" => Command::Console(Event::ToggleRow(single("id")?)),
        "page" => {
            let page = number("page")?;
            if page == 0 {
                return Err("pages count from 1".to_string());
            }
            Command::Console(Event::ShowPage(page - 1))
        }
        "size" => Command::Console(Event::SetPageSize(number("size")?)),
        "lang" => Command::Console(Event::ChangeLocale(single("locale")?.parse::<Locale>()?)),
        "dismiss" => Command::Console(Event::DismissNotice),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`, try `help`")),
    };
    Ok(command)
}

fn print_view(out: &mut impl Write, console: &Console, theme: &Theme) -> io::Result<()> {
    write!(out, "{}> ", ui::render(&console.view(), theme))?;
    out.flush()
}

async fn run_command(console: &mut Console, panel: &mut SearchPanel, command: Command) -> bool {
    match command {
        Command::Search(pairs) => {
            for (field, value) in &pairs {
                if !panel.set_field(field, value) {
                    eprintln!("ignoring `{field}={value}`");
                }
            }
            console.handle(Event::from(panel.submit())).await
        }
        Command::Clear => console.handle(Event::from(panel.clear())).await,
        Command::New => console.handle(Event::from(panel.request_create())).await,
        Command::Delete => console.handle(Event::from(panel.request_delete())).await,
        Command::Console(event) => console.handle(event).await,
        Command::Help => {
            println!("{HELP}");
            true
        }
        Command::Quit => false,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("staffdesk: invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(&config) {
        eprintln!("staffdesk: span export disabled: {e}");
    }

    let mut console = match initialize(&config) {
        Ok(console) => console,
        Err(e) => {
            tracing::error!(error = %e, "failed to start console");
            eprintln!("staffdesk: {e}");
            return ExitCode::FAILURE;
        }
    };

    let theme = config.theme();
    let mut panel = SearchPanel::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut stdout = io::stdout();
    if let Err(e) = print_view(&mut stdout, &console, &theme) {
        tracing::error!(error = %e, "failed to write to stdout");
        return ExitCode::FAILURE;
    }

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "failed to read stdin");
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        let changed = run_command(&mut console, &mut panel, command).await;
        let expired = console.tick();
        if changed || expired {
            if let Err(e) = print_view(&mut stdout, &console, &theme) {
                tracing::error!(error = %e, "failed to write to stdout");
                return ExitCode::FAILURE;
            }
        }
    }

    tracing::debug!("console closed");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffdesk::domain::Gender;
    use staffdesk::store::{EmployeeStore, HttpStore};
    use std::sync::Arc;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn idle_console() -> Console {
        let store: Arc<dyn EmployeeStore> =
            Arc::new(HttpStore::new("http://127.0.0.1:9/api/employee", 1).unwrap());
        Console::new(store, Locale::En)
    }

    #[test]
    fn view_is_written_with_a_prompt() {
        let mut out = Vec::new();
        print_view(&mut out, &idle_console(), &Theme::plain()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Employee Console"));
        assert!(text.ends_with("> "));
    }

    #[test]
    fn write_failures_are_reported() {
        let err = print_view(&mut ClosedPipe, &idle_console(), &Theme::plain()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn parses_search_assignments() {
        assert_eq!(
            parse_command("search department=D002 status=on").unwrap(),
            Command::Search(vec![
                ("department".into(), "D002".into()),
                ("status".into(), "on".into()),
            ])
        );
        assert!(parse_command("search D002").is_err());
    }

    #[test]
    fn parses_dialog_commands() {
        assert_eq!(
            parse_command("edit E200").unwrap(),
            Command::Console(Event::OpenRow {
                mode: DialogMode::Edit,
                id: "E200".into()
            })
        );
        assert_eq!(
            parse_command("set gender M").unwrap(),
            Command::Console(Event::EditField(FieldEdit::Gender(Some(Gender::Male))))
        );
        assert_eq!(
            parse_command("set name Ada Lovelace").unwrap(),
            Command::Console(Event::EditField(FieldEdit::Name("Ada Lovelace".into())))
        );
        assert!(parse_command("set modifyBy me").is_err());
    }

    #[test]
    fn pages_count_from_one() {
        assert_eq!(
            parse_command("page 2").unwrap(),
            Command::Console(Event::ShowPage(1))
        );
        assert!(parse_command("page 0").is_err());
        assert!(parse_command("size ten").is_err());
    }

    #[test]
    fn rejects_unknown_input() {
        assert!(parse_command("frobnicate").is_err());
        assert!(parse_command("lang fr").is_err());
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
    }
}
