use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use counter_store::app::{ActionParseError, AppAction, AppReducer, AppState};
use counter_store::config::{Config, ConfigStore};
use counter_store::lifecycle::{AppLifecycle, Application};
use counter_store::logging::init_tracing;
use counter_store::store::SharedStore;

/// Drive the counter store from the command line.
#[derive(Parser, Debug)]
#[command(name = "counter-store", version, about)]
struct Cli {
    /// Config file (default: platform config dir/counter-store/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final state as JSON instead of a counter line per dispatch.
    #[arg(long)]
    json: bool,

    /// Actions to dispatch: increase (inc, +), decrease (dec, -), ok:<int>, err:<message>.
    /// Reads one action per line from stdin when omitted.
    #[arg(allow_hyphen_values = true)]
    actions: Vec<String>,
}

#[derive(Debug, PartialEq)]
enum Line {
    Dispatch(AppAction),
    Skip,
    Quit,
}

fn parse_line(line: &str) -> Result<Line, ActionParseError> {
    match line.trim() {
        "" => Ok(Line::Skip),
        "quit" | "exit" => Ok(Line::Quit),
        other => other.parse().map(Line::Dispatch),
    }
}

fn run_stdin(store: &SharedStore<AppReducer>) -> io::Result<()> {
    for line in io::stdin().lock().lines() {
        match parse_line(&line?) {
            Ok(Line::Dispatch(action)) => store.dispatch(action),
            Ok(Line::Skip) => {}
            Ok(Line::Quit) => break,
            Err(e) => eprintln!("{}", e),
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = ConfigStore::open(config_path)
        .context("failed to load configuration")?
        .get();
    init_tracing(&config.logging);

    let actions = cli
        .actions
        .iter()
        .map(|raw| {
            raw.parse::<AppAction>()
                .with_context(|| format!("invalid action '{}'", raw))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut app = Application::new(&config);
    app.did_finish_launching();
    app.did_become_active();

    let store = app.store().clone();
    let subscription = (!cli.json).then(|| {
        store.subscribe(|state: &AppState| println!("counter = {}", state.counter()))
    });

    if actions.is_empty() {
        run_stdin(&store).context("failed to read stdin")?;
    } else {
        for action in actions {
            store.dispatch(action);
        }
    }

    if let Some(id) = subscription {
        store.unsubscribe(id);
    }
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&store.state())?);
    }

    app.will_resign_active();
    app.did_enter_background();
    app.will_terminate();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_accepts_hyphen_actions() {
        let cli = Cli::try_parse_from(["counter-store", "+", "-", "ok:5"]).unwrap();
        assert_eq!(cli.actions, vec!["+", "-", "ok:5"]);
        assert!(!cli.json);
    }

    #[test]
    fn cli_json_and_config_flags() {
        let cli =
            Cli::try_parse_from(["counter-store", "--json", "--config", "/tmp/c.toml", "inc"])
                .unwrap();
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(cli.actions, vec!["inc"]);
    }

    #[test]
    fn parse_line_handles_blank_and_quit() {
        assert_eq!(parse_line("   "), Ok(Line::Skip));
        assert_eq!(parse_line("quit"), Ok(Line::Quit));
        assert_eq!(parse_line("inc"), Ok(Line::Dispatch(AppAction::increase())));
        assert!(parse_line("jump").is_err());
    }
}
