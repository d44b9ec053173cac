//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Installs a `tracing` subscriber
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: process arguments via clap (`setup.rs`), shell
//!    lines via `shell.rs`
//! 2. **Context Setup**: build `AppContext` with the API and configuration
//! 3. **API Dispatch**: call the matching `RosterApi` method
//! 4. **Output Formatting**: tables, JSON, colored messages (`print.rs`)
//! 5. **Error Handling**: shell errors are reported and the session goes on;
//!    setup errors end the process through `main.rs`

use super::print::{
    print_error, print_info, print_json, print_outcome, print_student, print_students,
    print_success,
};
use super::setup::{Cli, Commands};
use super::shell::{parse_line, ShellCommand};
use clap::Parser;
use directories::ProjectDirs;
use roster::api::{parse_age, RosterApi, SortKey};
use roster::config::RosterConfig;
use roster::error::Result;
use roster::service::StudentService;
use roster::store::memory::InMemoryStore;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: RosterApi<InMemoryStore>,
    json: bool,
    prompt: String,
}

/// Whether the shell loop should keep reading.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Demo) => handle_demo(&mut ctx),
        Some(Commands::Shell) | None => handle_shell(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<RosterConfig> {
    if let Some(path) = &cli.config {
        return RosterConfig::load_file(path);
    }

    match ProjectDirs::from("org", "roster", "roster") {
        Some(dirs) => RosterConfig::load(dirs.config_dir()).or_else(|e| {
            warn!(error = %e, "ignoring unreadable config");
            Ok(RosterConfig::default())
        }),
        None => Ok(RosterConfig::default()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = load_config(cli)?;
    let order = cli.order.unwrap_or(config.default_order);
    debug!(%order, json = cli.json, "starting session");

    let service = StudentService::new(InMemoryStore::new()).with_ordering(order);

    Ok(AppContext {
        api: RosterApi::new(service),
        json: cli.json,
        prompt: config.prompt,
    })
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    let mut input = stdin.lock();
    let mut buf = Vec::new();
    loop {
        if interactive {
            print!("{}", ctx.prompt);
            io::stdout().flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        // Undecodable bytes become U+FFFD; the line is still parsed and reported
        let line = String::from_utf8_lossy(&buf);
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) if e.is_help() => {
                println!("{}", e);
                continue;
            }
            Err(e) => {
                print_error(e.to_string().trim_end());
                continue;
            }
        };

        match dispatch(ctx, command) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => print_error(&format!("Error: {}", e)),
        }
    }

    Ok(())
}

fn dispatch(ctx: &mut AppContext, command: ShellCommand) -> Result<Flow> {
    match command {
        ShellCommand::Create { id, name, age } => handle_create(ctx, &id, &name, &age)?,
        ShellCommand::Edit { id, name, age } => handle_edit(ctx, &id, &name, &age)?,
        ShellCommand::SnapshotEdit { id, name, age } => {
            handle_snapshot_edit(ctx, &id, &name, &age)?
        }
        ShellCommand::Delete { id } => handle_delete(ctx, &id)?,
        ShellCommand::Find { id } => handle_find(ctx, &id)?,
        ShellCommand::List => handle_list(ctx)?,
        ShellCommand::Order { key } => handle_order(ctx, key),
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn handle_create(ctx: &mut AppContext, id: &str, name: &str, age: &str) -> Result<()> {
    let age = parse_age(age)?;
    let student = ctx.api.create(id, name, age)?;
    print_success(&format!("Student created: {}", student));
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: &str, name: &str, age: &str) -> Result<()> {
    let age = parse_age(age)?;
    ctx.api.edit(id, name, age)?;
    print_success(&format!("Student updated: {}", id));
    Ok(())
}

fn handle_snapshot_edit(ctx: &mut AppContext, id: &str, name: &str, age: &str) -> Result<()> {
    let age = parse_age(age)?;
    let outcome = ctx.api.edit_with_snapshot(id, name, age)?;
    print_outcome(&outcome);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    ctx.api.delete(id)?;
    print_success(&format!("Student deleted: {}", id));
    Ok(())
}

fn handle_find(ctx: &AppContext, id: &str) -> Result<()> {
    let found = ctx.api.find(id);
    if ctx.json {
        return print_json(&found);
    }
    match found {
        Some(student) => print_student(&student),
        None => print_info(&format!("No student with id {}", id)),
    }
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let students = ctx.api.list();
    if ctx.json {
        return print_json(&students);
    }
    print_students(&students);
    Ok(())
}

fn handle_order(ctx: &mut AppContext, key: SortKey) {
    ctx.api.set_ordering(key);
    print_info(&format!("Ordering by {}", key));
}

fn handle_demo(ctx: &mut AppContext) -> Result<()> {
    for (id, name, age) in [("3", "Carlos", 25), ("1", "Ana", 22), ("2", "Bernardo", 30)] {
        let student = ctx.api.create(id, name, age)?;
        print_info(&format!("Added {}", student));
    }

    for key in SortKey::ALL {
        println!();
        println!("--- Ordering by {} ---", key);
        ctx.api.set_ordering(key);
        handle_list(ctx)?;
    }
    Ok(())
}
