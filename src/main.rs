mod app;
mod command;

use std::{
    env::args,
    io::{self, BufRead, Write},
};

use crossterm::style::Stylize;
use tracing_subscriber::EnvFilter;

use crate::{
    app::{App, Reply},
    command::Command,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let path = match args().nth(1) {
        Some(filename) => filename,
        None => {
            println!(
                "Usage: {} FILE [-e|--export]",
                args().next().unwrap_or_else(|| "ordarr".into())
            );
            std::process::exit(1)
        }
    };
    let export = args()
        .nth(2)
        .filter(|s| s == "-e" || s == "--export")
        .is_some();

    let mut app = App::load(path)?;
    if export {
        match app.export() {
            Ok(p) => println!("exported to {}", p),
            Err(e) => println!("failed to export: {:?}", e),
        }
    } else {
        let stdin = io::stdin();
        run_app(&mut app, stdin.lock(), &mut io::stdout())?;
    }

    Ok(())
}

fn run_app<R, W>(app: &mut App, input: R, out: &mut W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "{} of {} slots in use, 'help' lists the commands",
        app.array().count(),
        app.array().capacity()
    )?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = match line.parse::<Command>() {
            Ok(cmd) => app.execute(cmd),
            Err(msg) => Err(anyhow::anyhow!(msg)),
        };
        match reply {
            Ok(Reply::Text(t)) => writeln!(out, "{}", t)?,
            Ok(Reply::Quit) => break,
            Err(e) => {
                tracing::debug!("command {:?} failed: {:#}", line, e);
                writeln!(out, "{}", format!("{:#}", e).red())?
            }
        }
        out.flush()?;
    }
    Ok(())
}
