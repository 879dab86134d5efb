use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use todo_app::{command::HELP, screen, Args, Command, Flow, Host, UreqTransport};
use todo_core::TodoClient;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // logs go to stderr so they never interleave with the screen on stdout
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    info!(base_url = %args.base_url, "starting");

    let mut host = Host::new(TodoClient::new(&args.base_url), UreqTransport::new(args.timeout()));
    host.start();

    let mut stdout = io::stdout();
    write!(stdout, "{}", screen::render(host.document()))?;
    stdout.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(Command::Help) => writeln!(stdout, "{HELP}")?,
            Ok(command) => {
                if host.run(command) == Flow::Quit {
                    break;
                }
                write!(stdout, "{}", screen::render(host.document()))?;
            }
            Err(e) => writeln!(stdout, "{e}")?,
        }
        stdout.flush()?;
    }
    Ok(())
}
