use std::time::Duration;

use clap::Parser;

/// Terminal client for a REST todo list.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-app", version, about)]
pub struct Args {
    /// Base URL of the store; requests go to `<base>/todos`.
    #[arg(long, env = "TODO_BASE_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Give up on a request after this many seconds. Unset waits forever.
    #[arg(long, env = "TODO_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl Args {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
