mod args;
mod commands;
mod logger;

use anyhow::Result;
use args::{Args, Command};

fn main() -> Result<()> {
    let argv: Vec<String> = std::env::args().collect();
    let args = Args::parse(&argv)?;
    logger::log_init(args.path("--log-file").as_deref())?;

    match args.command {
        Command::Animate => commands::animate(&args),
        Command::Risk => commands::risk(&args),
        Command::Climate => commands::climate(&args),
    }
}
