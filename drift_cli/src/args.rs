use anyhow::{anyhow, bail, Context, Result};
use std::path::PathBuf;
use std::str::FromStr;

pub const USAGE: &str = "\
usage: drift <command> [options]

commands:
  animate   [--variant clamp|windbreak] [--config file.json] [--wind kmh]
            [--barrier-height pct] [--particles n] [--frames n] [--seed n] [--out path]
  risk      [--wind f] [--temp f] [--humidity f] [--barrier-height pct]
  climate   [--data path] [--crop soybean|maize|wheat]

global:
  --log-file path";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Animate,
    Risk,
    Climate,
}

/// Accepted by every command
const GLOBAL_FLAGS: &[&str] = &["--log-file"];

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Command::Animate => "animate",
            Command::Risk => "risk",
            Command::Climate => "climate",
        }
    }

    pub fn flags(self) -> &'static [&'static str] {
        match self {
            Command::Animate => &[
                "--variant",
                "--config",
                "--wind",
                "--barrier-height",
                "--particles",
                "--frames",
                "--seed",
                "--out",
            ],
            Command::Risk => &["--wind", "--temp", "--humidity", "--barrier-height"],
            Command::Climate => &["--data", "--crop"],
        }
    }

    fn accepts(self, flag: &str) -> bool {
        self.flags().contains(&flag) || GLOBAL_FLAGS.contains(&flag)
    }
}

/// Raw command line: a subcommand followed by `--flag value` pairs
#[derive(Debug, Clone)]
pub struct Args {
    pub command: Command,
    flags: Vec<String>,
}

impl Args {
    pub fn parse(args: &[String]) -> Result<Self> {
        let name = args.get(1).ok_or_else(|| anyhow!("missing command\n\n{USAGE}"))?;
        let command = match name.as_str() {
            "animate" => Command::Animate,
            "risk" => Command::Risk,
            "climate" => Command::Climate,
            other => bail!("unknown command `{other}`\n\n{USAGE}"),
        };
        let flags = args[2..].to_vec();

        for (i, flag) in flags.iter().enumerate().step_by(2) {
            if !flag.starts_with("--") {
                bail!("expected a --flag, got `{flag}`");
            }
            if !command.accepts(flag) {
                bail!("unknown flag {flag} for {}\n\n{USAGE}", command.name());
            }
            if flags.get(i + 1).is_none() {
                bail!("flag {flag} needs a value");
            }
        }

        Ok(Self { command, flags })
    }

    pub fn raw(&self, flag: &str) -> Option<&str> {
        self.flags
            .iter()
            .position(|v| v == flag)
            .and_then(|i| self.flags.get(i + 1))
            .map(String::as_str)
    }

    /// Parsed flag value; a value that does not parse is a fatal input error
    pub fn get<T>(&self, flag: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.raw(flag)
            .map(|v| v.parse::<T>().with_context(|| format!("invalid value `{v}` for {flag}")))
            .transpose()
    }

    pub fn path(&self, flag: &str) -> Option<PathBuf> {
        self.raw(flag).map(PathBuf::from)
    }
}
