//! Command dispatch table and argument parsing.

use crate::error::{AstroError, AstroResult};
use crate::models::{GeographicLocation, HipId, Instant};

/// A parsed, validated command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// List everything above the horizon.
    Sky {
        location: GeographicLocation,
        instant: Instant,
    },
    /// Rank catalog stars around a horizontal direction.
    Locate {
        location: GeographicLocation,
        instant: Instant,
        altitude: f64,
        azimuth: f64,
    },
    /// Show catalog details for one star.
    Research { id: HipId },
    Help,
    Exit,
}

type Parser = fn(&[&str]) -> AstroResult<Command>;

/// One row of the dispatch table.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub usage: &'static str,
    pub summary: &'static str,
    /// Values asked for interactively when the command is typed alone.
    pub prompts: &'static [&'static str],
    parse: Parser,
}

impl CommandSpec {
    pub fn parse(&self, args: &[&str]) -> AstroResult<Command> {
        (self.parse)(args)
    }

    fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "sky",
        aliases: &[],
        usage: "sky <lat> <lon> <YYYY-MM-DD> <HH:MM:SS>",
        summary: "List the Sun, Moon, planets and catalog stars above the horizon",
        prompts: &["latitude", "longitude", "time (YYYY-MM-DD HH:MM:SS)"],
        parse: parse_sky,
    },
    CommandSpec {
        name: "locate",
        aliases: &[],
        usage: "locate <lat> <lon> <YYYY-MM-DD> <HH:MM:SS> <alt> <az>",
        summary: "Rank catalog stars by angular distance from an altitude/azimuth",
        prompts: &[
            "latitude",
            "longitude",
            "time (YYYY-MM-DD HH:MM:SS)",
            "altitude (degrees)",
            "azimuth (degrees)",
        ],
        parse: parse_locate,
    },
    CommandSpec {
        name: "research",
        aliases: &[],
        usage: "research <hip-id>",
        summary: "Show spectral type, distance, motion and identifiers of a star",
        prompts: &["HIP ID"],
        parse: parse_research,
    },
    CommandSpec {
        name: "help",
        aliases: &["?"],
        usage: "help",
        summary: "Show this list",
        prompts: &[],
        parse: parse_help,
    },
    CommandSpec {
        name: "exit",
        aliases: &["quit"],
        usage: "exit",
        summary: "Leave the prompt",
        prompts: &[],
        parse: parse_exit,
    },
];

/// Look up a command by name or alias, ignoring case.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.matches(name))
}

/// Parse a full command line such as `"sky -58.5 -34.5 2024-11-26 11:00:00"`.
pub fn parse_line(line: &str) -> AstroResult<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((name, args)) = tokens.split_first() else {
        return Err(AstroError::InvalidCommand("empty command".to_string()));
    };
    let spec = lookup(name).ok_or_else(|| {
        AstroError::InvalidCommand(format!("unknown command '{}', try 'help'", name))
    })?;
    spec.parse(args)
}

fn expect_args(args: &[&str], count: usize, usage: &str) -> AstroResult<()> {
    if args.len() != count {
        return Err(AstroError::InvalidCommand(format!(
            "expected {} argument(s), got {}; usage: {}",
            count,
            args.len(),
            usage
        )));
    }
    Ok(())
}

fn number(value: &str, what: &str) -> AstroResult<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            AstroError::InvalidCommand(format!("{} must be a number, got '{}'", what, value))
        })
}

fn location_and_instant(args: &[&str]) -> AstroResult<(GeographicLocation, Instant)> {
    let latitude = number(args[0], "latitude")?;
    let longitude = number(args[1], "longitude")?;
    let location = GeographicLocation::new(latitude, longitude)?;
    let instant = Instant::parse(&format!("{} {}", args[2], args[3]))?;
    Ok((location, instant))
}

fn parse_sky(args: &[&str]) -> AstroResult<Command> {
    expect_args(args, 4, COMMANDS[0].usage)?;
    let (location, instant) = location_and_instant(args)?;
    Ok(Command::Sky { location, instant })
}

fn parse_locate(args: &[&str]) -> AstroResult<Command> {
    expect_args(args, 6, COMMANDS[1].usage)?;
    let (location, instant) = location_and_instant(args)?;
    Ok(Command::Locate {
        location,
        instant,
        altitude: number(args[4], "altitude")?,
        azimuth: number(args[5], "azimuth")?,
    })
}

fn parse_research(args: &[&str]) -> AstroResult<Command> {
    // "research HIP 32349" arrives as two tokens
    let joined = args.join(" ");
    if joined.is_empty() {
        return Err(AstroError::InvalidCommand(format!(
            "missing HIP identifier; usage: {}",
            COMMANDS[2].usage
        )));
    }
    let id = joined.parse::<HipId>().map_err(AstroError::InvalidCommand)?;
    Ok(Command::Research { id })
}

fn parse_help(_args: &[&str]) -> AstroResult<Command> {
    Ok(Command::Help)
}

fn parse_exit(_args: &[&str]) -> AstroResult<Command> {
    Ok(Command::Exit)
}
