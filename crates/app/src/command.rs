//! Line commands accepted by the interactive session.

use std::str::FromStr;

use rust_decimal::Decimal;
use showroom_domain::{EntityId, EntityKind};
use showroom_ui::VehicleForm;

/// Error type for command parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line is blank.
    #[error("Empty command")]
    Empty,

    /// The first word is not a known command.
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    /// The command is known but its arguments are not.
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// An argument has the wrong shape.
    #[error("Invalid {name}: {value}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Raw value.
        value: String,
    },
}

/// One session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `login <username> <password>`
    Login {
        /// Account name.
        username: String,
        /// Password.
        password: String,
    },
    /// `register <username> <password>`
    Register {
        /// Account name.
        username: String,
        /// Password.
        password: String,
    },
    /// `whoami`
    Profile,
    /// `list <kind>`
    List(EntityKind),
    /// `add brand|segment <name>`
    AddNamed(EntityKind, String),
    /// `add vehicle <name...> <year> <price> <segment_id> <brand_id>`
    AddVehicle(VehicleForm),
    /// `edit brand|segment <id> <name>`
    EditNamed(EntityKind, EntityId, String),
    /// `edit vehicle <id> <name> <year> <price> <segment_id> <brand_id>`
    EditVehicle(EntityId, VehicleForm),
    /// `delete <kind> <id>`
    Delete(EntityKind, EntityId),
    /// `logout`
    Logout,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// Help text listing every command.
pub const HELP: &str = "\
login <username> <password>
register <username> <password>
whoami
list brands|segments|vehicles
add brand|segment <name>
add vehicle <name> <year> <price> <segment_id> <brand_id>
edit brand|segment <id> <name>
edit vehicle <id> <name> <year> <price> <segment_id> <brand_id>
delete brand|segment|vehicle <id>
logout
quit";

const ACCOUNT_USAGE: &str = "login|register <username> <password>";
const LIST_USAGE: &str = "list brands|segments|vehicles";
const ADD_USAGE: &str = "add brand|segment <name> | add vehicle <name> <year> <price> <segment_id> <brand_id>";
const EDIT_USAGE: &str = "edit brand|segment <id> <name> | edit vehicle <id> <name> <year> <price> <segment_id> <brand_id>";
const DELETE_USAGE: &str = "delete brand|segment|vehicle <id>";

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = words.split_first() else {
            return Err(ParseError::Empty);
        };

        match verb {
            "login" | "register" => {
                let [username, password] = args else {
                    return Err(ParseError::Usage(ACCOUNT_USAGE));
                };
                let (username, password) = ((*username).to_string(), (*password).to_string());
                Ok(if verb == "login" {
                    Self::Login { username, password }
                } else {
                    Self::Register { username, password }
                })
            }
            "whoami" => Ok(Self::Profile),
            "list" => match args {
                [kind] => Ok(Self::List(parse_kind(kind, LIST_USAGE)?)),
                _ => Err(ParseError::Usage(LIST_USAGE)),
            },
            "add" => parse_add(args),
            "edit" => parse_edit(args),
            "delete" => match args {
                [kind, id] => Ok(Self::Delete(parse_kind(kind, DELETE_USAGE)?, parse_id(id)?)),
                _ => Err(ParseError::Usage(DELETE_USAGE)),
            },
            "logout" => Ok(Self::Logout),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

fn parse_add(args: &[&str]) -> Result<Command, ParseError> {
    let Some((kind, rest)) = args.split_first() else {
        return Err(ParseError::Usage(ADD_USAGE));
    };
    match parse_kind(kind, ADD_USAGE)? {
        EntityKind::Vehicle => Ok(Command::AddVehicle(parse_vehicle(rest, ADD_USAGE)?)),
        _ if rest.is_empty() => Err(ParseError::Usage(ADD_USAGE)),
        kind => Ok(Command::AddNamed(kind, rest.join(" "))),
    }
}

fn parse_edit(args: &[&str]) -> Result<Command, ParseError> {
    let [kind, id, rest @ ..] = args else {
        return Err(ParseError::Usage(EDIT_USAGE));
    };
    let kind = parse_kind(kind, EDIT_USAGE)?;
    let id = parse_id(id)?;
    match kind {
        EntityKind::Vehicle => Ok(Command::EditVehicle(id, parse_vehicle(rest, EDIT_USAGE)?)),
        _ if rest.is_empty() => Err(ParseError::Usage(EDIT_USAGE)),
        kind => Ok(Command::EditNamed(kind, id, rest.join(" "))),
    }
}

/// Parses `<name...> <year> <price> <segment_id> <brand_id>`; the name is
/// every word before the last four.
fn parse_vehicle(args: &[&str], usage: &'static str) -> Result<VehicleForm, ParseError> {
    let [name @ .., year, price, segment_id, brand_id] = args else {
        return Err(ParseError::Usage(usage));
    };
    if name.is_empty() {
        return Err(ParseError::Usage(usage));
    }
    Ok(VehicleForm {
        name: name.join(" "),
        release_year: parse_arg("release year", year)?,
        price: parse_arg::<Decimal>("price", price)?,
        segment_id: Some(parse_id(segment_id)?),
        brand_id: Some(parse_id(brand_id)?),
    })
}

fn parse_kind(word: &str, usage: &'static str) -> Result<EntityKind, ParseError> {
    match word {
        "brand" | "brands" => Ok(EntityKind::Brand),
        "segment" | "segments" => Ok(EntityKind::Segment),
        "vehicle" | "vehicles" => Ok(EntityKind::Vehicle),
        _ => Err(ParseError::Usage(usage)),
    }
}

fn parse_id(word: &str) -> Result<EntityId, ParseError> {
    parse_arg("id", word)
}

fn parse_arg<T: FromStr>(name: &'static str, word: &str) -> Result<T, ParseError> {
    word.parse().map_err(|_| ParseError::InvalidArgument {
        name,
        value: word.to_string(),
    })
}
