//! Terminal command parsing.

use std::str::FromStr;

use thiserror::Error;

use delve_domain::{Ability, CharacterClass, Direction, DomainError, Race};

pub const USAGE: &str = "\
Commands:
  new                 start a new game
  generate            let the server roll a full party
  custom              build the party by hand
  reroll              roll fresh ability scores
  +<ability>          spend a bonus point (e.g. +str)
  -<ability>          refund a bonus point (e.g. -dex)
  prev | next         move between party slots
  race <name>         choose a race
  class <name>        choose a class
  name <text>         set the character's name
  submit              confirm the current character
  sheet               show the party's character sheets
  map                 show the dungeon map
  w | a | s | d       move the party north, west, south or east
  move <direction>    move the party (north, south, east, west)
  save [slot]         save the game
  load [slot]         load a saved game
  help                show this text
  quit                exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewGame,
    GenerateParty,
    CustomParty,
    Reroll,
    Increase(Ability),
    Decrease(Ability),
    Previous,
    Next,
    Race(Race),
    Class(CharacterClass),
    Name(String),
    Submit,
    Sheet,
    Map,
    Move(Direction),
    Save(Option<String>),
    Load(Option<String>),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Enter a command (type 'help' for a list)")]
    Empty,

    #[error("Unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("{0}")]
    InvalidArgument(String),
}

impl From<DomainError> for CommandError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Parse(msg) | DomainError::Validation(msg) => {
                CommandError::InvalidArgument(msg)
            }
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        if let Some(ability) = line.strip_prefix('+') {
            return Ok(Command::Increase(ability.parse()?));
        }
        if let Some(ability) = line.strip_prefix('-') {
            return Ok(Command::Decrease(ability.parse()?));
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then(|| rest.to_string());

        match word.to_ascii_lowercase().as_str() {
            "new" => Ok(Command::NewGame),
            "generate" => Ok(Command::GenerateParty),
            "custom" => Ok(Command::CustomParty),
            "reroll" | "roll" => Ok(Command::Reroll),
            "prev" | "previous" => Ok(Command::Previous),
            "next" => Ok(Command::Next),
            "race" => Ok(Command::Race(arg.ok_or(CommandError::MissingArgument("race"))?.parse()?)),
            "class" => Ok(Command::Class(
                arg.ok_or(CommandError::MissingArgument("class"))?.parse()?,
            )),
            "name" => Ok(Command::Name(arg.ok_or(CommandError::MissingArgument("name"))?)),
            "submit" => Ok(Command::Submit),
            "sheet" | "sheets" => Ok(Command::Sheet),
            "map" => Ok(Command::Map),
            "w" => Ok(Command::Move(Direction::North)),
            "a" => Ok(Command::Move(Direction::West)),
            "s" => Ok(Command::Move(Direction::South)),
            "d" => Ok(Command::Move(Direction::East)),
            "north" | "south" | "east" | "west" => Ok(Command::Move(word.parse()?)),
            "move" | "go" => Ok(Command::Move(
                arg.ok_or(CommandError::MissingArgument("move"))?.parse()?,
            )),
            "save" => Ok(Command::Save(arg)),
            "load" => Ok(Command::Load(arg)),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}
