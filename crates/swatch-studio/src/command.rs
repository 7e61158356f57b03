use std::str::FromStr;

use thiserror::Error;

use swatch_grid::Swatch;
use swatch_grid::palette::UnknownSwatch;

use crate::host::MAX_BATCH;

/// One line of input to the interactive preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// `add [n]`: press the add button, optionally with a custom batch size.
    Add(Option<usize>),
    /// `tap <i>`: select the cell at index `i`.
    TapIndex(usize),
    /// `tap <x> <y>`: select whatever cell is under a viewport point.
    TapPoint(f32, f32),
    /// `remove <color>`: remove a color without tapping a cell.
    Remove(Swatch),
    /// `restore`: press the add-removed button.
    Restore,
    /// `scroll <dy>`
    Scroll(f32),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  add [n]        append a batch of random cells
  tap <i>        select cell i (removes every cell of its color)
  tap <x> <y>    select the cell under a viewport point
  remove <color> remove every cell of a color
  restore        re-add the cells removed last
  scroll <dy>    scroll the grid by dy points
  show           redraw the visible rows
  help           this text
  quit           leave";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{command}` needs {expected}")]
    MissingArgument { command: &'static str, expected: &'static str },
    #[error("`{command}` takes at most {max} arguments")]
    TooManyArguments { command: &'static str, max: usize },
    #[error("`{value}` is not a valid {expected}")]
    BadNumber { value: String, expected: &'static str },
    #[error("cannot add {count} cells at once (limit {max})")]
    BatchTooLarge { count: usize, max: usize },
    #[error(transparent)]
    Swatch(#[from] UnknownSwatch),
}

fn number<T: FromStr>(value: &str, expected: &'static str) -> Result<T, CommandError> {
    value
        .parse()
        .map_err(|_| CommandError::BadNumber { value: value.to_string(), expected })
}

/// Like [`number`], but NaN and infinities are rejected.
fn finite(value: &str, expected: &'static str) -> Result<f32, CommandError> {
    let v: f32 = number(value, expected)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CommandError::BadNumber { value: value.to_string(), expected })
    }
}

fn batch(value: &str) -> Result<usize, CommandError> {
    let count = number(value, "count")?;
    if count > MAX_BATCH {
        return Err(CommandError::BatchTooLarge { count, max: MAX_BATCH });
    }
    Ok(count)
}

fn at_most(command: &'static str, args: &[&str], max: usize) -> Result<(), CommandError> {
    if args.len() > max {
        Err(CommandError::TooManyArguments { command, max })
    } else {
        Ok(())
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        match head.to_ascii_lowercase().as_str() {
            "add" | "a" => {
                at_most("add", &args, 1)?;
                let count = args.first().copied().map(batch).transpose()?;
                Ok(Command::Add(count))
            }
            "tap" | "t" => match args.as_slice() {
                [index] => Ok(Command::TapIndex(number(index, "index")?)),
                [x, y] => Ok(Command::TapPoint(finite(x, "coordinate")?, finite(y, "coordinate")?)),
                [] => Err(CommandError::MissingArgument { command: "tap", expected: "an index or x y" }),
                _ => Err(CommandError::TooManyArguments { command: "tap", max: 2 }),
            },
            "remove" | "rm" => match args.as_slice() {
                [color] => Ok(Command::Remove(color.parse()?)),
                [] => Err(CommandError::MissingArgument { command: "remove", expected: "a color" }),
                _ => Err(CommandError::TooManyArguments { command: "remove", max: 1 }),
            },
            "restore" | "r" => {
                at_most("restore", &args, 0)?;
                Ok(Command::Restore)
            }
            "scroll" | "s" => match args.as_slice() {
                [dy] => Ok(Command::Scroll(finite(dy, "offset")?)),
                [] => Err(CommandError::MissingArgument { command: "scroll", expected: "an offset" }),
                _ => Err(CommandError::TooManyArguments { command: "scroll", max: 1 }),
            },
            "show" | "ls" => Ok(Command::Show),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
