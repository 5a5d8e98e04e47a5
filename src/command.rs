//! A line-oriented front-end over an [`AvlTree`] of integers.
//!
//! It only drives the tree through [`AvlTree::insert`], [`AvlTree::remove`]
//! and [`AvlTree::snapshot`].
//!
//! # Example
//! ```rust
//! use owned_avl::command::{Outcome, Shell};
//!
//! let mut shell = Shell::new();
//! assert_eq!(shell.run_line("add 10"), Ok(Outcome::Added(10)));
//! assert_eq!(shell.run_line("add 20"), Ok(Outcome::Added(20)));
//! assert_eq!(shell.run_line("remove 10").unwrap().to_string(), "10");
//! assert_eq!(shell.run_line("remove 10").unwrap().to_string(), "Value not found");
//! assert_eq!(shell.render(), "20");
//! ```

use crate::error::CommandError;
use crate::tree::AvlTree;
use crate::view::TreeView;
use core::fmt;
use core::str::FromStr;
use log::debug;

pub const HELP: &str = "Available commands are:\nadd element\nremove element";

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Command {
    Add(i64),
    Remove(i64),
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parses `add <int>` or `remove <int>`. Tokens after the value are ignored.
    fn from_str(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().ok_or(CommandError::Empty)?;
        let build: fn(i64) -> Command = match name {
            "add" => Command::Add,
            "remove" => Command::Remove,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        let value = tokens.next().ok_or(CommandError::MissingValue)?.parse::<i64>()?;
        Ok(build(value))
    }
}

/// Result of one executed command.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Outcome {
    Added(i64),
    Removed(i64),
    NotFound(i64),
}

/// The result line shown to the user: blank after an insert, the value after
/// a successful removal.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Added(_) => write!(f, " "),
            Outcome::Removed(v) => write!(f, "{}", v),
            Outcome::NotFound(_) => write!(f, "Value not found"),
        }
    }
}

#[derive(Default)]
pub struct Shell {
    tree: AvlTree<i64>,
}

impl Shell {
    pub fn new() -> Self {
        Shell { tree: AvlTree::new() }
    }

    pub fn execute(&mut self, cmd: Command) -> Outcome {
        debug!("execute {:?}", cmd);
        match cmd {
            Command::Add(v) => {
                self.tree.insert(v);
                Outcome::Added(v)
            }
            Command::Remove(v) => {
                if self.tree.remove(&v) {
                    Outcome::Removed(v)
                } else {
                    Outcome::NotFound(v)
                }
            }
        }
    }

    pub fn run_line(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let cmd = line.parse::<Command>()?;
        Ok(self.execute(cmd))
    }

    #[inline]
    pub fn tree(&self) -> &AvlTree<i64> {
        &self.tree
    }

    pub fn view(&self) -> Option<TreeView<i64>> {
        self.tree.snapshot()
    }

    /// The current tree as text, empty when there is nothing to show.
    pub fn render(&self) -> String {
        self.view().map(|v| v.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!("add 5".parse::<Command>(), Ok(Command::Add(5)));
        assert_eq!("  remove   -12  ".parse::<Command>(), Ok(Command::Remove(-12)));
        assert_eq!("add 7 trailing".parse::<Command>(), Ok(Command::Add(7)));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("insert 3".parse::<Command>(), Err(CommandError::Unknown("insert".to_string())));
        assert_eq!("add".parse::<Command>(), Err(CommandError::MissingValue));
        assert!(matches!("remove x".parse::<Command>(), Err(CommandError::InvalidValue(_))));
        assert!(matches!("add 99999999999999999999".parse::<Command>(), Err(CommandError::InvalidValue(_))));
    }

    #[test]
    fn outcome_text() {
        assert_eq!(Outcome::Added(1).to_string(), " ");
        assert_eq!(Outcome::Removed(-4).to_string(), "-4");
        assert_eq!(Outcome::NotFound(4).to_string(), "Value not found");
    }

    #[test]
    fn shell_session() {
        let mut shell = Shell::new();
        assert_eq!(shell.render(), "");
        assert_eq!(shell.execute(Command::Remove(1)), Outcome::NotFound(1));
        for v in [10, 20, 30] {
            assert_eq!(shell.execute(Command::Add(v)), Outcome::Added(v));
        }
        assert_eq!(shell.render(), "20\n├─ 10\n└─ 30");
        assert_eq!(shell.run_line("remove 20"), Ok(Outcome::Removed(20)));
        assert_eq!(shell.render(), "10\n├─ ∅\n└─ 30");
        assert!(shell.run_line("bogus").is_err());
        assert_eq!(shell.tree().len(), 2);
        assert_eq!(shell.tree().validate(), Ok(()));
    }
}
