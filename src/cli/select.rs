//! Organization selection
//!
//! The listing is always shown 0-indexed; the chosen position is then taken
//! from a fixed `--org-index`, an interactive prompt, or one line of piped
//! stdin.

use std::io::{BufRead, Write};

use dialoguer::{Input, theme::ColorfulTheme};

use crate::client::Organization;
use crate::error::{Result, SelectionError};

/// Prompt shown when asking for an organization
const PROMPT: &str = "Select the organization to be searched";

/// Source of the operator's organization choice
pub trait OrgSelector {
    /// Return a valid index into `orgs`. Any prompt text goes to `out`.
    fn select(&mut self, orgs: &[Organization], out: &mut dyn Write) -> Result<usize>;
}

/// How the organization index is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    Fixed(usize),
    Prompt,
    Line,
}

/// Choose the selector for this run.
///
/// The dialoguer prompt renders on stderr, so it needs both stdin and stderr
/// attached to a terminal; anything else reads a plain line from stdin.
pub fn choose_selector(
    org_index: Option<usize>,
    stdin_tty: bool,
    stderr_tty: bool,
) -> SelectorKind {
    match org_index {
        Some(index) => SelectorKind::Fixed(index),
        None if stdin_tty && stderr_tty => SelectorKind::Prompt,
        None => SelectorKind::Line,
    }
}

/// Render the organizations as `<index> - <name>` lines.
pub fn format_listing(orgs: &[Organization]) -> String {
    orgs.iter()
        .enumerate()
        .map(|(i, org)| format!("{} - {}", i, org.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse operator input as a position in a list of `count` organizations.
pub fn parse_index(input: &str, count: usize) -> std::result::Result<usize, SelectionError> {
    if count == 0 {
        return Err(SelectionError::NoOrganizations);
    }

    let input = input.trim();
    if input.is_empty() {
        return Err(SelectionError::EmptyInput);
    }

    let index: usize = input
        .parse()
        .map_err(|_| SelectionError::NotANumber(input.to_string()))?;

    if index >= count {
        return Err(SelectionError::OutOfRange { index, count });
    }

    Ok(index)
}

/// Uses an index fixed up front (`--org-index`)
pub struct FixedSelector(pub usize);

impl OrgSelector for FixedSelector {
    fn select(&mut self, orgs: &[Organization], _out: &mut dyn Write) -> Result<usize> {
        if orgs.is_empty() {
            return Err(SelectionError::NoOrganizations.into());
        }
        if self.0 >= orgs.len() {
            return Err(SelectionError::OutOfRange {
                index: self.0,
                count: orgs.len(),
            }
            .into());
        }
        Ok(self.0)
    }
}

/// Reads exactly one line; invalid input fails the run
pub struct LineSelector<R> {
    reader: R,
}

impl<R: BufRead> LineSelector<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> OrgSelector for LineSelector<R> {
    fn select(&mut self, orgs: &[Organization], out: &mut dyn Write) -> Result<usize> {
        if orgs.is_empty() {
            return Err(SelectionError::NoOrganizations.into());
        }

        write!(out, "{}: ", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(SelectionError::EmptyInput.into());
        }

        Ok(parse_index(&line, orgs.len())?)
    }
}

/// Terminal prompt that re-asks until the input is a valid index
pub struct PromptSelector;

impl OrgSelector for PromptSelector {
    fn select(&mut self, orgs: &[Organization], _out: &mut dyn Write) -> Result<usize> {
        let count = orgs.len();
        if count == 0 {
            return Err(SelectionError::NoOrganizations.into());
        }

        let input = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(PROMPT)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                parse_index(input, count)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()?;

        Ok(parse_index(&input, count)?)
    }
}
