//! Smart clauses and the two renderings of the credit agreement.
//!
//! A smart clause is display-only covenant text. `CovenantProgram` is the
//! structured "logic view" of the same covenants; it is rendered as code and
//! never evaluated.

use std::fmt;

use crate::util::tone::Tone;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    Active,
    Triggered,
    Inactive,
}

impl ClauseStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Triggered => "Triggered",
            Self::Inactive => "Inactive",
        }
    }

    /// Upper-case keyword used in the logic view.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Triggered => "TRIGGERED",
            Self::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for ClauseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SmartClause {
    pub id: &'static str,
    pub name: &'static str,
    pub condition: &'static str,
    pub action: &'static str,
    pub status: ClauseStatus,
}

/// One numbered section of the legal text.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentSection {
    pub title: &'static str,
    pub body: &'static str,
    /// Colour of the left rule; `Tone::Neutral` for unremarkable sections.
    pub accent: Tone,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentArticle {
    pub heading: &'static str,
    pub sections: &'static [DocumentSection],
}

/// A literal value inside a covenant program.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProgramValue {
    Text(&'static str),
    Number(&'static str),
    Bool(bool),
}

/// `key: value` line in a program's condition block.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgramField {
    pub key: &'static str,
    pub value: ProgramValue,
}

/// One entry in a program's `actions` list.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgramAction {
    pub kind: &'static str,
    pub params: &'static [ProgramField],
}

/// Machine-readable form of a covenant as shown in the logic view.
#[derive(Clone, Debug, PartialEq)]
pub struct CovenantProgram {
    pub ident: &'static str,
    pub clause_id: &'static str,
    pub name: &'static str,
    pub status: ClauseStatus,
    pub condition: &'static [ProgramField],
    pub actions: &'static [ProgramAction],
    /// Colour of the `covenant Ident { }` braces.
    pub tone: Tone,
}
