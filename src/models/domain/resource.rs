use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which records a caller sees when listing a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListScope {
    All,
    Owner,
}

impl FromStr for ListScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ListScope::All),
            "owner" => Ok(ListScope::Owner),
            other => Err(format!("Unknown list scope '{}'", other)),
        }
    }
}

impl fmt::Display for ListScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListScope::All => write!(f, "all"),
            ListScope::Owner => write!(f, "owner"),
        }
    }
}

/// Static description of an ownership-gated resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceKind {
    pub name: &'static str,
    pub singular: &'static str,
    pub plural: &'static str,
    pub default_list_scope: ListScope,
}

impl ResourceKind {
    pub const QUESTION: ResourceKind = ResourceKind {
        name: "Question",
        singular: "question",
        plural: "questions",
        default_list_scope: ListScope::All,
    };

    pub const QUIZ: ResourceKind = ResourceKind {
        name: "Quiz",
        singular: "quiz",
        plural: "quizzes",
        default_list_scope: ListScope::Owner,
    };

    pub fn path(&self) -> String {
        format!("/{}", self.plural)
    }
}
