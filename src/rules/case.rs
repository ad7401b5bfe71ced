// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Text case detection for the `*-case` rules.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Quoted spans are dropped before case checks; they usually hold proper names.
    static ref QUOTED_REGEX: Regex = Regex::new(r#"`[^`]*`|"[^"]*"|'[^']*'"#).unwrap();
}

/// A text case a field can be required (or forbidden) to be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextCase {
    LowerCase,
    UpperCase,
    CamelCase,
    KebabCase,
    PascalCase,
    SentenceCase,
    SnakeCase,
    StartCase,
}

impl TextCase {
    /// Get the configuration name of the case.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextCase::LowerCase => "lower-case",
            TextCase::UpperCase => "upper-case",
            TextCase::CamelCase => "camel-case",
            TextCase::KebabCase => "kebab-case",
            TextCase::PascalCase => "pascal-case",
            TextCase::SentenceCase => "sentence-case",
            TextCase::SnakeCase => "snake-case",
            TextCase::StartCase => "start-case",
        }
    }

    /// Check whether `raw` is written in this case.
    ///
    /// Quoted spans are removed and the rest is trimmed first. An empty
    /// remainder satisfies every case.
    pub fn matches(&self, raw: &str) -> bool {
        let stripped = QUOTED_REGEX.replace_all(raw, "");
        let input = stripped.trim();

        if input.is_empty() {
            return true;
        }

        match self {
            TextCase::LowerCase => input == input.to_lowercase(),
            TextCase::UpperCase => input == input.to_uppercase(),
            TextCase::CamelCase => input == to_camel(input),
            TextCase::KebabCase => input == join_lower(input, "-"),
            TextCase::SnakeCase => input == join_lower(input, "_"),
            TextCase::PascalCase => starts_upper(input) && input == upper_first(&to_camel(input)),
            TextCase::SentenceCase => starts_upper(input),
            TextCase::StartCase => {
                starts_upper(input)
                    && input
                        == split_words(input)
                            .iter()
                            .map(|w| upper_first(w))
                            .collect::<Vec<_>>()
                            .join(" ")
            }
        }
    }
}

impl std::str::FromStr for TextCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower-case" | "lowercase" => Ok(TextCase::LowerCase),
            "upper-case" | "uppercase" => Ok(TextCase::UpperCase),
            "camel-case" => Ok(TextCase::CamelCase),
            "kebab-case" => Ok(TextCase::KebabCase),
            "pascal-case" => Ok(TextCase::PascalCase),
            "sentence-case" | "sentencecase" => Ok(TextCase::SentenceCase),
            "snake-case" => Ok(TextCase::SnakeCase),
            "start-case" => Ok(TextCase::StartCase),
            other => Err(format!("unknown case '{}'", other)),
        }
    }
}

impl std::fmt::Display for TextCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn starts_upper(input: &str) -> bool {
    input.chars().next().map(char::is_uppercase).unwrap_or(false)
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split on anything that is not alphanumeric and on lower-to-upper transitions.
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in input.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }

        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        prev_lower = c.is_lowercase() || c.is_numeric();
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn to_camel(input: &str) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let lower = w.to_lowercase();
            if i == 0 {
                lower
            } else {
                upper_first(&lower)
            }
        })
        .collect()
}

fn join_lower(input: &str, sep: &str) -> String {
    split_words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}
