//! The three languages the assistant speaks.
//!
//! Switching language never translates existing messages. It only changes
//! which canned replies, placeholders and static panel text are used next.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    #[value(name = "en")]
    En,
    #[serde(rename = "hi")]
    #[value(name = "hi")]
    Hi,
    #[serde(rename = "mr")]
    #[value(name = "mr")]
    Mr,
}

impl Language {
    /// Selector order.
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Mr];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Mr => "mr",
        }
    }

    /// Name shown in the header's language selector.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Mr => "मराठी",
        }
    }

    /// Cycles to the next language (wraps around)
    pub fn next(self) -> Language {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::Mr,
            Language::Mr => Language::En,
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }
}
