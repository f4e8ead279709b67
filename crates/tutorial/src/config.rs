//! Runtime configuration, read from the environment.

use core::fmt;
use core::str::FromStr;

use anyhow::{Context, bail};

/// Comma-separated list of sections to print (`eq`, `interop`).
pub const SECTIONS_VAR: &str = "FPTOUR_SECTIONS";

/// A printable part of the tutorial.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    Eq,
    Interop,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Eq, Section::Interop];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Eq => "eq",
            Section::Interop => "interop",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eq" => Ok(Section::Eq),
            "interop" | "interoperability" => Ok(Section::Interop),
            other => bail!("unknown section `{other}` (expected `eq` or `interop`)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialConfig {
    /// Sections to print, without duplicates, in the order requested.
    pub sections: Vec<Section>,
}

impl Default for TutorialConfig {
    fn default() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
        }
    }
}

impl TutorialConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// An unset or blank variable selects every section.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let Some(raw) = lookup(SECTIONS_VAR).filter(|raw| !raw.trim().is_empty()) else {
            return Ok(Self::default());
        };

        let mut sections = Vec::new();
        for name in raw.split(',').filter(|name| !name.trim().is_empty()) {
            let section: Section = name
                .parse()
                .with_context(|| format!("invalid {SECTIONS_VAR} value `{raw}`"))?;
            if !sections.contains(&section) {
                sections.push(section);
            }
        }

        Ok(Self { sections })
    }
}
