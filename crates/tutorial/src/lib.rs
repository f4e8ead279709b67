//! `fptour-tutorial` — console walkthrough of the equivalence and safe-wrapper
//! toolkits.

use std::io::{self, Write};

pub mod config;
pub mod eq_section;
pub mod interop_section;

pub use config::{Section, TutorialConfig};

/// Print every configured section to `out`, in configuration order.
pub fn run(config: &TutorialConfig, out: &mut impl Write) -> io::Result<()> {
    for section in &config.sections {
        tracing::info!(section = %section, "printing section");
        match section {
            Section::Eq => eq_section::print(out)?,
            Section::Interop => interop_section::print(out)?,
        }
    }
    out.flush()
}
