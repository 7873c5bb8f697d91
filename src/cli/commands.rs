// src/cli/commands.rs
use clap::Subcommand;

use crate::generators::password::{MAX_LENGTH, MIN_LENGTH};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a random password
    Generate {
        /// Password length (6-32, defaults to DEFAULT_PASSWORD_LENGTH or 12)
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(MIN_LENGTH as i64..=MAX_LENGTH as i64))]
        length: Option<u16>,

        /// Also print the strength meter and tips for the new password
        #[arg(short, long)]
        check: bool,
    },

    /// Rate the strength of a password
    Check {
        /// Password to rate
        #[arg(required = true)]
        password: String,
    },

    /// Show which password tips a password satisfies
    Tips {
        /// Password to inspect
        #[arg(required = true)]
        password: String,
    },
}
