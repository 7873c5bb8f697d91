// src/cli/menu.rs
use inquire::validator::Validation;
use inquire::{CustomType, InquireError, Select, Text};
use std::error::Error;
use std::time::Instant;

use crate::cli::handlers::{render_strength, render_tips, GENERATED_PLACEHOLDER};
use crate::core::session::Session;
use crate::generators::password::{MAX_LENGTH, MIN_LENGTH};
use crate::generators::PasswordGenerator;

const GENERATE: &str = "🔐  Generate password";
const COPY: &str = "📋  Copy generated password";
const SET_LENGTH: &str = "📏  Set length";
const CHECK_CUSTOM: &str = "✏️  Check your own password";
const CLEAR_CUSTOM: &str = "🧹  Clear your own password";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(default_length: usize) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║  🔐 PASSWORD GENERATOR & CHECKER     ║");
    println!("╚══════════════════════════════════════╝");

    let mut session = Session::new(default_length);
    let mut generator = PasswordGenerator::new();

    loop {
        print_session(&session);

        let selection = match back_on_cancel(Select::new("Choose an option:", menu_options(&session)).prompt())? {
            Some(selection) => selection,
            None => break,
        };

        match selection {
            GENERATE => {
                if let Err(e) = session.generate_with(&mut generator) {
                    eprintln!("❌ Failed to generate password: {}", e);
                }
            }
            COPY => {
                // Printed alone so the terminal selection picks up nothing else
                if let Some(password) = session.generated() {
                    println!("\n{}", password);
                }
                session.mark_copied(Instant::now());
            }
            SET_LENGTH => {
                let length = CustomType::<usize>::new("Password length:")
                    .with_default(session.length())
                    .with_help_message(&format!("Between {} and {}", MIN_LENGTH, MAX_LENGTH))
                    .with_validator(|length: &usize| {
                        if (MIN_LENGTH..=MAX_LENGTH).contains(length) {
                            Ok(Validation::Valid)
                        } else {
                            Ok(Validation::Invalid(
                                format!("Length must be between {} and {}", MIN_LENGTH, MAX_LENGTH).into(),
                            ))
                        }
                    })
                    .prompt();
                if let Some(length) = back_on_cancel(length)? {
                    session.set_length(length);
                    log::debug!("Session length set to {}", session.length());
                }
            }
            CHECK_CUSTOM => {
                let password = Text::new("Type or paste your own password:")
                    .with_placeholder("Leave empty to check the generated one")
                    .prompt();
                if let Some(password) = back_on_cancel(password)? {
                    session.set_custom(password);
                }
            }
            CLEAR_CUSTOM => session.clear_custom(),
            _ => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

/// Maps Esc / Ctrl-C on a prompt to `None` so the caller can step back.
fn back_on_cancel<T>(result: Result<T, InquireError>) -> Result<Option<T>, InquireError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e),
    }
}

fn menu_options(session: &Session) -> Vec<&'static str> {
    let mut options = vec![GENERATE];
    if session.generated().is_some() {
        options.push(COPY);
    }
    options.extend([SET_LENGTH, CHECK_CUSTOM]);
    if !session.custom().is_empty() {
        options.push(CLEAR_CUSTOM);
    }
    options.push(EXIT);
    options
}

fn generated_line(session: &Session, now: Instant) -> String {
    match session.generated() {
        Some(password) if session.is_copied(now) => format!("Generated: {}  Copied!", password),
        Some(password) => format!("Generated: {}", password),
        None => format!("Generated: {}", GENERATED_PLACEHOLDER),
    }
}

fn print_session(session: &Session) {
    println!();
    println!("{}", generated_line(session, Instant::now()));
    println!("Length: {}", session.length());
    if !session.custom().is_empty() {
        println!("Checking your own password");
    }

    if let Some(meter) = render_strength(&session.strength()) {
        println!("{}", meter);
    }
    println!("{}", render_tips(&session.tips()));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::COPIED_INDICATOR_DURATION;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn generated_session() -> Session {
        let mut session = Session::default();
        let mut generator = PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(11));
        session.generate_with(&mut generator).unwrap();
        session
    }

    #[test]
    fn cancelled_prompts_step_back() {
        assert_eq!(back_on_cancel::<u8>(Err(InquireError::OperationCanceled)).unwrap(), None);
        assert_eq!(back_on_cancel::<u8>(Err(InquireError::OperationInterrupted)).unwrap(), None);
        assert_eq!(back_on_cancel(Ok(7u8)).unwrap(), Some(7));
        assert!(back_on_cancel::<u8>(Err(InquireError::NotTTY)).is_err());
    }

    #[test]
    fn copy_is_offered_once_a_password_exists() {
        let session = Session::default();
        assert!(!menu_options(&session).contains(&COPY));
        assert!(!menu_options(&session).contains(&CLEAR_CUSTOM));

        let mut session = generated_session();
        assert_eq!(menu_options(&session)[1], COPY);
        session.set_custom("mine");
        assert!(menu_options(&session).contains(&CLEAR_CUSTOM));
        assert_eq!(menu_options(&session).last(), Some(&EXIT));
    }

    #[test]
    fn placeholder_until_generated() {
        let line = generated_line(&Session::default(), Instant::now());
        assert_eq!(line, "Generated: Click Generate Password");
    }

    #[test]
    fn copied_indicator_shows_then_reverts() {
        let mut session = generated_session();
        let now = Instant::now();
        let password = session.generated().unwrap().to_string();

        assert_eq!(generated_line(&session, now), format!("Generated: {}", password));
        session.mark_copied(now);
        assert_eq!(generated_line(&session, now), format!("Generated: {}  Copied!", password));
        assert_eq!(
            generated_line(&session, now + COPIED_INDICATOR_DURATION),
            format!("Generated: {}", password)
        );
    }
}
