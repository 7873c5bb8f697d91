// src/api/handlers/json_api.rs
use serde_json::{json, Value};
use std::error::Error;

use crate::api::types::{PasswordAnalysisResponse, PasswordGenerationResponse, TipsResponse};
use crate::cli::CliCommand;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::strength;

/// Handle CLI commands when the --json flag is used, printing one JSON
/// document to stdout.
pub fn handle_json_api(command: Option<&CliCommand>, config: &Config) -> Result<(), Box<dyn Error>> {
    let response = json_response(command, config)?;
    println!("{}", response);
    Ok(())
}

pub fn json_response(command: Option<&CliCommand>, config: &Config) -> Result<Value, Box<dyn Error>> {
    let response = match command {
        Some(CliCommand::Generate { length, check }) => {
            let length = length.map(usize::from).unwrap_or(config.default_password_length);
            let mut generator = PasswordGenerator::new();
            match generator.generate(length) {
                Ok(password) => {
                    let strength = strength::evaluate(&password);
                    let tips = check.then(|| strength::tips(&password).to_vec());
                    serde_json::to_value(PasswordGenerationResponse {
                        success: true,
                        password: Some(password),
                        strength: Some(strength),
                        tips,
                        error: None,
                    })?
                }
                Err(e) => serde_json::to_value(PasswordGenerationResponse {
                    success: false,
                    password: None,
                    strength: None,
                    tips: None,
                    error: Some(e.to_string()),
                })?,
            }
        }

        Some(CliCommand::Check { password }) => {
            serde_json::to_value(PasswordAnalysisResponse::for_password(password))?
        }

        Some(CliCommand::Tips { password }) => serde_json::to_value(TipsResponse {
            success: true,
            tips: strength::tips(password).to_vec(),
        })?,

        None => json!({
            "success": false,
            "error": "A command is required in JSON mode",
        }),
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_uses_configured_default() {
        let config = Config {
            default_password_length: 20,
            ..Config::default()
        };
        let command = CliCommand::Generate { length: None, check: false };
        let value = json_response(Some(&command), &config).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["password"].as_str().unwrap().len(), 20);
    }

    #[test]
    fn generate_with_explicit_length() {
        let command = CliCommand::Generate { length: Some(6), check: false };
        let value = json_response(Some(&command), &Config::default()).unwrap();
        assert_eq!(value["password"].as_str().unwrap().len(), 6);
        assert!(value.get("tips").is_none());
    }

    #[test]
    fn generate_with_check_includes_tips() {
        let command = CliCommand::Generate { length: Some(16), check: true };
        let value = json_response(Some(&command), &Config::default()).unwrap();
        let tips = value["tips"].as_array().unwrap();
        assert_eq!(tips.len(), 4);
        // 16 characters always satisfy the length tip
        assert_eq!(tips[0]["satisfied"], true);
        assert!(value["strength"]["score"].as_u64().unwrap() >= 2);
    }

    #[test]
    fn check_reports_medium() {
        let command = CliCommand::Check { password: "Abcdefghijkl1".to_string() };
        let value = json_response(Some(&command), &Config::default()).unwrap();
        assert_eq!(value["strength"]["score"], 4);
        assert_eq!(value["strength"]["label"], "Medium");
        assert_eq!(value["strength"]["width"], 80);
    }

    #[test]
    fn tips_lists_four_entries() {
        let command = CliCommand::Tips { password: "abc".to_string() };
        let value = json_response(Some(&command), &Config::default()).unwrap();
        let tips = value["tips"].as_array().unwrap();
        assert_eq!(tips.len(), 4);
        assert_eq!(tips[3]["description"], "Include symbols (!@#$%^&*())");
    }

    #[test]
    fn missing_command_is_an_error_document() {
        let value = json_response(None, &Config::default()).unwrap();
        assert_eq!(value["success"], false);
    }
}
