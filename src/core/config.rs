//! Game configuration and command-line parsing.

use super::i18n::Language;
use std::fmt;

/// Rule set for a run.
///
/// Variant A turns food into a multi-jump power-up. Variant B adds the kong
/// pickup, which clears every tree on screen, and never spawns a second copy
/// of a pickup that is still alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    A,
    #[default]
    B,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            _ => None,
        }
    }

    /// Food grants a temporary multi-jump.
    pub fn food_grants_multi_jump(&self) -> bool {
        matches!(self, Self::A)
    }

    /// Kong pickups can spawn.
    pub fn has_kong(&self) -> bool {
        matches!(self, Self::B)
    }

    /// Pickups only spawn when no live instance of the same kind exists.
    pub fn exclusive_pickups(&self) -> bool {
        matches!(self, Self::B)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub variant: Variant,
    /// Fixed RNG seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub language: Language,
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Play(GameConfig),
    Version,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownArgument(String),
    MissingValue(&'static str),
    InvalidValue { flag: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArgument(arg) => write!(f, "Unknown argument: {}", arg),
            Self::MissingValue(flag) => write!(f, "{} requires a value", flag),
            Self::InvalidValue { flag, value } => {
                write!(f, "Invalid value for {}: {}", flag, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub const USAGE: &str = "Rouky Jump - terminal endless runner\n\
\n\
Usage: rouky-jump [OPTIONS]\n\
\n\
Options:\n\
\x20 --variant a|b  Rule set (default: b)\n\
\x20 --seed N       RNG seed for reproducible runs\n\
\x20 --lang en|fr   Interface language (default: from LANG)\n\
\x20 --version, -v  Show version information\n\
\x20 --help, -h     Show this help message";

/// Parse command-line arguments (without the program name).
///
/// `language` is the default used when `--lang` is absent; callers pass
/// `Language::detect()`.
pub fn parse_args(args: &[String], language: Language) -> Result<CliCommand, ConfigError> {
    let mut config = GameConfig {
        language,
        ..GameConfig::default()
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--variant" => {
                let value = iter.next().ok_or(ConfigError::MissingValue("--variant"))?;
                config.variant =
                    Variant::from_code(value).ok_or_else(|| ConfigError::InvalidValue {
                        flag: "--variant",
                        value: value.clone(),
                    })?;
            }
            "--seed" => {
                let value = iter.next().ok_or(ConfigError::MissingValue("--seed"))?;
                let seed = value.parse().map_err(|_| ConfigError::InvalidValue {
                    flag: "--seed",
                    value: value.clone(),
                })?;
                config.seed = Some(seed);
            }
            "--lang" => {
                let value = iter.next().ok_or(ConfigError::MissingValue("--lang"))?;
                config.language =
                    Language::from_code(value).ok_or_else(|| ConfigError::InvalidValue {
                        flag: "--lang",
                        value: value.clone(),
                    })?;
            }
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            other => return Err(ConfigError::UnknownArgument(other.to_string())),
        }
    }

    Ok(CliCommand::Play(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let cmd = parse_args(&[], Language::French).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Play(GameConfig {
                variant: Variant::B,
                seed: None,
                language: Language::French,
            })
        );
    }

    #[test]
    fn test_all_options() {
        let cmd = parse_args(
            &args(&["--variant", "A", "--seed", "42", "--lang", "en"]),
            Language::French,
        )
        .unwrap();
        assert_eq!(
            cmd,
            CliCommand::Play(GameConfig {
                variant: Variant::A,
                seed: Some(42),
                language: Language::English,
            })
        );
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(
            parse_args(&args(&["-v"]), Language::English).unwrap(),
            CliCommand::Version
        );
        assert_eq!(
            parse_args(&args(&["--help"]), Language::English).unwrap(),
            CliCommand::Help
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_args(&args(&["--seed"]), Language::English),
            Err(ConfigError::MissingValue("--seed"))
        );
        assert_eq!(
            parse_args(&args(&["--seed", "abc"]), Language::English),
            Err(ConfigError::InvalidValue {
                flag: "--seed",
                value: "abc".to_string()
            })
        );
        assert_eq!(
            parse_args(&args(&["--variant", "c"]), Language::English),
            Err(ConfigError::InvalidValue {
                flag: "--variant",
                value: "c".to_string()
            })
        );
        assert_eq!(
            parse_args(&args(&["--fly"]), Language::English),
            Err(ConfigError::UnknownArgument("--fly".to_string()))
        );
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::MissingValue("--lang");
        assert_eq!(err.to_string(), "--lang requires a value");
    }

    #[test]
    fn test_variant_rules() {
        assert!(Variant::A.food_grants_multi_jump());
        assert!(!Variant::A.has_kong());
        assert!(!Variant::A.exclusive_pickups());
        assert!(!Variant::B.food_grants_multi_jump());
        assert!(Variant::B.has_kong());
        assert!(Variant::B.exclusive_pickups());
    }
}
