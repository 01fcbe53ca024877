//! Generator configuration
//!
//! Settings come from, in increasing priority: built-in defaults, the template
//! settings file, the local settings file (or `--settings <FILE>`), then
//! command line flags.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OUTPUT_DIR;
use crate::texture::TextureKind;

/// Template settings (checked into git)
pub const SETTINGS_TEMPLATE: &str = "config/texture_settings.template.json";
/// Local settings (gitignored, user's custom settings)
pub const SETTINGS_FILE: &str = "config/texture_settings.json";

/// Configuration for a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Directory the textures are written into (created if missing)
    pub output_dir: PathBuf,
    /// RNG seed for reproducible output (None = random)
    pub seed: Option<u64>,
    /// Kinds to generate, in canonical order
    pub kinds: Vec<TextureKind>,
    /// Worker threads for generation (0 = sequential, N = N threads)
    pub parallel: usize,
    /// Suppress progress output
    pub quiet: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
            kinds: TextureKind::ALL.to_vec(),
            parallel: 0,
            quiet: false,
        }
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Generate(GenerateConfig),
    /// Print kinds and output paths, then exit
    List(GenerateConfig),
    Help,
}

impl GenerateConfig {
    /// Load configuration from a JSON settings file
    pub fn from_file(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
        let mut config: Self = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse {}: {}", path, e))?;
        config.kinds = canonical_kinds(&config.kinds);
        if config.kinds.is_empty() {
            return Err(format!("No texture kinds given in {}", path));
        }
        Ok(config)
    }

    /// Load configuration from default config files
    /// Priority: local settings > template settings > built-in defaults
    pub fn from_config_files() -> Self {
        for path in [SETTINGS_FILE, SETTINGS_TEMPLATE] {
            if !std::path::Path::new(path).exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(config) => return config,
                Err(e) => log::warn!("Skipping settings: {}", e),
            }
        }
        Self::default()
    }

    /// Parse the process command line
    pub fn from_args() -> Result<Command, String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse_args(&args)
    }

    /// Parse arguments (without the program name) on top of the settings files
    pub fn parse_args(args: &[String]) -> Result<Command, String> {
        // Explicit settings file replaces the default file layer
        let mut config = match settings_override(args)? {
            Some(path) => Self::from_file(&path)?,
            None => Self::from_config_files(),
        };

        let mut list = false;
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--settings" => {
                    // Already handled above
                    i += 1;
                }
                "--output" | "-o" => {
                    config.output_dir = PathBuf::from(value_for(args, i)?);
                    i += 1;
                }
                "--seed" => {
                    let value = value_for(args, i)?;
                    config.seed = Some(
                        value
                            .parse()
                            .map_err(|_| format!("Invalid seed '{}'", value))?,
                    );
                    i += 1;
                }
                "--only" => {
                    config.kinds = parse_kind_list(value_for(args, i)?)?;
                    i += 1;
                }
                "--parallel" => {
                    let value = value_for(args, i)?;
                    config.parallel = value
                        .parse()
                        .map_err(|_| format!("Invalid thread count '{}'", value))?;
                    i += 1;
                }
                "--quiet" | "-q" => {
                    config.quiet = true;
                }
                "--list" => {
                    list = true;
                }
                "--help" | "-h" => {
                    return Ok(Command::Help);
                }
                other => {
                    return Err(format!("Unknown argument '{}'", other));
                }
            }
            i += 1;
        }

        Ok(if list {
            Command::List(config)
        } else {
            Command::Generate(config)
        })
    }

    /// Output path for one kind
    pub fn path_for(&self, kind: TextureKind) -> PathBuf {
        self.output_dir.join(kind.file_name())
    }
}

/// Value of `--settings`, if present
fn settings_override(args: &[String]) -> Result<Option<String>, String> {
    match args.iter().position(|a| a == "--settings") {
        Some(i) => value_for(args, i).map(|v| Some(v.to_string())),
        None => Ok(None),
    }
}

/// The argument following the flag at `i`
fn value_for(args: &[String], i: usize) -> Result<&str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {}", args[i]))
}

/// Parse a comma-separated kind list, e.g. "grass,stone,coal"
pub fn parse_kind_list(list: &str) -> Result<Vec<TextureKind>, String> {
    let mut kinds = Vec::new();
    for name in list.split(',').filter(|s| !s.trim().is_empty()) {
        let kind =
            TextureKind::from_str(name).ok_or_else(|| format!("Unknown texture kind '{}'", name))?;
        kinds.push(kind);
    }
    if kinds.is_empty() {
        return Err("No texture kinds given".to_string());
    }
    Ok(canonical_kinds(&kinds))
}

/// Deduplicate and sort into generation order
fn canonical_kinds(kinds: &[TextureKind]) -> Vec<TextureKind> {
    TextureKind::ALL
        .into_iter()
        .filter(|k| kinds.contains(k))
        .collect()
}

pub fn print_help() {
    println!(
        r#"Block Texture Generator - 64x64 PPM textures for the block renderer

USAGE:
    cargo run -- [OPTIONS]

OPTIONS:
    --settings <FILE>   Load settings from JSON file (CLI args override file settings)
    --output, -o <DIR>  Output directory (default: {dir})
    --seed <N>          RNG seed for reproducible textures (default: random)
    --only <LIST>       Comma-separated kinds to generate (e.g., "grass,stone,coal_ore")
    --parallel <N>      Generate with N worker threads (default: 0, sequential)
    --quiet, -q         Suppress progress output
    --list              List texture kinds and their output files
    --help, -h          Show this help

KINDS:
    grass, dirt, stone, wood, leaves, water, sand,
    coal_ore, iron_ore, diamond_ore, air

EXAMPLES:
    # Generate every texture into {dir}
    cargo run

    # Reproducible ores only
    cargo run -- --only coal,iron,diamond --seed 42
"#,
        dir = DEFAULT_OUTPUT_DIR
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn generate_config(test_name: &str, list: &[&str]) -> GenerateConfig {
        // --settings with a defaults file keeps tests independent of the cwd
        let path = defaults_file(test_name);
        let mut full = args(&["--settings", path.to_str().unwrap()]);
        full.extend(args(list));
        let result = GenerateConfig::parse_args(&full);
        let _ = fs::remove_file(&path);
        match result {
            Ok(Command::Generate(config)) => config,
            other => panic!("Expected generate command, got {:?}", other),
        }
    }

    fn defaults_file(test_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("texture_settings_{}_{}.json", test_name, nanos));
        fs::write(&path, "{}").expect("write settings");
        path
    }

    #[test]
    fn test_defaults() {
        let config = GenerateConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("assets/textures"));
        assert_eq!(config.seed, None);
        assert_eq!(config.kinds.len(), 11);
        assert_eq!(config.parallel, 0);
        assert!(!config.quiet);
    }

    #[test]
    fn test_empty_settings_file_gives_defaults() {
        assert_eq!(generate_config("empty", &[]), GenerateConfig::default());
    }

    #[test]
    fn test_flag_overrides() {
        let config = generate_config(
            "overrides",
            &[
                "--output",
                "/tmp/out",
                "--seed",
                "99",
                "--parallel",
                "4",
                "-q",
            ],
        );
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.parallel, 4);
        assert!(config.quiet);
    }

    #[test]
    fn test_only_is_canonical_and_deduplicated() {
        let config = generate_config("only", &["--only", "air,coal,grass,coal_ore"]);
        assert_eq!(
            config.kinds,
            vec![TextureKind::Grass, TextureKind::CoalOre, TextureKind::Air]
        );
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(GenerateConfig::parse_args(&args(&["--only", "gold"])).is_err());
        assert!(GenerateConfig::parse_args(&args(&["--only", ","])).is_err());
        assert!(GenerateConfig::parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(GenerateConfig::parse_args(&args(&["--seed"])).is_err());
        assert!(GenerateConfig::parse_args(&args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn test_help_and_list() {
        assert_eq!(
            GenerateConfig::parse_args(&args(&["--help"])),
            Ok(Command::Help)
        );
        let path = defaults_file("list");
        let parsed = GenerateConfig::parse_args(&args(&[
            "--settings",
            path.to_str().unwrap(),
            "--list",
        ]));
        let _ = fs::remove_file(&path);
        assert_eq!(parsed, Ok(Command::List(GenerateConfig::default())));
    }

    #[test]
    fn test_settings_file_then_flags() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("texture_settings_full_{}.json", nanos));
        fs::write(
            &path,
            r#"{ "output_dir": "out/tex", "seed": 5, "kinds": ["stone", "grass", "stone"] }"#,
        )
        .expect("write settings");

        let parsed = GenerateConfig::parse_args(&args(&[
            "--settings",
            path.to_str().unwrap(),
            "--seed",
            "6",
        ]));
        let _ = fs::remove_file(&path);

        let config = match parsed {
            Ok(Command::Generate(config)) => config,
            other => panic!("Expected generate command, got {:?}", other),
        };
        assert_eq!(config.output_dir, PathBuf::from("out/tex"));
        assert_eq!(config.seed, Some(6));
        assert_eq!(config.kinds, vec![TextureKind::Grass, TextureKind::Stone]);
        assert!(!config.quiet);
    }

    #[test]
    fn test_empty_kind_list_in_settings_is_error() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("texture_settings_no_kinds_{}.json", nanos));
        fs::write(&path, r#"{ "kinds": [] }"#).expect("write settings");

        let parsed = GenerateConfig::parse_args(&args(&["--settings", path.to_str().unwrap()]));
        let _ = fs::remove_file(&path);

        let err = parsed.unwrap_err();
        assert!(err.contains("No texture kinds"), "{}", err);
    }

    #[test]
    fn test_bad_settings_file_is_error() {
        let missing = std::env::temp_dir().join("texture_settings_does_not_exist.json");
        let err = GenerateConfig::parse_args(&args(&["--settings", missing.to_str().unwrap()]))
            .unwrap_err();
        assert!(err.contains("Failed to read"), "{}", err);
    }

    #[test]
    fn test_path_for() {
        let config = GenerateConfig {
            output_dir: PathBuf::from("tex"),
            ..GenerateConfig::default()
        };
        assert_eq!(
            config.path_for(TextureKind::DiamondOre),
            PathBuf::from("tex").join("diamond_ore.ppm")
        );
    }
}
