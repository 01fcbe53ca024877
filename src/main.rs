//! Block texture generator
//!
//! Writes every block texture into assets/textures/ as a 64x64 PPM.
//!
//! Usage:
//!   cargo run                          # Generate all textures
//!   cargo run -- --seed 42             # Reproducible textures
//!   cargo run -- --only stone,coal     # Subset
//!   cargo run -- --help                # Show help

use blocktex::config::{Command, GenerateConfig, print_help};
use blocktex::generate;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match GenerateConfig::from_args() {
        Ok(Command::Generate(config)) => config,
        Ok(Command::List(config)) => {
            for kind in &config.kinds {
                println!("{:<12} {}", kind.name(), config.path_for(*kind).display());
            }
            return;
        }
        Ok(Command::Help) => {
            print_help();
            return;
        }
        Err(e) => {
            eprintln!("Error: {}\n", e);
            eprintln!("Run with --help for usage.");
            std::process::exit(2);
        }
    };

    if let Err(e) = generate::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
