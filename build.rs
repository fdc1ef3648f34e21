//! Build script for the sadsong CLI.
//!
//! Copies the `.env.example` template from the crate root into the user's
//! local data directory, next to where the application looks for its `.env`
//! file and its sentiment lexicon.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` into `<data_local_dir>/sadsong/`.
///
/// # File Operations
///
/// Templates are copied to the platform-specific local data directory:
/// - Linux: `~/.local/share/sadsong/.env.example`
/// - macOS: `~/Library/Application Support/sadsong/.env.example`
/// - Windows: `%LOCALAPPDATA%/sadsong/.env.example`
///
/// A missing template only emits a cargo warning. Failing to create the
/// directory or write the file fails the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("sadsong");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
