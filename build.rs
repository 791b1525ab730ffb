//! Build script for the now-playing relay.
//!
//! Copies `.env.example` into the local data directory, next to where
//! `config::load_env` looks for `.env`, so a fresh install has a template to
//! start from:
//! - Linux: `~/.local/share/nowplaying/.env.example`
//! - macOS: `~/Library/Application Support/nowplaying/.env.example`
//! - Windows: `%LOCALAPPDATA%/nowplaying/.env.example`
//!
//! A missing template only produces a cargo warning. Failing to create the
//! directory or write the file fails the build.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push(env::var("CARGO_PKG_NAME")?);
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        fs::copy(&env_example_path, out_dir.join(".env.example"))?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
