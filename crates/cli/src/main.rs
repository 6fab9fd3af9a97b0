use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use formation_registry::{ManifestProvider, RegistryConfig, ResourceEntry, ResourceFactory};
use serde_json::Value;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Inspect the resource catalog and decode resource declarations.
#[derive(Parser, Debug)]
#[command(name = "formation", version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List known resource kinds
    Kinds {
        /// Only show kinds starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Decode a JSON or YAML resource declaration and print it normalized
    Decode {
        /// Path to the declaration
        file: PathBuf,

        /// Treat the file as bare properties of this kind
        #[arg(long)]
        kind: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let config = RegistryConfig::load();

    match Args::parse().command {
        Command::Kinds { prefix } => {
            for kind in list_kinds(&config, prefix.as_deref()) {
                println!("{kind}");
            }
        }
        Command::Decode { file, kind } => {
            let factory = config.build_factory();
            let decoded = decode_file(&factory, &file, kind.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&decoded)?);
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Built-in kinds followed by the kinds of every enabled manifest that loads.
fn list_kinds(config: &RegistryConfig, prefix: Option<&str>) -> Vec<String> {
    let mut kinds: Vec<String> = formation_catalog::kinds().map(str::to_string).collect();
    for path in config.manifest_paths() {
        match ManifestProvider::load(&path) {
            Ok(provider) => kinds.extend(provider.kinds().map(str::to_string)),
            Err(error) => warn!(path = %path.display(), error = %error, "skipping catalog manifest"),
        }
    }
    if let Some(prefix) = prefix {
        kinds.retain(|kind| kind.starts_with(prefix));
    }
    kinds
}

fn decode_file(factory: &ResourceFactory, path: &Path, kind: Option<&str>) -> Result<Value> {
    let raw = read_document(path)?;
    debug!(path = %path.display(), kind, "decoding resource document");

    match kind {
        Some(kind) => {
            let record = factory
                .decode_properties(kind, &raw)
                .with_context(|| format!("failed to decode {kind} properties from {}", path.display()))?;
            Ok(record.to_value()?)
        }
        None => {
            let entry = ResourceEntry::decode(&raw, factory)
                .with_context(|| format!("failed to decode resource declaration in {}", path.display()))?;
            Ok(entry.to_value()?)
        }
    }
}

fn read_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let is_yaml = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("yaml") || extension.eq_ignore_ascii_case("yml"));
    let value = if is_yaml {
        serde_yaml::from_str(&content).with_context(|| format!("invalid YAML in {}", path.display()))?
    } else {
        serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))?
    };
    Ok(value)
}
