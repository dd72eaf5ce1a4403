use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use dataset_publisher::config::PublisherConfig;
use dataset_publisher::publisher::{Metadata, MetadataMapper, RestrictedKeywords, TableDescriptor};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "dataset-publisher",
    about = "Map dataset metadata onto Hive table definitions"
)]
pub struct Cli {
    /// Path to a JSON configuration file. Defaults to the user config directory.
    #[arg(long, global = true, env = "DATASET_PUBLISHER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map a metadata file to a table descriptor
    Map {
        /// Path to the metadata JSON (orgUUID, title, dataSample, targetUri, isPublic)
        #[arg(short, long)]
        metadata: PathBuf,

        /// Target database. Defaults to the metadata's organization id.
        #[arg(short, long)]
        database: Option<String>,

        /// Print DDL statements instead of the JSON descriptor
        #[arg(long)]
        ddl: bool,

        /// With --ddl, drop an existing table of the same name before creating it
        #[arg(long, requires = "ddl")]
        drop: bool,
    },
    /// Print the identifier each argument normalizes to
    Normalize {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List the restricted keywords in effect
    Keywords,
}

/// Resolve the configuration file: explicit path, or the default location.
pub fn load_config(path: Option<&Path>) -> Result<PublisherConfig> {
    match path {
        Some(path) => PublisherConfig::load_from(path),
        None => PublisherConfig::load(),
    }
}

pub fn run_command(command: Commands, config: &PublisherConfig) -> Result<()> {
    match command {
        Commands::Map {
            metadata,
            database,
            ddl,
            drop,
        } => handle_map(&metadata, database, ddl.then_some(DdlMode { drop }), config),
        Commands::Normalize { text } => {
            handle_normalize(&text, config);
            Ok(())
        }
        Commands::Keywords => {
            handle_keywords(&config.keywords());
            Ok(())
        }
    }
}

/// Which statements `map --ddl` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DdlMode {
    drop: bool,
}

fn build_mapper(config: &PublisherConfig) -> MetadataMapper<RestrictedKeywords> {
    MetadataMapper::new(config.keywords()).with_identifier_max_len(config.identifier_max_len)
}

fn handle_map(
    metadata_path: &Path,
    database: Option<String>,
    ddl: Option<DdlMode>,
    config: &PublisherConfig,
) -> Result<()> {
    let metadata = Metadata::from_file(metadata_path)?;
    let database = database.unwrap_or_else(|| metadata.org_uuid.clone());

    tracing::info!(
        org = %metadata.org_uuid,
        database = %database,
        public = metadata.is_public,
        "Mapping dataset '{}'",
        metadata.title
    );

    let table = match build_mapper(config).map(&metadata, &database) {
        Ok(table) => table,
        Err(err) => {
            if err.is_user_correctable() {
                tracing::warn!("Rejected dataset '{}': {err}", metadata.title);
            } else {
                tracing::error!("Failed to map dataset '{}': {err}", metadata.title);
            }
            return Err(err.into());
        }
    };

    tracing::info!(
        table = %table.qualified_name(),
        fields = table.fields.len(),
        "Mapped dataset"
    );

    if let Some(mode) = ddl {
        for statement in ddl_statements(&table, mode) {
            println!("{statement};");
        }
    } else {
        let json =
            serde_json::to_string_pretty(&table).context("Failed to serialize table descriptor")?;
        println!("{json}");
    }

    Ok(())
}

fn ddl_statements(table: &TableDescriptor, mode: DdlMode) -> Vec<String> {
    let mut statements = vec![table.create_database_statement()];
    if mode.drop {
        statements.push(table.drop_table_statement());
    }
    statements.push(table.create_table_statement());
    statements
}

fn handle_normalize(text: &[String], config: &PublisherConfig) {
    let mapper = build_mapper(config);
    for raw in text {
        println!("{}", mapper.normalize(raw));
    }
}

fn handle_keywords(keywords: &RestrictedKeywords) {
    for word in keywords.iter() {
        println!("{word}");
    }
}
