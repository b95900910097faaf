//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::FavoritesAction;
use crate::api;
use crate::config::AppConfig;
use std::path::{Path, PathBuf};
use vitrine_core::{
    Catalog, CatalogError, Hall, Ingestor, Language, RecordDraft, RecordId, Session,
    catalog_from_bytes, catalog_to_bytes, is_valid_id, is_valid_language,
};

/// The category sentinel meaning "no category filter" on the CLI surface.
const ALL_CATEGORIES: &str = "all";

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum file size for the catalog data file (16 MB).
///
/// A 100-record catalog with translations is a few hundred kilobytes;
/// anything larger is malformed or hostile.
const MAX_DATA_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Maximum file size for snapshot import (16 MB).
const MAX_IMPORT_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), CatalogError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| CatalogError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(CatalogError::SerializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Validate an input file path.
///
/// Canonicalizes the path (resolving symlinks and "..") and ensures it
/// names a regular file, preventing path traversal to anything else.
fn validate_file_path(path: &Path) -> Result<PathBuf, CatalogError> {
    let canonical = path.canonicalize().map_err(|e| {
        CatalogError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(CatalogError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Validate an output file path: the parent directory must exist.
fn validate_output_path(path: &Path) -> Result<PathBuf, CatalogError> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        CatalogError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(CatalogError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| CatalogError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

// =============================================================================
// PATH RESOLUTION & SESSION LOADING
// =============================================================================

/// Paths resolved from CLI flags and the config file (flags win).
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub data: PathBuf,
    pub prefs: PathBuf,
}

impl ResolvedPaths {
    /// Resolve: CLI flag, then config file, then the conventional default.
    #[must_use]
    pub fn new(cli: &super::Cli, config: &AppConfig) -> Self {
        let data = cli
            .data
            .clone()
            .or_else(|| config.catalog.data.clone())
            .unwrap_or_else(|| PathBuf::from("catalog.json"));
        Self {
            data,
            prefs: cli.prefs.clone(),
        }
    }
}

/// Load and canonicalize the catalog data file.
fn load_catalog(paths: &ResolvedPaths, config: &AppConfig) -> Result<Catalog, CatalogError> {
    let catalog_config = config.catalog_config()?;

    let path = validate_file_path(&paths.data)?;
    validate_file_size(&path, MAX_DATA_FILE_SIZE)?;

    let raw = std::fs::read_to_string(&path)
        .map_err(|e| CatalogError::IoError(format!("Cannot read '{}': {}", path.display(), e)))?;
    let drafts: Vec<RecordDraft> = serde_json::from_str(&raw).map_err(|e| {
        CatalogError::SerializationError(format!("Invalid catalog data: {}", e))
    })?;

    Ingestor::build_catalog(&drafts, catalog_config)
}

/// Load the catalog and open the persistent preference store.
fn load_session(paths: &ResolvedPaths, config: &AppConfig) -> Result<Session, CatalogError> {
    let catalog = load_catalog(paths, config)?;
    Session::with_redb(catalog, &paths.prefs)
}

/// Parse a CLI record-id argument through the boundary validator.
fn parse_record_id(raw: &str) -> Result<RecordId, CatalogError> {
    if !is_valid_id(raw) {
        return Err(CatalogError::SerializationError(format!(
            "Invalid record id: {raw:?} (expected an integer in [1, 100])"
        )));
    }
    raw.parse::<u32>()
        .map(RecordId)
        .map_err(|e| CatalogError::SerializationError(format!("Invalid record id: {}", e)))
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    paths: &ResolvedPaths,
    config: &AppConfig,
    host: &str,
    port: u16,
) -> Result<(), CatalogError> {
    let session = load_session(paths, config)?;

    println!("Vitrine Museum Catalog Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:     {}", host);
    println!("  Port:     {}", port);
    println!("  Catalog:  {:?}", paths.data);
    println!("  Prefs:    {:?}", paths.prefs);
    println!("  Records:  {}", session.catalog().len());
    println!();
    println!("Endpoints:");
    println!("  GET  /health    - Health check");
    println!("  GET  /status    - Catalog status");
    println!("  GET  /halls     - Per-hall breakdown");
    println!("  GET  /records   - Paginated listing");
    println!("  POST /search    - Search the catalog");
    println!("  GET  /favorites - Favorites set");
    println!("  GET  /language  - Language preference");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, session).await
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Show catalog status.
pub fn cmd_status(
    paths: &ResolvedPaths,
    config: &AppConfig,
    json_mode: bool,
) -> Result<(), CatalogError> {
    let session = load_session(paths, config)?;
    let stats = session.designation_stats();

    if json_mode {
        let output = serde_json::json!({
            "catalog": paths.data.to_string_lossy(),
            "record_count": session.catalog().len(),
            "featured_count": session.catalog().featured().len(),
            "national_treasures": stats.national_treasures,
            "treasures": stats.treasures,
            "favorites_count": session.favorites_count(),
            "language": session.language().code(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Vitrine Catalog Status");
    println!("======================");
    println!("Catalog:  {:?}", paths.data);
    println!("Prefs:    {:?}", paths.prefs);
    println!();
    println!("Records:            {}", session.catalog().len());
    println!("Featured:           {}", session.catalog().featured().len());
    println!("National Treasures: {}", stats.national_treasures);
    println!("Treasures:          {}", stats.treasures);
    println!("Favorites:          {}", session.favorites_count());
    println!("Language:           {}", session.language().code());

    Ok(())
}

// =============================================================================
// HALLS COMMAND
// =============================================================================

/// Show per-hall breakdown with designation stats.
pub fn cmd_halls(
    paths: &ResolvedPaths,
    config: &AppConfig,
    json_mode: bool,
) -> Result<(), CatalogError> {
    let session = load_session(paths, config)?;

    if json_mode {
        let halls: Vec<_> = Hall::ALL
            .into_iter()
            .map(|hall| {
                let stats = session.hall_stats(hall);
                serde_json::json!({
                    "hall": hall.key(),
                    "total": stats.total,
                    "national_treasures": stats.national_treasures,
                    "treasures": stats.treasures,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "halls": halls }))
                .unwrap_or_default()
        );
        return Ok(());
    }

    println!("Vitrine Hall Breakdown");
    println!("======================");
    println!();
    for hall in Hall::ALL {
        let stats = session.hall_stats(hall);
        println!(
            "{:<12} {:>3} records  ({} national treasures, {} treasures)",
            hall.key(),
            stats.total,
            stats.national_treasures,
            stats.treasures
        );
    }

    Ok(())
}

// =============================================================================
// SEARCH COMMAND
// =============================================================================

/// Search the catalog.
pub fn cmd_search(
    paths: &ResolvedPaths,
    config: &AppConfig,
    json_mode: bool,
    term: &str,
    category: &str,
    language: Option<&str>,
) -> Result<(), CatalogError> {
    let session = load_session(paths, config)?;

    // A language flag overrides the persisted preference for this query
    // only; it does not mutate the stored preference.
    let language = match language {
        Some(code) => {
            if !is_valid_language(session.catalog().config(), code) {
                return Err(CatalogError::UnknownLanguage(code.to_string()));
            }
            Language::from_code(code)
                .ok_or_else(|| CatalogError::UnknownLanguage(code.to_string()))?
        }
        None => session.language(),
    };

    let sanitized = vitrine_core::sanitize_search_input(term);
    let results = session
        .catalog()
        .search(&sanitized, category, language, ALL_CATEGORIES);

    if json_mode {
        let records: Vec<_> = results
            .iter()
            .filter_map(|record| {
                record.name.get(language).map(|name| {
                    serde_json::json!({
                        "id": record.id.value(),
                        "name": name,
                        "category": record.category,
                        "hall": record.hall.key(),
                        "favorite": session.is_favorite(record.id),
                    })
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "count": records.len(),
                "records": records,
            }))
            .unwrap_or_default()
        );
        return Ok(());
    }

    println!("Search: {:?} ({} results)", sanitized, results.len());
    println!();
    for record in results {
        let marker = if session.is_favorite(record.id) { "★" } else { " " };
        println!(
            "{} #{:<4} {:<40} {:<12} {}",
            marker,
            record.id.value(),
            record.name.get(language).unwrap_or(""),
            record.category,
            record.hall.key()
        );
    }

    Ok(())
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Show one record, localized for the active language.
pub fn cmd_show(
    paths: &ResolvedPaths,
    config: &AppConfig,
    json_mode: bool,
    raw_id: &str,
) -> Result<(), CatalogError> {
    let id = parse_record_id(raw_id)?;
    let session = load_session(paths, config)?;

    let record = session
        .get(id)
        .ok_or_else(|| CatalogError::IoError(format!("Record {} not found", id)))?;
    let language = session.language();

    if json_mode {
        let output = serde_json::json!({
            "id": record.id.value(),
            "name": record.name.get(language),
            "period": record.period.get(language),
            "category": record.category,
            "description": record.description.get(language),
            "detailed_info": record.detailed_info.get(language),
            "hall": record.hall.key(),
            "designation": record.designation.to_string(),
            "cultural_property": record.cultural_property,
            "featured": record.featured,
            "favorite": session.is_favorite(record.id),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Record #{}", record.id.value());
    println!("==========");
    println!("Name:        {}", record.name.get(language).unwrap_or(""));
    println!("Period:      {}", record.period.get(language).unwrap_or(""));
    println!("Category:    {}", record.category);
    println!("Hall:        {}", record.hall.key());
    println!("Designation: {}", record.designation);
    if let Some(cultural_property) = &record.cultural_property {
        println!("Cultural:    {}", cultural_property);
    }
    if let Some(room) = &record.exhibition_room {
        println!("Room:        {}", room);
    }
    println!("Featured:    {}", record.featured);
    println!("Favorite:    {}", session.is_favorite(record.id));
    println!();
    println!("{}", record.description.get(language).unwrap_or(""));

    Ok(())
}

// =============================================================================
// FAVORITES COMMAND
// =============================================================================

/// Manage the favorites set.
pub fn cmd_favorites(
    paths: &ResolvedPaths,
    config: &AppConfig,
    json_mode: bool,
    action: &FavoritesAction,
) -> Result<(), CatalogError> {
    let mut session = load_session(paths, config)?;

    match action {
        FavoritesAction::List => {
            if json_mode {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "count": session.favorites_count(),
                        "favorites": session.favorites().to_raw_ids(),
                    }))
                    .unwrap_or_default()
                );
                return Ok(());
            }

            println!("Favorites ({})", session.favorites_count());
            let language = session.language();
            for id in session.favorites().iter() {
                match session.get(id) {
                    Some(record) => println!(
                        "  #{:<4} {}",
                        id.value(),
                        record.name.get(language).unwrap_or("")
                    ),
                    // Favorites are not validated against the catalog;
                    // display-time lookups simply miss.
                    None => println!("  #{:<4} (not in catalog)", id.value()),
                }
            }
        }
        FavoritesAction::Add { id } => {
            let id = parse_record_id(id)?;
            let changed = session.add_favorite(id);
            report_mutation(json_mode, id, true, changed);
        }
        FavoritesAction::Remove { id } => {
            let id = parse_record_id(id)?;
            let changed = session.remove_favorite(id);
            report_mutation(json_mode, id, false, changed);
        }
        FavoritesAction::Toggle { id } => {
            let id = parse_record_id(id)?;
            let now_member = session.toggle_favorite(id);
            report_mutation(json_mode, id, now_member, true);
        }
        FavoritesAction::Clear => {
            session.clear_favorites();
            if json_mode {
                println!("{}", serde_json::json!({ "cleared": true }));
            } else {
                println!("Favorites cleared");
            }
        }
    }

    Ok(())
}

/// Print the outcome of one favorites mutation.
fn report_mutation(json_mode: bool, id: RecordId, favorite: bool, changed: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::json!({
                "id": id.value(),
                "favorite": favorite,
                "changed": changed,
            })
        );
    } else if changed {
        let verb = if favorite { "added to" } else { "removed from" };
        println!("Record #{} {} favorites", id.value(), verb);
    } else {
        println!("Record #{} unchanged", id.value());
    }
}

// =============================================================================
// LANGUAGE COMMAND
// =============================================================================

/// Show or set the persisted language preference.
pub fn cmd_language(
    paths: &ResolvedPaths,
    config: &AppConfig,
    json_mode: bool,
    code: Option<&str>,
) -> Result<(), CatalogError> {
    let mut session = load_session(paths, config)?;

    if let Some(code) = code {
        if !is_valid_language(session.catalog().config(), code) {
            return Err(CatalogError::UnknownLanguage(code.to_string()));
        }
        let language = Language::from_code(code)
            .ok_or_else(|| CatalogError::UnknownLanguage(code.to_string()))?;
        session.set_language(language)?;
    }

    if json_mode {
        let supported: Vec<_> = session
            .catalog()
            .config()
            .supported()
            .iter()
            .map(|lang| {
                serde_json::json!({
                    "code": lang.code(),
                    "name": lang.native_name(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "language": session.language().code(),
                "supported": supported,
            }))
            .unwrap_or_default()
        );
        return Ok(());
    }

    println!("Language: {}", session.language().code());
    println!();
    println!("Supported:");
    for lang in session.catalog().config().supported() {
        let marker = if *lang == session.language() { "*" } else { " " };
        println!("  {} {:<4} {}", marker, lang.code(), lang.native_name());
    }

    Ok(())
}

// =============================================================================
// EXPORT / IMPORT COMMANDS
// =============================================================================

/// Export the catalog to a binary snapshot.
pub fn cmd_export(
    paths: &ResolvedPaths,
    config: &AppConfig,
    output: &Path,
) -> Result<(), CatalogError> {
    let catalog = load_catalog(paths, config)?;
    let bytes = catalog_to_bytes(&catalog)?;

    let output = validate_output_path(output)?;
    std::fs::write(&output, &bytes)
        .map_err(|e| CatalogError::IoError(format!("Cannot write '{}': {}", output.display(), e)))?;

    println!(
        "Exported {} records ({} bytes) to {:?}",
        catalog.len(),
        bytes.len(),
        output
    );
    Ok(())
}

/// Inspect a binary snapshot, optionally dumping its records as JSON.
pub fn cmd_import(
    input: &Path,
    output: Option<&Path>,
    json_mode: bool,
) -> Result<(), CatalogError> {
    let input = validate_file_path(input)?;
    validate_file_size(&input, MAX_IMPORT_FILE_SIZE)?;

    let bytes = std::fs::read(&input)
        .map_err(|e| CatalogError::IoError(format!("Cannot read '{}': {}", input.display(), e)))?;
    let catalog = catalog_from_bytes(&bytes)?;
    let stats = vitrine_core::designation_stats(catalog.records());

    if let Some(output) = output {
        let json = serde_json::to_string_pretty(catalog.records())
            .map_err(|e| CatalogError::SerializationError(e.to_string()))?;
        let output = validate_output_path(output)?;
        std::fs::write(&output, json).map_err(|e| {
            CatalogError::IoError(format!("Cannot write '{}': {}", output.display(), e))
        })?;
        println!("Wrote records to {:?}", output);
    }

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "records": catalog.len(),
                "national_treasures": stats.national_treasures,
                "treasures": stats.treasures,
                "supported_languages": catalog
                    .config()
                    .supported()
                    .iter()
                    .map(|lang| lang.code())
                    .collect::<Vec<_>>(),
            }))
            .unwrap_or_default()
        );
        return Ok(());
    }

    println!("Snapshot {:?}", input);
    println!(
        "  Records: {} ({} national treasures, {} treasures)",
        catalog.len(),
        stats.national_treasures,
        stats.treasures
    );
    println!(
        "  Languages: {}",
        catalog
            .config()
            .supported()
            .iter()
            .map(|lang| lang.code())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}

// =============================================================================
// INIT COMMAND
// =============================================================================

/// Initialize a new preference database.
pub fn cmd_init(paths: &ResolvedPaths, force: bool) -> Result<(), CatalogError> {
    if paths.prefs.exists() {
        if !force {
            return Err(CatalogError::IoError(format!(
                "Preference database {:?} already exists (use --force to recreate)",
                paths.prefs
            )));
        }
        std::fs::remove_file(&paths.prefs).map_err(|e| {
            CatalogError::IoError(format!("Cannot remove {:?}: {}", paths.prefs, e))
        })?;
    }

    let _ = vitrine_core::RedbPreferences::open(&paths.prefs)?;
    println!("Initialized preference database at {:?}", paths.prefs);
    Ok(())
}
