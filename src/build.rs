// ABOUTME: Build orchestrator for the podium application
// ABOUTME: Mirrors a presentations source tree into a static HTML output tree

use crate::errors::Result;
use crate::html;
use crate::utils;
use glob::glob;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for a site build
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Root directory containing `shared/` and one directory per presentation
    pub source_dir: PathBuf,

    /// Output root; cleared and fully rebuilt on every run
    pub output_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("presentations"),
            output_dir: PathBuf::from("dist"),
        }
    }
}

/// Counts reported after a completed build
#[derive(Debug)]
pub struct BuildSummary {
    pub presentations: usize,
    pub slides: usize,
}

/// One discovered slide deck
#[derive(Debug, Clone)]
pub struct Presentation {
    /// Directory name, which is also the output directory name
    pub name: String,

    /// Source directory of the deck
    pub source_dir: PathBuf,

    /// The deck's entry page, copied verbatim to the output
    pub entry_page: PathBuf,
}

/// Build the whole site: reset the output root, copy shared resources, then
/// process every discovered presentation. Any error aborts the run.
pub fn build_site(config: &BuildConfig) -> Result<BuildSummary> {
    utils::validate_directory_exists(&config.source_dir)?;

    reset_output_root(&config.output_dir)?;
    copy_shared_resources(config)?;

    let presentations = discover_presentations(&config.source_dir)?;
    let mut slides = 0;
    for presentation in &presentations {
        slides += process_presentation(presentation, &config.output_dir)?;
    }

    info!(
        "Built {} presentations with {} slides into {:?}",
        presentations.len(),
        slides,
        config.output_dir
    );

    Ok(BuildSummary {
        presentations: presentations.len(),
        slides,
    })
}

/// Recursively delete and recreate the output root. Destructive: any manual
/// edits to a previous build are lost.
fn reset_output_root(output_dir: &Path) -> Result<()> {
    info!("Resetting output root: {:?}", output_dir);

    if output_dir.exists() {
        fs::remove_dir_all(output_dir)?;
    }
    fs::create_dir_all(output_dir)?;

    Ok(())
}

/// Copy the shared resource tree into the output root
fn copy_shared_resources(config: &BuildConfig) -> Result<()> {
    let shared_src = config.source_dir.join("shared");
    let shared_dst = config.output_dir.join("shared");

    info!("Copying shared resources to {:?}", shared_dst);
    utils::copy_tree(&shared_src, &shared_dst)
}

/// Enumerate every directory under the source root that carries an entry
/// page. Results are sorted by name so builds are reproducible.
pub fn discover_presentations(source_dir: &Path) -> Result<Vec<Presentation>> {
    let pattern = format!("{}/*/index.html", source_dir.display());

    let mut presentations = Vec::new();
    for entry in glob(&pattern)? {
        let entry_page = entry?;
        let Some(dir) = entry_page.parent() else {
            continue;
        };
        let Some(name) = dir.file_name() else {
            continue;
        };

        debug!("Discovered presentation: {:?}", name);
        presentations.push(Presentation {
            name: name.to_string_lossy().to_string(),
            source_dir: dir.to_path_buf(),
            entry_page: entry_page.clone(),
        });
    }

    presentations.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(presentations)
}

/// Process a single presentation: convert its slides, copy its assets, and
/// copy its entry page verbatim. Returns the number of slides converted.
fn process_presentation(presentation: &Presentation, output_root: &Path) -> Result<usize> {
    info!("Processing presentation: {}", presentation.name);

    let output_dir = output_root.join(&presentation.name);
    utils::ensure_directory_exists(&output_dir)?;

    let slides_pattern = format!("{}/slides/*.md", presentation.source_dir.display());
    let mut slides = 0;
    for entry in glob(&slides_pattern)? {
        let slide_path = entry?;
        let fragment = html::render_slide(&slide_path)?;

        let stem = slide_path.file_stem().unwrap_or_default().to_string_lossy();
        let output_path = output_dir.join("slides").join(format!("{}.html", stem));
        html::write_fragment(&fragment, &output_path)?;
        slides += 1;
    }

    utils::copy_tree(
        &presentation.source_dir.join("assets"),
        &output_dir.join("assets"),
    )?;

    // Entry page is copied byte-for-byte, no transformation.
    fs::copy(&presentation.entry_page, output_dir.join("index.html"))?;

    Ok(slides)
}
