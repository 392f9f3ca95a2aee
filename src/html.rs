// ABOUTME: Slide conversion module for the podium application
// ABOUTME: Splits front matter and converts Markdown slide bodies to HTML fragments

use crate::errors::{PodiumError, Result};
use crate::utils;
use comrak::{markdown_to_html, ComrakOptions};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Split a slide source into its front matter header and Markdown body.
///
/// The header is a leading `---` delimited YAML block. Its fields are parsed
/// and returned but are not applied to the generated output; they are reserved
/// for later use. A missing header is fine; an unclosed block or invalid YAML
/// is an error.
pub fn split_front_matter(raw: &str) -> std::result::Result<(Option<serde_yaml::Value>, &str), String> {
    let trimmed = raw.trim_start();
    if !trimmed.starts_with("---") {
        return Ok((None, raw));
    }

    let after_open = &trimmed[3..];
    let Some(close) = after_open.find("\n---") else {
        return Err("unclosed front matter block, missing closing ---".to_string());
    };

    let header = after_open[..close].trim();
    let body = &after_open[close + 4..];

    let fields: serde_yaml::Value =
        serde_yaml::from_str(header).map_err(|e| format!("invalid YAML: {}", e))?;

    Ok((Some(fields), body.trim_start_matches('\n')))
}

/// Convert a Markdown body to an HTML fragment.
///
/// Raw HTML in the source passes through, matching the permissive renderer the
/// presentations were authored against.
pub fn markdown_to_fragment(body: &str) -> String {
    let mut options = ComrakOptions::default();
    options.render.unsafe_ = true;
    markdown_to_html(body, &options)
}

/// Render one slide source file to an HTML fragment.
pub fn render_slide(slide_path: &Path) -> Result<String> {
    debug!("Converting slide: {:?}", slide_path);

    let raw = fs::read_to_string(slide_path)?;
    let (fields, body) = split_front_matter(&raw).map_err(|message| {
        PodiumError::FrontMatterError {
            path: slide_path.to_path_buf(),
            message,
        }
    })?;

    // Header fields are extracted but deliberately unused.
    let _ = fields;

    Ok(markdown_to_fragment(body))
}

/// Write an HTML fragment to a file, creating parent directories as needed.
pub fn write_fragment(html_content: &str, output_path: &Path) -> Result<()> {
    info!("Writing HTML fragment: {:?}", output_path);

    utils::ensure_parent_directory_exists(output_path)?;
    fs::write(output_path, html_content)?;

    Ok(())
}
