// ABOUTME: Remote slide loader for the podium application
// ABOUTME: Fetches Markdown slides from a content API and assembles a client-rendered page

use crate::errors::{PodiumError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::info;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// Slide file names requested when none are given on the command line
pub const DEFAULT_SLIDE_FILES: &[&str] = &["intro.md", "main-content.md", "conclusion.md"];

/// Identifies where remotely hosted slides live.
///
/// `api_base` is injectable so tests can point the loader at a local mock
/// endpoint instead of the real content API.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    pub api_base: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub slide_path: String,
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            owner: "LaunchpadPhillyTech".to_string(),
            repo: "liftoff-learning".to_string(),
            branch: "main".to_string(),
            slide_path: "presentations/nodejs-presentation/slides".to_string(),
        }
    }
}

impl RemoteSource {
    /// Compose the content API URL for one slide file. The branch rides as the
    /// `ref` query parameter.
    pub fn content_url(&self, file: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}/{}?ref={}",
            self.api_base, self.owner, self.repo, self.slide_path, file, self.branch
        )
    }
}

/// Fixed configuration handed to the slide rendering engine after all slides
/// are loaded
#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub hash: bool,
    pub smartypants: bool,
    pub breaks: bool,
    pub plugins: Vec<String>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            hash: true,
            smartypants: true,
            breaks: true,
            plugins: vec![
                "RevealMarkdown".to_string(),
                "RevealHighlight".to_string(),
                "RevealNotes".to_string(),
            ],
        }
    }
}

/// Where loaded slides land: a loading indicator, a container of slide
/// sections, an error surface, and the engine initialization hook.
pub trait SlideSink {
    fn set_loading(&mut self, visible: bool);
    fn append_section(&mut self, markdown: &str);
    fn show_error(&mut self, message: &str);
    fn initialize_engine(&mut self, options: &EngineOptions);
}

#[derive(Deserialize)]
struct ContentResponse {
    content: String,
}

/// Run the load sequence: fetch each configured file in order, append its
/// decoded content as a slide section, then initialize the rendering engine.
///
/// The sequence is strictly sequential and fails on the first error with no
/// retries. Sections appended before a failure stay appended; the sink is told
/// to show the error instead of initializing the engine. The loading indicator
/// is hidden regardless of outcome.
pub fn load_remote_slides(
    source: &RemoteSource,
    files: &[String],
    timeout_ms: u64,
    sink: &mut dyn SlideSink,
) -> Result<()> {
    sink.set_loading(true);

    let outcome = run_sequence(source, files, timeout_ms, sink);
    if let Err(err) = &outcome {
        sink.show_error(&err.to_string());
    }

    sink.set_loading(false);
    outcome
}

fn run_sequence(
    source: &RemoteSource,
    files: &[String],
    timeout_ms: u64,
    sink: &mut dyn SlideSink,
) -> Result<()> {
    let client = Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .user_agent(concat!("podium/", env!("CARGO_PKG_VERSION")))
        .build()?;

    for file in files {
        let text = fetch_slide(&client, source, file)?;
        sink.append_section(&text);
    }

    sink.initialize_engine(&EngineOptions::default());
    Ok(())
}

/// Fetch and decode one slide file from the content API
fn fetch_slide(client: &Client, source: &RemoteSource, file: &str) -> Result<String> {
    let url = source.content_url(file);
    info!("Fetching remote slide: {}", url);

    let response = client.get(&url).send()?;
    if !response.status().is_success() {
        return Err(PodiumError::ContentApiError {
            file: file.to_string(),
            status: response.status().as_u16(),
        });
    }

    let body = response.text()?;
    let parsed: ContentResponse = serde_json::from_str(&body)?;
    decode_content(&parsed.content)
}

/// Decode the base64 `content` field of a content API response.
///
/// The API hard-wraps its base64 payload, so ASCII whitespace is stripped
/// before decoding.
pub fn decode_content(encoded: &str) -> Result<String> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = BASE64.decode(compact.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// Production sink: accumulates slide sections and renders a standalone HTML
/// page wired to the Reveal.js rendering engine.
#[derive(Debug)]
pub struct HtmlSlidePage {
    title: String,
    sections: Vec<String>,
    init_script: Option<String>,
    loading: bool,
}

impl HtmlSlidePage {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            sections: Vec::new(),
            init_script: None,
            loading: false,
        }
    }

    /// Render the full HTML document
    pub fn render(&self) -> String {
        let mut html_doc = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html_doc.push_str("<meta charset=\"UTF-8\">\n");
        html_doc.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html_doc.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        html_doc.push_str(
            "<link rel=\"stylesheet\" href=\"https://cdn.jsdelivr.net/npm/reveal.js@4/dist/reveal.css\">\n",
        );
        html_doc.push_str(
            "<link rel=\"stylesheet\" href=\"https://cdn.jsdelivr.net/npm/reveal.js@4/dist/theme/black.css\">\n",
        );
        html_doc.push_str("</head>\n<body>\n");

        let loader_display = if self.loading { "block" } else { "none" };
        html_doc.push_str(&format!(
            "<div id=\"loader\" style=\"display:{}\">Loading slides...</div>\n",
            loader_display
        ));

        html_doc.push_str("<div class=\"reveal\">\n<div class=\"slides\" id=\"presentation-container\">\n");
        for section in &self.sections {
            html_doc.push_str(section);
            html_doc.push('\n');
        }
        html_doc.push_str("</div>\n</div>\n");

        html_doc.push_str(
            "<script src=\"https://cdn.jsdelivr.net/npm/reveal.js@4/dist/reveal.js\"></script>\n",
        );
        html_doc.push_str(
            "<script src=\"https://cdn.jsdelivr.net/npm/reveal.js@4/plugin/markdown/markdown.js\"></script>\n",
        );
        html_doc.push_str(
            "<script src=\"https://cdn.jsdelivr.net/npm/reveal.js@4/plugin/highlight/highlight.js\"></script>\n",
        );
        html_doc.push_str(
            "<script src=\"https://cdn.jsdelivr.net/npm/reveal.js@4/plugin/notes/notes.js\"></script>\n",
        );

        if let Some(script) = &self.init_script {
            html_doc.push_str("<script>\n");
            html_doc.push_str(script);
            html_doc.push_str("\n</script>\n");
        }

        html_doc.push_str("</body>\n</html>");
        html_doc
    }
}

impl SlideSink for HtmlSlidePage {
    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn append_section(&mut self, markdown: &str) {
        self.sections.push(format!(
            "<section data-markdown data-separator=\"^\\n\\n\">\n<textarea data-template>\n{}\n</textarea>\n</section>",
            escape_html(markdown)
        ));
    }

    fn show_error(&mut self, message: &str) {
        // Matches the container overwrite on failure: everything appended so
        // far is replaced by a single visible error section.
        self.sections = vec![format!(
            "<section><h2>Error Loading Content</h2><p>{}</p></section>",
            escape_html(message)
        )];
        self.init_script = None;
    }

    fn initialize_engine(&mut self, options: &EngineOptions) {
        let plugins = options.plugins.join(", ");
        self.init_script = Some(format!(
            "Reveal.initialize({{\n  hash: {},\n  markdown: {{\n    smartypants: {},\n    breaks: {}\n  }},\n  plugins: [ {} ]\n}});",
            options.hash, options.smartypants, options.breaks, plugins
        ));
    }
}

/// Minimal HTML escaping, the equivalent of assigning text content in a DOM
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
