// ABOUTME: Library module for the podium program.
// ABOUTME: Contains core functionality for building presentation sites and loading remote slides.

// Reexport modules
pub mod build;
pub mod config;
pub mod errors;
pub mod html;
pub mod remote;
pub mod utils;
pub mod watch;

// Reexport common types and functions
pub use build::{build_site, discover_presentations, BuildConfig, BuildSummary, Presentation};
pub use config::Config;
pub use errors::{PodiumError, Result};
pub use html::{markdown_to_fragment, render_slide, split_front_matter, write_fragment};
pub use remote::{
    decode_content, load_remote_slides, EngineOptions, HtmlSlidePage, RemoteSource, SlideSink,
    DEFAULT_SLIDE_FILES,
};
pub use watch::{watch_presentations, WatchConfig};
