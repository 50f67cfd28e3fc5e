//! Native command line: renders the header without a browser
//!
//! Outputs either the server side rendered HTML of the header or the navigation
//! table resolved against an origin, as JSON.

use std::io::Write;
use std::path::PathBuf;

use dioxus::prelude::*;

use crate::nav::resolve_all;
use crate::navigator::{Navigation, StaticNavigator};
use crate::views::Header;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Html,
    Json,
}

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = String::from("http://localhost:3000"))]
    pub origin: String,
    #[arg(long, value_enum, default_value_t = Format::Html)]
    pub format: Format,
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Static HTML of the header, links resolve against `origin`
pub fn render_html(origin: &str) -> String {
    let navigation = Navigation::new(StaticNavigator::new(origin));
    let mut dom = VirtualDom::new(Header).with_root_context(navigation);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn render_json(origin: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&resolve_all(origin))
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;

    let args = Args::parse();
    log::debug!("Rendering header for origin {} as {:?}", args.origin, args.format);

    let rendered = match args.format {
        Format::Html => render_html(&args.origin),
        Format::Json => render_json(&args.origin)?,
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            log::info!("Header written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout();
            writeln!(stdout, "{}", rendered)?;
        }
    }
    Ok(())
}
