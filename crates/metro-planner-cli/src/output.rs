//! Output formatting for route rendering.
//!
//! The library renders summaries as plain or rich text; this module adds the
//! logo, terminal colors and JSON output on top.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use metro_planner_lib::{ComparisonSummary, NetworkGraph, RouteRenderMode, RouteSummary};

use crate::terminal::{Styles, TerminalCaps};

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Console text with line changes highlighted.
    #[default]
    Text,
    /// Markdown-style text.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Whether the logo banner may be printed ahead of the output.
    pub fn shows_logo(self) -> bool {
        !matches!(self, OutputFormat::Json)
    }

    /// Print a single route.
    pub fn render_route(self, summary: &RouteSummary) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                let text = summary.render(RouteRenderMode::PlainText);
                print!("{}", highlight(&text, &terminal_styles()));
                Ok(())
            }
            OutputFormat::Rich => {
                print!("{}", summary.render(RouteRenderMode::RichText));
                Ok(())
            }
            OutputFormat::Json => render_json(summary),
        }
    }

    /// Print the blind and heuristic results of one query.
    pub fn render_comparison(self, summary: &ComparisonSummary) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                let text = summary.render(RouteRenderMode::PlainText);
                print!("{}", highlight(&text, &terminal_styles()));
                Ok(())
            }
            OutputFormat::Rich => {
                print!("{}", summary.render(RouteRenderMode::RichText));
                Ok(())
            }
            OutputFormat::Json => render_json(summary),
        }
    }

    /// Print every line with its stations in configured order.
    pub fn render_stations(self, graph: &NetworkGraph) -> io::Result<()> {
        let listings = line_listings(graph);
        match self {
            OutputFormat::Text => {
                let styles = terminal_styles();
                for listing in &listings {
                    println!(
                        "{}: {}",
                        styles.paint(styles.headline, &listing.name),
                        listing.stations.join(", ")
                    );
                }
                Ok(())
            }
            OutputFormat::Rich => {
                for listing in &listings {
                    println!("* **{}**: {}", listing.name, listing.stations.join(", "));
                }
                Ok(())
            }
            OutputFormat::Json => render_json(&listings),
        }
    }
}

/// A line and the names of the stations it serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineListing {
    pub name: String,
    pub stations: Vec<String>,
}

/// Lines of `graph` with resolved station names.
pub fn line_listings(graph: &NetworkGraph) -> Vec<LineListing> {
    graph
        .lines()
        .iter()
        .map(|line| LineListing {
            name: line.name.clone(),
            stations: line
                .stations
                .iter()
                .filter_map(|&id| graph.station_name(id))
                .map(str::to_string)
                .collect(),
        })
        .collect()
}

/// Print the CLI logo banner.
///
/// The logo adapts to terminal capabilities:
/// - Uses Unicode box-drawing characters when supported
/// - Falls back to ASCII when Unicode is not detected
/// - Respects `NO_COLOR` and `TERM=dumb` conventions
pub fn print_logo() {
    let caps = TerminalCaps::from_env();
    let styles = Styles::for_caps(caps);
    let (orange, cyan, reset) = (styles.logo_text, styles.logo_frame, styles.reset);

    if caps.unicode {
        println!(
            "{cyan}╭──────────────────────────────────╮{reset}
{cyan}│{orange}  M E T R O   P L A N N E R       {cyan}│{reset}
{cyan}│{orange}        [ route finder ]          {cyan}│{reset}
{cyan}╰──────────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{orange}+----------------------------------+
|  METRO PLANNER                   |
|  >> ROUTE FINDER                 |
+----------------------------------+{reset}"
        );
    }
}

/// Render any serialisable value as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn terminal_styles() -> Styles {
    Styles::for_caps(TerminalCaps::from_env())
}

/// Color the plain-text rendering of a route or comparison.
pub fn highlight(text: &str, styles: &Styles) -> String {
    let mut highlighted = text
        .lines()
        .map(|line| highlight_line(line, styles))
        .collect::<Vec<_>>()
        .join("\n");
    if text.ends_with('\n') {
        highlighted.push('\n');
    }
    highlighted
}

fn highlight_line(line: &str, s: &Styles) -> String {
    if let Some(hop) = line.strip_suffix(" (line change)") {
        format!("{hop} {}", s.paint(s.transfer, "(line change)"))
    } else if line.starts_with("Estimated time:") {
        s.paint(s.time, line)
    } else if line.ends_with("SEARCH RESULT:") {
        s.paint(s.section, line)
    } else if line == "No path found." || line.starts_with("Not searched:") {
        s.paint(s.missing, line)
    } else if line.contains(" search: ") {
        s.paint(s.headline, line)
    } else {
        line.to_string()
    }
}
