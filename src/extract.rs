//! Standings table extraction.
//!
//! League pages differ a lot in markup, so extraction runs two strategies in
//! order and keeps the first one that yields a usable list:
//!
//! 1. a structured pass that reads every `<table>` as a row/column grid and
//!    takes its first column;
//! 2. a tag-tree pass over the first `<table>` that keeps only rows whose
//!    first cell is a bare rank number.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

/// Fewest teams a page must yield before it is trusted.
pub const MIN_TEAMS: usize = 18;
/// Teams in the league; longer lists are truncated.
pub const LEAGUE_SIZE: usize = 20;

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").expect("static selector"));
static TR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("static selector"));
static TD: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("static selector"));

/// Turns the text of one table cell into a team name.
pub trait CellParser: Send + Sync {
    fn team_name(&self, cell_text: &str) -> Option<String>;
}

/// Cells shaped like `"<rank> <team words…> <form>"`.
///
/// The first token is dropped as a rank or crest marker. With three or more
/// tokens the last one is dropped too (movement arrow, short code).
#[derive(Debug, Default, Clone, Copy)]
pub struct RankAndFormParser;

impl CellParser for RankAndFormParser {
    fn team_name(&self, cell_text: &str) -> Option<String> {
        let parts: Vec<&str> = cell_text.split_whitespace().collect();
        if parts.len() < 2 {
            return None;
        }
        let core = if parts.len() >= 3 {
            &parts[1..parts.len() - 1]
        } else {
            &parts[1..]
        };
        let name = core.join(" ");
        if name.is_empty() { None } else { Some(name) }
    }
}

/// Cells that hold nothing but the team name.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainNameParser;

impl CellParser for PlainNameParser {
    fn team_name(&self, cell_text: &str) -> Option<String> {
        let name = normalize_ws(cell_text);
        if name.is_empty() { None } else { Some(name) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    StructuredTable,
    TagTree,
}

impl Strategy {
    pub fn label(self) -> &'static str {
        match self {
            Strategy::StructuredTable => "structured table",
            Strategy::TagTree => "tag tree",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub teams: Vec<String>,
    /// `None` when neither strategy produced anything.
    pub strategy: Option<Strategy>,
}

/// Ordered team names found in `html`, or an empty list.
pub fn extract_teams(html: &str, parser: &dyn CellParser) -> Vec<String> {
    extract(html, parser).teams
}

pub fn extract(html: &str, parser: &dyn CellParser) -> Extraction {
    let doc = Html::parse_document(html);

    if let Some(teams) = from_structured_tables(&doc, parser) {
        return Extraction {
            teams,
            strategy: Some(Strategy::StructuredTable),
        };
    }

    let teams = from_tag_tree(&doc, parser);
    if teams.is_empty() {
        return Extraction::default();
    }
    Extraction {
        teams,
        strategy: Some(Strategy::TagTree),
    }
}

fn from_structured_tables(doc: &Html, parser: &dyn CellParser) -> Option<Vec<String>> {
    for table in doc.select(&TABLE) {
        let first_column = table_first_column(table);
        if first_column.len() < MIN_TEAMS {
            continue;
        }
        let mut names: Vec<String> = first_column
            .iter()
            .filter_map(|cell| parser.team_name(cell))
            .collect();
        if names.len() >= MIN_TEAMS {
            names.truncate(LEAGUE_SIZE);
            return Some(names);
        }
    }
    None
}

/// First-column text of every data row that belongs to `table` itself.
/// Rows of nested tables and header-only rows are skipped.
fn table_first_column(table: ElementRef<'_>) -> Vec<String> {
    let mut column = Vec::new();
    for row in table.select(&TR) {
        if owning_table(row).map(|t| t.id()) != Some(table.id()) {
            continue;
        }
        let cells: Vec<ElementRef<'_>> = row
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| matches!(el.value().name(), "td" | "th"))
            .collect();
        if !cells.iter().any(|el| el.value().name() == "td") {
            continue;
        }
        column.push(cell_text(cells[0]));
    }
    column
}

fn owning_table(row: ElementRef<'_>) -> Option<ElementRef<'_>> {
    row.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
}

fn from_tag_tree(doc: &Html, parser: &dyn CellParser) -> Vec<String> {
    let Some(table) = doc.select(&TABLE).next() else {
        return Vec::new();
    };

    let mut teams = Vec::new();
    for row in table.select(&TR) {
        let cells: Vec<ElementRef<'_>> = row.select(&TD).collect();
        if cells.len() < 2 {
            continue;
        }
        let rank: String = cells[0].text().map(str::trim).collect();
        if rank.is_empty() || !rank.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        let raw = format!("{} {}", cell_text(cells[0]), cell_text(cells[1]));
        if let Some(name) = parser.team_name(&raw) {
            teams.push(name);
        }
        if teams.len() >= LEAGUE_SIZE {
            break;
        }
    }
    teams
}

fn cell_text(cell: ElementRef<'_>) -> String {
    let joined = cell
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    normalize_ws(&joined)
}

/// Collapse whitespace runs into single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
