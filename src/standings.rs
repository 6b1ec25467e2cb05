use std::ops::Deref;

use crate::error::{ResolutionError, SourceFailure};
use crate::extract::{self, CellParser, LEAGUE_SIZE, MIN_TEAMS, PlainNameParser, RankAndFormParser};
use crate::fetch::PageFetcher;

/// How a source lays out the team cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserHint {
    #[default]
    RankAndForm,
    PlainName,
}

impl ParserHint {
    pub fn parser(self) -> &'static dyn CellParser {
        match self {
            ParserHint::RankAndForm => &RankAndFormParser,
            ParserHint::PlainName => &PlainNameParser,
        }
    }
}

/// One candidate standings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub name: String,
    pub url: String,
    pub parser: ParserHint,
}

impl SourceSpec {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            parser: ParserHint::default(),
        }
    }

    pub fn with_parser(mut self, parser: ParserHint) -> Self {
        self.parser = parser;
        self
    }
}

/// Priority order: both CNN Brasil variants, then GE Globo.
pub fn default_sources() -> Vec<SourceSpec> {
    vec![
        SourceSpec::new(
            "cnn-brasil",
            "https://www.cnnbrasil.com.br/esportes/futebol/tabela-do-brasileirao/",
        ),
        SourceSpec::new(
            "cnn-brasil-serie-a",
            "https://www.cnnbrasil.com.br/esportes/futebol/tabela-do-brasileirao-serie-a/",
        ),
        SourceSpec::new("ge-globo", "https://ge.globo.com/futebol/brasileirao/"),
    ]
}

/// Current league table, best-ranked first. Always holds 18 to 20 names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    teams: Vec<String>,
    source: String,
}

impl Standings {
    /// Accepts `teams` if it is long enough, truncating to the league size.
    pub fn accept(mut teams: Vec<String>, source: impl Into<String>) -> Option<Self> {
        if teams.len() < MIN_TEAMS {
            return None;
        }
        teams.truncate(LEAGUE_SIZE);
        Some(Self {
            teams,
            source: source.into(),
        })
    }

    /// Name of the source the table came from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn into_teams(self) -> Vec<String> {
        self.teams
    }
}

impl Deref for Standings {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.teams
    }
}

/// Walk `sources` in order and return the first acceptable table.
///
/// A source is skipped when its page cannot be fetched or yields fewer than
/// [`MIN_TEAMS`] names. The error carries the last such failure.
pub fn resolve_standings<F>(
    fetcher: &F,
    sources: &[SourceSpec],
) -> Result<Standings, ResolutionError>
where
    F: PageFetcher + ?Sized,
{
    let mut last: Option<SourceFailure> = None;
    let mut attempts = 0usize;

    for source in sources {
        attempts += 1;
        log::debug!("trying standings source {} ({})", source.name, source.url);

        let html = match fetcher.fetch(&source.url) {
            Ok(html) => html,
            Err(err) => {
                log::warn!("source {} unavailable: {err}", source.name);
                last = Some(err.into());
                continue;
            }
        };

        let extraction = extract::extract(&html, source.parser.parser());
        let found = extraction.teams.len();
        if let Some(standings) = Standings::accept(extraction.teams, source.name.clone()) {
            log::info!(
                "standings resolved from {} via {} ({} teams)",
                source.name,
                extraction.strategy.map(|s| s.label()).unwrap_or("unknown"),
                standings.len()
            );
            return Ok(standings);
        }

        log::warn!("source {} yielded only {found} teams", source.name);
        last = Some(SourceFailure::InsufficientTeams {
            source_name: source.name.clone(),
            found,
            min: MIN_TEAMS,
        });
    }

    Err(ResolutionError { attempts, last })
}
