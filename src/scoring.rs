//! Prediction scoring and per-team comparison.
//!
//! The two views penalise a missing team differently: the score treats a
//! guessed team that is not in the table as sitting one place past last,
//! while the comparison charges an unguessed team exactly `len(standings)`.
//! Both are kept as-is; unifying them would change the published totals.

use std::collections::{BTreeMap, HashMap};

use crate::predictions::Predictions;
use crate::standings::Standings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub team: String,
    pub real: usize,
    pub predicted: Option<usize>,
    pub diff: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
    pub total: usize,
}

/// A name listed twice takes its later rank.
fn real_positions(standings: &[String]) -> HashMap<&str, usize> {
    let mut positions = HashMap::with_capacity(standings.len());
    for (idx, team) in standings.iter().enumerate() {
        positions.insert(team.as_str(), idx + 1);
    }
    positions
}

/// Total absolute positional error per participant, summed over the teams
/// each participant guessed.
pub fn score(predictions: &Predictions, standings: &Standings) -> BTreeMap<String, usize> {
    let positions = real_positions(standings);
    let past_last = standings.len() + 1;

    predictions
        .iter()
        .map(|(name, guess)| {
            let total: usize = guess
                .iter()
                .enumerate()
                .map(|(idx, team)| {
                    let real = positions.get(team.as_str()).copied().unwrap_or(past_last);
                    (idx + 1).abs_diff(real)
                })
                .sum();
            (name.clone(), total)
        })
        .collect()
}

/// Participants ordered best first. Ties fall back to name order.
pub fn ranking(scores: &BTreeMap<String, usize>) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = scores
        .iter()
        .map(|(name, score)| (name.clone(), *score))
        .collect();
    ranked.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// One row per team in the table for every participant.
pub fn compare(predictions: &Predictions, standings: &Standings) -> BTreeMap<String, Comparison> {
    let missing_penalty = standings.len();

    predictions
        .iter()
        .map(|(name, guess)| {
            let rows: Vec<ComparisonRow> = standings
                .iter()
                .enumerate()
                .map(|(idx, team)| {
                    let real = idx + 1;
                    let predicted = guess.iter().position(|g| g == team).map(|p| p + 1);
                    let diff = match predicted {
                        Some(pred) => pred.abs_diff(real),
                        None => missing_penalty,
                    };
                    ComparisonRow {
                        team: team.clone(),
                        real,
                        predicted,
                        diff,
                    }
                })
                .collect();
            let total = rows.iter().map(|r| r.diff).sum();
            (name.clone(), Comparison { rows, total })
        })
        .collect()
}
