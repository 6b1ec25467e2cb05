use std::fs;
use std::path::PathBuf;

use bolao::{Predictions, Standings, compare, predictions, ranking, score};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

/// "A".."R" or longer.
fn letters(n: usize) -> Vec<String> {
    (0..n).map(|i| ((b'A' + i as u8) as char).to_string()).collect()
}

fn standings(n: usize) -> Standings {
    Standings::accept(letters(n), "test").expect("valid table")
}

fn one(name: &str, guess: Vec<String>) -> Predictions {
    let mut p = Predictions::new();
    p.insert(name.to_string(), guess);
    p
}

#[test]
fn swapping_first_two_costs_two() {
    let s = standings(18);
    let mut guess = letters(18);
    guess.swap(0, 1);
    let p = one("Alice", guess);
    assert_eq!(score(&p, &s)["Alice"], 2);

    let c = &compare(&p, &s)["Alice"];
    assert_eq!(c.total, 2);
    assert_eq!(c.rows[0].predicted, Some(2));
    assert_eq!(c.rows[1].predicted, Some(1));
}

#[test]
fn omitted_team_costs_nothing_in_score_but_full_penalty_in_comparison() {
    let s = standings(18);
    let guess: Vec<String> = letters(17);
    let p = one("Alice", guess);

    assert_eq!(score(&p, &s)["Alice"], 0);

    let c = &compare(&p, &s)["Alice"];
    let r = c.rows.last().expect("row for R");
    assert_eq!(r.team, "R");
    assert_eq!(r.real, 18);
    assert_eq!(r.predicted, None);
    assert_eq!(r.diff, 18);
    assert_eq!(c.total, 18);
}

#[test]
fn comparison_always_has_one_row_per_team() {
    for n in [18, 19, 20] {
        let s = standings(n);
        let mut p = Predictions::new();
        p.insert("empty".to_string(), Vec::new());
        p.insert("short".to_string(), letters(3));
        p.insert("long".to_string(), letters(26));
        for (name, c) in compare(&p, &s) {
            assert_eq!(c.rows.len(), n, "{name}");
            let reals: Vec<usize> = c.rows.iter().map(|r| r.real).collect();
            assert_eq!(reals, (1..=n).collect::<Vec<_>>(), "{name}");
        }
    }
}

#[test]
fn score_is_zero_only_for_exact_order() {
    let s = standings(20);
    let mut p = Predictions::new();
    p.insert("exact".to_string(), letters(20));
    p.insert("prefix".to_string(), letters(12));
    let mut shifted = letters(20);
    shifted.rotate_left(1);
    p.insert("shifted".to_string(), shifted);
    p.insert("extra".to_string(), letters(21));

    let scores = score(&p, &s);
    assert_eq!(scores["exact"], 0);
    assert_eq!(scores["prefix"], 0);
    assert!(scores["shifted"] > 0);
    // 21st guess "U" is unknown: real = 21, guessed = 21.
    assert_eq!(scores["extra"], 0);
}

#[test]
fn unknown_guess_is_one_past_last() {
    let s = standings(20);
    let p = one("Bob", vec!["Nowhere FC".to_string()]);
    assert_eq!(score(&p, &s)["Bob"], 20);
}

#[test]
fn fixture_predictions_rank_as_expected() {
    let html = read_fixture("cnn_standings.html");
    let teams = bolao::extract_teams(&html, &bolao::RankAndFormParser);
    let s = Standings::accept(teams, "fixture").expect("fixture has 20 teams");
    let p = predictions::parse(&read_fixture("participantes.yml")).expect("valid yaml");

    let scores = score(&p, &s);
    assert_eq!(scores["Alice"], 0);
    assert_eq!(scores["Bruno"], 2);
    // reversed 20-team table: sum of |i - (21 - i)|
    assert_eq!(scores["Carla"], 200);
    // ten correct guesses, then an unknown club guessed 11th, treated as 21st
    assert_eq!(scores["Diego"], 10);

    let order: Vec<String> = ranking(&scores).into_iter().map(|(n, _)| n).collect();
    assert_eq!(order, vec!["Alice", "Bruno", "Diego", "Carla"]);

    let comparisons = compare(&p, &s);
    assert_eq!(comparisons["Diego"].total, 10 * 20);
    assert!(comparisons.values().all(|c| c.rows.len() == 20));
}
