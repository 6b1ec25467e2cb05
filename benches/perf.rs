use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use bolao::extract::{self, RankAndFormParser};
use bolao::{Predictions, Standings, compare, score};

const CNN_HTML: &str = include_str!("../tests/fixtures/cnn_standings.html");
const GE_HTML: &str = include_str!("../tests/fixtures/ge_standings.html");

fn sample_predictions(standings: &Standings, participants: usize) -> Predictions {
    (0..participants)
        .map(|idx| {
            let mut guess = standings.teams().to_vec();
            guess.rotate_left(idx % guess.len());
            (format!("Participant {idx}"), guess)
        })
        .collect()
}

fn bench_extract_structured(c: &mut Criterion) {
    c.bench_function("extract_structured_table", |b| {
        b.iter(|| {
            let teams = extract::extract_teams(black_box(CNN_HTML), &RankAndFormParser);
            black_box(teams.len());
        })
    });
}

fn bench_extract_tag_tree(c: &mut Criterion) {
    c.bench_function("extract_tag_tree", |b| {
        b.iter(|| {
            let teams = extract::extract_teams(black_box(GE_HTML), &RankAndFormParser);
            black_box(teams.len());
        })
    });
}

fn bench_score_and_compare(c: &mut Criterion) {
    let teams = extract::extract_teams(CNN_HTML, &RankAndFormParser);
    let standings = Standings::accept(teams, "bench").expect("fixture has a full table");
    let predictions = sample_predictions(&standings, 200);

    c.bench_function("score_200_participants", |b| {
        b.iter(|| black_box(score(black_box(&predictions), &standings)))
    });
    c.bench_function("compare_200_participants", |b| {
        b.iter(|| black_box(compare(black_box(&predictions), &standings)))
    });
}

criterion_group!(
    benches,
    bench_extract_structured,
    bench_extract_tag_tree,
    bench_score_and_compare
);
criterion_main!(benches);
