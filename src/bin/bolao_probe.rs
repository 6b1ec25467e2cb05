use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use bolao::config::AppConfig;
use bolao::extract::{self, RankAndFormParser};
use bolao::{InsecureFetcher, default_sources, predictions, ranking, resolve_standings, score};

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let config = AppConfig::from_env()?;
    let predictions_path = path_arg(&args, "--predictions").unwrap_or(config.predictions_path.clone());

    let (source, teams) = match path_arg(&args, "--html") {
        Some(path) => {
            let html = fs::read_to_string(&path)
                .with_context(|| format!("could not read {}", path.display()))?;
            let extraction = extract::extract(&html, &RankAndFormParser);
            let Some(strategy) = extraction.strategy else {
                bail!("no teams found in {}", path.display());
            };
            println!("Strategy: {}", strategy.label());
            (path.display().to_string(), extraction.teams)
        }
        None => {
            let fetcher = InsecureFetcher::new(config.fetch_timeout)?;
            let standings = resolve_standings(&fetcher, &default_sources())?;
            (standings.source().to_string(), standings.into_teams())
        }
    };

    println!("Source: {source}");
    println!("Teams: {}", teams.len());
    for (idx, team) in teams.iter().enumerate() {
        println!("{:>3}. {team}", idx + 1);
    }

    let Some(standings) = bolao::Standings::accept(teams, source) else {
        println!("Too few teams to score predictions");
        return Ok(());
    };

    match predictions::load(&predictions_path) {
        Ok(preds) => {
            println!();
            println!("Ranking ({})", predictions_path.display());
            for (idx, (name, total)) in ranking(&score(&preds, &standings)).iter().enumerate() {
                println!("{:>3}. {name} - {total}", idx + 1);
            }
        }
        Err(err) => println!("Skipping ranking: {err}"),
    }

    Ok(())
}

fn path_arg(args: &[String], flag: &str) -> Option<PathBuf> {
    let prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix(&prefix) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == flag {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(PathBuf::from(next));
            }
        }
    }
    None
}
