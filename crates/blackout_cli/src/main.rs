//! Blackout engine debug CLI.
//!
//! Inspect derived profiles and replay recorded sessions through the mission
//! watcher without a running host app.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::PathBuf;

use blackout_core::catalog::starter_colors;
use blackout_core::geo::GeoPoint;
use blackout_core::mission::builtin_missions;
use blackout_core::progression::{level_for, next_unlock, rank_for, unlocked_styles};
use blackout_core::{Crew, MissionWatcher, SessionSnapshot};

#[derive(Parser)]
#[command(name = "blackout")]
#[command(about = "Inspect Blackout progression and replay mission sessions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the derived profile for a REP total
    Profile {
        /// Cumulative REP
        #[arg(long)]
        rep: i64,

        /// Crew id (volt, cinder, echo, drift); omit for solo
        #[arg(long)]
        crew: Option<String>,
    },

    /// Replay a recorded session of snapshots through the mission watcher
    Replay {
        /// JSON file: array of {rep, markers_placed, crew?, position?}
        #[arg(long)]
        session: PathBuf,
    },
}

/// One recorded snapshot, as exported by the host app's debug panel.
#[derive(Debug, Deserialize)]
struct RecordedSnapshot {
    rep: i64,
    markers_placed: u32,
    #[serde(default)]
    crew: Option<String>,
    #[serde(default)]
    position: Option<[f64; 2]>,
}

impl RecordedSnapshot {
    fn into_snapshot(self) -> SessionSnapshot {
        SessionSnapshot {
            rep: self.rep,
            markers_placed: self.markers_placed,
            crew: self.crew.as_deref().and_then(Crew::from_id),
            position: self.position.map(GeoPoint::from),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Profile { rep, crew } => print_profile(rep, crew.as_deref()),
        Commands::Replay { session } => replay_session(&session)?,
    }

    Ok(())
}

fn print_profile(rep: i64, crew_id: Option<&str>) {
    let crew = crew_id.and_then(Crew::from_id);

    println!("REP:   {}", rep.max(0));
    println!("Rank:  {}", rank_for(rep).display_name());
    println!("Level: {}", level_for(rep));

    match crew {
        Some(crew) => println!("Crew:  {}", crew.display_name()),
        None => println!("Crew:  solo"),
    }

    println!("\nStarter colors:");
    for color in starter_colors(crew) {
        println!("  {} ({})", color.name, color.hex);
    }

    println!("\nUnlocked styles:");
    for style in unlocked_styles(rep) {
        println!("  [{:>3}] {}", style.rep_required, style.name);
    }

    let next = next_unlock(rep);
    match next.style {
        Some(style) => println!(
            "\nNext unlock: {} at {} REP ({} needed, {:.0}% there)",
            style.name, style.rep_required, next.rep_needed, next.progress_percent
        ),
        None => println!("\nAll styles unlocked."),
    }
}

fn replay_session(path: &PathBuf) -> Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading session file {}", path.display()))?;
    let recorded: Vec<RecordedSnapshot> =
        serde_json::from_str(&raw).context("parsing session file")?;

    let mut watcher = MissionWatcher::new();
    for mission in builtin_missions() {
        watcher.register(mission);
    }
    watcher.set_current_time(chrono::Utc::now().timestamp() as u64);

    println!("Replaying {} snapshots...", recorded.len());

    let mut total_fired = 0usize;
    for (step, snapshot) in recorded.into_iter().enumerate() {
        let fired = watcher.observe(&snapshot.into_snapshot());
        for event in fired {
            total_fired += 1;
            println!("  step {:>3}: mission fired: {}", step, event.mission_id);
            for delta in &event.trust_deltas {
                println!("            trust {} {:+}", delta.crew.id(), delta.delta);
            }
        }
    }

    println!(
        "Done. {} missions fired, {} completed total.",
        total_fired,
        watcher.completed_ids().len()
    );
    Ok(())
}
