//! Struggles command - every distinct canonical line of play

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    board::Board,
    cli::{
        ExploreArgs, GameCommand, dispatch,
        output::{create_spinner, export_json, format_number, print_kv, print_section, print_subsection},
    },
    config::ExploreConfig,
    game::Game,
    solver::{Explorer, GameOutcome, Outcomes, length_histogram},
};

#[derive(Parser, Debug)]
#[command(about = "Enumerate every canonical move sequence to a finished game")]
pub struct StrugglesArgs {
    #[command(flatten)]
    pub explore: ExploreArgs,

    /// Print the first N struggles
    #[arg(long, default_value_t = 0)]
    pub show: usize,
}

#[derive(Debug, Serialize)]
struct StruggleExport {
    moves: Vec<String>,
    outcome: GameOutcome,
}

#[derive(Debug, Serialize)]
struct StrugglesExport {
    game: String,
    symmetry: String,
    root: String,
    total: usize,
    outcomes: Outcomes,
    struggles: Vec<StruggleExport>,
}

pub fn execute(args: StrugglesArgs) -> Result<()> {
    dispatch(&args.explore, &Struggles {
        show: args.show,
        export: args.explore.export.clone(),
    })
}

struct Struggles {
    show: usize,
    export: Option<PathBuf>,
}

impl GameCommand for Struggles {
    fn run<G: Game<N>, const N: usize>(
        &self,
        game: &G,
        config: &ExploreConfig,
        root: Board<N>,
    ) -> Result<()> {
        let explorer = Explorer::with_limit(game, config.closure_limit)?;

        let spinner = create_spinner("Enumerating struggles...")?;
        let struggles = explorer.enumerate_struggles(&root)?;
        spinner.finish_and_clear();

        let mut outcomes = Outcomes::default();
        for outcome in struggles.values() {
            outcomes.record(*outcome);
        }

        print_section(&format!("Struggles: {} ({} symmetry)", config.game, config.symmetry));
        print_kv("Total", &format_number(struggles.len() as u64));
        print_kv("X wins", &format_number(outcomes.cross));
        print_kv("Draws", &format_number(outcomes.draw));
        print_kv("O wins", &format_number(outcomes.circle));

        print_subsection("Struggles by length");
        for (length, count) in length_histogram(&struggles) {
            println!("  {length:2}: {}", format_number(count as u64));
        }

        if self.show > 0 {
            print_subsection(&format!("First {} struggles", self.show));
            for (struggle, outcome) in struggles.iter().take(self.show) {
                println!("  {struggle}  => {outcome}");
            }
        }

        if let Some(path) = &self.export {
            let export = StrugglesExport {
                game: config.game.to_string(),
                symmetry: config.symmetry.to_string(),
                root: root.label(),
                total: struggles.len(),
                outcomes,
                struggles: struggles
                    .iter()
                    .map(|(struggle, outcome)| StruggleExport {
                        moves: struggle.moves().iter().map(|p| p.to_string()).collect(),
                        outcome: *outcome,
                    })
                    .collect(),
            };
            export_json(&export, path)?;
        }

        Ok(())
    }
}
