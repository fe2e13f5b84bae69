//! Solve command - perfect-play value of a position and its best moves

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    board::Board,
    cli::{
        ExploreArgs, GameCommand, dispatch,
        output::{create_spinner, export_json, print_kv, print_section, print_subsection},
    },
    config::ExploreConfig,
    game::Game,
    solver::Explorer,
};

#[derive(Parser, Debug)]
#[command(about = "Solve a position by memoized negamax")]
pub struct SolveArgs {
    #[command(flatten)]
    pub explore: ExploreArgs,
}

#[derive(Debug, Serialize)]
struct MoveExport {
    position: String,
    value: i8,
    best: bool,
}

#[derive(Debug, Serialize)]
struct SolveExport {
    game: String,
    symmetry: String,
    root: String,
    value: i8,
    solved_classes: usize,
    moves: Vec<MoveExport>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    dispatch(&args.explore, &Solve {
        export: args.explore.export.clone(),
    })
}

struct Solve {
    export: Option<std::path::PathBuf>,
}

impl GameCommand for Solve {
    fn run<G: Game<N>, const N: usize>(
        &self,
        game: &G,
        config: &ExploreConfig,
        root: Board<N>,
    ) -> Result<()> {
        let explorer = Explorer::with_limit(game, config.closure_limit)?;

        print_section(&format!("Solve: {} ({} symmetry)", config.game, config.symmetry));
        println!("{root}");

        let spinner = create_spinner("Solving...")?;
        let value = explorer.solve(&root)?;
        let moves = explorer.move_values(&root)?;
        spinner.finish_and_clear();

        print_kv("Value for mover", &format!("{value:+}"));
        print_kv("Group order", &explorer.canonicalizer().order().to_string());
        print_kv("Solved classes", &explorer.solved().to_string());

        if moves.is_empty() {
            println!("\n  (position is terminal)");
        } else {
            print_subsection("Canonical moves");
            for m in &moves {
                let marker = if m.value == value { "  <- best" } else { "" };
                println!("  ({}) {:+}{marker}", m.position, m.value);
            }
        }

        if let Some(path) = &self.export {
            let export = SolveExport {
                game: config.game.to_string(),
                symmetry: config.symmetry.to_string(),
                root: root.label(),
                value,
                solved_classes: explorer.solved(),
                moves: moves
                    .iter()
                    .map(|m| MoveExport {
                        position: m.position.to_string(),
                        value: m.value,
                        best: m.value == value,
                    })
                    .collect(),
            };
            export_json(&export, path)?;
        }

        Ok(())
    }
}
