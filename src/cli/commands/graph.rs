//! Graph command - canonical state graph statistics and outcome tallies

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
    solver::{Explorer, GraphSummary, Outcomes},
};

#[derive(Parser, Debug)]
#[command(about = "Build the canonical state graph and tally terminal outcomes")]
pub struct GraphArgs {
    #[command(flatten)]
    pub explore: ExploreArgs,
}

#[derive(Debug, Serialize)]
struct GraphExport {
    game: String,
    symmetry: String,
    group_order: usize,
    graph: GraphSummary,
    outcomes: Outcomes,
}

pub fn execute(args: GraphArgs) -> Result<()> {
    dispatch(&args.explore, &GraphCommand {
        export: args.explore.export.clone(),
    })
}

struct GraphCommand {
    export: Option<PathBuf>,
}

impl GameCommand for GraphCommand {
    fn run<G: Game<N>, const N: usize>(
        &self,
        game: &G,
        config: &ExploreConfig,
        root: Board<N>,
    ) -> Result<()> {
        let explorer = Explorer::with_limit(game, config.closure_limit)?;

        let spinner = create_spinner("Building canonical graph...")?;
        let graph = explorer.graph(&root)?;
        spinner.set_message("Tallying outcomes...");
        let outcomes = explorer.tally(&graph);
        spinner.finish_and_clear();

        let summary = graph.summary();
        print_section(&format!("Canonical graph: {} ({} symmetry)", config.game, config.symmetry));
        print_kv("Root", &summary.root);
        print_kv("Group order", &explorer.canonicalizer().order().to_string());
        print_kv("Nodes", &format_number(summary.nodes as u64));
        print_kv("Edges", &format_number(summary.edges as u64));
        print_kv("Terminals", &format_number(summary.terminals as u64));

        print_subsection("Nodes by occupied cells");
        for (depth, count) in &summary.depths {
            println!("  {depth:2}: {}", format_number(*count as u64));
        }

        print_subsection("Terminal paths");
        print_kv("X wins", &format_number(outcomes.cross));
        print_kv("Draws", &format_number(outcomes.draw));
        print_kv("O wins", &format_number(outcomes.circle));
        print_kv("Total", &format_number(outcomes.total()));

        if let Some(path) = &self.export {
            let export = GraphExport {
                game: config.game.to_string(),
                symmetry: config.symmetry.to_string(),
                group_order: explorer.canonicalizer().order(),
                graph: summary,
                outcomes,
            };
            export_json(&export, path)?;
        }

        Ok(())
    }
}
