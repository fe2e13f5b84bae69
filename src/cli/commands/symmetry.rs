//! Symmetry command - group, orbit and move classes of a position

use std::collections::BTreeSet;

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    board::Board,
    canonical::Canonicalizer,
    cli::{
        ExploreArgs, GameCommand, dispatch,
        output::{print_kv, print_section, print_subsection},
    },
    config::ExploreConfig,
    game::Game,
    group::check_axioms,
    symmetry::Symmetry,
};

#[derive(Parser, Debug)]
#[command(about = "Show the symmetry group, the orbit of a position and its move classes")]
pub struct SymmetryArgs {
    #[command(flatten)]
    pub explore: ExploreArgs,

    /// Print every image of the position
    #[arg(long)]
    pub visualize: bool,

    /// Check the group laws and that both realizations of every transform agree
    #[arg(long)]
    pub verify: bool,
}

pub fn execute(args: SymmetryArgs) -> Result<()> {
    dispatch(&args.explore, &SymmetryCommand {
        visualize: args.visualize,
        verify: args.verify,
    })
}

struct SymmetryCommand {
    visualize: bool,
    verify: bool,
}

impl GameCommand for SymmetryCommand {
    fn run<G: Game<N>, const N: usize>(
        &self,
        game: &G,
        config: &ExploreConfig,
        root: Board<N>,
    ) -> Result<()> {
        let basis = game.basis();
        let canon = Canonicalizer::with_limit(&basis, config.closure_limit)?;

        print_section(&format!("Symmetry: {} ({} symmetry)", config.game, config.symmetry));
        let generators: Vec<String> = basis.iter().map(|t| t.to_string()).collect();
        print_kv("Generators", &format!("[{}]", generators.join(", ")));
        print_kv("Group order", &canon.order().to_string());

        println!("\nPosition:");
        println!("{root}");

        let (canonical, transform) = canon.canonical(&root);
        let class = canon.class(&root);
        let stabilizer = canon
            .symmetries()
            .iter()
            .filter(|(_, s)| s.map_board(&root) == root)
            .count();

        print_kv("Canonical", &canonical.label());
        print_kv("Back-transform", &transform.to_string());
        print_kv("Orbit size", &class.len().to_string());
        print_kv("Stabilizer size", &stabilizer.to_string());

        if self.visualize {
            print_subsection("Orbit");
            for (image, back) in &class {
                println!("maps back by {back}");
                println!("{image}");
            }
        }

        let moves = game.events(&root);
        if !moves.is_empty() {
            print_subsection("Move classes");
            let mut seen = BTreeSet::new();
            for mv in moves {
                let class = canon.class_of_move(game, &root, mv)?;
                let Some(representative) = class.keys().next().copied() else {
                    continue;
                };
                if !seen.insert(representative) {
                    continue;
                }
                let members: Vec<String> = class.keys().map(|p| format!("({p})")).collect();
                println!("  ({representative}) <- {}", members.join(" "));
            }
        }

        if self.verify {
            print_subsection("Verification");
            check_axioms(&basis)?;
            println!("  group laws hold");
            for t in canon.transforms() {
                if Symmetry::<N>::reify(t) != Symmetry::from_generators(t) {
                    bail!("direct and generated realizations of {t} differ");
                }
            }
            println!("  direct and generated realizations agree");
        }

        Ok(())
    }
}
