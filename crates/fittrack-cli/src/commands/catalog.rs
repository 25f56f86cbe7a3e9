use clap::Subcommand;
use fittrack_core::catalog::{self, Category, ExerciseMode};

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List exercises
    List {
        /// Only exercises in this category (lower, upper, core, cardio)
        #[arg(long)]
        category: Option<Category>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CatalogAction::List { category, json } => {
            let exercises = match category {
                Some(c) => catalog::by_category(c),
                None => catalog::exercises(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&exercises)?);
                return Ok(());
            }
            for e in &exercises {
                let mode = match e.mode {
                    ExerciseMode::Strength => "strength",
                    ExerciseMode::Burn => "burn",
                };
                println!("{:>2}  {:<18} {:<14} {}", e.id, e.name, e.target_area, mode);
            }
        }
    }
    Ok(())
}
