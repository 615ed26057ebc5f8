use clap::Args;
use eyre::Result;
use jsonsmith_codegen::Language;

use crate::language::LanguageSupport;

#[derive(Args)]
pub struct LanguagesCommand {}

impl LanguagesCommand {
    pub fn run(&self) -> Result<()> {
        println!("Supported languages:");
        for language in Language::all() {
            let support = LanguageSupport::get(language);
            if support.frameworks.is_empty() {
                println!("  {} ({})", support.display_name, support.aliases.join(", "));
            } else {
                println!(
                    "  {} ({}), frameworks: {}",
                    support.display_name,
                    support.aliases.join(", "),
                    support.frameworks.join(", ")
                );
            }
        }
        Ok(())
    }
}
