use std::fs;
use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use jsonsmith_codegen::Language;
use jsonsmith_core::File;

use super::UnwrapOrExit;
use crate::{language, ops};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the JSON input file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Target language: kotlin (kt), java, go
    #[arg(short, long)]
    pub language: Language,

    /// Output directory for the generated file
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Name of the root class/struct
    #[arg(long, default_value = "JsonClass")]
    pub class_name: String,

    /// Serialization framework or class style
    /// (kotlin: kotlinx, gson, jackson; java: records, lombok, plain)
    #[arg(long)]
    pub framework: Option<String>,

    /// Java: emit List<T> instead of T[]
    #[arg(long)]
    pub lists: bool,

    /// Kotlin: emit non-nullable properties without null defaults
    #[arg(long)]
    pub required: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let json = fs::read_to_string(&self.file)
            .wrap_err_with(|| format!("failed to read '{}'", self.file.display()))?;

        let target = language::build_target(
            self.language,
            &self.class_name,
            self.framework.as_deref(),
            self.lists,
            self.required,
        )?;

        let artifact = ops::generate(&json, &target).unwrap_or_exit();

        if self.dry_run {
            println!("── {} ──", artifact.file_name);
            print!("{}", artifact.text);
            return Ok(());
        }

        let path = self.output.join(&artifact.file_name);
        File::new(&path, artifact.text.as_str())
            .write()
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;

        println!("Generated: {}", path.display());
        println!();
        println!("Types ({}):", artifact.types.len());
        for rendered in artifact.types.iter().rev() {
            println!("  {}", rendered.name);
        }

        Ok(())
    }
}
