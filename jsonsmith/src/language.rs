//! Unified language dispatch.
//!
//! Centralizes renderer creation, per-language metadata, and the mapping
//! from CLI flags to a concrete [`Target`].

use eyre::{Result, bail};
use jsonsmith_codegen::{
    GoConfig, JavaConfig, KotlinConfig, Language, Renderer, Target,
};
use jsonsmith_codegen_go::GoRenderer;
use jsonsmith_codegen_java::JavaRenderer;
use jsonsmith_codegen_kotlin::KotlinRenderer;

/// Metadata for a target language, shown by `jsonsmith languages`.
pub struct LanguageSupport {
    /// Human-readable name.
    pub display_name: &'static str,
    /// Tokens accepted by `--language`.
    pub aliases: &'static [&'static str],
    /// Values accepted by `--framework` for this language.
    pub frameworks: &'static [&'static str],
}

impl LanguageSupport {
    /// Get language support for the given language.
    pub fn get(language: Language) -> Self {
        match language {
            Language::Kotlin => Self {
                display_name: "Kotlin",
                aliases: &["kotlin", "kt"],
                frameworks: &["kotlinx", "gson", "jackson"],
            },
            Language::Java => Self {
                display_name: "Java",
                aliases: &["java"],
                frameworks: &["records", "lombok", "plain"],
            },
            Language::Go => Self {
                display_name: "Go",
                aliases: &["go"],
                frameworks: &[],
            },
        }
    }
}

/// Create a renderer for this target.
pub fn renderer(target: &Target) -> Box<dyn Renderer> {
    match target {
        Target::Kotlin(config) => Box::new(KotlinRenderer::new(config.clone())),
        Target::Java(config) => Box::new(JavaRenderer::new(config.clone())),
        Target::Go(config) => Box::new(GoRenderer::new(config.clone())),
    }
}

/// Build a concrete target from the generate command's flags.
pub fn build_target(
    language: Language,
    class_name: &str,
    framework: Option<&str>,
    lists: bool,
    required: bool,
) -> Result<Target> {
    match language {
        Language::Kotlin => {
            let mut config = KotlinConfig {
                class_name: class_name.to_string(),
                optional_properties: !required,
                ..KotlinConfig::default()
            };
            if let Some(framework) = framework {
                config.framework = framework.parse().map_err(|message: String| eyre::eyre!(message))?;
            }
            Ok(Target::Kotlin(config))
        }
        Language::Java => {
            let mut config = JavaConfig {
                class_name: class_name.to_string(),
                use_arrays: !lists,
                ..JavaConfig::default()
            };
            if let Some(framework) = framework {
                config.style = framework.parse().map_err(|message: String| eyre::eyre!(message))?;
            }
            Ok(Target::Java(config))
        }
        Language::Go => {
            if framework.is_some() {
                bail!("go does not take a --framework option");
            }
            Ok(Target::Go(GoConfig {
                class_name: class_name.to_string(),
                ..GoConfig::default()
            }))
        }
    }
}
