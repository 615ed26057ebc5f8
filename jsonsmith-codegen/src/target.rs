//! Target languages and their per-language configuration.

use std::{fmt, str::FromStr};

use jsonsmith_core::{capitalize_first, to_pascal_case};
use serde::{Deserialize, Serialize};

/// Default root class name when none is supplied.
pub const DEFAULT_CLASS_NAME: &str = "JsonClass";

/// Supported target languages for code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Kotlin
    Kotlin,
    /// Java
    Java,
    /// Go
    Go,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Kotlin => "kotlin",
            Language::Java => "java",
            Language::Go => "go",
        }
    }

    /// All supported languages.
    pub fn all() -> [Language; 3] {
        [Language::Kotlin, Language::Java, Language::Go]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kotlin" | "kt" => Ok(Language::Kotlin),
            "java" => Ok(Language::Java),
            "go" => Ok(Language::Go),
            _ => Err(format!(
                "unsupported language '{}', supported languages are: kotlin (kt), java, go",
                s
            )),
        }
    }
}

/// A target language together with its configuration.
///
/// The set of targets is closed; everything downstream matches exhaustively
/// on this enum rather than going through an open subtype hierarchy.
#[derive(Debug, Clone)]
pub enum Target {
    Kotlin(KotlinConfig),
    Java(JavaConfig),
    Go(GoConfig),
}

impl Target {
    /// The default target for a language.
    pub fn new(language: Language) -> Self {
        match language {
            Language::Kotlin => Target::Kotlin(KotlinConfig::default()),
            Language::Java => Target::Java(JavaConfig::default()),
            Language::Go => Target::Go(GoConfig::default()),
        }
    }

    pub fn language(&self) -> Language {
        match self {
            Target::Kotlin(_) => Language::Kotlin,
            Target::Java(_) => Language::Java,
            Target::Go(_) => Language::Go,
        }
    }

    /// Root class name for inference.
    pub fn class_name(&self) -> &str {
        match self {
            Target::Kotlin(config) => &config.class_name,
            Target::Java(config) => &config.class_name,
            Target::Go(config) => &config.class_name,
        }
    }

    /// Derive a composite-type name from a JSON key, in this target's
    /// naming convention.
    ///
    /// Kotlin and Java capitalize the key as-is; Go additionally collapses
    /// snake_case into PascalCase so struct names stay idiomatic.
    pub fn type_name(&self, key: &str) -> String {
        match self {
            Target::Kotlin(_) | Target::Java(_) => capitalize_first(key),
            Target::Go(_) => to_pascal_case(key),
        }
    }
}

/// Kotlin serialization frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KotlinFramework {
    #[default]
    Kotlinx,
    Gson,
    Jackson,
}

impl FromStr for KotlinFramework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kotlinx" => Ok(KotlinFramework::Kotlinx),
            "gson" => Ok(KotlinFramework::Gson),
            "jackson" => Ok(KotlinFramework::Jackson),
            _ => Err(format!(
                "unknown Kotlin framework '{}', expected kotlinx, gson, or jackson",
                s
            )),
        }
    }
}

/// Configuration for the Kotlin renderer.
#[derive(Debug, Clone)]
pub struct KotlinConfig {
    pub class_name: String,
    pub file_extension: String,
    pub framework: KotlinFramework,
    /// When true, every property is nullable with a `null` default.
    pub optional_properties: bool,
}

impl Default for KotlinConfig {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_string(),
            file_extension: ".kt".to_string(),
            framework: KotlinFramework::default(),
            optional_properties: true,
        }
    }
}

/// Java class styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JavaStyle {
    Records,
    #[default]
    Lombok,
    PlainTypes,
}

impl FromStr for JavaStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "records" => Ok(JavaStyle::Records),
            "lombok" => Ok(JavaStyle::Lombok),
            "plain" => Ok(JavaStyle::PlainTypes),
            _ => Err(format!(
                "unknown Java style '{}', expected records, lombok, or plain",
                s
            )),
        }
    }
}

/// Configuration for the Java renderer.
#[derive(Debug, Clone)]
pub struct JavaConfig {
    pub class_name: String,
    pub file_extension: String,
    pub style: JavaStyle,
    /// When true, collections render as `T[]` instead of `List<T>`.
    pub use_arrays: bool,
}

impl Default for JavaConfig {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_string(),
            file_extension: ".java".to_string(),
            style: JavaStyle::default(),
            use_arrays: true,
        }
    }
}

/// Configuration for the Go renderer.
#[derive(Debug, Clone)]
pub struct GoConfig {
    pub class_name: String,
    pub file_extension: String,
}

impl Default for GoConfig {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_string(),
            file_extension: ".go".to_string(),
        }
    }
}
