//! Orchestration of one generation run.

use jsonsmith_codegen::{Result, Target, infer};
use jsonsmith_ir::Artifact;

use crate::language;

/// Run the full pipeline for one invocation: infer a type registry from
/// the JSON text, then render it for the target language.
///
/// Parse failures and unrenderable document shapes surface as distinct
/// diagnostics; both abort the invocation.
pub fn generate(json: &str, target: &Target) -> Result<Artifact> {
    let registry = infer(json, target)?;
    Ok(language::renderer(target).render(&registry))
}
