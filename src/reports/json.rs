use crate::Result;
use crate::profile::{NOT_FOUND_ASSET, Profile, ProfileError};
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(profile: &Profile, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(profile)?)?;
    Ok(())
}

/// Render a failed profile query as a JSON error object
pub fn generate_error<W: Write>(error: &ProfileError, writer: &mut W) -> Result<()> {
    let output = match error {
        ProfileError::NotFound { .. } => json!({
            "error": "GitHub User Not Found",
            "message": error.user_message(),
            "githubMeme": NOT_FOUND_ASSET,
        }),
        ProfileError::Upstream(e) => json!({
            "error": "GitHub API Error",
            "details": format!("{e:#}"),
        }),
    };

    writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
