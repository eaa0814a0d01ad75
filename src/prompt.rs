//! Prompt rendering.
//!
//! The template is fixed: the request text, then one fenced section per
//! collected file. File contents are included verbatim; nothing here counts
//! tokens or truncates, so a large file set can exceed the target model's
//! context window and fail at the provider.

use crate::files::FileEntry;

/// Render the request and collected files into a single prompt string.
///
/// With no files the prompt is exactly the request text.
pub fn render(request: &str, files: &[FileEntry]) -> String {
    let mut prompt = String::from(request);

    for entry in files {
        prompt.push_str("\n\n");
        prompt.push_str(&entry.path);
        prompt.push_str(":\n```\n");
        prompt.push_str(&entry.content);
        if !entry.content.ends_with('\n') {
            prompt.push('\n');
        }
        prompt.push_str("```");
    }

    prompt
}
