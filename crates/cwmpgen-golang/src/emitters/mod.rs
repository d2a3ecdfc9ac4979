pub mod common;
pub mod message;

/// First line of a description, trimmed, for single-line Go comments.
fn summary(description: &Option<String>) -> Option<String> {
    description.as_ref().and_then(|d| {
        let line = d.lines().next()?.trim();
        if line.is_empty() {
            None
        } else {
            Some(line.to_string())
        }
    })
}
