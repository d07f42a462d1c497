//! Editor-surface helpers.
//!
//! The rich-text editor itself is not ours; it hands the core a markup string on
//! save. What we do own is how dictated speech lands in that string.

/// Appends a finalized speech-to-text fragment to the editor content.
///
/// Fragments are separated from existing content by a single space. Blank
/// fragments leave the content untouched.
pub fn append_transcript(content: &str, fragment: &str) -> String {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return content.to_string();
    }
    if content.is_empty() {
        fragment.to_string()
    } else {
        format!("{} {}", content, fragment)
    }
}

/// Appends several fragments in order, as a recognizer delivers them.
pub fn append_transcripts<I, S>(content: &str, fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fragments
        .into_iter()
        .fold(content.to_string(), |acc, f| append_transcript(&acc, f.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_fragment_has_no_leading_space() {
        assert_eq!(append_transcript("", "hi"), "hi");
    }

    #[test]
    fn fragments_are_space_separated() {
        assert_eq!(append_transcript("a", "b"), "a b");
        assert_eq!(append_transcripts("", ["buy", "milk", "today"]), "buy milk today");
    }

    #[test]
    fn blank_fragment_is_ignored() {
        assert_eq!(append_transcript("<p>x</p>", "  "), "<p>x</p>");
    }
}
