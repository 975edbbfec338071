use crate::models::Reply;

/// Generated text is cut to this many characters, below the transport's
/// 4096-character message ceiling.
pub const GENERATED_TEXT_LIMIT: usize = 3_900;
pub const TRUNCATION_MARKER: &str = "...(truncated)";
pub const AI_ATTRIBUTION: &str = "\n\n✨ *Generated by AI*";
pub const APOLOGY_TEXT: &str = "⚠ I'm having trouble thinking right now. Try again later!";
pub const FALLBACK_ECHO_CHARS: usize = 20;

/// Returns the longest prefix of `text` holding at most `max_chars` chars.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

pub fn generated_reply(generated: &str) -> Reply {
    let kept = truncate_chars(generated, GENERATED_TEXT_LIMIT);
    let mut text =
        String::with_capacity(kept.len() + TRUNCATION_MARKER.len() + AI_ATTRIBUTION.len());
    text.push_str(kept);
    if kept.len() < generated.len() {
        text.push_str(TRUNCATION_MARKER);
    }
    text.push_str(AI_ATTRIBUTION);
    Reply::markdown(text)
}

pub fn apology_reply() -> Reply {
    Reply::markdown(APOLOGY_TEXT)
}

pub fn fallback_text(original: &str) -> String {
    format!(
        "That's interesting! 🤔\n\
         I noticed you said something about '{}'.\n\
         I'm not fully sure, but try typing language names like **Python**, **Java**, or **React** to get specific links!",
        truncate_chars(original, FALLBACK_ECHO_CHARS)
    )
}

pub fn fallback_reply(original: &str) -> Reply {
    Reply::markdown(fallback_text(original)).without_preview()
}
