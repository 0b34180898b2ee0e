//! JSON object extraction from free-text reasoning output
//!
//! Some reasoning capabilities answer in prose with a JSON object embedded
//! somewhere in the text. Locating that object is a dedicated parsing step
//! with an explicit failure mode: no balanced object means the capability
//! call is treated as a failure, never a guess.

/// Locate the first balanced `{…}` region in `text`
///
/// Tracks string literals and escape sequences, so braces inside quoted
/// strings do not unbalance the scan. Returns `None` when no opening brace
/// exists or the first object never closes.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}
