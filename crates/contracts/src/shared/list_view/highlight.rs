use std::ops::Range;

/// Byte ranges of `text` matching `query` case-insensitively, left to right,
/// non-overlapping. Used by table cells to highlight search hits.
pub fn match_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let haystack = text.to_lowercase();
    // Lowercasing can change byte lengths outside ASCII; offsets would no longer line up.
    if haystack.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        if text.is_char_boundary(start) && text.is_char_boundary(end) {
            ranges.push(start..end);
        }
        from = end;
    }
    ranges
}
