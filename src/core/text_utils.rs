//! Text helpers for descriptions and qualified names.

/// Characters that separate segments of a longname.
///
/// `#` marks instance members, `.` static members and `~` inner members.
pub const SEPARATORS: [char; 3] = ['#', '.', '~'];

/// Check if a character separates segments of a longname.
#[inline]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Check if a character may appear in a trailing name segment.
///
/// ASCII word characters only (`[A-Za-z0-9_]`).
#[inline]
pub fn is_word_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Return the value if it holds something other than whitespace.
///
/// Missing, empty and whitespace-only strings all collapse to `None`.
/// The returned slice is the original value, untrimmed.
///
/// # Example
/// ```
/// use docsym::core::text_utils::non_blank;
///
/// assert_eq!(non_blank(Some(" text ")), Some(" text "));
/// assert_eq!(non_blank(Some("   ")), None);
/// assert_eq!(non_blank(None), None);
/// ```
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Length of a name once every separator character is removed.
pub fn stripped_len(name: &str) -> usize {
    name.chars().filter(|c| !is_separator(*c)).count()
}

/// Return the segment after the last separator.
///
/// Falls back to the whole name when it has no separator, or when the
/// trailing segment is empty or holds anything but ASCII word characters.
///
/// # Example
/// ```
/// use docsym::core::text_utils::last_segment;
///
/// assert_eq!(last_segment("Foo#bar"), "bar");
/// assert_eq!(last_segment("ns.Foo~inner"), "inner");
/// assert_eq!(last_segment("plain"), "plain");
/// assert_eq!(last_segment("Foo#"), "Foo#");
/// assert_eq!(last_segment("a.b#$el"), "a.b#$el");
/// ```
pub fn last_segment(name: &str) -> &str {
    match name.rfind(is_separator) {
        Some(idx) => {
            // separators are all single-byte
            let tail = &name[idx + 1..];
            if !tail.is_empty() && tail.chars().all(is_word_character) {
                tail
            } else {
                name
            }
        }
        None => name,
    }
}
