//! Comment text utilities: delimiter stripping, decorative fence handling,
//! block dedenting, and the brief/details split.

/// Comment delimiters stripped from the start of a line, tried in order.
const LINE_PREFIXES: [&str; 3] = ["/*", "--!", "--"];

/// Comment delimiters stripped from the end of a line.
const LINE_SUFFIXES: [&str; 1] = ["*/"];

/// Documentation markers removed wherever they appear.
const DOC_MARKERS: [&str; 2] = ["@brief", "@details"];

/// Characters that may form a decorative border.
const FENCE_CHARS: &str = "*=-#%^";

/// A decorative fence is a repeated border character followed by some text,
/// e.g. `### Example 1` or `------ Example 2 ---`. A trivial all-fence line
/// with no trailing label is not one.
pub fn is_decorative_fence(s: &str) -> bool {
    let Some(c) = s.chars().next() else {
        return false;
    };
    if !FENCE_CHARS.contains(c) {
        return false;
    }
    let leading = s.chars().take_while(|&x| x == c).count();
    leading >= 3 && s.chars().any(|x| x != c)
}

/// Removes leading and trailing comment marks, decorative fences, and
/// documentation markers, one physical line at a time.
///
/// Indentation *after* the comment mark is preserved, so a stripped block
/// can still be dedented as a whole with relative indentation intact.
pub fn strip_comment_marks<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut stripped = Vec::new();
    for line in lines {
        let mut s = line.trim();
        if is_decorative_fence(s) {
            continue;
        }
        for prefix in LINE_PREFIXES {
            if let Some(rest) = s.strip_prefix(prefix) {
                s = rest;
            }
        }
        for suffix in LINE_SUFFIXES {
            if let Some(rest) = s.strip_suffix(suffix) {
                s = rest;
            }
        }
        let mut owned = s.to_string();
        for marker in DOC_MARKERS {
            owned = owned.replace(marker, "");
        }
        stripped.push(owned);
    }
    stripped
}

/// Removes the largest common leading whitespace from all lines, ignoring
/// whitespace-only lines when computing the margin.
pub fn dedent(lines: &[String]) -> Vec<String> {
    let mut margin: Option<&str> = None;
    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        let indent = &line[..line.len() - line.trim_start().len()];
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }
    let margin = margin.unwrap_or("");
    lines
        .iter()
        .map(|line| line.strip_prefix(margin).unwrap_or(line).to_string())
        .collect()
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum();
    &a[..len]
}

/// Splits a comment block's text into a brief (the first paragraph, each
/// line individually trimmed) and details (the dedented remainder,
/// preserving relative indentation). The blank line separating the two is
/// not kept.
pub fn split_brief_details(text: &str) -> (Vec<String>, Vec<String>) {
    let lines = strip_comment_marks(text.lines());
    let mut brief = Vec::new();
    let mut details = Vec::new();
    let mut in_brief = true;
    for line in lines {
        if in_brief && !brief.is_empty() && line.trim().is_empty() {
            in_brief = false;
            continue;
        }
        if in_brief {
            brief.push(line.trim().to_string());
        } else {
            details.push(line);
        }
    }
    (brief, dedent(&details))
}
