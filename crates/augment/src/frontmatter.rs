//! Leading YAML frontmatter detection

/// Number of leading lines taken by a frontmatter block, or 0 when there is none.
///
/// A block opens with `---` on the first line and closes with the next `---`
/// or `...` line. An unclosed opener is not frontmatter, and neither is a
/// block whose body does not read as YAML: a document may open with a
/// thematic break.
pub fn frontmatter_len(lines: &[&str]) -> usize {
    match lines.first() {
        Some(first) if first.trim_end() == "---" => {}
        _ => return 0,
    }

    let Some(close) = lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| matches!(line.trim_end(), "---" | "..."))
        .map(|(idx, _)| idx)
    else {
        return 0;
    };

    if lines[1..close].iter().all(|line| is_yaml_line(line)) {
        close + 1
    } else {
        0
    }
}

/// `key:`, an indented continuation, a list entry or a blank line
fn is_yaml_line(line: &str) -> bool {
    if line.trim().is_empty() || line.starts_with([' ', '\t']) || line.starts_with("- ") {
        return true;
    }
    line.split_once(':').is_some_and(|(key, _)| {
        !key.is_empty() && key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(s: &str) -> Vec<&str> {
        s.lines().collect()
    }

    #[test]
    fn test_frontmatter_present() {
        let doc = lines("---\ntitle: Test\ntags:\n---\n\n# Content");
        assert_eq!(frontmatter_len(&doc), 4);
    }

    #[test]
    fn test_frontmatter_dots_terminator() {
        let doc = lines("---\ntitle: Test\n...\nBody");
        assert_eq!(frontmatter_len(&doc), 3);
    }

    #[test]
    fn test_no_frontmatter() {
        assert_eq!(frontmatter_len(&lines("# Just content\n---\n")), 0);
        assert_eq!(frontmatter_len(&[]), 0);
    }

    #[test]
    fn test_frontmatter_incomplete() {
        assert_eq!(frontmatter_len(&lines("---\ntitle: Test\n\nNo closing marker")), 0);
    }

    #[test]
    fn test_frontmatter_with_lists_and_continuations() {
        let doc = lines("---\ntags:\n  - rust\n- notes\ntitle: >\n  folded text\n---\nBody");
        assert_eq!(frontmatter_len(&doc), 7);
    }

    #[test]
    fn test_thematic_break_is_not_frontmatter() {
        let doc = lines("---\n**Installation Guide**\n\nPrerequisites:\n---\nbody");
        assert_eq!(frontmatter_len(&doc), 0);
        assert_eq!(frontmatter_len(&lines("---\n# Heading\n---\n")), 0);
        assert_eq!(frontmatter_len(&lines("---\nJust a paragraph: with text\n---\n")), 0);
    }

    #[test]
    fn test_frontmatter_empty() {
        assert_eq!(frontmatter_len(&lines("---\n---\nContent")), 2);
    }
}
