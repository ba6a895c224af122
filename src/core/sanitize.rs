// src/core/sanitize.rs

/// Strip both quote characters; table ids occasionally arrive quoted.
pub fn strip_quotes(s: &str) -> String {
    s.chars().filter(|c| *c != '"' && *c != '\'').collect()
}

/// Make a table id safe as a file stem. Site ids are `[A-Za-z0-9_]` and pass
/// through untouched; anything that could escape the output directory is
/// replaced with `_`.
pub fn sanitize_file_stem(id: &str) -> String {
    let out: String = id
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.' { ch } else { '_' }
        })
        .collect();
    let out = out.trim_matches('.').to_string();
    if out.is_empty() { s!("table") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_removed() {
        assert_eq!(strip_quotes("\"passing\""), "passing");
        assert_eq!(strip_quotes("'x'"), "x");
        assert_eq!(strip_quotes("\"\""), "");
    }

    #[test]
    fn site_ids_untouched() {
        assert_eq!(sanitize_file_stem("passing"), "passing");
        assert_eq!(sanitize_file_stem("team_stats-2"), "team_stats-2");
    }

    #[test]
    fn separators_neutralised() {
        assert_eq!(sanitize_file_stem("../etc/passwd"), "_etc_passwd");
        assert_eq!(sanitize_file_stem(".."), "table");
        assert_eq!(sanitize_file_stem("a\\b"), "a_b");
    }
}
