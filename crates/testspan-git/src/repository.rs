//! Repository name extraction from remote URLs

use std::sync::LazyLock;

use regex::Regex;

/// Scheme prefix, including the `git+` forms used by package managers.
static SCHEME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:git\+)?[A-Za-z][A-Za-z0-9+.\-]*://").unwrap());

/// Extract the repository name from a remote URL.
///
/// Handles `https://host/org/repo.git`, `git@host:org/repo`,
/// `ssh://git@host:org/repo`, `git+git://`, `git+ssh://`, `git+https://`
/// and bare names. Input that cannot be parsed is returned unchanged after a
/// warning.
///
/// ```
/// use testspan_git::extract_repository_name;
///
/// assert_eq!(
///     extract_repository_name("git@github.com:DataDog/dd-trace-py.git"),
///     "dd-trace-py"
/// );
/// ```
pub fn extract_repository_name(repository_url: &str) -> String {
    match parse_repository_name(repository_url) {
        Some(name) => name.to_string(),
        None => {
            tracing::warn!(
                repository_url,
                "Repository name cannot be parsed from repository_url"
            );
            repository_url.to_string()
        }
    }
}

fn parse_repository_name(url: &str) -> Option<&str> {
    if url.is_empty()
        || url.chars().any(|c| c.is_whitespace() || c.is_control())
        || !brackets_balanced(url)
    {
        return None;
    }

    // With a scheme the authority is never the name; scp-style and bare
    // names are split as a whole.
    let path = match SCHEME_PREFIX.find(url) {
        Some(scheme) => url[scheme.end()..].split_once('/')?.1,
        None => url,
    };

    let segment = path.rsplit(['/', ':']).find(|s| !s.is_empty())?;
    let name = segment.strip_suffix(".git").unwrap_or(segment);
    (!name.is_empty()).then_some(name)
}

fn brackets_balanced(url: &str) -> bool {
    let mut depth = 0usize;
    for c in url.chars() {
        match c {
            '[' => depth += 1,
            ']' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_must_pair_up() {
        assert!(brackets_balanced("https://[::1]/org/repo"));
        assert!(!brackets_balanced("https://github.com:organ[ization/repo"));
        assert!(!brackets_balanced("a]b["));
    }

    #[test]
    fn scheme_prefix_includes_git_plus_forms() {
        assert!(SCHEME_PREFIX.is_match("git+ssh://github.com/org/repo"));
        assert!(SCHEME_PREFIX.is_match("ssh://git@host:org/repo"));
        assert!(!SCHEME_PREFIX.is_match("git@github.com:org/repo"));
    }

    #[test]
    fn host_without_path_is_unparseable() {
        assert_eq!(parse_repository_name("https://github.com/"), None);
        assert_eq!(parse_repository_name("https://github.com"), None);
    }
}
