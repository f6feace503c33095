//! Path segmentation for option and member names
//!
//! Option paths are dotted (`plotOptions.series.marker`), but documentation
//! names may carry a trailing type suffix (`series.data<number>`,
//! `Dictionary[key:Foo]`) whose contents must not be split, and namespaced
//! words (`module:highcharts`) whose colon must survive.
//!
//! # Example
//!
//! ```rust
//! use optdoc_core::namespace::segments;
//!
//! assert_eq!(segments("a.b.c", false), vec!["a", "b", "c"]);
//! assert_eq!(segments("a.b.c", true), vec!["a", "a.b", "a.b.c"]);
//! assert_eq!(segments("series.data<number>", false), vec!["series", "data<number>"]);
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Trailing `<...>` or `[...]` suffix, greedy from the leftmost opener
static TYPE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:<.+>|\[.+\])$").expect("valid type suffix pattern"));

/// A word immediately followed by a colon
static NAMESPACED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+:").expect("valid namespaced word pattern"));

/// Split a path into its ordered segments.
///
/// With `with_full_names` every element is the cumulative dotted prefix up
/// to and including that segment instead of the bare segment.
pub fn segments(path: &str, with_full_names: bool) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }

    let (head, suffix) = match TYPE_SUFFIX.find(path) {
        Some(found) => (&path[..found.start()], Some(rewrite_type_index(found.as_str()))),
        None => (path, None),
    };

    let glued = NAMESPACED_WORD.replace_all(head, "${0}.");
    let mut parts: Vec<String> = glued.split('.').map(str::to_string).collect();

    if let Some(suffix) = suffix
        && let Some(last) = parts.last_mut()
    {
        last.push_str(&suffix);
    }

    parts.retain(|part| !part.is_empty());

    if with_full_names {
        let mut full = String::new();
        return parts
            .into_iter()
            .map(|part| {
                if full.is_empty() {
                    full = part;
                } else {
                    full.push('.');
                    full.push_str(&part);
                }
                full.clone()
            })
            .collect();
    }

    parts
}

/// Join a parent full name and a local name
pub fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

/// Rewrite `key:Type` index notation to `key in Type`, keeping the
/// `:number` and `:string` index signatures
fn rewrite_type_index(suffix: &str) -> String {
    let mut rewritten = String::with_capacity(suffix.len() + 8);
    for (index, ch) in suffix.char_indices() {
        if ch == ':' {
            let rest = &suffix[index + 1..];
            if !rest.starts_with("number") && !rest.starts_with("string") {
                rewritten.push_str(" in ");
                continue;
            }
        }
        rewritten.push(ch);
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_dotted_path() {
        assert_eq!(segments("a.b.c", false), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_path() {
        assert!(segments("", false).is_empty());
        assert!(segments("", true).is_empty());
    }

    #[test]
    fn test_full_names_are_cumulative() {
        assert_eq!(segments("a.b.c", true), vec!["a", "a.b", "a.b.c"]);
    }

    #[test]
    fn test_empty_segments_dropped() {
        assert_eq!(segments(".a..b.", false), vec!["a", "b"]);
    }

    #[test]
    fn test_angle_suffix_stays_on_last_segment() {
        let parts = segments("series.data<number>", false);
        assert_eq!(parts, vec!["series", "data<number>"]);
    }

    #[test]
    fn test_suffix_dots_are_not_split() {
        let parts = segments("Highcharts.Dictionary<Highcharts.Point.Options>", false);
        assert_eq!(
            parts,
            vec!["Highcharts", "Dictionary<Highcharts.Point.Options>"]
        );
    }

    #[test]
    fn test_bracket_suffix_type_index_rewritten() {
        let parts = segments("Highcharts.Record[key:Foo]", false);
        assert_eq!(parts, vec!["Highcharts", "Record[key in Foo]"]);
    }

    #[test]
    fn test_bracket_suffix_keeps_number_and_string_index() {
        assert_eq!(
            segments("Highcharts.Record[key:string]", false),
            vec!["Highcharts", "Record[key:string]"]
        );
        assert_eq!(
            segments("Highcharts.List[index:number]", false),
            vec!["Highcharts", "List[index:number]"]
        );
    }

    #[test]
    fn test_namespaced_word_keeps_colon() {
        assert_eq!(
            segments("module:highcharts.Chart", false),
            vec!["module:", "highcharts", "Chart"]
        );
    }

    #[test]
    fn test_full_names_with_suffix() {
        assert_eq!(
            segments("series.data<number>", true),
            vec!["series", "series.data<number>"]
        );
    }

    #[test]
    fn test_child_path() {
        assert_eq!(child_path("", "chart"), "chart");
        assert_eq!(child_path("plotOptions", "series"), "plotOptions.series");
    }
}
