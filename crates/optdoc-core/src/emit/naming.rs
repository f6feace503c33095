//! Interface naming

use crate::namespace::segments;

const OPTIONS_SUFFIX: &str = "Options";

/// Camel-case interface name for an option full name.
///
/// Every segment gets an upper-case first character, the segments are
/// concatenated, every `Options` substring is removed and a single trailing
/// `Options` is appended.
///
/// ```rust
/// use optdoc_core::emit::interface_name;
///
/// assert_eq!(interface_name("plotOptions.series"), "PlotSeriesOptions");
/// assert_eq!(interface_name(""), "Options");
/// ```
pub fn interface_name(fullname: &str) -> String {
    let joined: String = segments(fullname, false)
        .iter()
        .map(|segment| capitalize(segment))
        .collect();
    let mut name = joined.replace(OPTIONS_SUFFIX, "");
    name.push_str(OPTIONS_SUFFIX);
    name
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
