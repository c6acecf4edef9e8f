//! Value parsers for CLI arguments

use shortpath_core::graph::SelectorKind;

pub fn parse_selector(s: &str) -> Result<SelectorKind, String> {
    s.parse::<SelectorKind>().map_err(|e| e.to_string())
}
