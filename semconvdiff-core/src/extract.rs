// Constant extraction from raw source text
//
// Line-oriented regular expressions, not a parser. Multi-line or raw (backtick)
// string literals, computed expressions and nested parentheses inside a
// `const ( ... )` block are not understood.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Constant name -> string literal value
pub type ConstantMap = BTreeMap<String, String>;

static SINGLE_LINE_CONST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"const\s+(\w+)\s*=\s*"([^"]+)""#).expect("valid regex"));

static BLOCK_CONST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)const\s*\((.*?)\)").expect("valid regex"));

static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+)\s*=\s*"([^"]+)""#).expect("valid regex"));

/// `const NAME = "VALUE"` declarations
pub fn extract_single_line_constants(content: &str) -> ConstantMap {
    collect_assignments(&SINGLE_LINE_CONST, content)
}

/// `NAME = "VALUE"` lines inside every `const ( ... )` block
pub fn extract_block_constants(content: &str) -> ConstantMap {
    let mut constants = ConstantMap::new();
    for block in BLOCK_CONST.captures_iter(content) {
        constants.extend(collect_assignments(&ASSIGNMENT, &block[1]));
    }
    constants
}

/// Extract every constant declared in one file.
///
/// Block declarations override single-line ones with the same name. A final
/// pass over the whole text picks up any remaining `NAME = "VALUE"`
/// assignment, but only for names not already captured.
pub fn extract_constants(content: &str) -> ConstantMap {
    let mut constants = extract_single_line_constants(content);
    constants.extend(extract_block_constants(content));

    for caps in ASSIGNMENT.captures_iter(content) {
        constants
            .entry(caps[1].to_string())
            .or_insert_with(|| caps[2].to_string());
    }

    constants
}

fn collect_assignments(pattern: &Regex, content: &str) -> ConstantMap {
    pattern
        .captures_iter(content)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}
