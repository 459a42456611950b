use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SYMBOLIC_RE: Regex =
        Regex::new(r"(?:[0-9]+(?:\.[0-9]+)?\s*[+\-*/%]\s*)+[0-9]+(?:\.[0-9]+)?").unwrap();
    static ref NATURAL_RE: Regex =
        Regex::new(r"(?i)(add|subtract|multiply|divide)\s+([0-9]+)\s+(?:and|by)?\s*([0-9]+)").unwrap();
}

/// Yields symbolic expressions first, then the natural-language ones, each in order of appearance.
pub fn extract(text: &str) -> impl Iterator<Item = String> + '_ {
    symbolic(text).chain(natural(text))
}

fn symbolic(text: &str) -> impl Iterator<Item = String> + '_ {
    SYMBOLIC_RE.find_iter(text).map(|m| m.as_str().to_string())
}

fn natural(text: &str) -> impl Iterator<Item = String> + '_ {
    NATURAL_RE.captures_iter(text).filter_map(|caps| {
        let op = match caps[1].to_lowercase().as_str() {
            "add" => '+',
            "subtract" => '-',
            "multiply" => '*',
            "divide" => '/',
            _ => return None,
        };
        Some(format!("{} {} {}", &caps[2], op, &caps[3]))
    })
}
