use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PAYLOAD_RE: Regex = Regex::new(r#"(?i)translate\s+"?([^"\n]+?)"?\s+to german"#).unwrap();
}

pub fn detect(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("translate") && lower.contains("to german")
}

pub fn extract_payloads(text: &str) -> impl Iterator<Item = String> + '_ {
    PAYLOAD_RE.captures_iter(text).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_payload() {
        let input = r#"translate "hello" to German"#;
        assert!(detect(input));
        assert_eq!(extract_payloads(input).collect::<Vec<_>>(), vec!["hello"]);
    }

    #[test]
    fn test_unquoted_and_multiple() {
        let input = "Translate good morning to german and translate \"thank you\" to German";
        assert_eq!(
            extract_payloads(input).collect::<Vec<_>>(),
            vec!["good morning", "thank you"]
        );
    }

    #[test]
    fn test_gate_requires_both_phrases() {
        assert!(!detect("I like German food"));
        assert!(!detect("translate this to French"));
        assert!(detect("To German, please translate: cat"));
    }

    #[test]
    fn test_detected_without_payload() {
        let input = "To German, please translate: cat";
        assert!(detect(input));
        assert_eq!(extract_payloads(input).count(), 0);
    }
}
