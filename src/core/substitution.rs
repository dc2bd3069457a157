use crate::utils::error::{ProfileError, Result};
use regex::{Captures, Regex};

/// Locates the age marker `<label>** ([**<digits>**]` in a markdown document.
#[derive(Debug, Clone)]
pub struct SubstitutionPattern {
    label: String,
    regex: Regex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub text: String,
    pub replacements: usize,
}

impl SubstitutionPattern {
    pub fn new(label: &str) -> Result<Self> {
        let pattern = format!(
            r"(?P<prefix>{}\*\* \(\[\*\*)\d+(?P<suffix>\*\*\])",
            regex::escape(label)
        );
        let regex = Regex::new(&pattern).map_err(|e| ProfileError::ConfigError {
            message: format!("Cannot build pattern for label '{}': {}", label, e),
        })?;

        Ok(Self {
            label: label.to_string(),
            regex,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the digits of every marker with `age`. Text outside the
    /// markers is returned unchanged.
    pub fn substitute(&self, age: u32, text: &str) -> Substitution {
        let mut replacements = 0;
        let replaced = self.regex.replace_all(text, |caps: &Captures| {
            replacements += 1;
            format!("{}{}{}", &caps["prefix"], age, &caps["suffix"])
        });

        Substitution {
            text: replaced.into_owned(),
            replacements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABEL: &str = "Kiizuha Kanazawa";

    fn pattern() -> SubstitutionPattern {
        SubstitutionPattern::new(LABEL).unwrap()
    }

    #[test]
    fn test_replaces_age_marker() {
        let text = "Hi, I'm **Kiizuha Kanazawa** ([**21**](https://example.com) years old)";
        let result = pattern().substitute(22, text);

        assert_eq!(result.replacements, 1);
        assert_eq!(
            result.text,
            "Hi, I'm **Kiizuha Kanazawa** ([**22**](https://example.com) years old)"
        );
    }

    #[test]
    fn test_no_match_leaves_text_identical() {
        let text = "# Kiizuha Kanazawa\n\nNo marker here ([**21**]\n";
        let result = pattern().substitute(30, text);

        assert_eq!(result.replacements, 0);
        assert_eq!(result.text, text);
    }

    #[test]
    fn test_replaces_every_marker() {
        let text = "Kiizuha Kanazawa** ([**1**] and Kiizuha Kanazawa** ([**999**]";
        let result = pattern().substitute(25, text);

        assert_eq!(result.replacements, 2);
        assert_eq!(
            result.text,
            "Kiizuha Kanazawa** ([**25**] and Kiizuha Kanazawa** ([**25**]"
        );
        assert_eq!(pattern().substitute(25, &result.text).replacements, 2);
    }

    #[test]
    fn test_substitute_is_idempotent() {
        let pattern = pattern();
        let text = "intro\nKiizuha Kanazawa** ([**21**]\noutro";
        let once = pattern.substitute(22, text);
        let twice = pattern.substitute(22, &once.text);

        assert_eq!(once.text, twice.text);
    }

    #[test]
    fn test_chained_substitution_shows_last_age() {
        let pattern = pattern();
        let text = "Kiizuha Kanazawa** ([**21**]";
        let first = pattern.substitute(7, text);
        let second = pattern.substitute(140, &first.text);

        assert_eq!(second.text, "Kiizuha Kanazawa** ([**140**]");
    }

    #[test]
    fn test_label_is_matched_literally() {
        let pattern = SubstitutionPattern::new("A.B (C)").unwrap();
        assert_eq!(pattern.label(), "A.B (C)");

        let result = pattern.substitute(5, "AxB (C)** ([**4**] A.B (C)** ([**4**]");
        assert_eq!(result.replacements, 1);
        assert_eq!(result.text, "AxB (C)** ([**4**] A.B (C)** ([**5**]");
    }

    #[test]
    fn test_non_digit_placeholder_is_ignored() {
        let text = "Kiizuha Kanazawa** ([**twenty**]";
        assert_eq!(pattern().substitute(22, text).replacements, 0);
    }
}
