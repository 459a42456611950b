use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentLabel {
    General,
    Math,
    Translation,
    Error,
}

/// One labeled piece of a turn's response. `text` is the body without the prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseFragment {
    pub label: FragmentLabel,
    pub text: String,
}

impl ResponseFragment {
    pub fn general(answer: impl Into<String>) -> Self {
        ResponseFragment {
            label: FragmentLabel::General,
            text: answer.into(),
        }
    }

    pub fn translation(payload: &str, translated: &str) -> Self {
        ResponseFragment {
            label: FragmentLabel::Translation,
            text: format!("{} → {}", payload, translated),
        }
    }

    pub fn math(expr: &str, result: &str) -> Self {
        ResponseFragment {
            label: FragmentLabel::Math,
            text: format!("{} = {}", expr, result),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ResponseFragment {
            label: FragmentLabel::Error,
            text: message.into(),
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self.label {
            FragmentLabel::General => "🧠 General Answer:",
            FragmentLabel::Translation => "🇩🇪 Translated:",
            FragmentLabel::Math => "🧮 Math result:",
            FragmentLabel::Error => "❌",
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResponseFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix(), self.text)
    }
}
