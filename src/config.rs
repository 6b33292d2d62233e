use crate::processor::condition::ConditionGrammar;

/// Settings shared by loading and condition parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Field delimiter byte (ASCII)
    pub delimiter: u8,
    /// Grammar used for `--where` conditions
    pub grammar: ConditionGrammar,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        ProcessorConfig {
            delimiter: b',',
            grammar: ConditionGrammar::Legacy,
        }
    }
}

impl ProcessorConfig {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_grammar(mut self, grammar: ConditionGrammar) -> Self {
        self.grammar = grammar;
        self
    }
}

/// Parses a single ASCII delimiter character, accepting `\t` and `tab`
pub fn parse_delimiter(s: &str) -> Result<u8, String> {
    if s == "\\t" || s == "tab" {
        return Ok(b'\t');
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && c != '"' && c != '\n' && c != '\r' => Ok(c as u8),
        _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
    }
}
