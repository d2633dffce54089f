use std::{collections::HashMap, fmt};

use super::content_variables::ContentVariables;

const DELIMITER: &str = "---";

/// The `key: value` header of a content file.
#[derive(Debug, Default)]
pub struct FrontMatter {
    variables: HashMap<String, VariableValue>,
}

impl FrontMatter {
    pub fn get(&self, key: &str) -> Option<&VariableValue> {
        self.variables.get(key)
    }

    /// Exposes every entry to templates as `md_<key>`.
    pub fn export(&self, variables: &mut ContentVariables) {
        for (key, value) in &self.variables {
            variables.insert(format!("md_{key}"), value.to_string());
        }
    }
}

/// Removes the front matter from `file_content` and parses it.
///
/// Front matter must open the file, with both `---` delimiters on lines of their
/// own and only `key: value` lines between them. Anything else, such as a document
/// opening with a horizontal rule, has an empty front matter and is left untouched.
pub fn extract(file_content: &mut String) -> FrontMatter {
    let start = file_content.len() - file_content.trim_start().len();
    let Some((first_line, _)) = file_content[start..].split_once('\n') else {
        return FrontMatter::default();
    };
    if first_line.trim_end() != DELIMITER {
        return FrontMatter::default();
    }

    let header_start = start + first_line.len() + 1;
    let mut offset = header_start;
    let mut header_end = None;
    for line in file_content[header_start..].split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            header_end = Some((offset, offset + line.len()));
            break;
        }
        offset += line.len();
    }

    let Some((end, body_start)) = header_end else {
        tracing::trace!("Opening '{}' has no closing line, not front matter.", DELIMITER);
        return FrontMatter::default();
    };

    let mut variables = HashMap::new();
    for line in file_content[header_start..end].lines() {
        if line.trim().is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            tracing::trace!("Line '{}' is not a 'key: value' pair, not front matter.", line);
            return FrontMatter::default();
        };
        variables.insert(key.trim().to_owned(), VariableValue::from_str(value));
    }

    file_content.replace_range(..body_start, "");
    FrontMatter { variables }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VariableValue {
    String(String),
    Bool(bool),
    Number(f64),
    Array(Vec<VariableValue>),
}

impl VariableValue {
    fn from_str(value: &str) -> Self {
        let value = value.trim();
        if let Some(inner) = value.strip_prefix('[') {
            let inner = match inner.strip_suffix(']') {
                Some(inner) => inner,
                None => {
                    tracing::warn!("Array variable is not closed with ']' character.");
                    inner
                }
            };

            if inner.trim().is_empty() {
                return VariableValue::Array(Vec::new());
            }
            return VariableValue::Array(inner.split(',').map(Self::from_str).collect());
        }

        if let Some(inner) = value.strip_prefix('"') {
            let inner = match inner.strip_suffix('"') {
                Some(inner) => inner,
                None => {
                    tracing::warn!("String variable is not closed with '\"' character.");
                    inner
                }
            };
            return VariableValue::String(inner.trim().to_owned());
        }

        match value {
            "true" => VariableValue::Bool(true),
            "false" => VariableValue::Bool(false),
            _ => match value.parse::<f64>() {
                Ok(number) => VariableValue::Number(number),
                Err(_) => VariableValue::String(value.to_owned()),
            },
        }
    }
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableValue::String(str) => f.write_str(str),
            VariableValue::Bool(bool) => write!(f, "{bool}"),
            VariableValue::Number(number) => write!(f, "{number}"),
            VariableValue::Array(array) => {
                for (index, value) in array.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}
