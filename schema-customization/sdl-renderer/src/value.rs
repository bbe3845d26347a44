use serde_json::Value;
use std::fmt;

/// A block string description on top of a declaration.
///
/// ```ignore
/// """
/// Crop a part of the original image.
/// """
/// ```
#[derive(Debug, Clone, Copy)]
pub(crate) struct Description<'a> {
    pub(crate) text: &'a str,
    pub(crate) indent: &'a str,
}

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\"\"\"", self.indent)?;

        for line in self.text.split('\n') {
            if line.is_empty() {
                f.write_str("\n")?;
            } else {
                writeln!(f, "{}{}", self.indent, line.replace("\"\"\"", "\\\"\"\""))?;
            }
        }

        writeln!(f, "{}\"\"\"", self.indent)
    }
}

/// A GraphQL input value literal, e.g. an argument default.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Literal<'a>(pub(crate) &'a Value);

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => f.write_str("null"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Number(value) => write!(f, "{value}"),
            // JSON string escapes are valid GraphQL string escapes.
            Value::String(_) => write!(f, "{}", self.0),
            Value::Array(values) => {
                f.write_str("[")?;

                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }

                    write!(f, "{}", Literal(value))?;
                }

                f.write_str("]")
            }
            Value::Object(fields) => {
                f.write_str("{")?;

                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }

                    write!(f, "{name}: {}", Literal(value))?;
                }

                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use serde_json::json;

    #[test]
    fn literals_use_graphql_syntax() {
        let value = json!({ "width": 800, "formats": ["AUTO", "WEBP"], "placeholder": null, "label": "a \"b\"" });

        expect![[r#"{width: 800, formats: ["AUTO", "WEBP"], placeholder: null, label: "a \"b\""}"#]]
            .assert_eq(&Literal(&value).to_string());
    }

    #[test]
    fn descriptions_are_indented_block_strings() {
        let description = Description {
            text: "First line.\n\nSays \"\"\"hi\"\"\".",
            indent: "  ",
        };

        let expected = r#"  """
  First line.

  Says \"""hi\""".
  """
"#;

        assert_eq!(description.to_string(), expected);
    }
}
