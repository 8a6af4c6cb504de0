use std::collections::HashMap;

use crate::domain::value_objects::Assistant;

/// Context for rendering generated project files.
///
/// A **Value Object** holding the variables substituted into `{{VARIABLE}}`
/// placeholders. Immutable after creation.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "shop-model" | Resolved target |
/// | `ASSISTANT` | "claude" | `--ai` |
/// | `ASSISTANT_NAME` | "Claude Code" | `--ai` |
/// | `ASSISTANT_COMMAND` | "claude" | `--ai` |
/// | `KIT_VERSION` | "0.1.0" | Crate version |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>, assistant: Assistant) -> Self {
        let variables = HashMap::from([
            ("PROJECT_NAME", project_name.into()),
            ("ASSISTANT", assistant.as_str().to_string()),
            ("ASSISTANT_NAME", assistant.display_name().to_string()),
            ("ASSISTANT_COMMAND", assistant.launch_command().to_string()),
            ("KIT_VERSION", crate::VERSION.to_string()),
        ]);
        Self { variables }
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// One left-to-right pass over `template`: substituted values are copied
    /// verbatim and never scanned again, so a value containing `{{...}}`
    /// comes out unchanged.
    ///
    /// - `{{UNKNOWN}}` remains as literal `{{UNKNOWN}}` (no error)
    /// - an unterminated `{{` is copied as-is
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            let Some(close) = after.find("}}") else {
                out.push_str(&rest[open..]);
                return out;
            };

            let key = &after[..close];
            if key.contains("{{") {
                out.push_str("{{");
                rest = after;
                continue;
            }
            match self.variables.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(key);
                    out.push_str("}}");
                }
            }
            rest = &after[close + 2..];
        }

        out.push_str(rest);
        out
    }
}
