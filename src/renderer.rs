//! Template rendering for embedsmith.
//! Placeholders are `${name}` or `$name`; names missing from the context are
//! left in the output as written.
use regex::{Captures, Regex};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `String` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> String;
}

const PLACEHOLDER_PATTERN: &str =
    r"\$(?:(?P<escaped>\$)|(?P<named>[_a-zA-Z][_a-zA-Z0-9]*)|\{(?P<braced>[_a-zA-Z][_a-zA-Z0-9]*)\})";

/// Renderer performing safe `$`-placeholder substitution.
///
/// * `$$` renders as a single `$`
/// * `${name}` and `$name` render as the context value of `name`
/// * placeholders without a context value, and any other `$`, are kept verbatim
pub struct SafeSubstitutionRenderer {
    pattern: Regex,
}

impl SafeSubstitutionRenderer {
    pub fn new() -> Self {
        let pattern = Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern is valid");
        Self { pattern }
    }
}

impl Default for SafeSubstitutionRenderer {
    fn default() -> Self {
        SafeSubstitutionRenderer::new()
    }
}

fn lookup(context: &serde_json::Value, name: &str) -> Option<String> {
    match context.get(name)? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

impl TemplateRenderer for SafeSubstitutionRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> String {
        self.pattern
            .replace_all(template, |caps: &Captures| {
                if caps.name("escaped").is_some() {
                    return "$".to_string();
                }
                caps.name("named")
                    .or_else(|| caps.name("braced"))
                    .and_then(|name| lookup(context, name.as_str()))
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}
