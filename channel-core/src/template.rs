//! Template engine wrapper for wire content rendering

pub use tera::Context;

use crate::{Error, Result};
use tera::Tera;

/// Compiled named templates for one channel
///
/// Build one instance per channel and share it: compilation is the expensive
/// part, and the engine is never mutated after construction, so concurrent
/// reads are safe. Values rendered into `.xml`-named templates are escaped.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Compile the given `(name, source)` template pairs
    pub fn new(templates: &[(&str, &str)]) -> Result<Self> {
        let mut tera = Tera::default();
        for (name, source) in templates {
            tera.add_raw_template(name, source)
                .map_err(|e| Error::Template {
                    name: (*name).to_string(),
                    source: e,
                })?;
        }
        Ok(Self { tera })
    }

    /// Render the named template with the given context
    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        self.tera.render(name, context).map_err(|e| Error::Template {
            name: name.to_string(),
            source: e,
        })
    }
}
