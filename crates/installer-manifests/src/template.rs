//! INI rendering for cloud provider configs
//!
//! Uses minijinja with strict undefined handling so a template referencing
//! a value the caller forgot to pass fails instead of rendering an empty
//! string.

use minijinja::{Environment, UndefinedBehavior, Value};

use installer_common::{Error, Result};

/// Renders provider config templates
pub(crate) struct ConfigRenderer {
    env: Environment<'static>,
}

impl ConfigRenderer {
    pub(crate) fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        Self { env }
    }

    /// Render `template` for `platform` with the given context
    pub(crate) fn render(&self, platform: &str, template: &str, ctx: Value) -> Result<String> {
        self.env.render_str(template, ctx).map_err(|e| {
            Error::serialization_with_context(format!("could not render {} config", platform), e)
        })
    }
}
