use crate::domain::Page;
use anyhow::{Context, Result};
use minijinja::Environment;
use std::fs;
use std::path::Path;

const TEMPLATE_NAMES: [&str; 2] = ["view.html", "edit.html"];

// the compiled template set, built once during startup and handed to the
// handlers through AppState; a broken template file fails the boot, not a
// request
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut env = Environment::new();

        for name in TEMPLATE_NAMES {
            let path = dir.join(name);
            let source = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read template {}", path.display()))?;
            env.add_template_owned(name.to_string(), source)
                .with_context(|| format!("Failed to compile template {}", path.display()))?;
        }

        Ok(Self { env })
    }

    pub fn render_view(&self, page: &Page) -> Result<String> {
        self.render("view.html", page)
    }

    pub fn render_edit(&self, page: &Page) -> Result<String> {
        self.render("edit.html", page)
    }

    fn render(&self, name: &str, page: &Page) -> Result<String> {
        let template = self.env.get_template(name)?;
        let html = template
            .render(page)
            .with_context(|| format!("Failed to render template {}", name))?;
        Ok(html)
    }
}
