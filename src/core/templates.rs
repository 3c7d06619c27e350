//! Page templates, embedded at build time and rendered with minijinja.
//!
//! Every template name ends in `.html`, so minijinja's HTML auto-escaping
//! applies to all interpolated values. Pre-rendered markup is passed in as
//! a safe string.

use crate::utils::error::Result;
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

pub const LAYOUT: &str = "layout.html";

const SOURCES: [(&str, &str); 8] = [
    (LAYOUT, include_str!("../templates/layout.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("about.html", include_str!("../templates/about.html")),
    ("mondesa.html", include_str!("../templates/mondesa.html")),
    ("projects.html", include_str!("../templates/projects.html")),
    ("project_detail.html", include_str!("../templates/project_detail.html")),
    ("contact.html", include_str!("../templates/contact.html")),
    ("not_found.html", include_str!("../templates/not_found.html")),
];

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        for (name, source) in SOURCES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String> {
        let rendered = self.env.get_template(name)?.render(context)?;
        Ok(rendered)
    }
}
