use crate::core::chrome::Viewport;
use crate::core::contact::ContactFormView;
use crate::core::pages::RenderOutcome;
use crate::core::resolver::not_found;
use crate::core::routes::PatternKind;
use crate::core::site::Site;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Renders every concrete page of the site into `storage`.
pub struct SiteExporter<'a, S: Storage> {
    site: &'a Site,
    storage: S,
}

/// File that serves `path` on a static host: `/` → `index.html`,
/// `/about` → `about/index.html`.
pub fn output_file(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "index.html".to_string()
    } else {
        format!("{}/index.html", trimmed)
    }
}

impl<'a, S: Storage> SiteExporter<'a, S> {
    pub fn new(site: &'a Site, storage: S) -> Self {
        Self { site, storage }
    }

    /// Concrete paths: every static route plus one detail page per project.
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .site
            .routes()
            .entries()
            .iter()
            .filter(|entry| PatternKind::of(&entry.path_pattern) == PatternKind::Static)
            .map(|entry| entry.path_pattern.clone())
            .collect();
        paths.extend(
            self.site
                .catalog()
                .records()
                .iter()
                .filter_map(|record| self.site.routes().project_path(&record.id)),
        );
        paths
    }

    /// Writes all pages and `404.html`; returns the files written.
    pub async fn export(&self, year: i32) -> Result<Vec<String>> {
        let mut written = Vec::new();
        let empty_form = ContactFormView::default();

        for path in self.paths() {
            let outcome = self.site.navigate(&path, Viewport::Desktop)?;
            let RenderOutcome::Page(page) = &*outcome else {
                tracing::warn!("Skipping {} during export: it redirects", path);
                continue;
            };
            let file = output_file(&path);
            let html = self.site.document(page, Viewport::Desktop, year)?;
            self.storage.write_file(&file, html.as_bytes()).await?;
            tracing::debug!("Exported {} -> {}", path, file);
            written.push(file);
        }

        let missing = not_found(self.site.routes());
        if let RenderOutcome::Page(page) =
            &*self.site.render_route(&missing, Viewport::Desktop, &empty_form)?
        {
            let html = self.site.document(page, Viewport::Desktop, year)?;
            self.storage.write_file("404.html", html.as_bytes()).await?;
            written.push("404.html".to_string());
        }

        tracing::info!("Exported {} pages", written.len());
        Ok(written)
    }
}
