use crate::core::catalog::{site_catalog, ProjectCatalog};
use crate::core::chrome::{nav_items, Viewport};
use crate::core::contact::ContactFormView;
use crate::core::page_cache::PageCache;
use crate::core::pages::{render_page, RenderContext, RenderOutcome, RenderedPage};
use crate::core::resolver::resolve;
use crate::core::routes::{site_routes, RouteTable, PROJECT_ID_PARAM};
use crate::core::templates::{Templates, LAYOUT};
use crate::domain::model::{PageKey, ResolvedRoute, SiteInfo};
use crate::utils::error::Result;
use chrono::Datelike;
use minijinja::{context, Value};
use std::sync::Arc;

/// Resolver, catalog and renderer wired together.
pub struct Site {
    info: SiteInfo,
    routes: RouteTable,
    catalog: ProjectCatalog,
    templates: Templates,
    pages: PageCache<(PageKey, Viewport), RenderOutcome>,
}

impl Site {
    pub fn new(info: SiteInfo) -> Result<Self> {
        Self::with_tables(info, site_routes().clone(), site_catalog().clone())
    }

    pub fn with_tables(info: SiteInfo, routes: RouteTable, catalog: ProjectCatalog) -> Result<Self> {
        routes.validate()?;
        Ok(Self {
            info,
            routes,
            catalog,
            templates: Templates::new()?,
            pages: PageCache::new(),
        })
    }

    pub fn info(&self) -> &SiteInfo {
        &self.info
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    pub fn is_loaded(&self, page: PageKey, viewport: Viewport) -> bool {
        self.pages.is_loaded(&(page, viewport))
    }

    pub fn navigate(&self, path: &str, viewport: Viewport) -> Result<Arc<RenderOutcome>> {
        self.navigate_with_contact(path, viewport, &ContactFormView::default())
    }

    /// Resolves `path` and renders it. Pages whose content depends only on
    /// the viewport are built on first visit and reused afterwards.
    pub fn navigate_with_contact(
        &self,
        path: &str,
        viewport: Viewport,
        contact: &ContactFormView,
    ) -> Result<Arc<RenderOutcome>> {
        let route = resolve(path, &self.routes);
        tracing::debug!(
            "Resolved {} to {} via '{}'",
            path,
            route.page,
            route.matched_pattern
        );
        self.render_route(&route, viewport, contact)
    }

    pub fn render_route(
        &self,
        route: &ResolvedRoute,
        viewport: Viewport,
        contact: &ContactFormView,
    ) -> Result<Arc<RenderOutcome>> {
        let ctx = RenderContext {
            site: &self.info,
            routes: &self.routes,
            catalog: &self.catalog,
            templates: &self.templates,
            viewport,
            contact,
        };

        match route.page {
            PageKey::ProjectDetail => {
                let record = route
                    .param(PROJECT_ID_PARAM)
                    .and_then(|id| self.catalog.find(id));
                if record.is_none() {
                    tracing::info!(
                        "Unknown project {:?}, redirecting to listing",
                        route.param(PROJECT_ID_PARAM)
                    );
                }
                Ok(Arc::new(render_page(route, record, &ctx)?))
            }
            PageKey::Contact => Ok(Arc::new(render_page(route, None, &ctx)?)),
            page => self
                .pages
                .get_or_try_load(&(page, viewport), || render_page(route, None, &ctx)),
        }
    }

    /// Full HTML document: head, navbar, page body, footer.
    pub fn document(&self, page: &RenderedPage, viewport: Viewport, year: i32) -> Result<String> {
        self.templates.render(
            LAYOUT,
            context! {
                head => &page.head,
                page => page.page.to_string(),
                viewport => viewport.as_str(),
                site => &self.info,
                home_href => self.routes.link_to(PageKey::Home),
                desktop_nav => nav_items(&self.routes, Viewport::Desktop),
                mobile_nav => nav_items(&self.routes, Viewport::Mobile),
                year => year,
                body => Value::from_safe_string(page.body.clone()),
            },
        )
    }
}

pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RouteEntry;

    fn site() -> Site {
        Site::new(SiteInfo::default()).unwrap()
    }

    fn document(site: &Site, path: &str, viewport: Viewport) -> String {
        let outcome = site.navigate(path, viewport).unwrap();
        let RenderOutcome::Page(page) = &*outcome else {
            panic!("expected page for {}", path);
        };
        site.document(page, viewport, 2026).unwrap()
    }

    #[test]
    fn test_static_pages_load_once_per_viewport() {
        let site = site();
        assert!(!site.is_loaded(PageKey::About, Viewport::Desktop));

        let first = site.navigate("/about", Viewport::Desktop).unwrap();
        let second = site.navigate("/about/", Viewport::Desktop).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(site.is_loaded(PageKey::About, Viewport::Desktop));
        assert!(!site.is_loaded(PageKey::About, Viewport::Mobile));
    }

    #[test]
    fn test_cached_render_matches_fresh_render() {
        let cached = site();
        cached.navigate("/projects", Viewport::Desktop).unwrap();
        let warm = cached.navigate("/projects", Viewport::Desktop).unwrap();
        let cold = site().navigate("/projects", Viewport::Desktop).unwrap();
        assert_eq!(*warm, *cold);
    }

    #[test]
    fn test_unknown_project_redirects() {
        let outcome = site()
            .navigate("/projects/nonexistent-project", Viewport::Desktop)
            .unwrap();
        assert_eq!(
            *outcome,
            RenderOutcome::Redirect {
                location: "/projects".to_string()
            }
        );
    }

    #[test]
    fn test_document_wraps_body_in_chrome() {
        let site = site();
        let html = document(&site, "/projects/enemeter", Viewport::Mobile);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>EneMeter | MonDesa</title>"));
        assert!(html.contains(r#"data-page="project_detail""#));
        assert!(html.contains(r#"data-viewport="mobile""#));
        assert!(html.contains("<h3>EneMeter</h3>"));
        assert!(html.contains("© 2026 MonDesa. All rights reserved."));
        assert!(html.contains("Email: contact@mondesa.org"));
        assert!(html.contains(r#"aria-label="GitHub""#));
    }

    #[test]
    fn test_document_carries_desktop_bar_and_drawer() {
        let html = document(&site(), "/", Viewport::Desktop);
        assert!(html.contains(r#"class="nav-desktop""#));
        assert!(html.contains(r#"class="nav-drawer""#));
        assert_eq!(html.matches(">Contact</a>").count(), 2);
        assert!(html.contains(r#"class="nav-button nav-button--contained""#));
        assert!(html.contains(r#"class="drawer-item drawer-item--primary""#));
    }

    #[test]
    fn test_document_escapes_site_info() {
        let info = SiteInfo {
            name: "Mon<Desa>".to_string(),
            ..SiteInfo::default()
        };
        let site = Site::new(info).unwrap();
        let html = document(&site, "/about", Viewport::Desktop);
        assert!(html.contains("Mon&lt;Desa&gt;"));
        assert!(!html.contains("Mon<Desa>"));
    }

    #[test]
    fn test_wildcard_only_table_renders_not_found() {
        let routes = RouteTable::new(vec![RouteEntry::new(PageKey::NotFound, "*", "Missing", "")])
            .unwrap();
        let site = Site::with_tables(SiteInfo::default(), routes, ProjectCatalog::new(vec![])).unwrap();
        let outcome = site.navigate("/", Viewport::Desktop).unwrap();
        let RenderOutcome::Page(page) = &*outcome else {
            panic!("expected page");
        };
        assert_eq!(page.page, PageKey::NotFound);
        assert_eq!(page.head.title, "Missing | MonDesa");
        assert!(page.body.contains("<h2>Missing</h2>"));
        assert!(!page.body.contains("Page Not Found"));
    }
}
