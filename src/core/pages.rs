//! Page bodies.
//!
//! Each page is a template plus a small serializable context. The functions
//! here pick the variant-dependent bits (classes, labels, which optional
//! blocks appear) and leave markup to the templates. Only the project
//! detail page branches on data, and it does so in [`render_page`] before
//! anything is rendered.

use crate::core::catalog::ProjectCatalog;
use crate::core::chrome::Viewport;
use crate::core::contact::{dismiss_action, ContactFormView};
use crate::core::head::PageHead;
use crate::core::routes::RouteTable;
use crate::core::templates::Templates;
use crate::domain::model::{
    Notification, PageKey, ProjectRecord, RelatedArticle, ResolvedRoute, Severity, SiteInfo,
};
use crate::utils::error::Result;
use minijinja::context;
use serde::Serialize;

/// What a navigation produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Page(RenderedPage),
    Redirect { location: String },
}

/// A page body, already rendered to HTML, and its head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub page: PageKey,
    pub head: PageHead,
    pub body: String,
}

/// Everything outside the route and the record that a page may depend on.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub site: &'a SiteInfo,
    pub routes: &'a RouteTable,
    pub catalog: &'a ProjectCatalog,
    pub templates: &'a Templates,
    pub viewport: Viewport,
    pub contact: &'a ContactFormView,
}

pub fn render_page(
    route: &ResolvedRoute,
    record: Option<&ProjectRecord>,
    ctx: &RenderContext<'_>,
) -> Result<RenderOutcome> {
    let head_for = |key| PageHead::for_route(ctx.site, ctx.routes, key);
    let (head, body) = match route.page {
        PageKey::ProjectDetail => match record {
            Some(project) => (
                PageHead::new(
                    ctx.site,
                    ctx.routes,
                    Some(project.title.as_str()),
                    Some(project.short_description.as_str()),
                    None,
                ),
                project_detail(ctx, project)?,
            ),
            None => {
                return Ok(RenderOutcome::Redirect {
                    location: ctx.routes.link_to(PageKey::Projects).to_string(),
                })
            }
        },
        PageKey::Home => (head_for(PageKey::Home), home(ctx)?),
        PageKey::About => (head_for(PageKey::About), about(ctx)?),
        PageKey::MonDesa => (head_for(PageKey::MonDesa), mondesa(ctx)?),
        PageKey::Projects => (head_for(PageKey::Projects), projects(ctx)?),
        PageKey::Contact => (head_for(PageKey::Contact), contact(ctx)?),
        PageKey::NotFound => (head_for(PageKey::NotFound), not_found(ctx)?),
    };

    Ok(RenderOutcome::Page(RenderedPage {
        page: route.page,
        head,
        body,
    }))
}

pub fn cta_class(is_primary_action: bool) -> &'static str {
    if is_primary_action {
        "button button--contained"
    } else {
        "button button--outlined"
    }
}

const HERO_ICONS: [&str; 4] = ["mountain", "radio", "waves", "signal"];

/// The decorative icon column only fits the desktop layout.
pub fn hero_icons(viewport: Viewport) -> Option<&'static [&'static str]> {
    match viewport {
        Viewport::Mobile => None,
        Viewport::Desktop => Some(&HERO_ICONS),
    }
}

pub fn home(ctx: &RenderContext<'_>) -> Result<String> {
    ctx.templates.render(
        "home.html",
        context! {
            mondesa_href => ctx.routes.link_to(PageKey::MonDesa),
            projects_href => ctx.routes.link_to(PageKey::Projects),
            primary_class => cta_class(true),
            secondary_class => cta_class(false),
            hero_icons => hero_icons(ctx.viewport),
        },
    )
}

const SKILLS: [&str; 6] = ["Embedded IoT", "MQTT", "LoRa", "React", "Go", "Kubernetes"];

pub fn about(ctx: &RenderContext<'_>) -> Result<String> {
    ctx.templates.render("about.html", context! { skills => SKILLS })
}

#[derive(Serialize)]
struct Feature {
    title: &'static str,
    description: &'static str,
}

const MONDESA_FEATURES: [Feature; 4] = [
    Feature {
        title: "Energy-Efficient Firmware",
        description: "Advanced power management systems ensuring long-term deployment capability in remote locations.",
    },
    Feature {
        title: "MQTT Topic System",
        description: "Robust message queuing system for reliable data transmission and real-time monitoring.",
    },
    Feature {
        title: "Wireless Communication",
        description: "Multi-protocol support including LoRa, WiFi, and 4G for comprehensive coverage.",
    },
    Feature {
        title: "Disaster Prevention",
        description: "Early warning systems powered by real-time data analysis and machine learning.",
    },
];

pub fn mondesa(ctx: &RenderContext<'_>) -> Result<String> {
    ctx.templates.render(
        "mondesa.html",
        context! {
            site_name => &ctx.site.name,
            features => &MONDESA_FEATURES,
        },
    )
}

/// A catalog record as the templates see it: every optional field present,
/// plus the link to its detail page.
#[derive(Serialize)]
struct ProjectView<'a> {
    title: &'a str,
    short_description: &'a str,
    accent_color: &'a str,
    technologies: &'a [String],
    features: &'a [String],
    repository_url: Option<&'a str>,
    website_url: Option<&'a str>,
    related_articles: &'a [RelatedArticle],
    href: String,
}

impl<'a> ProjectView<'a> {
    fn new(project: &'a ProjectRecord, routes: &RouteTable) -> Self {
        Self {
            title: &project.title,
            short_description: &project.short_description,
            accent_color: &project.accent_color,
            technologies: &project.technologies,
            features: &project.features,
            repository_url: project.repository_url.as_deref(),
            website_url: project.website_url.as_deref(),
            related_articles: &project.related_articles,
            href: routes
                .project_path(&project.id)
                .unwrap_or_else(|| routes.link_to(PageKey::Projects).to_string()),
        }
    }
}

pub fn projects(ctx: &RenderContext<'_>) -> Result<String> {
    let projects: Vec<ProjectView<'_>> = ctx
        .catalog
        .records()
        .iter()
        .map(|project| ProjectView::new(project, ctx.routes))
        .collect();
    ctx.templates
        .render("projects.html", context! { projects => projects })
}

pub fn project_detail(ctx: &RenderContext<'_>, project: &ProjectRecord) -> Result<String> {
    let paragraphs: Vec<&str> = project
        .full_description
        .split("\n\n")
        .map(str::trim)
        .collect();
    ctx.templates.render(
        "project_detail.html",
        context! {
            project => ProjectView::new(project, ctx.routes),
            paragraphs => paragraphs,
            projects_href => ctx.routes.link_to(PageKey::Projects),
        },
    )
}

pub fn notification_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "notification notification--success",
        Severity::Error => "notification notification--error",
    }
}

#[derive(Serialize)]
struct NotificationView<'a> {
    class_name: &'static str,
    message: &'a str,
    auto_hide_ms: u64,
}

impl<'a> From<&'a Notification> for NotificationView<'a> {
    fn from(note: &'a Notification) -> Self {
        Self {
            class_name: notification_class(note.severity),
            message: &note.message,
            auto_hide_ms: Notification::AUTO_HIDE_MS,
        }
    }
}

pub fn submit_label(is_submitting: bool) -> &'static str {
    if is_submitting {
        "Sending..."
    } else {
        "Send Message"
    }
}

pub fn contact(ctx: &RenderContext<'_>) -> Result<String> {
    let form = ctx.contact;
    let action = ctx.routes.link_to(PageKey::Contact);
    ctx.templates.render(
        "contact.html",
        context! {
            contact_email => &ctx.site.contact_email,
            action => action,
            dismiss_action => dismiss_action(action),
            values => &form.values,
            is_submitting => form.is_submitting,
            submit_label => submit_label(form.is_submitting),
            sending_label => submit_label(true),
            notification => form.notification.as_ref().map(NotificationView::from),
        },
    )
}

pub fn not_found(ctx: &RenderContext<'_>) -> Result<String> {
    let entry = ctx.routes.wildcard();
    ctx.templates.render(
        "not_found.html",
        context! {
            label => entry.map(|e| e.label.as_str()).unwrap_or("Page Not Found"),
            description => entry.map(|e| e.description.as_str()).unwrap_or_default(),
            home_href => ctx.routes.link_to(PageKey::Home),
            primary_class => cta_class(true),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::site_catalog;
    use crate::core::resolver::resolve;
    use crate::core::routes::{site_routes, PROJECT_ID_PARAM};
    use crate::domain::model::{ContactMessage, RouteEntry};

    fn render_with(
        routes: &RouteTable,
        path: &str,
        viewport: Viewport,
        contact: &ContactFormView,
    ) -> RenderOutcome {
        let site = SiteInfo::default();
        let templates = Templates::new().unwrap();
        let route = resolve(path, routes);
        let record = route
            .param(PROJECT_ID_PARAM)
            .and_then(|id| site_catalog().find(id));
        let ctx = RenderContext {
            site: &site,
            routes,
            catalog: site_catalog(),
            templates: &templates,
            viewport,
            contact,
        };
        render_page(&route, record, &ctx).unwrap()
    }

    fn render(path: &str, viewport: Viewport, contact: &ContactFormView) -> RenderOutcome {
        render_with(site_routes(), path, viewport, contact)
    }

    fn page(outcome: RenderOutcome) -> RenderedPage {
        match outcome {
            RenderOutcome::Page(page) => page,
            other => panic!("expected a page, got {:?}", other),
        }
    }

    /// `href` values in document order, with `/` entity-decoded.
    fn hrefs(html: &str) -> Vec<String> {
        html.split("href=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(|href| href.replace("&#x2f;", "/").replace("&#47;", "/"))
            .collect()
    }

    #[test]
    fn test_unknown_project_redirects_to_listing() {
        let outcome = render("/projects/nonexistent-project", Viewport::Desktop, &ContactFormView::default());
        assert_eq!(
            outcome,
            RenderOutcome::Redirect {
                location: "/projects".to_string()
            }
        );
    }

    #[test]
    fn test_project_detail_uses_record_head_and_content() {
        let page = page(render("/projects/enemeter", Viewport::Desktop, &ContactFormView::default()));
        assert_eq!(page.page, PageKey::ProjectDetail);
        assert_eq!(page.head.title, "EneMeter | MonDesa");

        let html = &page.body;
        assert!(html.contains("<h3>EneMeter</h3>"));
        assert!(html.contains(r#"<span class="chip">ESP32</span>"#));
        assert!(html.contains(r#"<span class="chip">Solar Power</span>"#));
        assert!(html.contains("GitHub Repository"));
        assert!(!html.contains("Project Website"));
        assert!(html.contains("Maximizing Battery Life in Field-Deployed IoT Devices"));
        assert_eq!(html.matches("<li>").count(), 4);
        assert!(hrefs(html).contains(&"/projects".to_string()));
    }

    #[test]
    fn test_projects_page_links_every_record() {
        let page = page(render("/projects", Viewport::Desktop, &ContactFormView::default()));
        let links = hrefs(&page.body);
        for record in site_catalog().records() {
            assert!(links.contains(&format!("/projects/{}", record.id)), "{}", record.id);
        }
        assert_eq!(page.body.matches("Learn more").count(), site_catalog().records().len());
    }

    #[test]
    fn test_home_viewport_variants() {
        let desktop = page(render("/", Viewport::Desktop, &ContactFormView::default())).body;
        let mobile = page(render("/", Viewport::Mobile, &ContactFormView::default())).body;
        assert!(desktop.contains("hero-icons"));
        assert!(desktop.contains("icon-mountain"));
        assert!(!mobile.contains("hero-icons"));
        let links = hrefs(&mobile);
        assert!(links.contains(&"/mondesa".to_string()));
        assert!(links.contains(&"/projects".to_string()));
    }

    #[test]
    fn test_not_found_page_uses_wildcard_entry() {
        let page = page(render("/does-not-exist", Viewport::Desktop, &ContactFormView::default()));
        assert_eq!(page.page, PageKey::NotFound);
        assert_eq!(page.head.title, "Page Not Found | MonDesa");
        assert!(page.body.contains("<h2>Page Not Found</h2>"));
        assert!(page.body.contains("exist or has been moved"));
    }

    #[test]
    fn test_not_found_page_uses_given_table() {
        let routes = RouteTable::new(vec![
            RouteEntry::new(PageKey::Home, "/start", "Start", ""),
            RouteEntry::new(PageKey::NotFound, "*", "Missing", "Nothing here."),
        ])
        .unwrap();
        let page = page(render_with(&routes, "/about", Viewport::Desktop, &ContactFormView::default()));
        assert_eq!(page.head.title, "Missing | MonDesa");
        assert!(page.body.contains("<h2>Missing</h2>"));
        assert!(page.body.contains("Nothing here."));
        assert_eq!(hrefs(&page.body), vec!["/start".to_string()]);
    }

    #[test]
    fn test_contact_form_reflects_submission_state() {
        let busy = ContactFormView {
            values: ContactMessage::new("Ada", "ada@example.com", "Hi"),
            is_submitting: true,
            notification: None,
        };
        let html = page(render("/contact", Viewport::Desktop, &busy)).body;
        assert!(html.contains(">Sending...</button>"));
        assert!(html.contains(r#"class="button button--contained" disabled>"#));
        assert!(html.contains(r#"value="Ada""#));
        assert!(!html.contains("role=\"alert\""));

        let failed = ContactFormView::notified(
            ContactMessage::new("Ada", "ada@example.com", "Hi"),
            Notification::failed(),
        );
        let html = page(render("/contact", Viewport::Desktop, &failed)).body;
        assert!(html.contains(">Send Message</button>"));
        assert!(!html.contains(r#"class="button button--contained" disabled>"#));
        assert!(html.contains("notification--error"));
        assert!(html.contains(r#"data-auto-hide-ms="6000""#));
        assert!(html.contains("<textarea name=\"message\" rows=\"4\" required>Hi</textarea>"));
    }

    #[test]
    fn test_notification_close_posts_fields_to_dismiss() {
        let view = ContactFormView::notified(ContactMessage::default(), Notification::sent());
        let html = page(render("/contact", Viewport::Desktop, &view)).body;
        assert!(html.contains(r#"form="contact-form""#));
        assert!(html.contains("formaction=\""));
        assert!(html.contains("dismiss\""));
        assert!(html.contains("notification--success"));
    }

    #[test]
    fn test_contact_script_disables_submit_and_hides_notification() {
        let html = page(render("/contact", Viewport::Desktop, &ContactFormView::default())).body;
        assert!(html.contains("<script>"));
        assert!(html.contains("submit.disabled = true"));
        assert!(html.contains("autoHideMs"));
    }
}
