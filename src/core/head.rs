use crate::core::routes::RouteTable;
use crate::domain::model::{PageKey, SiteInfo};
use serde::Serialize;

/// Title and meta description of a rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageHead {
    pub title: String,
    pub description: Option<String>,
}

impl PageHead {
    /// Explicit values win; the route entry for `route_key` fills the gaps.
    pub fn new(
        site: &SiteInfo,
        routes: &RouteTable,
        title: Option<&str>,
        description: Option<&str>,
        route_key: Option<PageKey>,
    ) -> Self {
        let entry = route_key.and_then(|key| routes.entry(key));
        let page_title = title.or_else(|| entry.map(|e| e.label.as_str()));
        let page_description = description
            .or_else(|| entry.map(|e| e.description.as_str()))
            .filter(|d| !d.is_empty());

        let title = match page_title {
            Some(page_title) => format!("{} | {}", page_title, site.name),
            None => site.name.clone(),
        };

        Self {
            title,
            description: page_description.map(str::to_string),
        }
    }

    pub fn for_route(site: &SiteInfo, routes: &RouteTable, key: PageKey) -> Self {
        Self::new(site, routes, None, None, Some(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::routes::site_routes;
    use crate::domain::model::RouteEntry;

    #[test]
    fn test_route_key_supplies_title_and_description() {
        let head = PageHead::for_route(&SiteInfo::default(), site_routes(), PageKey::Contact);
        assert_eq!(head.title, "Contact | MonDesa");
        assert!(head.description.unwrap().starts_with("Get in touch with MonDesa"));
    }

    #[test]
    fn test_explicit_values_override_route() {
        let head = PageHead::new(
            &SiteInfo::default(),
            site_routes(),
            Some("EneMeter"),
            Some("Energy monitoring"),
            Some(PageKey::ProjectDetail),
        );
        assert_eq!(head.title, "EneMeter | MonDesa");
        assert_eq!(head.description.as_deref(), Some("Energy monitoring"));
    }

    #[test]
    fn test_bare_site_title() {
        let head = PageHead::new(&SiteInfo::default(), site_routes(), None, None, None);
        assert_eq!(head.title, "MonDesa");
        assert!(head.description.is_none());
    }

    #[test]
    fn test_labels_come_from_given_table() {
        let routes = RouteTable::new(vec![
            RouteEntry::new(PageKey::About, "/about", "Who We Are", ""),
            RouteEntry::new(PageKey::NotFound, "*", "Missing", ""),
        ])
        .unwrap();
        let head = PageHead::for_route(&SiteInfo::default(), &routes, PageKey::About);
        assert_eq!(head.title, "Who We Are | MonDesa");
        assert!(head.description.is_none());
    }
}
