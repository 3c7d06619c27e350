//! Navigation chrome shared by every page. The markup lives in the layout
//! template; this module decides which links appear and how they are styled.

use crate::core::routes::RouteTable;
use crate::domain::model::PageKey;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Viewport {
    Desktop,
    Mobile,
}

impl Viewport {
    /// Best-effort classification from the `User-Agent` header; anything
    /// unrecognised is treated as desktop.
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        match user_agent {
            Some(ua) if ua.contains("Mobi") || ua.contains("Android") => Viewport::Mobile,
            _ => Viewport::Desktop,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Viewport::Desktop => "desktop",
            Viewport::Mobile => "mobile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    pub page: PageKey,
    pub is_primary_action: bool,
}

pub const NAVIGATION_LINKS: [NavLink; 4] = [
    NavLink {
        title: "About Me",
        page: PageKey::About,
        is_primary_action: false,
    },
    NavLink {
        title: "MonDesa",
        page: PageKey::MonDesa,
        is_primary_action: false,
    },
    NavLink {
        title: "Projects",
        page: PageKey::Projects,
        is_primary_action: false,
    },
    NavLink {
        title: "Contact",
        page: PageKey::Contact,
        is_primary_action: true,
    },
];

pub fn nav_link_class(viewport: Viewport, is_primary_action: bool) -> &'static str {
    match (viewport, is_primary_action) {
        (Viewport::Desktop, true) => "nav-button nav-button--contained",
        (Viewport::Desktop, false) => "nav-button",
        (Viewport::Mobile, true) => "drawer-item drawer-item--primary",
        (Viewport::Mobile, false) => "drawer-item",
    }
}

/// A rendered navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem<'a> {
    pub href: &'a str,
    pub title: &'static str,
    pub class_name: &'static str,
}

pub fn nav_items(routes: &RouteTable, viewport: Viewport) -> Vec<NavItem<'_>> {
    NAVIGATION_LINKS
        .iter()
        .map(|nav| NavItem {
            href: routes.link_to(nav.page),
            title: nav.title,
            class_name: nav_link_class(viewport, nav.is_primary_action),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::routes::site_routes;
    use crate::domain::model::RouteEntry;

    #[test]
    fn test_nav_items_follow_route_table() {
        let items = nav_items(site_routes(), Viewport::Desktop);
        let hrefs: Vec<&str> = items.iter().map(|item| item.href).collect();
        assert_eq!(hrefs, vec!["/about", "/mondesa", "/projects", "/contact"]);
        assert_eq!(items[3].title, "Contact");
    }

    #[test]
    fn test_nav_items_use_custom_paths() {
        let routes = RouteTable::new(vec![
            RouteEntry::new(PageKey::Contact, "/hello", "Contact", ""),
            RouteEntry::new(PageKey::NotFound, "*", "Missing", ""),
        ])
        .unwrap();
        let items = nav_items(&routes, Viewport::Mobile);
        assert_eq!(items[3].href, "/hello");
        assert_eq!(items[0].href, "/");
    }

    #[test]
    fn test_primary_action_variants() {
        assert!(NAVIGATION_LINKS[3].is_primary_action);
        let desktop = nav_items(site_routes(), Viewport::Desktop);
        let mobile = nav_items(site_routes(), Viewport::Mobile);
        assert_eq!(desktop[3].class_name, "nav-button nav-button--contained");
        assert_eq!(desktop[0].class_name, "nav-button");
        assert_eq!(mobile[3].class_name, "drawer-item drawer-item--primary");
        assert_eq!(mobile[0].class_name, "drawer-item");
    }

    #[test]
    fn test_viewport_from_user_agent() {
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148";
        assert_eq!(Viewport::from_user_agent(Some(iphone)), Viewport::Mobile);
        assert_eq!(Viewport::from_user_agent(Some("curl/8.0")), Viewport::Desktop);
        assert_eq!(Viewport::from_user_agent(None), Viewport::Desktop);
    }
}
