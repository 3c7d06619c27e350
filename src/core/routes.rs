//! The site's route table.
//!
//! Each logical page maps to one path pattern plus the label and
//! description used for navigation and the document head. Patterns are
//! either static (`/about`), parameterized (`/projects/:projectId`) or the
//! wildcard `*`.

use crate::domain::model::{PageKey, RouteEntry};
use crate::utils::error::{Result, SiteError};
use std::collections::HashSet;
use std::sync::LazyLock;

pub const WILDCARD_PATTERN: &str = "*";
pub const PROJECT_ID_PARAM: &str = "projectId";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PatternKind {
    Static,
    Parameterized,
    Wildcard,
}

impl PatternKind {
    pub fn of(pattern: &str) -> Self {
        if pattern == WILDCARD_PATTERN {
            PatternKind::Wildcard
        } else if pattern.split('/').any(|segment| segment.starts_with(':')) {
            PatternKind::Parameterized
        } else {
            PatternKind::Static
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Builds a table, rejecting duplicate patterns, duplicate page keys and
    /// anything other than exactly one wildcard entry.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self> {
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<()> {
        let mut patterns = HashSet::new();
        let mut keys = HashSet::new();
        let mut wildcards = 0;

        for entry in &self.entries {
            if !patterns.insert(entry.path_pattern.as_str()) {
                return Err(SiteError::RouteTableError {
                    message: format!("duplicate path pattern '{}'", entry.path_pattern),
                });
            }
            if !keys.insert(entry.key) {
                return Err(SiteError::RouteTableError {
                    message: format!("page '{}' is routed more than once", entry.key),
                });
            }
            if PatternKind::of(&entry.path_pattern) == PatternKind::Wildcard {
                wildcards += 1;
            } else if !entry.path_pattern.starts_with('/') {
                return Err(SiteError::RouteTableError {
                    message: format!("pattern '{}' must start with '/'", entry.path_pattern),
                });
            }
        }

        if wildcards != 1 {
            return Err(SiteError::RouteTableError {
                message: format!("expected exactly one wildcard route, found {}", wildcards),
            });
        }
        Ok(())
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn entry(&self, key: PageKey) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn path_for(&self, key: PageKey) -> Option<&str> {
        self.entry(key).map(|entry| entry.path_pattern.as_str())
    }

    pub fn wildcard(&self) -> Option<&RouteEntry> {
        self.entries
            .iter()
            .find(|entry| PatternKind::of(&entry.path_pattern) == PatternKind::Wildcard)
    }

    /// Concrete link target for a page. Parameterized and wildcard pages
    /// have no standalone link and fall back to the home path.
    pub fn link_to(&self, key: PageKey) -> &str {
        match self.path_for(key) {
            Some(path) if PatternKind::of(path) == PatternKind::Static => path,
            _ => "/",
        }
    }

    /// Detail page path for a project: the detail pattern with its
    /// parameter filled in.
    pub fn project_path(&self, project_id: &str) -> Option<String> {
        let pattern = self.path_for(PageKey::ProjectDetail)?;
        let param = format!(":{}", PROJECT_ID_PARAM);
        let segments: Vec<&str> = pattern
            .split('/')
            .map(|segment| if segment == param { project_id } else { segment })
            .collect();
        Some(segments.join("/"))
    }
}

static SITE_ROUTES: LazyLock<RouteTable> = LazyLock::new(|| RouteTable {
    entries: vec![
        RouteEntry::new(
            PageKey::Home,
            "/",
            "Home",
            "Smart monitoring for a safer tomorrow. Leading innovation in natural disaster monitoring through cutting-edge IoT solutions.",
        ),
        RouteEntry::new(
            PageKey::About,
            "/about",
            "About Me",
            "As a research-driven tech lead, I combine software engineering with a deep commitment to creating technology that serves humanity.",
        ),
        RouteEntry::new(
            PageKey::MonDesa,
            "/mondesa",
            "About MonDesa",
            "Pioneering the future of natural disaster monitoring through innovative IoT solutions and real-time data analysis.",
        ),
        RouteEntry::new(
            PageKey::Projects,
            "/projects",
            "Projects & Research",
            "Exploring innovative solutions in IoT and disaster monitoring through practical applications and research.",
        ),
        RouteEntry::new(
            PageKey::ProjectDetail,
            "/projects/:projectId",
            "Project Details",
            "Detailed information about this innovative IoT project, including features, technology stack, and resources.",
        ),
        RouteEntry::new(
            PageKey::Contact,
            "/contact",
            "Contact",
            "Get in touch with MonDesa. Interested in collaboration or want to learn more about our disaster monitoring solutions?",
        ),
        RouteEntry::new(
            PageKey::NotFound,
            WILDCARD_PATTERN,
            "Page Not Found",
            "The page you are looking for doesn't exist or has been moved.",
        ),
    ],
});

/// The process-wide route table.
pub fn site_routes() -> &'static RouteTable {
    &SITE_ROUTES
}
