use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Logical pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageKey {
    Home,
    About,
    MonDesa,
    Projects,
    ProjectDetail,
    Contact,
    NotFound,
}

impl PageKey {
    pub const ALL: [PageKey; 7] = [
        PageKey::Home,
        PageKey::About,
        PageKey::MonDesa,
        PageKey::Projects,
        PageKey::ProjectDetail,
        PageKey::Contact,
        PageKey::NotFound,
    ];
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageKey::Home => "home",
            PageKey::About => "about",
            PageKey::MonDesa => "mondesa",
            PageKey::Projects => "projects",
            PageKey::ProjectDetail => "project_detail",
            PageKey::Contact => "contact",
            PageKey::NotFound => "not_found",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub key: PageKey,
    pub path_pattern: String,
    pub label: String,
    pub description: String,
}

impl RouteEntry {
    pub fn new(key: PageKey, path_pattern: &str, label: &str, description: &str) -> Self {
        Self {
            key,
            path_pattern: path_pattern.to_string(),
            label: label.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedArticle {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub technologies: Vec<String>,
    pub accent_color: String,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_articles: Vec<RelatedArticle>,
}

/// Result of resolving one request path. Lives for a single navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub page: PageKey,
    pub matched_pattern: String,
    pub params: BTreeMap<String, String>,
}

impl ResolvedRoute {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// Body sent to the external message relay: the visitor's fields plus fixed metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
    pub source: String,
    pub website_url: String,
    #[serde(rename = "_captcha")]
    pub captcha: String,
    #[serde(rename = "_template")]
    pub template: String,
}

impl RelayPayload {
    pub fn new(message: &ContactMessage, site: &SiteInfo) -> Self {
        Self {
            name: message.name.clone(),
            email: message.email.clone(),
            message: message.message.clone(),
            subject: format!("[{} Website] Message from {}", site.name, message.name),
            source: format!("{}-website", site.name.to_lowercase()),
            website_url: site.origin.clone(),
            captcha: "true".to_string(),
            template: "box".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub const AUTO_HIDE_MS: u64 = 6000;

    pub fn sent() -> Self {
        Self {
            severity: Severity::Success,
            message: "Thank you! Your message has been sent successfully.".to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            severity: Severity::Error,
            message: "There was a problem sending your message. Please try again or email us directly."
                .to_string(),
        }
    }
}

/// Identity shown in the chrome, the document head and the relay metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub name: String,
    pub origin: String,
    pub contact_email: String,
    pub github_url: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "MonDesa".to_string(),
            origin: "https://mondesa.org".to_string(),
            contact_email: "contact@mondesa.org".to_string(),
            github_url: "https://github.com/MonDesa".to_string(),
        }
    }
}
