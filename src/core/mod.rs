pub mod catalog;
pub mod chrome;
pub mod contact;
pub mod export;
pub mod head;
pub mod page_cache;
pub mod pages;
pub mod resolver;
pub mod routes;
pub mod site;
pub mod templates;

pub use crate::domain::model::{PageKey, ProjectRecord, ResolvedRoute, RouteEntry};
pub use crate::domain::ports::{ConfigProvider, ContactRelay, Storage};
pub use crate::utils::error::Result;
