use crate::domain::model::RelayPayload;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Settings the outbound relay is built from.
pub trait ConfigProvider: Send + Sync {
    fn contact_endpoint(&self) -> &str;
    fn contact_timeout_seconds(&self) -> u64;
}

/// External message relay for the contact form.
///
/// One call is one outbound request. `Ok(())` means the relay confirmed
/// delivery; any `Err` is a failed submission. Implementations never retry.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    async fn send(&self, payload: &RelayPayload) -> Result<()>;
}
