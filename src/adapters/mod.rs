// Adapters layer: concrete implementations for external systems.

pub mod formsubmit;
pub mod storage;

pub use formsubmit::FormSubmitRelay;
pub use storage::LocalStorage;
