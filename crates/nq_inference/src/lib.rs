pub mod providers;

pub use providers::{Gateway, ProviderId, UNKNOWN_MODEL};

pub mod prelude {
    pub use super::providers::{Gateway, ProviderId};
    pub use nq_core::{LlmProvider, Result};
}
