pub mod draft;
pub mod pipeline;
pub mod prompts;
pub mod review;

#[cfg(test)]
pub(crate) mod test_support;

pub use draft::{Draft, Drafter};
pub use pipeline::Pipeline;
pub use review::Reviewer;
