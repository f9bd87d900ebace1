pub mod es;

pub use es::{EsConfig, EsSearch, DEFAULT_LIMIT};
