//! HTTP clients for the external collaborators
//!
//! Both clients are synchronous (blocking reqwest), carry an explicit
//! timeout, and make exactly one attempt per call. They hold no state
//! between calls.

pub mod suggest;
pub mod todo;

pub use suggest::{GemmaClient, OfflineSuggester, SuggestionProvider};
pub use todo::TodoClient;
