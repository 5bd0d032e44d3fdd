//! Word segmentation with interchangeable backends.
//!
//! [`Segmenter`] picks a backend per language (see [`selector`]) and returns
//! spans that cover the normalized input exactly.

pub mod availability;
pub mod command;
pub mod icu;
pub mod naive;
pub mod segmenter;
pub mod selector;
pub mod thai;

pub use availability::Availability;
pub use command::CommandTokenizer;
pub use segmenter::Segmenter;
pub use selector::{choose_backend, resolve_default};
