pub mod combine;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{MatrixEntry, RenderResult, SlotMap, SlotSnippet};
pub use crate::domain::ports::{ConfigProvider, Pipeline, SnippetSource};
pub use crate::utils::error::Result;
