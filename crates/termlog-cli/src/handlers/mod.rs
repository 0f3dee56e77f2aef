mod context;

pub mod document;
pub mod list;
pub mod message;
pub mod prompt;
pub mod table;

pub use context::HandlerContext;
