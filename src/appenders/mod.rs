//! Appender implementations

pub mod memory;
pub mod stream;

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;

pub use memory::MemoryAppender;
pub use stream::StreamAppender;

#[cfg(feature = "console")]
pub use console::ConsoleAppender;
#[cfg(feature = "file")]
pub use file::FileAppender;

// Re-export the trait next to its implementations
pub use crate::core::Appender;
