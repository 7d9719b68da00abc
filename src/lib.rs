pub mod environment;
pub mod paths;
pub mod platform;
pub mod process;
pub mod setup;

// Re-export commonly used types
pub use environment::Environment;
pub use platform::Platform;
