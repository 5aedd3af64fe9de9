pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{notice, NoticeKind};
pub use layouts::{desktop_layout, Nav};
