pub mod desktop;

pub use desktop::{desktop_layout, Nav};
