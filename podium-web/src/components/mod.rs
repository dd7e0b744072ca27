pub mod error_panel;
pub mod header;
pub mod loading;

pub use error_panel::ErrorPanel;
pub use header::Header;
pub use loading::Loading;
