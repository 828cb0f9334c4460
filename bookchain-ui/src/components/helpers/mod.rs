//! Common helper UI components

mod error_display;
mod loading_spinner;
mod page_container;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use page_container::PageContainer;
