//! Shared UI components

pub mod app_layout;
pub mod book_card;
pub mod button;
pub mod catalog;
pub mod cover_image;
pub mod helpers;
pub mod icons;
pub mod title_bar;
pub mod upload_form;
pub mod wallet_button;

pub use app_layout::AppLayoutView;
pub use book_card::BookCard;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use catalog::CatalogView;
pub use cover_image::CoverImage;
pub use helpers::{ErrorDisplay, LoadingSpinner, PageContainer};
pub use icons::{AlertTriangleIcon, BookOpenIcon, LoaderIcon, UploadIcon, WalletIcon};
pub use title_bar::{NavItem, TitleBarView};
pub use upload_form::UploadFormView;
pub use wallet_button::WalletButtonView;
