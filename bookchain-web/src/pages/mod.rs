mod catalog;
mod layout;
mod publish;

pub use catalog::Catalog;
pub use layout::AppLayout;
pub use publish::Publish;
