//! Book card component - pure view with callbacks

use crate::components::cover_image::CoverImage;
use crate::components::{Button, ButtonSize, ButtonVariant};
use bookchain_common::{Book, PurchaseControl};
use dioxus::prelude::*;

/// One book in the catalog grid
#[component]
pub fn BookCard(
    book: Book,
    control: PurchaseControl,
    currency: String,
    // Called with the book id when the purchase button is pressed
    on_purchase: EventHandler<u64>,
) -> Element {
    let book_id = book.id;
    let price = book.price_label(&currency);
    let label = control.label();

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-md overflow-hidden transition-transform hover:scale-105",
            "data-testid": "book-card",
            div { class: "h-48 overflow-hidden",
                CoverImage { uri: book.cover_image_uri.clone(), alt: book.title.clone() }
            }
            div { class: "p-4",
                h3 {
                    class: "text-lg font-semibold text-gray-900 mb-2 truncate",
                    title: "{book.title}",
                    "{book.title}"
                }
                p { class: "text-gray-600 text-sm mb-3 line-clamp-2", "{book.description}" }
                div { class: "flex justify-between items-center",
                    span { class: "text-purple-600 font-medium", "{price}" }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Small,
                        disabled: control.is_disabled(),
                        onclick: move |_| on_purchase.call(book_id),
                        "{label}"
                    }
                }
            }
        }
    }
}
