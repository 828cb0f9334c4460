//! Catalog view component - pure rendering, no data fetching
//!
//! Accepts `ReadStore<CatalogState>` and renders exactly one of the four
//! phases: loading, error, empty or the book grid.

use crate::components::book_card::BookCard;
use crate::components::helpers::{ErrorDisplay, LoadingSpinner, PageContainer};
use crate::components::icons::{AlertTriangleIcon, BookOpenIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::stores::catalog::{CatalogState, CatalogStateStoreExt};
use bookchain_common::{Address, Book, CatalogPhase, PurchaseControl};
use dioxus::prelude::*;

/// Catalog view
///
/// `viewer` is the connected wallet address, if any. It decides which cards
/// show "Your Book" and whether the empty state invites publishing.
#[component]
pub fn CatalogView(
    state: ReadStore<CatalogState>,
    viewer: Option<Address>,
    currency: String,
    on_purchase: EventHandler<u64>,
    // "Try Again" on the error state
    on_retry: EventHandler<()>,
) -> Element {
    let phase = state.phase().read().clone();

    rsx! {
        PageContainer {
            h1 { class: "text-3xl font-bold text-gray-900 mb-6", "Discover Books" }
            {match phase {
                CatalogPhase::Loading => rsx! {
                    LoadingSpinner { message: "Loading books...".to_string() }
                },
                CatalogPhase::Error(message) => rsx! {
                    div { class: "text-center py-12",
                        AlertTriangleIcon { class: "w-12 h-12 text-red-400 mx-auto mb-4" }
                        ErrorDisplay { message }
                        div { class: "mt-4",
                            Button {
                                variant: ButtonVariant::Primary,
                                size: ButtonSize::Medium,
                                onclick: move |_| on_retry.call(()),
                                "Try Again"
                            }
                        }
                    }
                },
                CatalogPhase::Empty => rsx! {
                    EmptyCatalog { show_publish_prompt: viewer.is_some() }
                },
                CatalogPhase::Populated(books) => rsx! {
                    BookGrid {
                        books,
                        viewer,
                        currency,
                        on_purchase,
                    }
                },
            }}
        }
    }
}

#[component]
fn EmptyCatalog(show_publish_prompt: bool) -> Element {
    rsx! {
        div { class: "text-center py-16", "data-testid": "catalog-empty",
            div { class: "text-gray-400 mb-4",
                BookOpenIcon { class: "w-16 h-16 mx-auto" }
            }
            h3 { class: "text-xl font-medium text-gray-600", "No books published yet" }
            if show_publish_prompt {
                p { class: "mt-2 text-gray-500", "Be the first to publish a book on BookChain!" }
            }
        }
    }
}

#[component]
fn BookGrid(
    books: Vec<Book>,
    viewer: Option<Address>,
    currency: String,
    on_purchase: EventHandler<u64>,
) -> Element {
    // Resolve each card's control up front; cards never look at the viewer.
    let cards: Vec<(u64, Book, PurchaseControl)> = books
        .into_iter()
        .map(|book| {
            let control = PurchaseControl::for_book(&book, viewer.as_ref());
            (book.id, book, control)
        })
        .collect();

    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
            for (id, book, control) in cards {
                BookCard {
                    key: "{id}",
                    book,
                    control,
                    currency: currency.clone(),
                    on_purchase,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookchain_common::LOAD_ERROR_MESSAGE;

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        phase: CatalogPhase,
        viewer: Option<Address>,
    }

    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        let phase = props.phase.clone();
        let state = use_store(move || CatalogState { phase });
        rsx! {
            CatalogView {
                state,
                viewer: props.viewer.clone(),
                currency: "MATIC".to_string(),
                on_purchase: |_| {},
                on_retry: |_| {},
            }
        }
    }

    fn render(phase: CatalogPhase, viewer: Option<Address>) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { phase, viewer });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn book(id: u64, author: &str) -> Book {
        Book {
            id,
            title: format!("Book {id}"),
            description: "desc".to_string(),
            cover_image_uri: "https://example.com/cover.jpg".to_string(),
            content_uri: "https://example.com/book.pdf".to_string(),
            author: Address::new(author),
            price: 0.1,
            is_published: true,
        }
    }

    #[test]
    fn loading_shows_only_the_spinner() {
        let html = render(CatalogPhase::Loading, None);
        assert!(html.contains("Loading books..."));
        assert!(!html.contains("Try Again"));
        assert!(!html.contains("No books published yet"));
    }

    #[test]
    fn error_shows_message_and_retry() {
        let html = render(CatalogPhase::Error(LOAD_ERROR_MESSAGE.to_string()), None);
        assert!(html.contains(LOAD_ERROR_MESSAGE));
        assert!(html.contains("Try Again"));
        assert!(!html.contains("Loading books..."));
    }

    #[test]
    fn empty_without_wallet_has_no_publish_prompt() {
        let html = render(CatalogPhase::Empty, None);
        assert!(html.contains("No books published yet"));
        assert!(!html.contains("Be the first to publish"));
    }

    #[test]
    fn empty_with_wallet_invites_publishing() {
        let html = render(CatalogPhase::Empty, Some(Address::new("0xabc")));
        assert!(html.contains("Be the first to publish a book on BookChain!"));
    }

    #[test]
    fn populated_marks_own_books() {
        let html = render(
            CatalogPhase::Populated(vec![book(1, "0xABC"), book(2, "0xdef")]),
            Some(Address::new("0xabc")),
        );
        assert!(html.contains("Book 1"));
        assert!(html.contains("Book 2"));
        assert_eq!(html.matches("Your Book").count(), 1);
        assert_eq!(html.matches("Purchase").count(), 1);
        assert!(html.contains("0.1 MATIC"));
    }

    #[test]
    fn only_the_owned_card_disables_its_button() {
        let html = render(
            CatalogPhase::Populated(vec![book(1, "0xABC"), book(2, "0xdef")]),
            Some(Address::new("0xabc")),
        );
        assert_eq!(html.matches("<button").count(), 2);
        assert_eq!(html.matches("disabled=true").count(), 1);
        assert_eq!(html.matches("aria-disabled=\"true\"").count(), 1);

        let owned = html.find("Your Book").unwrap();
        let owned_button = html[..owned].rfind("<button").unwrap();
        assert!(html[owned_button..owned].contains("disabled=true"));
    }

    #[test]
    fn populated_without_wallet_offers_purchase_everywhere() {
        let html = render(
            CatalogPhase::Populated(vec![book(1, "0xabc"), book(2, "0xdef")]),
            None,
        );
        assert!(!html.contains("Your Book"));
        assert_eq!(html.matches("Purchase").count(), 2);
        assert!(!html.contains("disabled=true"));
    }
}
