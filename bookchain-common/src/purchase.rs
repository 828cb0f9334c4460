use crate::{Address, Book};

/// State of the per-book purchase button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurchaseControl {
    /// The viewer wrote this book. Disabled.
    Owned,
    /// Anyone else, including a viewer with no wallet connected.
    Available,
}

impl PurchaseControl {
    pub fn for_book(book: &Book, viewer: Option<&Address>) -> Self {
        if book.is_authored_by(viewer) {
            PurchaseControl::Owned
        } else {
            PurchaseControl::Available
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PurchaseControl::Owned => "Your Book",
            PurchaseControl::Available => "Purchase",
        }
    }

    pub fn is_disabled(self) -> bool {
        self == PurchaseControl::Owned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authored_by(author: &str) -> Book {
        Book {
            id: 1,
            title: "t".to_string(),
            description: "d".to_string(),
            cover_image_uri: String::new(),
            content_uri: String::new(),
            author: Address::new(author),
            price: 0.1,
            is_published: true,
        }
    }

    #[test]
    fn author_in_any_casing_sees_owned() {
        let book = authored_by("0x1234567890ABCDEF1234567890abcdef12345678");
        for viewer in [
            "0x1234567890abcdef1234567890abcdef12345678",
            "0X1234567890ABCDEF1234567890ABCDEF12345678",
            "0x1234567890ABCDEF1234567890abcdef12345678",
        ] {
            let control = PurchaseControl::for_book(&book, Some(&Address::new(viewer)));
            assert_eq!(control, PurchaseControl::Owned, "viewer {viewer}");
            assert!(control.is_disabled());
            assert_eq!(control.label(), "Your Book");
        }
    }

    #[test]
    fn other_viewers_can_purchase() {
        let book = authored_by("0xaaaa");
        let control = PurchaseControl::for_book(&book, Some(&Address::new("0xbbbb")));
        assert_eq!(control, PurchaseControl::Available);
        assert!(!control.is_disabled());
        assert_eq!(control.label(), "Purchase");
    }

    #[test]
    fn no_wallet_can_purchase() {
        let book = authored_by("0xaaaa");
        assert_eq!(
            PurchaseControl::for_book(&book, None),
            PurchaseControl::Available
        );
    }
}
