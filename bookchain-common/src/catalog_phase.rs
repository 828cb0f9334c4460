use crate::Book;

/// Message shown when the catalog could not be fetched. The underlying cause
/// is logged, never displayed.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load books. Please try again later.";

/// The four mutually exclusive states of a catalog view.
///
/// `Loading` is the initial phase. A fetch resolves it exactly once into one
/// of the other three; nothing moves a view back to `Loading` except tearing
/// it down and creating a new one.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogPhase {
    #[default]
    Loading,
    Error(String),
    Empty,
    Populated(Vec<Book>),
}

impl CatalogPhase {
    /// Resolve a finished fetch. Errors become the generic user-facing message.
    pub fn from_result<E>(result: Result<Vec<Book>, E>) -> Self {
        match result {
            Ok(books) if books.is_empty() => CatalogPhase::Empty,
            Ok(books) => CatalogPhase::Populated(books),
            Err(_) => CatalogPhase::Error(LOAD_ERROR_MESSAGE.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogPhase::Loading)
    }

    /// Books to render; empty for every phase except `Populated`.
    pub fn books(&self) -> &[Book] {
        match self {
            CatalogPhase::Populated(books) => books,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Address;

    fn sample(id: u64) -> Book {
        Book {
            id,
            title: format!("Book {id}"),
            description: String::new(),
            cover_image_uri: String::new(),
            content_uri: String::new(),
            author: Address::new("0x1"),
            price: 0.1,
            is_published: true,
        }
    }

    #[test]
    fn default_phase_is_loading() {
        assert!(CatalogPhase::default().is_loading());
    }

    #[test]
    fn zero_records_resolve_to_empty() {
        let phase = CatalogPhase::from_result::<String>(Ok(vec![]));
        assert_eq!(phase, CatalogPhase::Empty);
        assert!(phase.books().is_empty());
    }

    #[test]
    fn records_resolve_to_populated_in_source_order() {
        let phase = CatalogPhase::from_result::<String>(Ok(vec![sample(2), sample(1)]));
        let ids: Vec<u64> = phase.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(matches!(phase, CatalogPhase::Populated(_)));
    }

    #[test]
    fn failures_resolve_to_generic_error() {
        let phase = CatalogPhase::from_result(Err("connection reset"));
        assert_eq!(phase, CatalogPhase::Error(LOAD_ERROR_MESSAGE.to_string()));
        assert!(!phase.is_loading());
    }
}
