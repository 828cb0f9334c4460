/// Image shown in place of a cover that failed to load.
pub const PLACEHOLDER_COVER_URI: &str = "https://via.placeholder.com/400x300?text=No+Cover";

/// Which image a book card is currently pointing at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoverSource {
    Remote(String),
    Placeholder,
}

impl CoverSource {
    pub fn new(uri: impl Into<String>) -> Self {
        CoverSource::Remote(uri.into())
    }

    pub fn src(&self) -> &str {
        match self {
            CoverSource::Remote(uri) => uri,
            CoverSource::Placeholder => PLACEHOLDER_COVER_URI,
        }
    }

    /// Record a load failure. Returns `true` if the source changed.
    ///
    /// A failing placeholder stays put so the element does not loop on errors.
    pub fn fail(&mut self) -> bool {
        match self {
            CoverSource::Remote(_) => {
                *self = CoverSource::Placeholder;
                true
            }
            CoverSource::Placeholder => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_falls_back_to_placeholder_once() {
        let mut cover = CoverSource::new("https://broken.example/cover.jpg");
        assert_eq!(cover.src(), "https://broken.example/cover.jpg");

        assert!(cover.fail());
        assert_eq!(cover.src(), PLACEHOLDER_COVER_URI);

        assert!(!cover.fail());
        assert_eq!(cover, CoverSource::Placeholder);
    }
}
