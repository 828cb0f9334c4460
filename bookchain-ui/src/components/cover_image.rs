//! Book cover with placeholder fallback

use bookchain_common::CoverSource;
use dioxus::prelude::*;
use tracing::debug;

/// Cover image that swaps to the placeholder when the remote image fails.
///
/// The failure stays local to the card: nothing is reported upward and the
/// catalog phase is untouched.
#[component]
pub fn CoverImage(uri: String, alt: String) -> Element {
    let cover = use_signal(|| CoverSource::new(uri.clone()));
    rsx! {
        CoverFrame { cover, alt }
    }
}

/// Renders whichever image `cover` currently points at
#[component]
fn CoverFrame(cover: Signal<CoverSource>, alt: String) -> Element {
    let src = cover.read().src().to_string();

    rsx! {
        img {
            src: "{src}",
            alt: "{alt}",
            class: "w-full h-full object-cover",
            onerror: move |_| record_cover_failure(cover),
        }
    }
}

fn record_cover_failure(mut cover: Signal<CoverSource>) {
    let failed = cover.peek().src().to_string();
    if cover.write().fail() {
        debug!("Cover image failed to load, using placeholder: {failed}");
    }
}
