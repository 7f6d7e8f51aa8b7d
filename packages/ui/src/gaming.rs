use dioxus::prelude::*;

use api::{ApiStatus, GamingFeed, VideoSummary, ViewCount};

use crate::theme::Palette;

const GAMING_CSS: Asset = asset!("/assets/styling/gaming.css");

pub const BANNER_HEADING: &str = "Gaming";
pub const FAILURE_HEADING: &str = "Oops! Something Went Wrong";
pub const FAILURE_BODY: &str =
    "We are having some trouble to complete your request. Please try again.";
pub const RETRY_LABEL: &str = "Retry";

/// Which view a status renders. The theme only restyles the chosen view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Loader,
    Grid,
    Failure,
    Nothing,
}

impl Branch {
    pub fn for_status(status: ApiStatus) -> Self {
        match status {
            ApiStatus::InProgress => Branch::Loader,
            ApiStatus::Success => Branch::Grid,
            ApiStatus::Failure => Branch::Failure,
            ApiStatus::Initial => Branch::Nothing,
        }
    }
}

pub fn video_href(id: &str) -> String {
    format!("/videos/{id}")
}

/// Ids may be empty or repeated in a lenient payload; the position keeps
/// sibling keys unique.
fn card_key(idx: usize, id: &str) -> String {
    format!("{idx}-{id}")
}

pub fn watching_caption(count: &ViewCount) -> String {
    format!("{count} Watching Worldwide")
}

/// Trending gaming page: owns the feed state and drives the catalog request.
///
/// Fetches once on mount; the failure view's Retry button runs the same path.
#[component]
pub fn GamingPage() -> Element {
    let dark = crate::use_theme()().is_dark;
    let catalog = crate::use_catalog();
    let credentials = crate::use_credentials();

    let mut feed = use_signal(GamingFeed::new);

    let load = use_callback(move |_: ()| {
        let ticket = feed.write().start();
        let catalog = catalog.clone();
        let credentials = credentials.clone();
        spawn(async move {
            let outcome = api::load_gaming_videos(&catalog, credentials.provider()).await;
            feed.write().apply(ticket, outcome);
        });
    });

    use_effect(move || load.call(()));

    let (status, videos) = {
        let state = feed.read();
        let videos = state
            .visible_videos()
            .map(<[VideoSummary]>::to_vec)
            .unwrap_or_default();
        (state.status(), videos)
    };

    rsx! {
        document::Link { rel: "stylesheet", href: GAMING_CSS }

        GamingView {
            status,
            videos,
            dark,
            on_retry: move |_| load.call(()),
        }
    }
}

/// Pure rendering of the page for a given status, list and theme.
#[component]
pub fn GamingView(
    status: ApiStatus,
    videos: Vec<VideoSummary>,
    dark: bool,
    on_retry: EventHandler<()>,
) -> Element {
    let palette = Palette::for_theme(dark);

    rsx! {
        div {
            class: palette.class("gaming_page"),
            "data-testid": "gaming",
            "data-status": status.as_str(),
            match Branch::for_status(status) {
                Branch::Loader => rsx! { LoaderView { dark } },
                Branch::Grid => rsx! { SuccessView { videos, dark } },
                Branch::Failure => rsx! { FailureView { dark, on_retry } },
                Branch::Nothing => rsx! {},
            }
        }
    }
}

#[component]
fn LoaderView(dark: bool) -> Element {
    let palette = Palette::for_theme(dark);

    rsx! {
        div { class: "loader_container", "data-testid": "loader",
            div { class: "three_dots", style: "width: 50px; height: 50px;",
                for i in 0..3 {
                    span {
                        key: "{i}",
                        class: "dot",
                        style: "background-color: {palette.loader_color};",
                    }
                }
            }
        }
    }
}

#[component]
fn FailureView(dark: bool, on_retry: EventHandler<()>) -> Element {
    let palette = Palette::for_theme(dark);

    rsx! {
        div { class: "failure_container",
            img { class: "failure_image", src: palette.failure_image, alt: "failure view" }
            h1 { class: palette.class("failure_heading"), {FAILURE_HEADING} }
            p { class: "failure_body", {FAILURE_BODY} }
            button {
                class: "btn primary",
                r#type: "button",
                onclick: move |_| on_retry.call(()),
                {RETRY_LABEL}
            }
        }
    }
}

#[component]
fn SuccessView(videos: Vec<VideoSummary>, dark: bool) -> Element {
    let palette = Palette::for_theme(dark);
    let cards: Vec<(String, VideoSummary)> = videos
        .into_iter()
        .enumerate()
        .map(|(idx, video)| (card_key(idx, &video.id), video))
        .collect();

    rsx! {
        div { class: palette.class("banner"), "data-testid": "banner",
            div { class: palette.class("trending_icon"), "🎮" }
            h1 { class: palette.class("banner_heading"), {BANNER_HEADING} }
        }
        ul { class: "gaming_grid",
            for (key, video) in cards {
                VideoCard { key: "{key}", video, dark }
            }
        }
    }
}

#[component]
fn VideoCard(video: VideoSummary, dark: bool) -> Element {
    let palette = Palette::for_theme(dark);
    let caption = watching_caption(&video.view_count);

    rsx! {
        li { class: "video_card",
            Link { class: "video_link", to: video_href(&video.id),
                img { class: "thumbnail", src: "{video.thumbnail_url}", alt: "video thumbnail" }
                div { class: "video_details",
                    p { class: palette.class("video_title"), "{video.title}" }
                    p { class: "video_caption", "{caption}" }
                }
            }
        }
    }
}
