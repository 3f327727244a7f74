//! Asset paths, section catalogue and the animation thresholds shared by
//! the hero sequence and the content screen.

pub const BACKGROUND_IMAGE: &str = "/assets/background.png";
pub const FRAME_IMAGE: &str = "/assets/frame.png";
pub const CREATURES_IMAGE: &str = "/assets/home-creatures.png";
pub const BUTTON_TEXTURE: &str = "/assets/button.png";
pub const BIRD_GIF: &str = "/assets/bird.gif";

/// Raw scroll depth (px) past which the "scroll down" hint is dismissed.
pub const SCROLL_HINT_DISMISS_PX: f64 = 10.0;

/// Content layer opacity above which it takes over pointer events.
pub const CONTENT_ACTIVE_OPACITY: f64 = 0.95;

/// Raw progress past which the content screen is considered shown.
pub const SHOW_CONTENT_PROGRESS: f64 = 0.8;

/// Bird progress that marks the fly-across as finished (scrolling down).
pub const BIRD_FINISH_AT: f64 = 0.9;

/// Bird progress below which the fly-across re-arms (scrolling up).
pub const BIRD_REARM_BELOW: f64 = 0.3;

/// Stagger of the nav button reveal windows over bird progress.
pub const BUTTON_STAGGER_BASE: f64 = 0.1;
pub const BUTTON_STAGGER_STEP: f64 = 0.1;
pub const BUTTON_REVEAL_WIDTH: f64 = 0.2;

pub struct Section {
    pub anchor: &'static str,
    pub label: &'static str,
    pub blurb: &'static str,
    pub tint: &'static str,
}

/// The four content panels; `anchor` doubles as the in-page scroll target
/// and `label` as the nav button text.
pub const SECTIONS: [Section; 4] = [
    Section {
        anchor: "portfolio",
        label: "PORTFOLIO",
        blurb: "Your amazing work goes here...",
        tint: "#a8ab7a",
    },
    Section {
        anchor: "blog",
        label: "BLOG",
        blurb: "Your thoughts and writings...",
        tint: "#9a9d6c",
    },
    Section {
        anchor: "about",
        label: "ABOUT ME",
        blurb: "Your story and background...",
        tint: "#c5ca91",
    },
    Section {
        anchor: "contact",
        label: "CONTACT",
        blurb: "Contact form or details here...",
        tint: "#b6b992",
    },
];
