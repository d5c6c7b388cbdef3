/// What happens to the submit button after a valid submission has been
/// handed off to the external form endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitReset {
    /// Restore the button after the given delay regardless of outcome,
    /// so a stalled submission never leaves the form stuck on "Sending...".
    Watchdog { ms: u32 },
    /// Leave the button alone; the endpoint redirect reloads the page.
    PageReload,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Scroll offset in px past which the navbar takes its "scrolled" style.
    pub navbar_scroll_threshold: f64,
    /// Intersection ratio at which a `.reveal` element becomes visible.
    pub reveal_threshold: f64,
    /// Delay between hero line rotations.
    pub hero_interval_ms: u32,
    /// Forced playback rate for `.hero-video-media` elements.
    pub video_playback_rate: f64,
    /// Extra clearance under the navbar when scrolling to an anchor.
    pub anchor_margin_px: i32,
    pub submit_reset: SubmitReset,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            navbar_scroll_threshold: 50.0,
            reveal_threshold: 0.2,
            hero_interval_ms: 5000,
            video_playback_rate: 0.55,
            anchor_margin_px: 20,
            submit_reset: SubmitReset::Watchdog { ms: 5000 },
        }
    }
}
