//! Hero video pacing: every `.hero-video-media` element is pinned to a slow
//! playback rate. Players like to reset the rate while loading, so it is
//! reasserted on each media lifecycle event and once more shortly after bind.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlMediaElement};

use crate::config::Config;
use crate::dom::Listener;

const RATE_EVENTS: [&str; 3] = ["loadedmetadata", "loadeddata", "play"];
const SETTLE_DELAY_MS: u32 = 100;

pub struct VideoRate {
    _listeners: Vec<Listener>,
    _settle: Vec<Timeout>,
}

pub fn init(document: &Document, config: &Config) -> Option<VideoRate> {
    let nodes = document.query_selector_all(".hero-video-media").ok()?;
    if nodes.length() == 0 {
        return None;
    }

    let rate = config.video_playback_rate;
    let mut listeners = Vec::new();
    let mut settle = Vec::new();

    for i in 0..nodes.length() {
        let Some(video) = nodes
            .get(i)
            .and_then(|n| n.dyn_into::<HtmlMediaElement>().ok())
        else {
            continue;
        };

        // immediately, so the first painted frames are already slowed
        video.set_playback_rate(rate);

        for event in RATE_EVENTS {
            let target = video.clone();
            listeners.push(Listener::new(&video, event, move |_| {
                target.set_playback_rate(rate)
            }));
        }

        let target = video.clone();
        settle.push(Timeout::new(SETTLE_DELAY_MS, move || {
            target.set_playback_rate(rate)
        }));
    }

    log::debug!("video: pinned {} element(s) to {}x", settle.len(), rate);

    Some(VideoRate {
        _listeners: listeners,
        _settle: settle,
    })
}
