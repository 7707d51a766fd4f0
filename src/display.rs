//! Transient status messages for the bound forms.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

pub const SUCCESS_COLOR: &str = "green";
pub const ERROR_COLOR: &str = "crimson";

/// How long a status message stays visible.
const CLEAR_AFTER: Duration = Duration::from_millis(5000);

/// A region dedicated to transient status text. Clones share state, so a
/// handle kept by the caller observes what the controller writes.
#[derive(Clone, Debug, Default)]
pub struct MessageRegion {
    state: Arc<Mutex<RegionState>>,
}

#[derive(Debug, Default)]
struct RegionState {
    text: String,
    color: &'static str,
}

impl MessageRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.lock().text.clone()
    }

    pub fn color(&self) -> &'static str {
        self.lock().color
    }

    fn lock(&self) -> MutexGuard<'_, RegionState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Show a transient status message. Without a bound region the text goes
/// straight to stderr. The region text is cleared 5 s later by a spawned
/// one-shot task; the task is not cancellable, so two `show` calls within
/// the window leave two clear tasks racing and the later-firing one wins.
pub fn show(region: Option<&MessageRegion>, text: &str, is_error: bool) {
    let Some(region) = region else {
        eprintln!("{text}");
        return;
    };

    {
        let mut state = region.lock();
        state.text = text.to_string();
        state.color = if is_error { ERROR_COLOR } else { SUCCESS_COLOR };
    }

    let region = region.clone();
    tokio::spawn(async move {
        tokio::time::sleep(CLEAR_AFTER).await;
        region.lock().text.clear();
    });
}
