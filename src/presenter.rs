use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How long a notice stays visible before it is cleared.
pub const NOTICE_DISMISS_AFTER: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: MessageKind,
}

/// UI seam for the submission flow. The core logic only talks to this
/// trait; the shipped implementation is [`TerminalPresenter`].
pub trait Presenter {
    fn show_success(&mut self, text: &str);
    fn show_error(&mut self, text: &str);
    fn set_busy(&mut self, busy: bool);
    fn reset_form(&mut self);
}

/// The message region next to the form. Holds at most one notice and
/// clears it after [`NOTICE_DISMISS_AFTER`], unless a newer notice has
/// replaced it in the meantime.
#[derive(Clone, Default)]
pub struct MessageRegion {
    inner: Arc<Mutex<RegionState>>,
}

#[derive(Default)]
struct RegionState {
    current: Option<Notice>,
    generation: u64,
}

impl MessageRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, text: &str, kind: MessageKind) {
        let generation = {
            let mut state = self.inner.lock().unwrap();
            state.generation += 1;
            state.current = Some(Notice {
                text: text.to_string(),
                kind,
            });
            state.generation
        };

        let inner = Arc::clone(&self.inner);
        let dismiss = tokio::time::sleep(NOTICE_DISMISS_AFTER);
        tokio::spawn(async move {
            dismiss.await;
            let mut state = inner.lock().unwrap();
            if state.generation == generation {
                state.current = None;
            }
        });
    }

    pub fn current(&self) -> Option<Notice> {
        self.inner.lock().unwrap().current.clone()
    }
}

const SUBMIT_LABEL: &str = "Send Message";
const SUBMIT_BUSY_LABEL: &str = "Sending...";

/// Terminal-backed presenter used by the binary.
pub struct TerminalPresenter {
    region: MessageRegion,
    busy: bool,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        TerminalPresenter {
            region: MessageRegion::new(),
            busy: false,
        }
    }

    pub fn region(&self) -> &MessageRegion {
        &self.region
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for TerminalPresenter {
    fn show_success(&mut self, text: &str) {
        println!("{}", text);
        self.region.show(text, MessageKind::Success);
    }

    fn show_error(&mut self, text: &str) {
        eprintln!("{}", text);
        self.region.show(text, MessageKind::Error);
    }

    fn set_busy(&mut self, busy: bool) {
        if self.busy == busy {
            return;
        }
        self.busy = busy;
        match busy {
            true => println!("[{}]", SUBMIT_BUSY_LABEL),
            false => println!("[{}]", SUBMIT_LABEL),
        }
    }

    fn reset_form(&mut self) {
        log::info!("Form inputs cleared");
    }
}
