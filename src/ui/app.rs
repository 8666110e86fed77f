use crate::config::Config;
use crate::deck::{Candidate, Decision, Rejected};
use crate::provider::ProviderError;
use crate::ui::gesture::DragGesture;
use crate::ui::session::{FetchTicket, Phase, Session};

/// Which half of the summary gallery is shown.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum GalleryTab {
    #[default]
    Liked,
    Disliked,
}

impl GalleryTab {
    pub fn toggled(self) -> Self {
        match self {
            GalleryTab::Liked => GalleryTab::Disliked,
            GalleryTab::Disliked => GalleryTab::Liked,
        }
    }

    pub fn decision(self) -> Decision {
        match self {
            GalleryTab::Liked => Decision::Like,
            GalleryTab::Disliked => Decision::Dislike,
        }
    }
}

pub struct App {
    should_quit: bool,
    session: Session,
    gallery: GalleryTab,
    /// In-progress mouse drag; never part of the session.
    drag: Option<DragGesture>,
    /// Outcome of the last user action, shown in the footer.
    notice: Option<String>,
    image_base_url: String,
    swipe_threshold: u16,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            session: Session::new(),
            gallery: GalleryTab::default(),
            drag: None,
            notice: None,
            image_base_url: config.api.image_base_url.clone(),
            swipe_threshold: config.ui.swipe_threshold,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn gallery_tab(&self) -> GalleryTab {
        self.gallery
    }

    pub fn drag(&self) -> Option<&DragGesture> {
        self.drag.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn image_url(&self, candidate: &Candidate) -> String {
        candidate.image_url(&self.image_base_url)
    }

    /// Kicks off the first fetch.
    pub fn start(&mut self) -> Option<FetchTicket> {
        self.track(|session| session.begin_fetch())
    }

    pub fn request_reset(&mut self) -> Option<FetchTicket> {
        self.gallery = GalleryTab::default();
        self.drag = None;
        self.track(|session| session.reset())
    }

    pub fn swipe(&mut self, decision: Decision) {
        let _ = self.track(|session| session.swipe(decision));
    }

    pub fn undo(&mut self) {
        if let Some(entry) = self.track(|session| session.undo()) {
            self.notice = Some(format!(
                "Undid {} on {}",
                entry.decision.label(),
                entry.candidate.id
            ));
        }
    }

    pub fn toggle_view(&mut self) {
        if self.session.phase() == Phase::Complete {
            self.gallery = self.gallery.toggled();
        }
    }

    pub fn on_fetch_complete(
        &mut self,
        generation: u64,
        result: Result<Vec<Candidate>, ProviderError>,
    ) {
        // Stale results are logged by the session and otherwise ignored.
        if self.session.apply_fetch(generation, result).is_ok() {
            self.gallery = GalleryTab::default();
        }
    }

    pub fn on_tick(&mut self) {}

    pub fn on_drag_start(&mut self, column: u16) {
        if self.session.phase() == Phase::Active {
            self.drag = Some(DragGesture::start(column));
        }
    }

    pub fn on_drag_move(&mut self, column: u16) {
        if let Some(drag) = self.drag.as_mut() {
            drag.move_to(column);
        }
    }

    pub fn on_drag_end(&mut self, column: u16) {
        let Some(mut drag) = self.drag.take() else {
            return;
        };
        drag.move_to(column);
        if let Some(decision) = drag.release(self.swipe_threshold) {
            self.swipe(decision);
        }
    }

    /// Runs a session operation, recording a rejection as the footer notice.
    fn track<T>(
        &mut self,
        op: impl FnOnce(&mut Session) -> Result<T, Rejected>,
    ) -> Option<T> {
        match op(&mut self.session) {
            Ok(value) => {
                self.notice = None;
                Some(value)
            }
            Err(rejected) => {
                tracing::debug!(%rejected, "Operation rejected");
                self.notice = Some(rejected.to_string());
                None
            }
        }
    }
}
