// Content host - owns the one child view shown in the content area

use crate::views::{ChildView, Embedding, ViewKind};
use tracing::{debug, info};

#[derive(Default)]
pub struct ViewHost {
    active: Option<Box<dyn ChildView>>,
}

impl ViewHost {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Replaces the hosted view.
    ///
    /// The previous view is closed and dropped before `view` is stored, then
    /// `view` is docked into the host region without its own chrome and shown.
    pub fn open(&mut self, mut view: Box<dyn ChildView>) {
        if let Some(mut previous) = self.active.take() {
            debug!("closing hosted view {:?}", previous.kind());
            previous.close();
        }

        view.embed(Embedding::docked());
        view.show();
        info!("hosting view {:?}", view.kind());
        self.active = Some(view);
    }

    /// Closes and drops the hosted view, leaving the host empty.
    pub fn close_active(&mut self) {
        if let Some(mut view) = self.active.take() {
            debug!("closing hosted view {:?} on shutdown", view.kind());
            view.close();
        }
    }

    pub fn active(&self) -> Option<&dyn ChildView> {
        self.active.as_deref()
    }

    pub fn active_mut(&mut self) -> Option<&mut (dyn ChildView + 'static)> {
        self.active.as_deref_mut()
    }

    pub fn active_kind(&self) -> Option<ViewKind> {
        self.active.as_ref().map(|view| view.kind())
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_none()
    }
}

impl Drop for ViewHost {
    fn drop(&mut self) {
        self.close_active();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing::{ProbeLog, ProbeView};
    use crate::views::ViewState;

    #[test]
    fn empty_host_has_no_view() {
        let host = ViewHost::new();
        assert!(host.is_empty());
        assert_eq!(host.active_kind(), None);
    }

    #[test]
    fn open_docks_and_shows_the_view() {
        let log = ProbeLog::default();
        let mut host = ViewHost::new();
        host.open(ProbeView::boxed(ViewKind::Album, &log));

        let view = host.active().expect("hosted view");
        assert_eq!(view.state(), ViewState::Shown);
        assert_eq!(view.lifecycle().embedding, Some(Embedding::docked()));
        assert!(!Embedding::docked().chrome);
        assert!(Embedding::docked().fill);
    }

    #[test]
    fn replacing_closes_the_previous_view_first() {
        let log = ProbeLog::default();
        let mut host = ViewHost::new();
        host.open(ProbeView::boxed(ViewKind::PlayMusic, &log));
        host.open(ProbeView::boxed(ViewKind::Artist, &log));

        assert_eq!(host.active_kind(), Some(ViewKind::Artist));
        assert_eq!(log.closed(), vec![ViewKind::PlayMusic]);
    }

    #[test]
    fn reopening_the_same_kind_still_swaps_instances() {
        let log = ProbeLog::default();
        let mut host = ViewHost::new();
        host.open(ProbeView::boxed(ViewKind::Album, &log));
        host.open(ProbeView::boxed(ViewKind::Album, &log));

        assert_eq!(log.closed(), vec![ViewKind::Album]);
        assert_eq!(log.shown(), vec![ViewKind::Album, ViewKind::Album]);
    }

    #[test]
    fn dropping_the_host_closes_what_it_holds() {
        let log = ProbeLog::default();
        {
            let mut host = ViewHost::new();
            host.open(ProbeView::boxed(ViewKind::Artist, &log));
        }
        assert_eq!(log.closed(), vec![ViewKind::Artist]);
    }

    #[test]
    fn close_active_runs_once() {
        let log = ProbeLog::default();
        let mut host = ViewHost::new();
        host.open(ProbeView::boxed(ViewKind::PlayMusic, &log));
        host.close_active();
        host.close_active();
        drop(host);

        assert_eq!(log.closed(), vec![ViewKind::PlayMusic]);
    }
}
