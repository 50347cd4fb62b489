/// The one overlay that may be presented over the page. Projects are
/// referenced by their index in the profile's project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Verification(usize),
    Detail(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Verification,
    Detail,
}

/// Where on a project card a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTarget {
    Body,
    VerifiedBadge,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

/// Hover state of a tooltip trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hover {
    pub visible: bool,
}

impl Overlay {
    pub fn open(kind: OverlayKind, project: usize) -> Self {
        match kind {
            OverlayKind::Verification => Self::Verification(project),
            OverlayKind::Detail => Self::Detail(project),
        }
    }

    pub fn kind(&self) -> Option<OverlayKind> {
        match self {
            Self::None => None,
            Self::Verification(_) => Some(OverlayKind::Verification),
            Self::Detail(_) => Some(OverlayKind::Detail),
        }
    }

    pub fn target(&self, kind: OverlayKind) -> Option<usize> {
        match (self, kind) {
            (Self::Verification(i), OverlayKind::Verification) => Some(*i),
            (Self::Detail(i), OverlayKind::Detail) => Some(*i),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// A click on a card resolves to at most one overlay: the badge wins over
    /// the card body, and outbound links leave the page state alone.
    pub fn on_card_click(self, project: usize, target: CardTarget) -> Self {
        match target {
            CardTarget::Body => Self::open(OverlayKind::Detail, project),
            CardTarget::VerifiedBadge => Self::open(OverlayKind::Verification, project),
            CardTarget::Link => self,
        }
    }

    /// Closes the overlay only if it is of the given kind.
    pub fn close(self, kind: OverlayKind) -> Self {
        if self.kind() == Some(kind) {
            Self::None
        } else {
            self
        }
    }
}

impl Hover {
    pub fn on(self, event: PointerEvent) -> Self {
        match event {
            PointerEvent::Enter => Self { visible: true },
            PointerEvent::Leave => Self { visible: false },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let overlay = Overlay::default();
        assert!(!overlay.is_open());
        assert_eq!(overlay.target(OverlayKind::Detail), None);
        assert_eq!(overlay.target(OverlayKind::Verification), None);
    }

    #[test]
    fn test_open_then_close_detail() {
        for project in [0, 3, 5] {
            let overlay = Overlay::default().on_card_click(project, CardTarget::Body);
            assert_eq!(overlay.target(OverlayKind::Detail), Some(project));
            let overlay = overlay.close(OverlayKind::Detail);
            assert_eq!(overlay, Overlay::None);
        }
    }

    #[test]
    fn test_badge_opens_only_verification() {
        let overlay = Overlay::default().on_card_click(1, CardTarget::VerifiedBadge);
        assert_eq!(overlay.target(OverlayKind::Verification), Some(1));
        assert_eq!(overlay.target(OverlayKind::Detail), None);
    }

    #[test]
    fn test_link_click_changes_nothing() {
        assert_eq!(
            Overlay::default().on_card_click(2, CardTarget::Link),
            Overlay::None
        );
        let open = Overlay::Detail(4);
        assert_eq!(open.on_card_click(2, CardTarget::Link), open);
    }

    #[test]
    fn test_new_open_supersedes_previous() {
        let overlay = Overlay::default()
            .on_card_click(0, CardTarget::Body)
            .on_card_click(2, CardTarget::VerifiedBadge);
        assert_eq!(overlay, Overlay::Verification(2));
        assert_eq!(overlay.target(OverlayKind::Detail), None);
    }

    #[test]
    fn test_close_other_kind_is_noop() {
        let overlay = Overlay::Verification(0);
        assert_eq!(overlay.close(OverlayKind::Detail), overlay);
        assert_eq!(overlay.close(OverlayKind::Verification), Overlay::None);
        assert_eq!(Overlay::None.close(OverlayKind::Detail), Overlay::None);
    }

    #[test]
    fn test_hover_transitions() {
        let hover = Hover::default();
        assert!(!hover.visible);
        let hover = hover.on(PointerEvent::Enter);
        assert!(hover.visible);
        assert!(hover.on(PointerEvent::Enter).visible);
        let hover = hover.on(PointerEvent::Leave);
        assert!(!hover.visible);
        assert!(!hover.on(PointerEvent::Leave).visible);
    }
}
