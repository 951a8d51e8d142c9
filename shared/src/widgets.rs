//! State machines behind the account dropdown and the carousel. Neither
//! touches the network or the document.

/// Viewport-relative box of the dropdown trigger at click time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerRect {
    pub left: f64,
    pub bottom: f64,
}

/// Page coordinates the menu is placed at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuPosition {
    pub left: f64,
    pub top: f64,
}

impl MenuPosition {
    pub fn style(&self) -> String {
        format!("display: block; left: {}px; top: {}px;", self.left, self.top)
    }
}

/// Where a document click landed relative to the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Trigger,
    Menu,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DropdownMenu {
    position: Option<MenuPosition>,
}

impl DropdownMenu {
    pub fn is_open(&self) -> bool {
        self.position.is_some()
    }

    pub fn position(&self) -> Option<MenuPosition> {
        self.position
    }

    /// Trigger click. Opening places the menu under the trigger.
    pub fn toggle(&mut self, trigger: TriggerRect, scroll_y: f64) {
        self.position = if self.is_open() {
            None
        } else {
            Some(MenuPosition {
                left: trigger.left,
                top: trigger.bottom + scroll_y,
            })
        };
    }

    /// Document-level click. Only clicks outside both elements close it; the
    /// trigger's own click is already handled by `toggle`.
    pub fn document_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Outside {
            self.position = None;
        }
    }

    pub fn close(&mut self) {
        self.position = None;
    }
}

/// Index into a fixed number of slides, wrapping both ways
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `None` only when there are no slides
    pub fn active(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.active)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active() == Some(index)
    }

    pub fn next(&mut self) {
        if !self.is_empty() {
            self.active = (self.active + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if !self.is_empty() {
            self.active = (self.active + self.len - 1) % self.len;
        }
    }

    /// Keeps the current slide when it still exists after a resize
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.active >= len {
            self.active = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIGGER: TriggerRect = TriggerRect {
        left: 120.0,
        bottom: 48.0,
    };

    #[test]
    fn test_trigger_click_toggles_once() {
        let mut menu = DropdownMenu::default();
        assert!(!menu.is_open());

        menu.toggle(TRIGGER, 0.0);
        assert!(menu.is_open());

        menu.toggle(TRIGGER, 0.0);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_position_follows_trigger_and_scroll() {
        let mut menu = DropdownMenu::default();
        menu.toggle(TRIGGER, 300.0);
        assert_eq!(
            menu.position(),
            Some(MenuPosition {
                left: 120.0,
                top: 348.0
            })
        );
    }

    #[test]
    fn test_outside_click_closes() {
        let mut menu = DropdownMenu::default();
        menu.toggle(TRIGGER, 0.0);
        menu.document_click(ClickTarget::Outside);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_inside_clicks_keep_menu_open() {
        let mut menu = DropdownMenu::default();
        menu.toggle(TRIGGER, 0.0);

        menu.document_click(ClickTarget::Menu);
        assert!(menu.is_open());

        menu.document_click(ClickTarget::Trigger);
        assert!(menu.is_open());
    }

    #[test]
    fn test_outside_click_when_closed_is_noop() {
        let mut menu = DropdownMenu::default();
        menu.document_click(ClickTarget::Outside);
        assert_eq!(menu, DropdownMenu::default());
    }

    #[test]
    fn test_menu_style() {
        let position = MenuPosition {
            left: 10.0,
            top: 20.5,
        };
        assert_eq!(position.style(), "display: block; left: 10px; top: 20.5px;");
    }

    #[test]
    fn test_carousel_full_cycle_returns_to_start() {
        for len in 1..6 {
            let mut carousel = Carousel::new(len);
            for _ in 0..len {
                carousel.next();
            }
            assert_eq!(carousel.active(), Some(0));
        }
    }

    #[test]
    fn test_carousel_prev_wraps() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.active(), Some(2));
        carousel.next();
        assert_eq!(carousel.active(), Some(0));
    }

    #[test]
    fn test_exactly_one_active_slide() {
        let mut carousel = Carousel::new(4);
        let moves = [true, true, false, true, true, true, false, false, false];
        for forward in moves {
            if forward {
                carousel.next();
            } else {
                carousel.prev();
            }
            let active = (0..carousel.len()).filter(|i| carousel.is_active(*i)).count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn test_empty_carousel_ignores_events() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.active(), None);
        assert!(!carousel.is_active(0));
    }

    #[test]
    fn test_resize_resets_out_of_range_index() {
        let mut carousel = Carousel::new(5);
        carousel.prev();
        carousel.resize(3);
        assert_eq!(carousel.active(), Some(0));

        carousel.next();
        carousel.resize(6);
        assert_eq!(carousel.active(), Some(1));
    }
}
