pub mod achievements;
pub mod header;
pub mod level;
pub mod nutrition;
pub mod statusbar;
pub mod streak;

use ratatui::layout::Alignment;

use crate::i18n::Translator;
use crate::tui::theme::Theme;

/// Theme and translation lookup, passed explicitly into every widget.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub theme: &'a Theme,
    pub t: &'a Translator,
}

impl<'a> ViewContext<'a> {
    pub fn new(theme: &'a Theme, t: &'a Translator) -> Self {
        Self { theme, t }
    }

    pub fn alignment(&self) -> Alignment {
        if self.t.is_rtl() {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }
}
