/// Class placed on the document root while dark mode is on.
pub const DARK_CLASS: &str = "dark";

/// Anything that can carry a CSS class marker, normally the `<html>` element.
pub trait ClassMarker {
    fn set_class(&self, class: &str, present: bool);
}

impl ClassMarker for web_sys::Element {
    fn set_class(&self, class: &str, present: bool) {
        if let Err(e) = self.class_list().toggle_with_force(class, present) {
            log::warn!("couldn't update root class {class}: {e:?}");
        }
    }
}

/// Session-only colour scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    dark: bool,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self.dark
    }

    pub fn toggled(self) -> Self {
        Self { dark: !self.dark }
    }

    pub fn toggle_label(self) -> &'static str {
        if self.dark {
            "☀️"
        } else {
            "🌙"
        }
    }

    pub fn apply(self, root: &impl ClassMarker) {
        root.set_class(DARK_CLASS, self.dark);
    }
}
