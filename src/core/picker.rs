/// CSS `visibility` of the color-picker panel container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelVisibility {
    Visible,
    #[default]
    Hidden,
}

impl PanelVisibility {
    #[inline]
    pub fn as_css(self) -> &'static str {
        match self {
            PanelVisibility::Visible => "visible",
            PanelVisibility::Hidden => "hidden",
        }
    }
}

/// Presentation state owned by the page: whether the picker panel shows and
/// whether the color tool carries the `selected` marker.
///
/// The web layer never reads this back from the DOM; it builds the target
/// state here and writes both fields out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PickerState {
    pub panel: PanelVisibility,
    pub color_selected: bool,
}

impl PickerState {
    /// Panel shown, color tool marked.
    pub const fn opened() -> Self {
        Self {
            panel: PanelVisibility::Visible,
            color_selected: true,
        }
    }

    /// Panel hidden, color tool unmarked.
    pub const fn closed() -> Self {
        Self {
            panel: PanelVisibility::Hidden,
            color_selected: false,
        }
    }

    pub fn open(&mut self) {
        *self = Self::opened();
    }

    /// "Pick color" click. Total and idempotent: the prior state is irrelevant.
    pub fn pick(&mut self) {
        *self = Self::closed();
    }
}
