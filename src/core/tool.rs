use super::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Pencil,
    Line,
    Color,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Pencil, Tool::Line, Tool::Color];

    /// Element id of the tool bar button.
    pub fn id(self) -> &'static str {
        match self {
            Tool::Pencil => "pencil",
            Tool::Line => "line",
            Tool::Color => "color",
        }
    }

    pub fn from_id(id: &str) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == id)
            .ok_or_else(|| Error::UnknownTool(id.to_string()))
    }
}

/// Exclusive tool bar selection: at most one tool is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToolSelection {
    selected: Option<Tool>,
}

impl ToolSelection {
    pub fn new(selected: Option<Tool>) -> Self {
        Self { selected }
    }

    #[inline]
    pub fn selected(&self) -> Option<Tool> {
        self.selected
    }

    #[inline]
    pub fn is_selected(&self, tool: Tool) -> bool {
        self.selected == Some(tool)
    }

    /// Clicking the active tool releases it; any other tool replaces it.
    pub fn click(self, tool: Tool) -> Self {
        if self.is_selected(tool) {
            Self { selected: None }
        } else {
            Self {
                selected: Some(tool),
            }
        }
    }
}
