// Element ids, class names and CSS properties the host page provides.

// Color picker
pub const COLOR_TOOL_ID: &str = "color";
pub const COLOR_PICKER_ID: &str = "color-picker"; // its parent is the panel container
pub const PICK_COLOR_ID: &str = "pick-color";
pub const SWATCH_ID: &str = "color-picker-color";
pub const CHANNEL_INPUT_CLASS: &str = "color-picker-color";

// Tool bar
pub const TOOL_CLASS: &str = "tool";
pub const SELECTED_CLASS: &str = "selected";

// Canvas and resizing
pub const CANVAS_ID: &str = "canvas";
pub const RESIZER_CLASS: &str = "resizer";
pub const SKETCH_ID: &str = "canvas-sketch";
pub const SKETCH_OUTLINE: &str = "black dashed 1px";

// CSS properties
pub const VISIBILITY_PROPERTY: &str = "visibility";
pub const BACKGROUND_PROPERTY: &str = "background-color";
