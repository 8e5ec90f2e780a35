//! Drag-and-drop contracts.
//!
//! The payload of a drag is a single `text/plain` entry holding the
//! dragged project's id. A drop zone is armed by a matching dragover and
//! disarmed by either a drop or a dragleave; nothing carries over between
//! gestures.

/// Media type of the project id payload
pub const PLAIN_TEXT: &str = "text/plain";

/// Class marking an armed drop zone
pub const DROPPABLE_CLASS: &str = "droppable";

/// Data carried by a drag gesture
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    items: Vec<(String, String)>,
    pub effect_allowed: Option<String>,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `format`, replacing any previous entry
    pub fn set_data(&mut self, format: &str, data: &str) {
        match self.items.iter_mut().find(|(f, _)| f == format) {
            Some(entry) => entry.1 = data.to_string(),
            None => self.items.push((format.to_string(), data.to_string())),
        }
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(f, _)| f == format)
            .map(|(_, data)| data.as_str())
    }

    /// Formats in the order they were set
    pub fn types(&self) -> Vec<&str> {
        self.items.iter().map(|(f, _)| f.as_str()).collect()
    }
}

/// One dragstart/dragover/drop/dragleave/dragend occurrence
#[derive(Debug, Clone, Default)]
pub struct DragEvent {
    pub data_transfer: Option<DataTransfer>,
    default_prevented: bool,
}

impl DragEvent {
    pub fn new(data_transfer: DataTransfer) -> Self {
        Self {
            data_transfer: Some(data_transfer),
            default_prevented: false,
        }
    }

    /// An event without any data, as seen on dragleave
    pub fn empty() -> Self {
        Self::default()
    }

    /// For dragover this permits the drop
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// True when the first payload type is the plain-text id type
    pub fn carries_plain_text(&self) -> bool {
        self.data_transfer
            .as_ref()
            .and_then(|dt| dt.types().first().map(|t| *t == PLAIN_TEXT))
            .unwrap_or(false)
    }
}

/// A component that can be dragged
pub trait Draggable {
    fn drag_start_handler(&self, event: &mut DragEvent);
    fn drag_end_handler(&self, event: &mut DragEvent);
}

/// A component that accepts drops
pub trait DragTarget {
    /// Permits the drop and shows the droppable affordance when the payload matches
    fn drag_over_handler(&self, event: &mut DragEvent);

    /// Reads the dragged id and requests the move
    fn drop_handler(&self, event: &mut DragEvent);

    /// Removes the droppable affordance
    fn drag_leave_handler(&self, event: &mut DragEvent);
}
