//! Follow-up work the event handler hands back to the main loop.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Write the current list to the snapshot file.
    Save,
    /// Leave the application.
    Quit,
}
