/// Input event understood by the navigation state machine.
///
/// Produced one per key press by the input mapper; the reducer decides what
/// each one means in the current menu level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    // Cursor movement
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Menu levels
    Select,
    Back,

    // Modal
    ShowHelp,
    HideModal,

    Quit,
}
