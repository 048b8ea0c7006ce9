/// Side effects the event loop performs after the state has been updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ArmClock,
    CancelClock,
    Quit,
}
