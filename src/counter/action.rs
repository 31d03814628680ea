#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increase,
    Decrease,
}
