#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DateUnit {
    Day,
    Millisecond,
}
