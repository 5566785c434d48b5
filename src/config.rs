/// Board handed to the front-ends when no dimensions are given.
pub const DEFAULT_ROWS: usize = 4;
pub const DEFAULT_COLS: usize = 7;
