/// Maximum number of snapshots kept on the undo stack.
pub const DEFAULT_HISTORY_LIMIT: usize = 30;

/// Stroke width a fresh surface starts with.
pub const DEFAULT_STROKE_WIDTH: u32 = 5;

/// Narrowest stroke the width slider allows.
pub const MIN_STROKE_WIDTH: u32 = 1;

/// Widest stroke the width slider allows.
pub const MAX_STROKE_WIDTH: u32 = 20;
