// Generation:
pub const MAX_EDGE_WEIGHT: u32 = 100; // Exclusive upper bound on random link weights.
pub const QUARTER_TURNS: u8 = 4; // A tile returns to its original wiring after this many rotations.
