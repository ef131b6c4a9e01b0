/// Attribute key under which the number of overlapping score intervals is stored.
pub const BIN_COUNT_ATTRIBUTE: &str = "CpGs";
