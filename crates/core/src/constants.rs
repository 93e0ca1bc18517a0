/// Page requested when the caller does not name one
pub const DEFAULT_PAGE: i32 = 1;

/// Page size used when the caller does not name one
pub const DEFAULT_PER_PAGE: i32 = 5;
