/// Page size applied when a request does not specify one
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Upper bound on requested page sizes
pub const MAX_PAGE_SIZE: i64 = 100;

/// Maximum length of a product barcode
pub const BARCODE_MAX_LEN: usize = 13;
