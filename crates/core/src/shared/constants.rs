/// Environment variable selecting the service base URL.
pub const SERVICE_URL_ENV: &str = "ServiceLink";
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:41101/";

/// `FACER_OK`: the service reports success with result code 0.
pub const RESULT_OK: i32 = 0;

pub const CONTENT_TYPE_JPEG: &str = "image/jpeg";
pub const CONTENT_TYPE_PNG: &str = "image/png";

/// Page size used when walking every page of a listing.
pub const LISTING_PAGE_SIZE: u32 = 50;
