// Login screen chrome: the document shell rendered around the form.
pub mod footer;
pub mod header;
pub mod notice;
pub mod viewport;

pub use footer::{login_footer, shake_js};
pub use header::{login_header, HeaderArgs, SHAKE_ERROR_CODES};
pub use notice::{admin_notice, NoticeArgs};
pub use viewport::viewport_meta;
