pub mod date;
pub mod text;

pub use date::{
    format_long_date, format_long_date_with_weekday, format_relative_date, format_short_date,
};
pub use text::{ELLIPSIS, PREVIEW_CHARS, fit, is_truncated, preview, wrap};
