pub mod colors;
pub mod number;
pub mod path;
pub mod table;

pub use number::format_money;
pub use number::parse_decimal;
