pub mod date;
pub mod debug;
pub mod timezone;

pub use date::{Month, parse_date};
pub use debug::{debug_enabled, set_debug};
pub use timezone::Timezone;
