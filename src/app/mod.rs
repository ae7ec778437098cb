// Terminal front end: renders controller snapshots and maps input lines to form events.

pub mod render;
pub mod session;
