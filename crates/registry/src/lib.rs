//! Registry: multiplexes a consistent-hash ring per peer-type and keeps an
//! address→member index consistent with the rings.

pub mod error;
pub mod info;
pub mod key;
pub mod registry;

pub use error::{Error, Result};
pub use info::Info;
pub use key::Key;
pub use registry::Registry;
