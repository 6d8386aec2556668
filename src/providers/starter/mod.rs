pub mod mem;
pub mod swf;

pub use self::mem::InMemoryStarter;
pub use self::swf::{SwfSettings, SwfStarter};
