mod account;
mod email;
mod money;

pub use account::*;
pub use email::*;
pub use money::*;
