pub use self::{board::*, cell::*, line::*, outcome::*};

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod line;
pub(crate) mod outcome;
