pub mod compute;
pub mod consts;
pub mod entities;
pub mod input;
pub mod session;
