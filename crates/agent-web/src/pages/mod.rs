//! Page Components

mod invoke;

pub use invoke::InvokePage;
