#![no_std]

pub mod clock;
pub mod router;
