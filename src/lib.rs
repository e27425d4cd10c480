#![no_std]

#[macro_use]
mod log;

mod error;

pub mod bitfield;
pub mod config;
pub mod device;
pub mod interface;
pub mod params;
pub mod registers;
pub mod sample;

pub use crate::device::Mpu6050;
pub use crate::error::{Error, Nack, NackPhase, Result};
