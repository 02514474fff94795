//! Framebuffer LCD for Monochron
//!
//! This crate provides:
//! - `FrameBuffer`, a 128x64 page-layout buffer implementing both the
//!   embedded-graphics `DrawTarget` and the `monochron_core::Lcd` primitives
//! - Scaled and vertical text rendering on top of the embedded-graphics
//!   mono fonts
//!
//! A platform flushes `FrameBuffer::pages` to its controller after each
//! draw. Tests read pixels back with `FrameBuffer::pixel`.

#![no_std]
#![deny(unsafe_code)]

mod canvas;
pub mod framebuffer;

pub use framebuffer::{FrameBuffer, HEIGHT, PAGES, WIDTH};
