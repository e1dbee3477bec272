//! Chip-agnostic configuration for the button masher.
//!
//! The masher is a resistor-ladder button board: each pad pulls its analog
//! input toward the supply rail, the firmware classifies the sampled voltage
//! as pressed or released, and a set of keyboard key codes is asserted over
//! USB HID for the active pad. This crate holds the two pieces of
//! configuration that drive the firmware, without any platform-specific
//! dependencies, so it can be used both on the target and on host for
//! testing:
//!
//! - [`keymap`]: the per-input key bindings ([`KeyTable`], [`KeyBinding`])
//! - [`thresholds`]: the analog press/release boundaries ([`ThresholdConfig`])
//!
//! The sampling loop, debounce timing, and HID report transmission live in
//! the firmware crates; everything here is pure data plus the validation
//! and boundary derivation that give the data its meaning.
//!
//! # Example
//!
//! ```
//! use masher_core::{ThresholdConfig, DEFAULT_KEYMAP};
//! use usbd_human_interface_device::page::Keyboard;
//!
//! // Key codes for the first pad: Ctrl+Shift+Alt+A.
//! let binding = DEFAULT_KEYMAP.get(0).unwrap();
//! assert_eq!(binding.key, Keyboard::A);
//!
//! // A sample at 80% of full scale flips a released pad to pressed.
//! let thresholds = ThresholdConfig::DEFAULT;
//! assert!(thresholds.is_pressed(80, 100, false));
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod keymap;
pub mod thresholds;

// Re-export main types at crate root
pub use keymap::{
    KeyBinding, KeyTable, KeymapError, DEFAULT_KEYMAP, MODIFIERS_PER_INPUT, NUM_INPUTS,
    OPTIONS_PER_INPUT,
};
pub use thresholds::{ThresholdConfig, ThresholdError};
