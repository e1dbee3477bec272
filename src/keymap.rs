//! Input-to-keycode bindings for the ladder pads.
//!
//! Each physical pad position carries three modifier key codes plus one
//! literal key, all asserted together while the pad reads as pressed. Row
//! order follows the ladder wiring and is not re-sortable.

use usbd_human_interface_device::page::Keyboard;

/// Number of physical inputs on the board.
pub const NUM_INPUTS: usize = 13;

/// Modifier key codes held per input.
pub const MODIFIERS_PER_INPUT: usize = 3;

/// Total key codes emitted per input.
pub const OPTIONS_PER_INPUT: usize = 4;

// Every binding is the modifier block plus exactly one literal key.
const _: () = assert!(OPTIONS_PER_INPUT == MODIFIERS_PER_INPUT + 1);

/// Key codes bound to one pad position.
///
/// # Example
///
/// ```
/// use masher_core::KeyBinding;
/// use usbd_human_interface_device::page::Keyboard;
///
/// let binding = KeyBinding::new(
///     [Keyboard::LeftControl, Keyboard::LeftShift, Keyboard::LeftAlt],
///     Keyboard::A,
/// );
/// assert_eq!(binding.codes()[3], Keyboard::A);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// Modifier codes, asserted in declared order ahead of the literal key.
    pub modifiers: [Keyboard; MODIFIERS_PER_INPUT],
    /// Literal key asserted together with the modifiers.
    pub key: Keyboard,
}

impl KeyBinding {
    /// Create a binding from its modifier block and literal key.
    #[must_use]
    pub const fn new(modifiers: [Keyboard; MODIFIERS_PER_INPUT], key: Keyboard) -> Self {
        Self { modifiers, key }
    }

    /// All key codes for this binding in press order, modifiers first.
    #[must_use]
    pub const fn codes(&self) -> [Keyboard; OPTIONS_PER_INPUT] {
        [
            self.modifiers[0],
            self.modifiers[1],
            self.modifiers[2],
            self.key,
        ]
    }
}

/// Error type for keymap validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    /// Row count does not match the number of physical inputs.
    RowCount { expected: usize, found: usize },
    /// A row does not hold exactly [`OPTIONS_PER_INPUT`] key codes.
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Fixed table of one [`KeyBinding`] per physical input.
///
/// The index is the pad position; the dimensions are part of the type, so a
/// table with the wrong shape cannot be constructed from typed rows. Lookup
/// is bounds-checked and pure: the same index always yields the same codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTable {
    bindings: [KeyBinding; NUM_INPUTS],
}

impl KeyTable {
    /// Create a table from a correctly-sized array of bindings.
    #[must_use]
    pub const fn new(bindings: [KeyBinding; NUM_INPUTS]) -> Self {
        Self { bindings }
    }

    /// Create a table from untyped rows of key codes.
    ///
    /// For tables sourced at runtime (host tooling, stored settings) where
    /// the shape is not known to the type system. Each row must hold the
    /// modifier block followed by the literal key.
    pub fn from_rows(rows: &[&[Keyboard]]) -> Result<Self, KeymapError> {
        if rows.len() != NUM_INPUTS {
            return Err(KeymapError::RowCount {
                expected: NUM_INPUTS,
                found: rows.len(),
            });
        }

        const EMPTY: KeyBinding = KeyBinding::new(
            [Keyboard::NoEventIndicated; MODIFIERS_PER_INPUT],
            Keyboard::NoEventIndicated,
        );
        let mut bindings = [EMPTY; NUM_INPUTS];

        for (i, row) in rows.iter().enumerate() {
            if row.len() != OPTIONS_PER_INPUT {
                return Err(KeymapError::ColumnCount {
                    row: i,
                    expected: OPTIONS_PER_INPUT,
                    found: row.len(),
                });
            }
            bindings[i] = KeyBinding::new([row[0], row[1], row[2]], row[MODIFIERS_PER_INPUT]);
        }

        Ok(Self { bindings })
    }

    /// Look up the binding for one pad position.
    ///
    /// Returns `None` for an index outside `0..NUM_INPUTS` rather than
    /// panicking; the scanner treats that as a wiring/configuration bug.
    #[must_use]
    pub fn get(&self, input: usize) -> Option<&KeyBinding> {
        self.bindings.get(input)
    }

    /// Number of inputs covered by the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        NUM_INPUTS
    }

    /// Always false; the table covers every physical input.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// All bindings in pad order.
    #[must_use]
    pub const fn bindings(&self) -> &[KeyBinding; NUM_INPUTS] {
        &self.bindings
    }
}

/// Modifier block shared by every factory binding.
const HELD_MODIFIERS: [Keyboard; MODIFIERS_PER_INPUT] =
    [Keyboard::LeftControl, Keyboard::LeftShift, Keyboard::LeftAlt];

const fn bind(key: Keyboard) -> KeyBinding {
    KeyBinding::new(HELD_MODIFIERS, key)
}

/// Factory bindings: Ctrl+Shift+Alt plus one letter per pad, `a` through `m`.
///
/// Row order matches the board wiring.
pub const DEFAULT_KEYMAP: KeyTable = KeyTable::new([
    bind(Keyboard::A), // left arrow pad
    bind(Keyboard::B), // pin D5
    bind(Keyboard::C), // pin D4
    bind(Keyboard::D), // pin D3
    bind(Keyboard::E), // pin D2
    bind(Keyboard::F), // pin D1
    bind(Keyboard::G), // pin D0
    bind(Keyboard::H), // pin A5
    bind(Keyboard::I), // pin A4
    bind(Keyboard::J), // pin A3
    bind(Keyboard::K), // pin A2
    bind(Keyboard::L), // pin A1
    bind(Keyboard::M), // pin A0
]);
