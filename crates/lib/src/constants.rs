//! Constants used throughout the hl7tree library.
//!
//! This module provides central definitions for the standard HL7v2 delimiter
//! characters and the limits applied to positional element lists.

/// Default field separator (MSH-1).
pub const FIELD_DELIMITER: char = '|';

/// Default component separator.
pub const COMPONENT_DELIMITER: char = '^';

/// Default repetition separator.
pub const REPETITION_DELIMITER: char = '~';

/// Default escape character.
pub const ESCAPE_CHARACTER: char = '\\';

/// Default sub-component separator.
pub const SUBCOMPONENT_DELIMITER: char = '&';

/// Number of characters in an MSH-2 encoding characters declaration.
pub const DECLARATION_LEN: usize = 4;

/// Upper bound on the number of elements a positional list may hold.
///
/// Positional insertion pads the gap up to the requested index, so a stray
/// position number would otherwise allocate without limit.
pub const MAX_ELEMENTS: usize = 65_536;
