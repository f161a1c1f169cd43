//! Border codec.
//!
//! A style's `border` attribute holds a [`BorderRecord`], the raw stored
//! form. Decoding validates a record into a [`BorderSpec`] atomically: a
//! malformed record is an error, never a half-filled border.
//!
//! | Kind | Required fields |
//! |------|-----------------|
//! | null, empty | none |
//! | bevel | theme colors, or 4 colors |
//! | etched | theme colors, or 2 colors |
//! | line | positive thickness; 1 color unless theme colors |
//! | round | positive arc width and height; 1 color unless theme colors |
//! | image | 2, 3, 8 or 9 image names |
//! | h-image, v-image | 2 or 3 image names |
//!
//! Raised and lowered bevels read the middle two stored colors in opposite
//! order; see [`BevelColors`].

mod codec;
mod kind;
mod record;
mod variant;

pub use codec::{commit, decode, decode_record, decode_stored, decode_with, encode, BorderOptions};
pub use kind::BorderKind;
pub use record::BorderRecord;
pub use variant::{BevelColors, BorderSpec, EtchedColors, ImageBorder, NineSlice, ThreeSlice};
