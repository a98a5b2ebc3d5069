//! Chamber members
//!
//! - [`entities`]: [`Member`], [`MemberId`], [`PartyHint`]
//! - [`sampler`]: draws the fixed chamber for a run
//! - [`spokesperson`]: picks the ideological cross-section that debates

pub mod entities;
pub mod sampler;
pub mod spokesperson;

pub use entities::{Member, MemberId, PartyHint};
pub use sampler::{DEFAULT_IDEOLOGY_JITTER, sample_members};
pub use spokesperson::{DEFAULT_SPOKESPERSON_COUNT, select_spokespeople};
