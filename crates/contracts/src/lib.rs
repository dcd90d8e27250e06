//! Wire contracts shared with the MGNREGA backend API.
//!
//! Every type here mirrors a JSON payload of the `/api/v1` surface; the
//! frontend crate owns all behaviour, this crate owns the shapes plus the
//! metric metadata that both display and narration key on.

pub mod district;
pub mod metrics;
pub mod snapshot;
