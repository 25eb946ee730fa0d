//! Statically initialized lookup tables.
//!
//! The attack tables of the leaping pieces, the line and between tables, and the Zobrist
//! keys are computed once per process, on first use, and are immutable afterwards. Slider
//! attacks are not tabled: they are walked ray by ray against the current occupancy.
//!
//! Everything is reached through the free functions of [`helper::prelude`].
//!
//! [`helper::prelude`]: prelude/index.html

mod boards;
pub mod prelude;
mod rays;
mod zobrist;
