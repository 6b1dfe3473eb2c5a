//! The equity-estimation engine.
//!
//! [`Engine::estimate`] turns a validated [`Request`] into per-seat win
//! percentages. Boards with three or more known cards are enumerated
//! exhaustively by [`exact`]; shorter boards run the antithetic Monte
//! Carlo [`sampler`] in parallel [`dispatch`] batches, with the
//! [`Monitor`] stopping early once the trajectory settles.

pub mod backend;
pub mod counter;
pub mod dispatch;
pub mod engine;
pub mod equities;
pub mod exact;
pub mod monitor;
pub mod request;
pub mod sampler;
pub mod settings;

pub use backend::*;
pub use counter::*;
pub use dispatch::*;
pub use engine::*;
pub use equities::*;
pub use monitor::*;
pub use request::*;
pub use settings::*;
