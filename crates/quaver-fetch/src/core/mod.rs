//! Pure transformations over resolver catalogs.
//!
//! Functions here never perform I/O and are deterministic for a given
//! input ordering.

mod select;

pub use select::select_best_audio;
