//! The numeric half of the site's interaction effects.
//!
//! Everything in here is plain Rust with no DOM types, so the scroll,
//! parallax, tween, reveal and stagger rules can be unit tested on the
//! native target. The components under `crate::components` own the
//! listeners and styles and feed these types from browser events.

pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod stagger;
pub mod tween;
