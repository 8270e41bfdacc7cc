//! # Tempo Overlay Core
//!
//! Framework-free state and animation logic for the Tempo settings overlay:
//! the two-panel visibility state machine (settings panel + nested key
//! binding overlay), the show/hide choreography it drives, and the geometry
//! that keeps the back button and the nested overlay glued to the content
//! region while animations are in flight.
//!
//! Nothing in this crate touches a render loop. Animations are expressed as
//! [`TweenSpec`] commands issued against a [`MotionScheduler`]; the app runs
//! them through a [`TweenRunner`] advanced once per frame, while tests
//! substitute a recording scheduler and assert on the issued commands.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`easing`] | Timing curves (linear, out-quint, out-elastic) |
//! | [`tween`] | Animation command model and the frame-driven runner |
//! | [`visibility`] | Observable show/hide state |
//! | [`geometry`] | Content-region geometry and derived placement |
//! | [`sections`] | Fixed section list and panel chrome |
//! | [`flow`] | The settings/key-binding choreography |

pub mod easing;
pub mod flow;
pub mod geometry;
pub mod sections;
pub mod tween;
pub mod visibility;

pub use easing::Easing;
pub use flow::{PanelState, SettingsFlow};
pub use geometry::ContentGeometry;
pub use sections::{create_footer, create_header, create_sections, FooterChrome, HeaderChrome, SectionItem};
pub use tween::{MotionScheduler, TweenProperty, TweenRunner, TweenSpec, TweenTarget};
pub use visibility::{Visibility, VisibilitySlot};
