//! # Audio ATL
//!
//! Internal entities of an audio translation layer (ATL).
//!
//! The ATL mediates between abstract audio requests and a pluggable audio
//! middleware. This crate holds the behaviors the ATL ships with itself:
//!
//! - **Switch states**: occlusion calculation type, relative/absolute velocity tracking
//! - **Triggers**: do-nothing, window focus lost/gained, mute/unmute/pause/resume all
//! - **Parameters**: absolute/relative velocity (pass-through)
//!
//! A dispatch layer resolves a control id to one of these behaviors and invokes
//! it synchronously against a target audio object. Behaviors are built once at
//! initialization (see [`entities::InternalEntities`]) and never own their target.
//!
//! ### Example
//!
//! ```
//! use std::sync::Arc;
//! use audio_atl::config::AudioCvars;
//! use audio_atl::domain::ids::{
//!     MEDIUM_STATE_ID, MUTE_ALL_TRIGGER_ID, OCCLUSION_CALCULATION_SWITCH_ID,
//! };
//! use audio_atl::domain::{
//!     AtlAudioObject, AudioObjectId, ExecutionStatus, ListenerManager, TriggerImplIdAllocator,
//! };
//! use audio_atl::entities::{InternalBindings, InternalEntities};
//! use audio_atl::middleware::NullImpl;
//!
//! let bindings = InternalBindings {
//!     listener_provider: Arc::new(ListenerManager::new()),
//!     global_object: AudioObjectId::GLOBAL,
//!     middleware: Arc::new(NullImpl::new()),
//!     cvars: Arc::new(AudioCvars::new()),
//! };
//! let mut allocator = TriggerImplIdAllocator::new();
//! let entities = InternalEntities::new(&bindings, &mut allocator)?;
//!
//! let mut object = AtlAudioObject::new(AudioObjectId::new(2));
//! let status =
//!     entities.set_switch_state(OCCLUSION_CALCULATION_SWITCH_ID, MEDIUM_STATE_ID, &mut object);
//! assert_eq!(status, ExecutionStatus::Success);
//!
//! let status = entities.execute_trigger(MUTE_ALL_TRIGGER_ID, None, None);
//! assert_eq!(status, ExecutionStatus::SuccessDoNotTrack);
//! # Ok::<(), audio_atl::core::AtlError>(())
//! ```
//!
//! ## Modules
//!
//! - [`core`]: error types and logging
//! - [`config`]: configuration files and runtime console variables
//! - [`domain`]: ids, statuses, audio objects and listeners
//! - [`middleware`]: the middleware interface and the null backend
//! - [`entities`]: switch states, triggers, parameters and their registry

/// Error types and logging initialization
pub mod core;
/// Configuration system
pub mod config;
/// Value objects and collaborator interfaces
pub mod domain;
/// Middleware interface
pub mod middleware;
/// Internal switch states, triggers and parameters
pub mod entities;

pub use crate::core::{init_logging, AtlError, AtlResult};
pub use config::{AtlConfig, AudioCvars};
pub use domain::ExecutionStatus;
pub use entities::{InternalBindings, InternalEntities};
