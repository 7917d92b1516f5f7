//! Playback core for a stories-style media viewer.
//!
//! The crate is `no_std`: the host owns the clock, the renderer, and the
//! media elements, and drives the state machine through [`app::StoryApp::tick`].

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod catalog;
pub mod input;
pub mod render;
pub mod text_policy;
