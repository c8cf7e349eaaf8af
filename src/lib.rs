//! Output-side audio core for a network audio receiver: dithered silence in
//! every supported PCM format, and the volume curves that turn a remote
//! volume control into mixer attenuation.

pub mod audio;
pub mod common;
pub mod configs;
