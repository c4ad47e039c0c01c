//=========================================================================
// Framework Core
//
// Central module tree for the scene framework.
//
// Responsibilities:
// - Scene lifecycle and single-active-scene management (`scene`)
// - Input binding and the global event source (`input`)
// - Tween scheduling (`tween`)
// - Asset, surface, and audio collaborator interfaces
// - The top-level game controller (`game`)
//
// Everything here is single-threaded and cooperative: all mutation
// happens inside the per-frame tick or an input dispatch, both driven
// by the platform layer on one thread.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod assets;
pub mod audio;
pub mod game;
pub mod input;
pub mod scene;
pub mod surface;
pub mod tween;
