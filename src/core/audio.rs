//=========================================================================
// Audio Interface
//=========================================================================
//
// Capability trait for the external audio collaborator. Scene pause and
// resume fan out to the whole mixer, matching the stage-wide mute the
// source behavior requires.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::assets::ClipId;

//=== AudioMixer ==========================================================

/// The injected audio playback collaborator.
pub trait AudioMixer {
    /// Plays a loaded clip once.
    fn play(&mut self, clip: ClipId);

    /// Pauses all playing clips.
    fn pause_all(&mut self);

    /// Resumes all paused clips.
    fn resume_all(&mut self);
}

//=== NullAudio ===========================================================

/// Mixer that discards everything. Useful for tests and headless runs.
pub struct NullAudio;

impl AudioMixer for NullAudio {
    fn play(&mut self, _clip: ClipId) {}
    fn pause_all(&mut self) {}
    fn resume_all(&mut self) {}
}
