//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use cardstage::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Game controller
pub use crate::core::game::{Game, GameContext, GameHooks, GamePhase, SetupContext};

// Scene system
pub use crate::core::scene::{
    CommandQueue, GameCommand, Scene, SceneHooks, SceneManager, SceneServices, SceneState,
};

// Input system
pub use crate::core::input::event::{EventKind, InputEvent, KeyCode, PointerButton};
pub use crate::core::input::{EventSource, InputBindings};

// Tween system
pub use crate::core::tween::{Easing, Tween, TweenGroup};

// Collaborator interfaces
pub use crate::core::assets::{AssetLoader, AssetManifest, ClipId, LoadPoll, Resource, ResourceMap, TextureId};
pub use crate::core::audio::{AudioMixer, NullAudio};
pub use crate::core::surface::{Canvas, NodeHandle, Rect, RenderSurface, StageMetrics};

// Widget toolkit
pub use crate::ui::{
    Button, ButtonConfig, ConfirmDialog, ConfirmDialogConfig, DraggableWindow,
    DraggableWindowConfig, Widget, WidgetEvent, WindowConfig, WindowFrame,
};

// Platform
pub use crate::platform::{Platform, PlatformError};
