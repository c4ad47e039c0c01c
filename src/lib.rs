//=========================================================================
// Cardstage — Library Root
//
// This crate defines the public API surface of the cardstage framework.
//
// Responsibilities:
// - Expose the framework core (`core`): scene lifecycle, scene manager,
//   input bindings, tweens, and the game controller
// - Expose the widget toolkit (`ui`) and the concentration game built
//   on top of the framework (`concentration`)
// - Expose the Winit-backed `platform` driver for running a game in a
//   real window
//
// Typical usage:
// ```no_run
// use cardstage::concentration::ConcentrationGame;
// use cardstage::core::game::Game;
//
// let game = Game::new(Box::new(ConcentrationGame));
// // init with a render surface, audio mixer, and sizing, then start
// // with an asset loader and drive it under cardstage::platform.
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the framework systems (scenes, input, tweens, game).
// `ui` is the widget toolkit layered on the core's canvas capability.
// `concentration` is the card game shipped with the framework.
// `platform` drives a game from a Winit event loop.
//
pub mod concentration;
pub mod core;
pub mod platform;
pub mod ui;

//--- Prelude -------------------------------------------------------------

pub mod prelude;
