//=========================================================================
// Concentration Game
//=========================================================================
//
// The memory-matching card game built on the framework: declares the
// card deck assets and wires up the play and test scenes.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod play_scene;
pub mod test_scene;

//=== External Dependencies ===============================================

use std::rc::Rc;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::assets::AssetManifest;
use crate::core::game::{GameHooks, SetupContext};

//=== Scene Names =========================================================

pub const SCENE_PLAY: &str = "play";
pub const SCENE_TEST: &str = "test";

//=== Asset Keys ==========================================================

pub const ASSET_CARD_BACK: &str = "card-back.png";
pub const ASSET_CARD_FRONT: &str = "cards/ace_of_spades.png";
pub const ASSET_WHISTLE: &str = "whistle.mp3";
pub const ASSET_APPLAUSE: &str = "applause.mp3";
pub const ASSET_BURST: &str = "burst.png";

const CARD_VALUES: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "jack", "queen", "king", "ace",
];

const CARD_SUITS: [&str; 4] = ["spades", "clubs", "hearts", "diamonds"];

/// Asset keys for the full 52-card deck.
pub fn card_assets() -> Vec<String> {
    let mut assets = Vec::with_capacity(CARD_VALUES.len() * CARD_SUITS.len());
    for value in CARD_VALUES {
        for suit in CARD_SUITS {
            assets.push(format!("cards/{}_of_{}.png", value, suit));
        }
    }
    assets
}

//=== ConcentrationGame ===================================================

/// Game hooks for the concentration card game.
pub struct ConcentrationGame;

impl GameHooks for ConcentrationGame {
    fn load(&mut self) -> AssetManifest {
        let mut manifest = AssetManifest::new();
        manifest.add(ASSET_CARD_BACK);
        manifest.add(ASSET_WHISTLE);
        manifest.add(ASSET_APPLAUSE);
        manifest.add(ASSET_BURST);
        manifest.extend(card_assets());
        manifest
    }

    fn setup_scenes(&mut self, setup: &mut SetupContext<'_>) {
        setup
            .scenes
            .add_scene(SCENE_PLAY, play_scene::build(Rc::clone(setup.resources)));
        setup
            .scenes
            .add_scene(SCENE_TEST, test_scene::build(Rc::clone(setup.resources)));

        if setup.go_to_scene(SCENE_PLAY) {
            debug!("entered play scene");
        } else {
            warn!("could not enter play scene");
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
