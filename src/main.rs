//=========================================================================
// Demo Runner
//=========================================================================
//
// Runs the concentration game in a Winit window with trivial stand-ins
// for the external collaborators: a surface that only tracks its child
// list, a silent audio mixer, and a loader that mints handles for every
// manifest entry without touching disk.
//
//=========================================================================

use log::{error, info};

use cardstage::concentration::ConcentrationGame;
use cardstage::core::assets::{
    AssetLoader, AssetManifest, ClipId, LoadPoll, Resource, ResourceMap, TextureId,
};
use cardstage::core::audio::NullAudio;
use cardstage::core::game::Game;
use cardstage::core::surface::{NodeHandle, RenderSurface, StageMetrics};
use cardstage::platform::Platform;

const STAGE_WIDTH: f32 = 1280.0;
const STAGE_HEIGHT: f32 = 720.0;

//=== Demo Collaborators ==================================================

/// Surface that tracks the child list and reports a fixed size.
struct DemoSurface {
    children: Vec<NodeHandle>,
}

impl RenderSurface for DemoSurface {
    fn add_child(&mut self, node: NodeHandle) {
        self.children.push(node);
    }

    fn remove_child(&mut self, node: NodeHandle) {
        self.children.retain(|n| *n != node);
    }

    fn clear_children(&mut self) {
        self.children.clear();
    }

    fn metrics(&self) -> StageMetrics {
        StageMetrics::new(STAGE_WIDTH, STAGE_HEIGHT)
    }
}

/// Loader that resolves a few entries per poll, minting texture handles
/// for images and clip handles for audio.
struct DemoLoader {
    manifest: Vec<String>,
    resolved: usize,
}

impl DemoLoader {
    const ENTRIES_PER_POLL: usize = 8;

    fn new() -> Self {
        Self {
            manifest: Vec::new(),
            resolved: 0,
        }
    }
}

impl AssetLoader for DemoLoader {
    fn begin(&mut self, manifest: &AssetManifest) {
        self.manifest = manifest.iter().map(str::to_string).collect();
        self.resolved = 0;
    }

    fn poll(&mut self) -> LoadPoll {
        if self.manifest.is_empty() {
            return LoadPoll::InProgress(0.0);
        }

        self.resolved = (self.resolved + Self::ENTRIES_PER_POLL).min(self.manifest.len());

        if self.resolved < self.manifest.len() {
            return LoadPoll::InProgress(self.resolved as f32 / self.manifest.len() as f32);
        }

        let mut map = ResourceMap::new();
        for (index, key) in self.manifest.iter().enumerate() {
            let resource = if key.ends_with(".mp3") {
                Resource::Audio(ClipId(index as u32))
            } else {
                Resource::Texture(TextureId(index as u32))
            };
            map.insert(key.clone(), resource);
        }
        LoadPoll::Complete(map)
    }
}

//=== Entry Point =========================================================

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut game = Game::new(Box::new(ConcentrationGame));
    game.set_debug_mode(true);
    game.init(
        Box::new(DemoSurface { children: Vec::new() }),
        Box::new(NullAudio),
        StageMetrics::new(STAGE_WIDTH, STAGE_HEIGHT),
    );
    game.start(Box::new(DemoLoader::new()));

    info!("starting concentration demo (F pauses, X switches scenes)");

    let platform = Platform::new(game)
        .with_title("Concentration")
        .with_size(STAGE_WIDTH as u32, STAGE_HEIGHT as u32);

    if let Err(e) = platform.run() {
        error!("platform error: {}", e);
    }
}
