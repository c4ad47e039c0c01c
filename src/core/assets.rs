//=========================================================================
// Asset Loading Interface
//=========================================================================
//
// Declares the contract between the game controller and the external
// asset loader, plus the loaded-resource lookup handed to scenes.
//
// Loading is a single-shot deferred completion: the game declares a
// manifest, the loader is polled every tick, and start proceeds only
// once the whole manifest has resolved. There is no timeout and no
// cancellation; a stalled loader stalls game start indefinitely.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Resource Handles ====================================================

/// Opaque handle to a texture owned by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Opaque handle to an audio clip owned by the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipId(pub u32);

/// A loaded asset, as produced by the asset loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Texture(TextureId),
    Audio(ClipId),
}

impl Resource {
    /// Returns the texture handle, if this resource is a texture.
    pub fn texture(&self) -> Option<TextureId> {
        match self {
            Self::Texture(id) => Some(*id),
            _ => None,
        }
    }

    /// Returns the clip handle, if this resource is an audio clip.
    pub fn clip(&self) -> Option<ClipId> {
        match self {
            Self::Audio(id) => Some(*id),
            _ => None,
        }
    }
}

//=== AssetManifest =======================================================

/// The list of asset identifiers a game declares before starting.
///
/// Duplicate entries are tolerated at declaration time; loaders resolve
/// each identifier once.
#[derive(Debug, Clone, Default)]
pub struct AssetManifest {
    entries: Vec<String>,
}

impl AssetManifest {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Declares a single asset.
    pub fn add(&mut self, asset: impl Into<String>) {
        self.entries.push(asset.into());
    }

    /// Declares a batch of assets.
    pub fn extend(&mut self, assets: impl IntoIterator<Item = String>) {
        self.entries.extend(assets);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//=== ResourceMap =========================================================

/// Read-only lookup from asset identifier to loaded resource handle.
///
/// Produced by the loader on completion and shared with every scene.
/// Lookups for unknown keys return `None`; callers must check before
/// use.
#[derive(Debug, Clone, Default)]
pub struct ResourceMap {
    resources: HashMap<String, Resource>,
}

impl ResourceMap {
    pub fn new() -> Self {
        Self {
            resources: HashMap::new(),
        }
    }

    /// Records a loaded resource under its asset identifier.
    pub fn insert(&mut self, key: impl Into<String>, resource: Resource) {
        self.resources.insert(key.into(), resource);
    }

    /// Looks up a resource by asset identifier.
    pub fn get(&self, key: &str) -> Option<&Resource> {
        self.resources.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.resources.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

//=== AssetLoader =========================================================

/// Progress of an in-flight load.
#[derive(Debug, Clone)]
pub enum LoadPoll {
    /// Still loading; fraction of the manifest resolved so far (0–1).
    InProgress(f32),

    /// Every declared asset resolved.
    Complete(ResourceMap),
}

/// External collaborator that resolves a manifest into resources.
///
/// The game calls [`begin`](Self::begin) once, then polls every tick
/// until [`LoadPoll::Complete`] is returned. Polling before `begin`
/// reports zero progress.
pub trait AssetLoader {
    /// Starts resolving the given manifest.
    fn begin(&mut self, manifest: &AssetManifest);

    /// Reports current progress, yielding the resource map on completion.
    fn poll(&mut self) -> LoadPoll;
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_collects_entries() {
        let mut manifest = AssetManifest::new();
        manifest.add("card-back.png");
        manifest.extend(vec!["a.png".to_string(), "b.mp3".to_string()]);

        assert_eq!(manifest.len(), 3);
        let entries: Vec<&str> = manifest.iter().collect();
        assert_eq!(entries, vec!["card-back.png", "a.png", "b.mp3"]);
    }

    #[test]
    fn resource_map_lookup_misses_return_none() {
        let mut map = ResourceMap::new();
        map.insert("card-back.png", Resource::Texture(TextureId(1)));

        assert!(map.get("card-back.png").is_some());
        assert!(map.get("missing.png").is_none());
    }

    #[test]
    fn resource_accessors_match_variant() {
        let texture = Resource::Texture(TextureId(3));
        let audio = Resource::Audio(ClipId(9));

        assert_eq!(texture.texture(), Some(TextureId(3)));
        assert_eq!(texture.clip(), None);
        assert_eq!(audio.clip(), Some(ClipId(9)));
        assert_eq!(audio.texture(), None);
    }

    //--- Step Loader ------------------------------------------------------
    //
    // Minimal loader that resolves one manifest entry per poll, for
    // exercising the begin/poll contract.
    //
    struct StepLoader {
        manifest: Vec<String>,
        resolved: usize,
    }

    impl StepLoader {
        fn new() -> Self {
            Self {
                manifest: Vec::new(),
                resolved: 0,
            }
        }
    }

    impl AssetLoader for StepLoader {
        fn begin(&mut self, manifest: &AssetManifest) {
            self.manifest = manifest.iter().map(str::to_string).collect();
            self.resolved = 0;
        }

        fn poll(&mut self) -> LoadPoll {
            if self.manifest.is_empty() {
                return LoadPoll::InProgress(0.0);
            }

            if self.resolved < self.manifest.len() {
                self.resolved += 1;
            }

            if self.resolved == self.manifest.len() {
                let mut map = ResourceMap::new();
                for (i, key) in self.manifest.iter().enumerate() {
                    map.insert(key.clone(), Resource::Texture(TextureId(i as u32)));
                }
                LoadPoll::Complete(map)
            } else {
                LoadPoll::InProgress(self.resolved as f32 / self.manifest.len() as f32)
            }
        }
    }

    #[test]
    fn loader_reports_fractional_progress_then_completes() {
        let mut manifest = AssetManifest::new();
        manifest.add("a.png");
        manifest.add("b.png");

        let mut loader = StepLoader::new();
        loader.begin(&manifest);

        match loader.poll() {
            LoadPoll::InProgress(p) => assert_eq!(p, 0.5),
            other => panic!("expected progress, got {:?}", other),
        }

        match loader.poll() {
            LoadPoll::Complete(map) => {
                assert_eq!(map.len(), 2);
                assert!(map.contains("a.png"));
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn poll_before_begin_reports_zero_progress() {
        let mut loader = StepLoader::new();
        match loader.poll() {
            LoadPoll::InProgress(p) => assert_eq!(p, 0.0),
            other => panic!("expected zero progress, got {:?}", other),
        }
    }
}
