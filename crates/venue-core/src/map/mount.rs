// crates/venue-core/src/map/mount.rs
use super::sync::MapCamera;
use crate::config::MapConfig;
use crate::geo::VenuePoint;
use tracing::{debug, warn};

/// The opaque live map surface (a JS SDK, a native map view, ...).
///
/// Markers are handles owned by the mount; every handle returned by
/// [`MapBackend::add_marker`] is given back through
/// [`MapBackend::remove_marker`] before the mount lets go of the backend.
pub trait MapBackend {
    type Marker;

    fn add_marker(&mut self, point: &VenuePoint<'_>) -> Self::Marker;
    fn remove_marker(&mut self, marker: Self::Marker);
    fn set_camera(&mut self, camera: MapCamera);
}

/// Identifies one backend acquisition. Tickets from an earlier load or from
/// before a teardown are stale and their result is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn id(self) -> u64 {
        self.0
    }

    pub fn from_id(id: u64) -> Self {
        Self(id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FallbackReason {
    MissingCredential,
    LoadFailed(String),
}

/// Public view of the mount state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Credential present, no load started yet.
    Idle,
    Loading,
    Live,
    Fallback(FallbackReason),
    /// Torn down; nothing renders any more.
    Detached,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Idle => "idle",
            RenderMode::Loading => "loading",
            RenderMode::Live => "live",
            RenderMode::Fallback(_) => "fallback",
            RenderMode::Detached => "detached",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RenderMode::Fallback(_))
    }
}

enum Surface<B: MapBackend> {
    Idle,
    Loading(LoadTicket),
    Live {
        backend: B,
        markers: Vec<B::Marker>,
    },
    Fallback(FallbackReason),
    Detached,
}

/// Gates all live-map work behind "backend ready" and releases every
/// marker it created on teardown (or drop).
pub struct MapMount<B: MapBackend> {
    generation: u64,
    surface: Surface<B>,
}

impl<B: MapBackend> MapMount<B> {
    /// Without a credential the mount starts, and stays, in fallback mode.
    pub fn new(config: &MapConfig) -> Self {
        let surface = if config.api_key.is_some() {
            Surface::Idle
        } else {
            warn!("no map credential configured, using fallback renderer");
            Surface::Fallback(FallbackReason::MissingCredential)
        };
        Self {
            generation: 0,
            surface,
        }
    }

    pub fn mode(&self) -> RenderMode {
        match &self.surface {
            Surface::Idle => RenderMode::Idle,
            Surface::Loading(_) => RenderMode::Loading,
            Surface::Live { .. } => RenderMode::Live,
            Surface::Fallback(reason) => RenderMode::Fallback(reason.clone()),
            Surface::Detached => RenderMode::Detached,
        }
    }

    /// Starts (or restarts) acquiring the backend. Only possible while idle
    /// or loading; a restart makes the previous ticket stale.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if !matches!(self.surface, Surface::Idle | Surface::Loading(_)) {
            return None;
        }
        self.generation += 1;
        let ticket = LoadTicket(self.generation);
        debug!(ticket = ticket.0, "map backend load started");
        self.surface = Surface::Loading(ticket);
        Some(ticket)
    }

    /// Delivers the outcome of a load. Returns `false` when the ticket is
    /// stale; a stale backend is dropped without being used.
    pub fn resolve(&mut self, ticket: LoadTicket, outcome: Result<B, String>) -> bool {
        if !matches!(self.surface, Surface::Loading(current) if current == ticket) {
            debug!(ticket = ticket.0, "ignoring stale map backend load");
            return false;
        }
        self.surface = match outcome {
            Ok(backend) => {
                debug!(ticket = ticket.0, "map backend ready");
                Surface::Live {
                    backend,
                    markers: Vec::new(),
                }
            }
            Err(reason) => {
                warn!(%reason, "map backend failed to load, using fallback renderer");
                Surface::Fallback(FallbackReason::LoadFailed(reason))
            }
        };
        true
    }

    /// Runtime failure of a live backend: release markers, switch to fallback.
    pub fn fail(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        self.release_markers();
        if !matches!(self.surface, Surface::Detached) {
            warn!(%reason, "map backend error, using fallback renderer");
            self.generation += 1;
            self.surface = Surface::Fallback(FallbackReason::LoadFailed(reason));
        }
    }

    /// Re-renders the live map: previous markers are released, one marker
    /// per point is created and the camera applied. No-op in other modes.
    pub fn sync(&mut self, points: &[VenuePoint<'_>], camera: MapCamera) {
        self.release_markers();
        if let Surface::Live { backend, markers } = &mut self.surface {
            markers.extend(points.iter().map(|p| backend.add_marker(p)));
            backend.set_camera(camera);
            debug!(markers = markers.len(), "map markers synced");
        }
    }

    /// The live backend, if the mount is live.
    pub fn backend_mut(&mut self) -> Option<&mut B> {
        match &mut self.surface {
            Surface::Live { backend, .. } => Some(backend),
            _ => None,
        }
    }

    pub fn marker_count(&self) -> usize {
        match &self.surface {
            Surface::Live { markers, .. } => markers.len(),
            _ => 0,
        }
    }

    /// Releases all markers and invalidates outstanding load tickets.
    pub fn teardown(&mut self) {
        self.release_markers();
        self.generation += 1;
        self.surface = Surface::Detached;
    }

    fn release_markers(&mut self) {
        if let Surface::Live { backend, markers } = &mut self.surface {
            for marker in markers.drain(..) {
                backend.remove_marker(marker);
            }
        }
    }
}

impl<B: MapBackend> Drop for MapMount<B> {
    fn drop(&mut self) {
        self.release_markers();
    }
}
