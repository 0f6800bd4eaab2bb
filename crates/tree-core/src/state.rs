//! Scene mode state machine and gesture edge detection.
//!
//! These types avoid referencing platform-specific APIs. The frontend feeds
//! gesture edges in and forwards the resulting [`ModeChange`]s to the camera
//! controller.

use crate::focus::select_focus;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SceneMode {
    #[default]
    Tree,
    Galaxy,
    Focus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureEvent {
    Fist,
    Open,
    Pinch,
}

/// A mode transition that actually happened. Never has `from == to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeChange {
    pub from: SceneMode,
    pub to: SceneMode,
}

impl ModeChange {
    pub fn entered_tree(&self) -> bool {
        self.to == SceneMode::Tree
    }

    pub fn exited_tree(&self) -> bool {
        self.from == SceneMode::Tree
    }
}

pub struct SceneStateMachine {
    mode: SceneMode,
    focused_photo: Option<usize>,
    rng: StdRng,
}

impl SceneStateMachine {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Focus picks differ from run to run.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            mode: SceneMode::Tree,
            focused_photo: None,
            rng,
        }
    }

    pub fn mode(&self) -> SceneMode {
        self.mode
    }

    pub fn focused_photo(&self) -> Option<usize> {
        self.focused_photo
    }

    /// Apply one gesture edge. Returns the transition, or `None` when the
    /// gesture has no effect in the current mode.
    pub fn apply(&mut self, gesture: GestureEvent, photo_count: usize) -> Option<ModeChange> {
        let from = self.mode;
        let to = match (gesture, from) {
            (GestureEvent::Fist, SceneMode::Tree) => return None,
            (GestureEvent::Open, SceneMode::Galaxy) => return None,
            (GestureEvent::Fist, _) => {
                self.focused_photo = None;
                SceneMode::Tree
            }
            (GestureEvent::Open, _) => {
                self.focused_photo = None;
                SceneMode::Galaxy
            }
            (GestureEvent::Pinch, SceneMode::Galaxy) => {
                let idx = select_focus(photo_count, &mut self.rng);
                self.focused_photo = Some(idx);
                SceneMode::Focus
            }
            (GestureEvent::Pinch, SceneMode::Focus) => {
                self.focused_photo = None;
                SceneMode::Galaxy
            }
            (GestureEvent::Pinch, SceneMode::Tree) => return None,
        };
        self.mode = to;
        log::info!("[scene] {:?} -> {:?} via {:?}", from, to, gesture);
        Some(ModeChange { from, to })
    }
}

/// Converts a level reading (a hand classifier's per-frame output, or which
/// gesture key is held down) into edges.
///
/// A gesture held over many frames fires once; it can fire again only after
/// the reading changes (to another gesture or to nothing). Hosts feed one
/// reading per frame or per input event and forward the returned edges to
/// [`SceneStateMachine::apply`].
#[derive(Clone, Debug, Default)]
pub struct GestureEdgeDetector {
    last: Option<GestureEvent>,
}

impl GestureEdgeDetector {
    pub fn observe(&mut self, reading: Option<GestureEvent>) -> Option<GestureEvent> {
        if reading == self.last {
            return None;
        }
        self.last = reading;
        reading
    }
}
