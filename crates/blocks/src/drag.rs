use blocks_engine::coords::Vec2;

/// Pointer drag interaction.
///
/// A primary-button press over a block grabs it; while held, pointer motion
/// is turned into a force on that block; release lets go.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Index into the demo's block list.
        block: usize,
        /// Pointer position at the last observation.
        last: Vec2,
    },
}

impl DragState {
    /// Primary button went down at `pointer`; `hit` is the block under it.
    pub fn press(&mut self, pointer: Vec2, hit: Option<usize>) {
        *self = match hit {
            Some(block) => DragState::Dragging { block, last: pointer },
            None => DragState::Idle,
        };
    }

    /// Primary button went up.
    pub fn release(&mut self) {
        *self = DragState::Idle;
    }

    /// Observes the pointer and returns the dragged block with the motion
    /// since the previous observation.
    pub fn drag(&mut self, pointer: Vec2) -> Option<(usize, Vec2)> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { block, last } => {
                let delta = pointer - *last;
                *last = pointer;
                Some((*block, delta))
            }
        }
    }

    pub fn dragged_block(&self) -> Option<usize> {
        match *self {
            DragState::Dragging { block, .. } => Some(block),
            DragState::Idle => None,
        }
    }
}
