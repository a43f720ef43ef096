/// Transition observed by [`CompletionLatch::observe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionEdge {
    /// The last item just entered its window; fire the hook.
    Entered,
    /// The last item just left its window; silently re-arm.
    Left,
    /// No transition.
    Unchanged,
}

/// Edge-triggered "fully stacked" flag for the last item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompletionLatch {
    completed: bool,
}

impl CompletionLatch {
    /// Feed this tick's window membership of the last item.
    pub fn observe(&mut self, in_window: bool) -> CompletionEdge {
        match (self.completed, in_window) {
            (false, true) => {
                self.completed = true;
                CompletionEdge::Entered
            }
            (true, false) => {
                self.completed = false;
                CompletionEdge::Left
            }
            _ => CompletionEdge::Unchanged,
        }
    }

    /// Whether the last item is currently inside its window.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub(crate) fn reset(&mut self) {
        self.completed = false;
    }
}
