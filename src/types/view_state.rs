/// Explicit widget view state.
///
/// The starred-only latch is a named boolean behind accessors — the page's
/// button class is a projection of this field, never the other way around.
/// The render generation is a monotonically increasing token: every filter
/// apply takes a fresh token, and a fetch completion may only touch the list
/// while its token is still current.
#[derive(Debug, Default)]
pub struct ViewState {
    starred_only: bool,
    render_generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starred_only(&self) -> bool {
        self.starred_only
    }

    pub fn set_starred_only(&mut self, active: bool) {
        self.starred_only = active;
    }

    /// Flips the latch and returns the new state.
    pub fn toggle_starred_only(&mut self) -> bool {
        self.starred_only = !self.starred_only;
        self.starred_only
    }

    /// Starts a new render: increments the generation and returns its token.
    pub fn begin_render(&mut self) -> u64 {
        self.render_generation += 1;
        self.render_generation
    }

    pub fn current_generation(&self) -> u64 {
        self.render_generation
    }

    /// Whether a completion carrying `token` may still mutate the list.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.render_generation
    }
}
