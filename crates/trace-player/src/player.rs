//! Cursor over an immutable step sequence.

/// Walks an index through a trace.
///
/// The player never mutates the steps it holds. Whenever the sequence is
/// non-empty the cursor points at a valid step; for an empty sequence it stays
/// at `0` and [`StepsPlayer::current`] returns `None`.
///
/// # Examples
///
/// ```
/// use trace_player::StepsPlayer;
///
/// let mut player = StepsPlayer::new(vec![10, 20, 30]);
/// assert_eq!(player.current(), Some(&10));
///
/// assert!(player.step_forward());
/// assert!(player.step_forward());
/// assert!(!player.step_forward()); // already on the last step
/// assert_eq!(player.current(), Some(&30));
///
/// player.reset();
/// assert_eq!(player.cursor(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepsPlayer<T> {
    steps: Vec<T>,
    cursor: usize,
    playing: bool,
}

impl<T> Default for StepsPlayer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> StepsPlayer<T> {
    pub fn new(steps: Vec<T>) -> Self {
        Self {
            steps,
            cursor: 0,
            playing: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Replaces the sequence, rewinds and pauses.
    pub fn load(&mut self, steps: Vec<T>) {
        self.steps = steps;
        self.cursor = 0;
        self.playing = false;
    }

    pub fn clear(&mut self) {
        self.load(Vec::new());
    }

    pub fn steps(&self) -> &[T] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&T> {
        self.steps.get(self.cursor)
    }

    /// Steps up to and including the cursor.
    pub fn played(&self) -> &[T] {
        if self.steps.is_empty() {
            &[]
        } else {
            &self.steps[..=self.cursor]
        }
    }

    /// True on the last step, and always true for an empty sequence.
    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 >= self.steps.len()
    }

    /// Moves to the next step. Returns `false` when already at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Moves to the previous step. Returns `false` when already at the start.
    pub fn step_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Jumps to `index`, clamped to the last step.
    pub fn seek(&mut self, index: usize) {
        self.cursor = index.min(self.steps.len().saturating_sub(1));
    }

    /// Rewinds to the first step and pauses.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.playing = false;
    }

    /// Starts auto-advance. Returns `false` (and stays paused) when there is
    /// no further step to advance to.
    pub fn play(&mut self) -> bool {
        self.playing = !self.is_at_end();
        self.playing
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// One automatic advance.
    ///
    /// Does nothing while paused. Playing stops as soon as the last step
    /// becomes current.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let moved = self.step_forward();
        if self.is_at_end() {
            self.playing = false;
        }
        moved
    }
}
