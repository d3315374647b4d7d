//! Step store and playback cursor
//!
//! Owns the precomputed DFS and BFS step sequences and exposes a clamped,
//! panic-free cursor over the active one. Playback itself is timer-driven by
//! the host: the host schedules a recurring timer at [`Player::tick_interval`]
//! and calls [`Player::tick`] on each fire. Replacing the timer when the
//! speed or algorithm changes is the host's job: the player never spawns
//! anything.

use std::time::Duration;

use crate::steps::{generate_steps, Algorithm, AnimationStep, MergeAnimation, STEP_INTERVAL_MS};
use crate::tree::TreeNode;

/// Slowest permitted playback multiplier.
pub const MIN_SPEED: f64 = 0.25;
/// Fastest permitted playback multiplier.
pub const MAX_SPEED: f64 = 4.0;

/// Snapshot of the cursor state, mirroring what a control panel displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// Index of the current step.
    pub current_step: usize,
    /// Length of the active sequence.
    pub total_steps: usize,
    /// Playback speed multiplier.
    pub speed: f64,
    /// Whether timer-driven playback is active.
    pub is_playing: bool,
    /// Which engine's sequence is active.
    pub algorithm: Algorithm,
}

/// Sequence-indexed cursor over the two generated step sequences.
///
/// All position inputs are clamped, never rejected: the controls are expected
/// to be driven by a user dragging a slider past valid bounds.
#[derive(Debug)]
pub struct Player {
    dfs: MergeAnimation,
    bfs: MergeAnimation,
    algorithm: Algorithm,
    current: usize,
    speed: f64,
    playing: bool,
}

impl Player {
    /// Eagerly generate both sequences for a pair of optional roots.
    pub fn new(root1: Option<&TreeNode>, root2: Option<&TreeNode>) -> Self {
        Self {
            dfs: generate_steps(Algorithm::Dfs, root1, root2),
            bfs: generate_steps(Algorithm::Bfs, root1, root2),
            algorithm: Algorithm::Dfs,
            current: 0,
            speed: 1.0,
            playing: false,
        }
    }

    /// The active algorithm's full animation.
    pub fn animation(&self) -> &MergeAnimation {
        match self.algorithm {
            Algorithm::Dfs => &self.dfs,
            Algorithm::Bfs => &self.bfs,
        }
    }

    /// Steps of the active sequence.
    pub fn steps(&self) -> &[AnimationStep] {
        &self.animation().steps
    }

    /// Length of the active sequence.
    pub fn total_steps(&self) -> usize {
        self.steps().len()
    }

    /// Current cursor index.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The step under the cursor. `None` only when the sequence is empty,
    /// which the engines never produce.
    pub fn current_step(&self) -> Option<&AnimationStep> {
        self.steps().get(self.current)
    }

    /// Active algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Whether playback is active.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Switch the active sequence and rewind to the first step.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.current = 0;
    }

    /// Move the cursor to `index`, clamped into the valid range.
    pub fn seek(&mut self, index: isize) {
        let last = self.total_steps().saturating_sub(1);
        self.current = index.max(0) as usize;
        self.current = self.current.min(last);
    }

    /// Advance one step. Returns `false` (and stays put) at the end.
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.total_steps() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Step back once. Returns `false` (and stays put) at the start.
    pub fn retreat(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Rewind to the first step and stop playback.
    pub fn reset(&mut self) {
        self.current = 0;
        self.playing = false;
    }

    /// Start timer-driven playback.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Stop timer-driven playback.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Set the speed multiplier, clamped to `[MIN_SPEED, MAX_SPEED]`.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Interval at which the host timer should fire: `1000ms / speed`.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis((STEP_INTERVAL_MS as f64 / self.speed).round() as u64)
    }

    /// One timer tick: advance while playing, stopping automatically upon
    /// reaching the last index instead of wrapping. Returns whether the
    /// cursor moved.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let moved = self.advance();
        if self.current + 1 >= self.total_steps() {
            self.playing = false;
        }
        moved
    }

    /// Snapshot of the cursor state.
    pub fn state(&self) -> PlayerState {
        PlayerState {
            current_step: self.current,
            total_steps: self.total_steps(),
            speed: self.speed,
            is_playing: self.playing,
            algorithm: self.algorithm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{sample_tree_one, sample_tree_two};

    fn sample_player() -> Player {
        let t1 = sample_tree_one();
        let t2 = sample_tree_two();
        Player::new(Some(&t1), Some(&t2))
    }

    #[test]
    fn test_seek_clamps_silently() {
        let mut player = sample_player();
        player.seek(-10);
        assert_eq!(player.current_index(), 0);
        player.seek(isize::MAX);
        assert_eq!(player.current_index(), player.total_steps() - 1);
        player.seek(3);
        assert_eq!(player.current_index(), 3);
    }

    #[test]
    fn test_boundary_moves_are_noops() {
        let mut player = sample_player();
        assert!(!player.retreat());
        assert_eq!(player.current_index(), 0);
        player.seek(isize::MAX);
        assert!(!player.advance());
        assert_eq!(player.current_index(), player.total_steps() - 1);
    }

    #[test]
    fn test_select_algorithm_resets_cursor() {
        let mut player = sample_player();
        player.seek(5);
        player.select_algorithm(Algorithm::Bfs);
        assert_eq!(player.current_index(), 0);
        assert_eq!(player.total_steps(), player.animation().steps.len());
        assert_eq!(player.algorithm(), Algorithm::Bfs);
    }

    #[test]
    fn test_speed_clamp_and_interval() {
        let mut player = sample_player();
        player.set_speed(2.0);
        assert_eq!(player.tick_interval(), Duration::from_millis(500));
        player.set_speed(100.0);
        assert_eq!(player.speed(), MAX_SPEED);
        player.set_speed(0.0);
        assert_eq!(player.speed(), MIN_SPEED);
    }

    #[test]
    fn test_tick_autostops_at_last_step() {
        let mut player = sample_player();
        player.play();
        let mut ticks = 0;
        while player.tick() {
            ticks += 1;
            assert!(ticks <= player.total_steps(), "playback must terminate");
        }
        assert!(!player.is_playing());
        assert_eq!(player.current_index(), player.total_steps() - 1);
        assert_eq!(ticks, player.total_steps() - 1);
    }

    #[test]
    fn test_tick_is_inert_when_paused() {
        let mut player = sample_player();
        assert!(!player.tick());
        assert_eq!(player.current_index(), 0);
    }

    #[test]
    fn test_reset_stops_playback() {
        let mut player = sample_player();
        player.play();
        player.seek(4);
        player.reset();
        assert_eq!(player.current_index(), 0);
        assert!(!player.is_playing());
    }
}
