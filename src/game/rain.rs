use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::game::words::Difficulty;

/// Fixed simulation step; the external driver sends a tick roughly this often.
pub const TICK_MS: u64 = 50;
const TICK_SECS: f64 = 0.05;

const FIELD_BOTTOM: f64 = 100.0;
const SPAWN_X_MIN: f64 = 5.0;
const SPAWN_X_MAX: f64 = 95.0;
/// Candidate positions tried per spawn; the best found wins, no exhaustive
/// search for perfect spacing.
const SPAWN_CANDIDATES: usize = 6;
/// Words above this line are "near the top" and repel new spawns.
const NEAR_TOP_Y: f64 = 30.0;
/// Fall speed grows by this fraction of base speed per elapsed second.
const SPEED_RAMP_PER_SEC: f64 = 0.02;
/// Combo bonus stops growing past this multiplier.
const COMBO_SCORE_CAP: u32 = 5;

const SCORE_PER_WORD: u32 = 10;
const FINAL_COMBO_WEIGHT: u32 = 5;
const FINAL_LIFE_WEIGHT: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Ready,
    Playing,
    GameOver,
}

#[derive(Clone, Debug)]
pub struct FallingWord {
    pub id: u32,
    pub word: String,
    /// Horizontal position, percent of field width.
    pub x: f64,
    /// Vertical position, percent of field height; 100 is the floor.
    pub y: f64,
    /// Percent of field height per tick.
    pub speed: f64,
    /// Visual affordance: the current input is a prefix of this word.
    pub active: bool,
}

/// Word-rain arcade state. One instance per game; mutated once per tick and
/// once per input event, discarded at game over.
pub struct WordRain {
    pub score: u32,
    pub combo: u32,
    pub best_combo: u32,
    pub lives: u32,
    pub max_lives: u32,
    pub words: Vec<FallingWord>,
    pub input: String,
    pub phase: GamePhase,
    pub words_typed: u32,
    pub difficulty: Difficulty,
    pub elapsed_seconds: f64,
    pool: Vec<String>,
    rng: SmallRng,
    next_word_id: u32,
    spawn_countdown: u32,
}

impl WordRain {
    /// Seeded so a fixed seed and input sequence replays identically.
    pub fn new(difficulty: Difficulty, pool: Vec<String>, lives: u32, seed: u64) -> Self {
        Self {
            score: 0,
            combo: 0,
            best_combo: 0,
            lives,
            max_lives: lives,
            words: Vec::new(),
            input: String::new(),
            phase: GamePhase::Ready,
            words_typed: 0,
            difficulty,
            elapsed_seconds: 0.0,
            pool,
            rng: SmallRng::seed_from_u64(seed),
            next_word_id: 0,
            spawn_countdown: 1,
        }
    }

    /// ready -> playing. Phases never move backward.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Ready {
            self.phase = GamePhase::Playing;
        }
    }

    /// Spawn one word from the pool, if the cap allows. Spawn x avoids
    /// clustering with words still near the top by trying a handful of random
    /// positions and keeping the one with the most clearance.
    pub fn spawn_word(&mut self) {
        if self.phase != GamePhase::Playing
            || self.words.len() >= self.difficulty.max_words()
            || self.pool.is_empty()
        {
            return;
        }

        let word = self.pool[self.rng.gen_range(0..self.pool.len())].clone();
        let speed =
            self.difficulty.base_speed() * (1.0 + self.elapsed_seconds * SPEED_RAMP_PER_SEC);

        let mut best_x = self.rng.gen_range(SPAWN_X_MIN..SPAWN_X_MAX);
        let mut best_gap = self.top_clearance(best_x);
        for _ in 1..SPAWN_CANDIDATES {
            let candidate = self.rng.gen_range(SPAWN_X_MIN..SPAWN_X_MAX);
            let gap = self.top_clearance(candidate);
            if gap > best_gap {
                best_x = candidate;
                best_gap = gap;
            }
        }

        let id = self.next_word_id;
        self.next_word_id += 1;
        self.words.push(FallingWord {
            id,
            word,
            x: best_x,
            y: 0.0,
            speed,
            active: false,
        });
    }

    /// Smallest horizontal distance from `x` to any word still near the top.
    /// Infinite when the top of the field is clear.
    fn top_clearance(&self, x: f64) -> f64 {
        self.words
            .iter()
            .filter(|w| w.y < NEAR_TOP_Y)
            .map(|w| (w.x - x).abs())
            .fold(f64::INFINITY, f64::min)
    }

    /// One 50 ms simulation step: gravity, expiry, lives, game over, and the
    /// spawn countdown. The driver sends ticks only while it wants the game
    /// to run; outside `playing` this is a no-op.
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }

        self.elapsed_seconds += TICK_SECS;

        for word in &mut self.words {
            word.y += word.speed;
        }

        let before = self.words.len();
        self.words.retain(|w| w.y < FIELD_BOTTOM);
        let lost = (before - self.words.len()) as u32;

        if lost > 0 {
            // One missed word kills the whole streak, not just one point.
            self.combo = 0;
            self.lives = self.lives.saturating_sub(lost);
        }
        self.best_combo = self.best_combo.max(self.combo);

        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            return;
        }

        self.spawn_countdown = self.spawn_countdown.saturating_sub(1);
        if self.spawn_countdown == 0 {
            self.spawn_word();
            self.spawn_countdown = self.difficulty.spawn_interval_ticks();
        }
    }

    /// Handle the current input buffer. An exact full-string match catches a
    /// word; a partial match only highlights candidates.
    pub fn process_input(&mut self, input: &str) {
        if self.phase != GamePhase::Playing {
            return;
        }

        if let Some(pos) = self.words.iter().position(|w| w.word == input) {
            self.words.remove(pos);
            self.combo += 1;
            self.best_combo = self.best_combo.max(self.combo);
            self.score += SCORE_PER_WORD * self.combo.min(COMBO_SCORE_CAP);
            self.words_typed += 1;
            self.input.clear();
            return;
        }

        for word in &mut self.words {
            word.active = !input.is_empty() && word.word.starts_with(input);
        }
        self.input = input.to_string();
    }

    /// Peak streak and surviving lives count, not just raw words.
    pub fn calculate_final_score(&self) -> u32 {
        self.score + self.best_combo * FINAL_COMBO_WEIGHT + self.lives * FINAL_LIFE_WEIGHT
    }
}

/// Tiered XP for a finished game. Never negative, always at least a
/// participation reward.
pub fn xp_for_score(total_score: u32) -> u32 {
    match total_score {
        500.. => 75,
        300.. => 50,
        150.. => 30,
        50.. => 20,
        _ => 10,
    }
}
