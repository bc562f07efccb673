//! Scene state: the static field plus the active shooting stars.

use byeol_core::SceneOptions;
use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::chars::{SHOOTING_HEAD, SHOOTING_TRAIL, STAR_CHARS};
use crate::field::{self, FieldPoint};
use crate::project::project;
use crate::rng::Rng;
use crate::shooting::{self, ShootingStar};

/// Reference frame duration; per-frame constants are scaled by real deltas.
const BASE_FRAME_MS: f32 = 16.7;

/// Starfield scene state.
pub struct SceneState {
    options: SceneOptions,
    /// Static field points, created once, never mutated.
    points: Vec<FieldPoint>,
    /// Active shooting stars.
    stars: Vec<ShootingStar>,
    /// Accumulated field rotation in radians.
    rotation: f32,
    /// Last update time in milliseconds.
    last_update_ms: u64,
    /// Spawn timer bookkeeping.
    last_spawn_ms: u64,
    rng: Rng,
}

impl SceneState {
    /// Create a scene seeded from the system clock.
    pub fn new(options: SceneOptions) -> Self {
        let rng = Rng::from_time();
        Self::with_rng(options, rng)
    }

    /// Create a scene with an explicit seed, for reproducible behavior.
    pub fn with_seed(options: SceneOptions, seed: u64) -> Self {
        Self::with_rng(options, Rng::new(seed))
    }

    fn with_rng(options: SceneOptions, mut rng: Rng) -> Self {
        let points = field::init_points(options.star_count, options.field_extent, &mut rng);
        Self {
            options,
            points,
            stars: Vec::new(),
            rotation: 0.0,
            last_update_ms: 0,
            last_spawn_ms: 0,
            rng,
        }
    }

    /// Number of currently active shooting stars.
    pub fn active_stars(&self) -> usize {
        self.stars.len()
    }

    /// Advance the scene to `elapsed_ms` (milliseconds since scene start):
    /// rotate the field, move the stars, retire leavers, fire the spawn
    /// timer.
    pub fn tick(&mut self, elapsed_ms: u64) {
        let delta_ms = elapsed_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = elapsed_ms;

        let frames = delta_ms as f32 / BASE_FRAME_MS;
        self.rotation += self.options.rotation_per_frame * frames;
        shooting::update(&mut self.stars, frames, &self.options);

        // Fixed-interval spawn timer, one star per elapsed interval. The
        // active set is bounded by max_active; a spawn past the cap is
        // skipped, not queued.
        while elapsed_ms.saturating_sub(self.last_spawn_ms) >= self.options.spawn_interval_ms {
            self.last_spawn_ms += self.options.spawn_interval_ms;
            if self.stars.len() < self.options.max_active {
                self.stars.push(shooting::spawn(&mut self.rng, &self.options));
            }
        }
    }

    /// Tick, then paint the whole frame area.
    pub fn render(&mut self, frame: &mut Frame, elapsed_ms: u64) {
        self.tick(elapsed_ms);

        let area = frame.area();
        let (width, height) = (area.width, area.height);
        if width == 0 || height == 0 {
            return;
        }

        let mut cells: Vec<Option<(char, Color)>> = vec![None; width as usize * height as usize];
        let at = |col: u16, row: u16| row as usize * width as usize + col as usize;

        // Static field, rotated as a whole.
        for (idx, point) in self.points.iter().enumerate() {
            let (x, y, z) = field::rotate_y(point, self.rotation);
            if let Some((col, row, depth)) = project(x, y, z, width, height) {
                let seed = idx.wrapping_mul(31).wrapping_add(idx.wrapping_mul(17) >> 3);
                let ch = STAR_CHARS[seed % STAR_CHARS.len()];
                cells[at(col, row)] = Some((ch, depth_color(depth)));
            }
        }

        // Shooting stars paint on top, unrotated.
        for star in &self.stars {
            if let Some((col, row, _)) = project(star.x, star.y, star.z, width, height) {
                // Stars travel toward the lower left; the trail sits one
                // cell back along the motion path.
                if col + 1 < width && row > 0 {
                    cells[at(col + 1, row - 1)] = Some((SHOOTING_TRAIL, Color::Rgb(180, 180, 200)));
                }
                cells[at(col, row)] = Some((SHOOTING_HEAD, Color::Rgb(255, 255, 255)));
            }
        }

        let lines: Vec<Line> = (0..height)
            .map(|row| {
                let spans: Vec<Span> = (0..width)
                    .map(|col| match cells[at(col, row)] {
                        Some((ch, color)) => {
                            Span::styled(ch.to_string(), Style::new().fg(color))
                        }
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Brightness falls off with distance from the camera.
fn depth_color(depth: f32) -> Color {
    if depth < 6.0 {
        Color::Rgb(150, 150, 200) // Bright
    } else if depth < 11.0 {
        Color::Rgb(100, 100, 140) // Medium
    } else {
        Color::Rgb(60, 60, 80) // Dim
    }
}
