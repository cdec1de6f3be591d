use super::config::BackgroundConfig;
use super::constants::*;
use super::input::PointerState;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Which of the two palette colors a particle is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    A,
    B,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// 0.2 (far) ..= 1.0 (near); scales scroll parallax and glow size.
    pub depth: f32,
    pub alpha: f32,
    pub tint: Tint,
    pub twinkle: f32,
    pub phase: f32,
}

impl Particle {
    fn sample<R: Rng>(cfg: &BackgroundConfig, width: f32, height: f32, rng: &mut R) -> Self {
        let radius = sample_range(rng, cfg.radius_min, cfg.radius_max);
        let depth = sample_range(rng, DEPTH_MIN, DEPTH_MAX);
        let drift = sample_range(rng, DRIFT_MIN, DRIFT_MAX);
        let angle = sample_range(rng, 0.0, TAU);
        let speed = cfg.speed * drift;
        Self {
            pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            radius,
            depth,
            alpha: sample_range(rng, ALPHA_MIN, ALPHA_MAX),
            tint: if rng.gen::<f32>() < 0.5 { Tint::A } else { Tint::B },
            twinkle: sample_range(rng, TWINKLE_MIN, TWINKLE_MAX),
            phase: sample_range(rng, 0.0, TAU),
        }
    }

    /// Opacity at time `t_sec`, oscillating between 0.2 and 1.0 of `alpha`.
    #[inline]
    pub fn twinkle_alpha(&self, t_sec: f32) -> f32 {
        self.alpha * (TWINKLE_BASE + TWINKLE_SPAN * (t_sec * self.twinkle + self.phase).sin())
    }

    #[inline]
    pub fn glow_radius(&self) -> f32 {
        self.radius * (GLOW_RADIUS_BASE + self.depth * GLOW_RADIUS_DEPTH)
    }
}

#[inline]
fn sample_range<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

/// Everything the painter needs for one particle: a soft glow followed by a
/// solid disc at the same centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub tint: Tint,
    pub glow_radius: f32,
    pub glow_alpha: f32,
    pub disc_radius: f32,
    pub disc_alpha: f32,
}

/// Fixed-size particle population living in CSS pixel space.
pub struct ParticleField {
    config: BackgroundConfig,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    /// Pointer attraction requires a fine, hover-capable pointer.
    pub attraction_enabled: bool,
}

impl ParticleField {
    pub fn new<R: Rng>(config: BackgroundConfig, width: f32, height: f32, rng: &mut R) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle::sample(&config, width, height, rng))
            .collect();
        Self {
            config,
            particles,
            width,
            height,
            attraction_enabled: true,
        }
    }

    #[inline]
    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Particles keep their positions; the wrap step pulls any that now sit
    /// outside the margin back in on the next frame.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance every particle by `dt` (60fps-normalized).
    pub fn step(&mut self, dt: f32, pointer: &PointerState) {
        let attract = self.attraction_enabled && pointer.active;
        let radius = self.config.attract_radius;
        let radius_sq = radius * radius;
        let strength = self.config.attract_strength;
        let limit = self.config.speed_limit();
        let (w, h) = (self.width, self.height);

        for p in &mut self.particles {
            p.pos += p.vel * dt;
            p.pos.x = wrap_axis(p.pos.x, w);
            p.pos.y = wrap_axis(p.pos.y, h);

            if attract {
                let d = pointer.pos - p.pos;
                let dist_sq = d.length_squared();
                if dist_sq > ATTRACT_MIN_DIST_SQ && dist_sq < radius_sq {
                    let dist = dist_sq.sqrt();
                    let force = (1.0 - dist / radius) * strength;
                    p.vel += (d / dist) * force * ATTRACT_GAIN;
                }
            }

            p.vel *= DAMPING;

            let speed_sq = p.vel.length_squared();
            if speed_sq > limit * limit {
                p.vel = p.vel / speed_sq.sqrt() * limit;
            }
        }
    }

    /// Vertical scroll parallax for a particle at `depth`.
    #[inline]
    pub fn parallax_offset(&self, scroll: f32, depth: f32) -> f32 {
        scroll * depth * self.config.scroll_parallax
    }

    /// Draw list for the current state, in particle order.
    pub fn sprites(&self, t_sec: f32, scroll: f32) -> impl Iterator<Item = Sprite> + '_ {
        self.particles.iter().map(move |p| {
            let alpha = p.twinkle_alpha(t_sec);
            Sprite {
                x: p.pos.x,
                y: p.pos.y + self.parallax_offset(scroll, p.depth),
                tint: p.tint,
                glow_radius: p.glow_radius(),
                glow_alpha: alpha * GLOW_ALPHA,
                disc_radius: p.radius,
                disc_alpha: (alpha * DISC_ALPHA).min(DISC_ALPHA_MAX),
            }
        })
    }

    #[inline]
    pub fn tint_rgb(&self, tint: Tint) -> &'static str {
        match tint {
            Tint::A => self.config.palette.tint_a,
            Tint::B => self.config.palette.tint_b,
        }
    }
}

/// Toroidal wrap with an off-screen margin on both sides.
#[inline]
pub fn wrap_axis(v: f32, extent: f32) -> f32 {
    if v < -WRAP_MARGIN {
        extent + WRAP_MARGIN
    } else if v > extent + WRAP_MARGIN {
        -WRAP_MARGIN
    } else {
        v
    }
}
