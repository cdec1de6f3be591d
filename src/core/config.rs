use super::constants::*;

/// Runtime parameters for the particle field.
///
/// `Default` mirrors the tuning constants; tests and alternative pages can
/// override individual fields without touching the simulator.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundConfig {
    pub particle_count: usize,
    pub speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub attract_radius: f32,
    pub attract_strength: f32,
    pub scroll_parallax: f32,
    pub overlay_opacity: f32,
    pub dpr_cap: f64,
    pub palette: Palette,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub bg_top: &'static str,
    pub bg_bottom: &'static str,
    pub tint_a: &'static str,
    pub tint_b: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bg_top: BG_TOP,
            bg_bottom: BG_BOTTOM,
            tint_a: PARTICLE_TINT_A,
            tint_b: PARTICLE_TINT_B,
        }
    }
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            speed: SPEED,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            attract_radius: ATTRACT_RADIUS,
            attract_strength: ATTRACT_STRENGTH,
            scroll_parallax: SCROLL_PARALLAX,
            overlay_opacity: OVERLAY_OPACITY,
            dpr_cap: DPR_CAP,
            palette: Palette::default(),
        }
    }
}

impl BackgroundConfig {
    /// Hard ceiling on particle speed.
    #[inline]
    pub fn speed_limit(&self) -> f32 {
        self.speed * SPEED_LIMIT_FACTOR
    }
}
