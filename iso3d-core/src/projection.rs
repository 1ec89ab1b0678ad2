/// Isometric projection from world space to screen space
use crate::geometry::{ScreenPoint, Vec3};

/// Projector configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectorConfig {
    /// When false, `project` passes x/y through and drops z
    pub enabled: bool,
    /// Screen-space translation applied after the isometric transform
    pub offset: ScreenPoint,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            offset: ScreenPoint::new(0, 0),
        }
    }
}

/// Fixed axonometric transform: one world unit along x moves right and
/// half a pixel down, along y moves left and half a pixel down, along z
/// moves straight up.
///
/// There is no rotation or scale. State is read on every call, so changing
/// the offset between two draw calls of the same pass affects only the
/// second one.
#[derive(Debug, Clone, Default)]
pub struct Projector {
    config: ProjectorConfig,
}

impl Projector {
    pub fn new(config: ProjectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ProjectorConfig {
        self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn offset(&self) -> ScreenPoint {
        self.config.offset
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    pub fn set_offset(&mut self, offset: ScreenPoint) {
        self.config.offset = offset;
    }

    /// Project a world-space point to the screen.
    ///
    /// Halving uses `i32` division, which truncates toward zero, so
    /// `(-3, 0, 0)` lands on y = -1 rather than -2. Sums wrap at the
    /// `i32` limits in every build profile.
    pub fn project(&self, v: Vec3) -> ScreenPoint {
        if !self.config.enabled {
            return ScreenPoint::new(v.x, v.y);
        }

        let offset = self.config.offset;
        ScreenPoint::new(
            offset.x.wrapping_add(v.x.wrapping_sub(v.y)),
            offset
                .y
                .wrapping_add((v.x / 2).wrapping_add(v.y / 2))
                .wrapping_sub(v.z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_projector_defaults() {
        let projector = Projector::default();
        assert!(projector.is_enabled());
        assert_eq!(projector.offset(), ScreenPoint::new(0, 0));
    }

    #[test]
    fn test_project_truncates_toward_zero() {
        let projector = Projector::default();
        assert_eq!(projector.project(Vec3::new(-3, 0, 0)), ScreenPoint::new(-3, -1));
        assert_eq!(projector.project(Vec3::new(0, -3, 0)), ScreenPoint::new(3, -1));
        assert_eq!(projector.project(Vec3::new(3, 3, 0)), ScreenPoint::new(0, 2));
    }

    #[test]
    fn test_project_with_offset() {
        let mut projector = Projector::default();
        projector.set_offset(ScreenPoint::new(72, 40));
        assert_eq!(projector.project(Vec3::new(10, 4, 6)), ScreenPoint::new(78, 41));
    }

    #[test]
    fn test_project_wraps_at_i32_limits() {
        let projector = Projector::default();
        let p = projector.project(Vec3::new(i32::MIN, 1, 0));
        assert_eq!(p.x, i32::MAX);
        assert_eq!(p.y, i32::MIN / 2);

        let p = projector.project(Vec3::new(0, 0, i32::MIN));
        assert_eq!(p, ScreenPoint::new(0, i32::MIN));

        let mut shifted = Projector::default();
        shifted.set_offset(ScreenPoint::new(i32::MAX, i32::MAX));
        assert_eq!(
            shifted.project(Vec3::new(1, 0, 0)),
            ScreenPoint::new(i32::MIN, i32::MAX)
        );
    }

    #[test]
    fn test_config_reflects_setters() {
        let mut projector = Projector::default();
        projector.set_enabled(false);
        projector.set_offset(ScreenPoint::new(3, -4));
        assert_eq!(
            projector.config(),
            ProjectorConfig {
                enabled: false,
                offset: ScreenPoint::new(3, -4),
            }
        );
        assert_eq!(Projector::new(projector.config()).config(), projector.config());
    }

    #[test]
    fn test_setters_apply_to_next_projection() {
        let mut projector = Projector::default();
        let v = Vec3::new(8, 2, 1);
        let before = projector.project(v);
        projector.set_offset(ScreenPoint::new(1, 1));
        let after = projector.project(v);
        assert_eq!(after.x, before.x + 1);
        assert_eq!(after.y, before.y + 1);

        projector.set_enabled(false);
        assert_eq!(projector.project(v), ScreenPoint::new(8, 2));
    }

    proptest! {
        #[test]
        fn prop_enabled_projection_formula(
            x in -10_000i32..10_000,
            y in -10_000i32..10_000,
            z in -10_000i32..10_000,
        ) {
            let projector = Projector::default();
            let p = projector.project(Vec3::new(x, y, z));
            prop_assert_eq!(p.x, x - y);
            prop_assert_eq!(p.y, (x / 2 + y / 2) - z);
        }

        #[test]
        fn prop_disabled_projection_ignores_z_and_offset(
            x in -10_000i32..10_000,
            y in -10_000i32..10_000,
            z in -10_000i32..10_000,
            ox in -500i32..500,
            oy in -500i32..500,
        ) {
            let projector = Projector::new(ProjectorConfig {
                enabled: false,
                offset: ScreenPoint::new(ox, oy),
            });
            prop_assert_eq!(projector.project(Vec3::new(x, y, z)), ScreenPoint::new(x, y));
        }
    }
}
