use crate::error::{ParameterError, Result};

/// Base angle used when a rule needs an angle and none was supplied, in degrees.
pub const DEFAULT_ANGLE: f64 = 45.0;

/// A validated pair of base angles, in degrees.
///
/// `alpha1` sits at the start of the base edge and `alpha2` at its end. Neither
/// is negative and they sum to less than 180°, so the apex angle is strictly
/// positive. A zero base angle is allowed and collapses the apex onto the base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseAngles {
    alpha1: f64,
    alpha2: f64,
}

impl BaseAngles {
    /// Creates a base angle pair.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::NotFinite` for NaN or infinite angles and
    /// `ParameterError::DegenerateTriangle` if either angle is negative or the
    /// pair leaves no room for an apex.
    pub fn new(alpha1: f64, alpha2: f64) -> Result<Self> {
        if !alpha1.is_finite() {
            return Err(ParameterError::NotFinite { parameter: "alpha1" }.into());
        }
        if !alpha2.is_finite() {
            return Err(ParameterError::NotFinite { parameter: "alpha2" }.into());
        }
        if alpha1 < 0.0 || alpha2 < 0.0 || alpha1 + alpha2 >= 180.0 {
            return Err(ParameterError::DegenerateTriangle { alpha1, alpha2 }.into());
        }
        Ok(Self { alpha1, alpha2 })
    }

    /// Pairs `angle` with its complement `90° - angle`, swapped when `mirror` is set.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::OutOfRange` if `angle` is outside `(0°, 180°)`,
    /// or the errors of [`BaseAngles::new`] if the pair is degenerate. Any
    /// angle above 90° ends up here since its complement is negative.
    pub fn complementary(angle: f64, mirror: bool) -> Result<Self> {
        if !angle.is_finite() {
            return Err(ParameterError::NotFinite { parameter: "angle" }.into());
        }
        if angle <= 0.0 || angle >= 180.0 {
            return Err(ParameterError::OutOfRange {
                parameter: "angle",
                value: angle,
                min: 0.0,
                max: 180.0,
            }
            .into());
        }
        let pair = Self::new(angle, 90.0 - angle)?;
        Ok(if mirror { pair.swapped() } else { pair })
    }

    /// Angle at the start of the base edge, in degrees.
    #[must_use]
    pub fn alpha1(&self) -> f64 {
        self.alpha1
    }

    /// Angle at the end of the base edge, in degrees.
    #[must_use]
    pub fn alpha2(&self) -> f64 {
        self.alpha2
    }

    /// Angle at the apex, in degrees.
    #[must_use]
    pub fn apex(&self) -> f64 {
        180.0 - self.alpha1 - self.alpha2
    }

    /// Returns the pair with the two base angles exchanged.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            alpha1: self.alpha2,
            alpha2: self.alpha1,
        }
    }
}

/// How the apex of a triangle cap is placed on its base edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ApexRule {
    /// Right-angled isosceles cap from a perpendicular offset at the base
    /// midpoint. Ignores angle and mirror parameters.
    Symmetric,
    /// Base angles `angle` and `90° - angle`, swapped when `mirror` is set.
    Complementary { angle: f64, mirror: bool },
    /// Arbitrary base angles solved with the law of sines.
    Explicit(BaseAngles),
}

impl Default for ApexRule {
    fn default() -> Self {
        Self::Complementary {
            angle: DEFAULT_ANGLE,
            mirror: false,
        }
    }
}

impl ApexRule {
    /// Resolves the base angles this rule builds with.
    ///
    /// Returns `None` for [`ApexRule::Symmetric`], which needs no angles.
    ///
    /// # Errors
    ///
    /// Returns an error if a complementary angle does not form a triangle.
    pub fn base_angles(&self) -> Result<Option<BaseAngles>> {
        match *self {
            Self::Symmetric => Ok(None),
            Self::Complementary { angle, mirror } => {
                BaseAngles::complementary(angle, mirror).map(Some)
            }
            Self::Explicit(angles) => Ok(Some(angles)),
        }
    }

    /// Applies per-shape angle and mirror overrides on top of this rule.
    ///
    /// A supplied angle always switches to a complementary pairing. A mirror
    /// flag on its own keeps the rule's angles and sets their orientation;
    /// the symmetric rule is unaffected by mirroring.
    #[must_use]
    pub fn with_overrides(self, angle: Option<f64>, mirror: Option<bool>) -> Self {
        match (self, angle, mirror) {
            (rule, None, None) | (rule @ Self::Symmetric, None, Some(_)) => rule,
            (Self::Symmetric, Some(angle), mirror) => Self::Complementary {
                angle,
                mirror: mirror.unwrap_or(false),
            },
            (Self::Complementary { angle: a, mirror: m }, angle, mirror) => Self::Complementary {
                angle: angle.unwrap_or(a),
                mirror: mirror.unwrap_or(m),
            },
            (Self::Explicit(_), Some(angle), mirror) => Self::Complementary {
                angle,
                mirror: mirror.unwrap_or(false),
            },
            (Self::Explicit(angles), None, Some(true)) => Self::Explicit(angles.swapped()),
            (Self::Explicit(angles), None, Some(false)) => Self::Explicit(angles),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::TreeError;

    #[test]
    fn complementary_pairs_with_remainder_of_right_angle() {
        let pair = BaseAngles::complementary(30.0, false).unwrap();
        assert_abs_diff_eq!(pair.alpha1(), 30.0);
        assert_abs_diff_eq!(pair.alpha2(), 60.0);
        assert_abs_diff_eq!(pair.apex(), 90.0);
    }

    #[test]
    fn mirror_swaps_base_angles() {
        let pair = BaseAngles::complementary(30.0, true).unwrap();
        assert_abs_diff_eq!(pair.alpha1(), 60.0);
        assert_abs_diff_eq!(pair.alpha2(), 30.0);
    }

    #[test]
    fn obtuse_complementary_angle_is_rejected() {
        let err = BaseAngles::complementary(170.0, false).unwrap_err();
        assert!(matches!(
            err,
            TreeError::Parameter(ParameterError::DegenerateTriangle { .. })
        ));
    }

    #[test]
    fn right_complementary_angle_gives_zero_base_angle() {
        let pair = BaseAngles::complementary(90.0, false).unwrap();
        assert_abs_diff_eq!(pair.alpha1(), 90.0);
        assert_abs_diff_eq!(pair.alpha2(), 0.0);
        assert_abs_diff_eq!(pair.apex(), 90.0);
        let mirrored = BaseAngles::complementary(90.0, true).unwrap();
        assert_abs_diff_eq!(mirrored.alpha1(), 0.0);
    }

    #[test]
    fn angle_outside_open_interval_is_out_of_range() {
        for angle in [0.0, -10.0, 180.0, 200.0] {
            let err = BaseAngles::complementary(angle, false).unwrap_err();
            assert!(matches!(
                err,
                TreeError::Parameter(ParameterError::OutOfRange { parameter: "angle", .. })
            ));
        }
    }

    #[test]
    fn explicit_pair_must_leave_room_for_apex() {
        assert!(BaseAngles::new(100.0, 80.0).is_err());
        assert!(BaseAngles::new(120.0, 70.0).is_err());
        assert!(BaseAngles::new(-1.0, 40.0).is_err());
        assert!(BaseAngles::new(0.0, 180.0).is_err());
        assert!(BaseAngles::new(f64::NAN, 40.0).is_err());
        let pair = BaseAngles::new(100.0, 30.0).unwrap();
        assert_abs_diff_eq!(pair.apex(), 50.0);
    }

    #[test]
    fn default_rule_is_isosceles_right() {
        let angles = ApexRule::default().base_angles().unwrap().unwrap();
        assert_abs_diff_eq!(angles.alpha1(), 45.0);
        assert_abs_diff_eq!(angles.alpha2(), 45.0);
        assert!(ApexRule::Symmetric.base_angles().unwrap().is_none());
    }

    #[test]
    fn overrides_replace_only_supplied_fields() {
        let rule = ApexRule::Complementary {
            angle: 30.0,
            mirror: false,
        };
        assert_eq!(rule.with_overrides(None, None), rule);
        assert_eq!(
            rule.with_overrides(None, Some(true)),
            ApexRule::Complementary {
                angle: 30.0,
                mirror: true
            }
        );
        assert_eq!(
            rule.with_overrides(Some(20.0), None),
            ApexRule::Complementary {
                angle: 20.0,
                mirror: false
            }
        );
        assert_eq!(
            ApexRule::Symmetric.with_overrides(None, Some(true)),
            ApexRule::Symmetric
        );
    }

    #[test]
    fn mirror_override_swaps_explicit_pair() {
        let pair = BaseAngles::new(20.0, 50.0).unwrap();
        let rule = ApexRule::Explicit(pair).with_overrides(None, Some(true));
        assert_eq!(rule, ApexRule::Explicit(pair.swapped()));
    }
}
