//! Ordered threshold tables.
//!
//! A table is a list of tiers checked from most to least severe; the first
//! tier whose bound admits the value decides the grade, and a value no tier
//! admits is normal.

use ohc_types::RiskLevel;

/// One-sided condition on a reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// `value >= limit`
    AtLeast(f64),
    /// `value > limit`
    Above(f64),
    /// `value < limit`
    Below(f64),
}

impl Bound {
    pub fn admits(self, value: f64) -> bool {
        match self {
            Bound::AtLeast(limit) => value >= limit,
            Bound::Above(limit) => value > limit,
            Bound::Below(limit) => value < limit,
        }
    }

    pub fn limit(self) -> f64 {
        match self {
            Bound::AtLeast(limit) | Bound::Above(limit) | Bound::Below(limit) => limit,
        }
    }

    fn is_upper(self) -> bool {
        !matches!(self, Bound::Below(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub bound: Bound,
    pub level: RiskLevel,
    /// Advice for this tier; `None` falls back to the level's standard advice.
    pub label: Option<&'static str>,
}

impl Tier {
    pub const fn new(bound: Bound, level: RiskLevel) -> Self {
        Self {
            bound,
            level,
            label: None,
        }
    }

    pub const fn labelled(bound: Bound, level: RiskLevel, label: &'static str) -> Self {
        Self {
            bound,
            level,
            label: Some(label),
        }
    }
}

/// Outcome of looking a reading up in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade {
    pub level: RiskLevel,
    pub advice: &'static str,
}

impl Grade {
    fn with_label(level: RiskLevel, label: Option<&'static str>) -> Self {
        Self {
            level,
            advice: label.unwrap_or_else(|| level.standard_advice()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ladder {
    pub tiers: &'static [Tier],
    /// Advice when no tier matches.
    pub baseline: Option<&'static str>,
}

impl Ladder {
    pub fn grade(&self, value: f64) -> Grade {
        self.tiers
            .iter()
            .find(|tier| tier.bound.admits(value))
            .map(|tier| Grade::with_label(tier.level, tier.label))
            .unwrap_or_else(|| Grade::with_label(RiskLevel::Normal, self.baseline))
    }

    /// Verify the tiers form nested, non-overlapping bands.
    ///
    /// Within each direction the limits must move strictly towards the
    /// normal band while the level never increases, so every tier is
    /// reachable and its band is contiguous with the next. A two-sided table
    /// must also leave a non-empty normal band between its directions.
    pub fn check(&self) -> Result<(), String> {
        if self.tiers.is_empty() {
            return Err("table has no tiers".to_string());
        }
        for (upper, name) in [(true, "upper"), (false, "lower")] {
            let side: Vec<&Tier> = self
                .tiers
                .iter()
                .filter(|t| t.bound.is_upper() == upper)
                .collect();
            for tier in &side {
                if tier.level == RiskLevel::Normal {
                    return Err(format!("{name} tier at {} grades as normal", tier.bound.limit()));
                }
            }
            for pair in side.windows(2) {
                let (outer, inner) = (pair[0], pair[1]);
                let moves_inward = if upper {
                    inner.bound.limit() < outer.bound.limit()
                } else {
                    inner.bound.limit() > outer.bound.limit()
                };
                if !moves_inward {
                    return Err(format!(
                        "{name} tier at {} is shadowed by tier at {}",
                        inner.bound.limit(),
                        outer.bound.limit()
                    ));
                }
                if inner.level > outer.level {
                    return Err(format!(
                        "{name} tier at {} is more severe than the tier before it",
                        inner.bound.limit()
                    ));
                }
            }
        }
        let lowest_upper = self
            .tiers
            .iter()
            .filter(|t| t.bound.is_upper())
            .map(|t| t.bound.limit())
            .fold(f64::INFINITY, f64::min);
        let highest_lower = self
            .tiers
            .iter()
            .filter(|t| !t.bound.is_upper())
            .map(|t| t.bound.limit())
            .fold(f64::NEG_INFINITY, f64::max);
        if highest_lower > lowest_upper {
            return Err(format!(
                "lower tiers reach {highest_lower}, past upper tiers starting at {lowest_upper}"
            ));
        }
        Ok(())
    }
}

/// Tier over a systolic/diastolic pair; either reading reaching its limit
/// is enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureTier {
    pub systolic: f64,
    pub diastolic: f64,
    pub level: RiskLevel,
    pub label: &'static str,
}

impl PressureTier {
    pub fn admits(&self, systolic: f64, diastolic: f64) -> bool {
        systolic >= self.systolic || diastolic >= self.diastolic
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureLadder {
    pub tiers: &'static [PressureTier],
    pub baseline: &'static str,
}

impl PressureLadder {
    pub fn grade(&self, systolic: f64, diastolic: f64) -> Grade {
        self.tiers
            .iter()
            .find(|tier| tier.admits(systolic, diastolic))
            .map(|tier| Grade {
                level: tier.level,
                advice: tier.label,
            })
            .unwrap_or(Grade {
                level: RiskLevel::Normal,
                advice: self.baseline,
            })
    }

    pub fn check(&self) -> Result<(), String> {
        for pair in self.tiers.windows(2) {
            let (outer, inner) = (&pair[0], &pair[1]);
            if inner.systolic >= outer.systolic || inner.diastolic >= outer.diastolic {
                return Err(format!(
                    "tier {}/{} is shadowed by {}/{}",
                    inner.systolic, inner.diastolic, outer.systolic, outer.diastolic
                ));
            }
            if inner.level > outer.level {
                return Err(format!(
                    "tier {}/{} is more severe than the tier before it",
                    inner.systolic, inner.diastolic
                ));
            }
        }
        match self.tiers.iter().find(|t| t.level == RiskLevel::Normal) {
            Some(t) => Err(format!("tier {}/{} grades as normal", t.systolic, t.diastolic)),
            None => Ok(()),
        }
    }
}
