//! Picking light and dark theme colors from a palette.

use serde::Serialize;

use crate::color::{Rgb, TextColor};
use crate::prefs::UserPreference;
use crate::swatch::{ColorRecord, SwatchName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeRole {
    Light,
    Dark,
}

impl ThemeRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "LightOne",
            Self::Dark => "DarkOne",
        }
    }

    pub const fn source(self, pref: &UserPreference) -> SwatchName {
        match self {
            Self::Light => pref.light_theme_source,
            Self::Dark => pref.dark_theme_source,
        }
    }
}

/// A background and the text color that reads on it.
///
/// Both fields are empty until a swatch has been assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeRoleAssignment {
    pub background: String,
    pub foreground: String,
}

impl ThemeRoleAssignment {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            background: rgb.to_css(),
            foreground: TextColor::for_background(rgb).css().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.background.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assignments {
    pub light: ThemeRoleAssignment,
    pub dark: ThemeRoleAssignment,
}

impl Assignments {
    pub const fn get(&self, role: ThemeRole) -> &ThemeRoleAssignment {
        match role {
            ThemeRole::Light => &self.light,
            ThemeRole::Dark => &self.dark,
        }
    }

    fn slot(&mut self, role: ThemeRole) -> &mut ThemeRoleAssignment {
        match role {
            ThemeRole::Light => &mut self.light,
            ThemeRole::Dark => &mut self.dark,
        }
    }
}

/// Assign each role from the bucket the preference names.
///
/// A role whose bucket is missing from `records` keeps its previous value.
pub fn select(
    records: &[ColorRecord],
    pref: &UserPreference,
    previous: &Assignments,
) -> Assignments {
    let mut next = previous.clone();
    for role in [ThemeRole::Light, ThemeRole::Dark] {
        let source = role.source(pref);
        match records.iter().find(|r| r.name == source) {
            Some(record) => *next.slot(role) = ThemeRoleAssignment::from_rgb(record.rgb),
            None => tracing::debug!(role = role.label(), %source, "bucket absent, keeping previous"),
        }
    }
    next
}

/// Put `record` in `role` directly and remember its bucket for next time.
///
/// Returns the new assignments and the updated preference; persisting the
/// preference is up to the caller.
pub fn assign_manual(
    assignments: &Assignments,
    pref: &UserPreference,
    role: ThemeRole,
    record: &ColorRecord,
) -> (Assignments, UserPreference) {
    let mut next = assignments.clone();
    *next.slot(role) = ThemeRoleAssignment::from_rgb(record.rgb);

    let mut pref = *pref;
    match role {
        ThemeRole::Light => pref.light_theme_source = record.name,
        ThemeRole::Dark => pref.dark_theme_source = record.name,
    }
    (next, pref)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: SwatchName, rgb: Rgb) -> ColorRecord {
        ColorRecord {
            name,
            hex: rgb.to_hex(),
            rgb,
            population_share: 50.0,
        }
    }

    fn palette() -> Vec<ColorRecord> {
        vec![
            record(SwatchName::Vibrant, Rgb::new(200, 40, 40)),
            record(SwatchName::LightVibrant, Rgb::new(250, 230, 200)),
            record(SwatchName::Muted, Rgb::new(90, 100, 110)),
        ]
    }

    #[test]
    fn picks_preferred_buckets() {
        let out = select(&palette(), &UserPreference::default(), &Assignments::default());
        assert_eq!(out.light.background, "rgb(250 230 200)");
        assert_eq!(out.light.foreground, "#333");
        assert_eq!(out.dark.background, "rgb(90 100 110)");
        assert_eq!(out.dark.foreground, "white");
    }

    #[test]
    fn missing_bucket_keeps_previous() {
        let previous = Assignments {
            light: ThemeRoleAssignment {
                background: "rgb(1 2 3)".into(),
                foreground: "white".into(),
            },
            dark: ThemeRoleAssignment::default(),
        };
        let records = vec![record(SwatchName::Muted, Rgb::new(90, 100, 110))];
        let out = select(&records, &UserPreference::default(), &previous);
        assert_eq!(out.light, previous.light);
        assert_eq!(out.dark.background, "rgb(90 100 110)");
    }

    #[test]
    fn empty_palette_changes_nothing() {
        let previous = select(&palette(), &UserPreference::default(), &Assignments::default());
        let out = select(&[], &UserPreference::default(), &previous);
        assert_eq!(out, previous);
    }

    #[test]
    fn first_matching_record_wins() {
        let records = vec![
            record(SwatchName::Muted, Rgb::new(0, 0, 0)),
            record(SwatchName::Muted, Rgb::new(255, 255, 255)),
        ];
        let out = select(&records, &UserPreference::default(), &Assignments::default());
        assert_eq!(out.dark.background, "rgb(0 0 0)");
    }

    #[test]
    fn manual_assignment_updates_preference() {
        let records = palette();
        let (out, pref) = assign_manual(
            &Assignments::default(),
            &UserPreference::default(),
            ThemeRole::Dark,
            &records[0],
        );
        assert_eq!(out.dark.background, "rgb(200 40 40)");
        assert_eq!(out.dark.foreground, "white");
        assert!(out.light.is_empty());
        assert_eq!(pref.dark_theme_source, SwatchName::Vibrant);
        assert_eq!(pref.light_theme_source, SwatchName::LightVibrant);
    }

    #[test]
    fn manual_assignment_then_select_reuses_bucket() {
        let records = palette();
        let (_, pref) = assign_manual(
            &Assignments::default(),
            &UserPreference::default(),
            ThemeRole::Light,
            &records[2],
        );
        let out = select(&records, &pref, &Assignments::default());
        assert_eq!(out.light.background, "rgb(90 100 110)");
    }
}
