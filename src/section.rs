use std::{fmt, str::FromStr};

use thiserror::Error;

// px below the viewport top that count as "in" the next section
pub const SCROLL_LOOKAHEAD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

pub fn locate<I>(position: f64, bounds: I) -> Option<Section>
where
    I: IntoIterator<Item = (Section, SectionBounds)>,
{
    bounds
        .into_iter()
        .find(|(_, b)| b.contains(position))
        .map(|(section, _)| section)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub active: Section,
    pub menu_open: bool,
}

impl NavState {
    /// Sections `measure` can't find are skipped; no match keeps the current section.
    pub fn track<F>(&mut self, scroll_y: f64, mut measure: F) -> Option<Section>
    where
        F: FnMut(Section) -> Option<SectionBounds>,
    {
        let position = scroll_y + SCROLL_LOOKAHEAD;
        let found = locate(
            position,
            Section::ALL
                .into_iter()
                .filter_map(|section| measure(section).map(|b| (section, b))),
        );
        if let Some(section) = found {
            self.active = section;
        }
        found
    }

    // menu closes even if the target is missing
    pub fn navigate<F>(&mut self, target: Section, scroll: F) -> bool
    where
        F: FnOnce(Section) -> bool,
    {
        let found = scroll(target);
        self.menu_open = false;
        found
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(height: f64) -> impl FnMut(Section) -> Option<SectionBounds> {
        move |section| {
            let i = Section::ALL.iter().position(|s| *s == section)?;
            Some(SectionBounds {
                top: i as f64 * height,
                height,
            })
        }
    }

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
        assert_eq!(
            "footer".parse::<Section>(),
            Err(UnknownSection("footer".to_string()))
        );
        assert_eq!(Section::Projects.label(), "Projects");
    }

    #[test]
    fn test_position_inside_bounds_selects_section() {
        let mut nav = NavState::default();
        for (i, section) in Section::ALL.into_iter().enumerate() {
            let top = i as f64 * 800.0;
            // first, middle and last pixel of the section
            for pos in [top, top + 400.0, top + 799.0] {
                let found = nav.track(pos - SCROLL_LOOKAHEAD, stacked(800.0));
                assert_eq!(found, Some(section));
                assert_eq!(nav.active, section);
            }
        }
    }

    #[test]
    fn test_lookahead_applied() {
        let mut nav = NavState::default();
        // 750 + 100 = 850, inside About (800..1600)
        nav.track(750.0, stacked(800.0));
        assert_eq!(nav.active, Section::About);
        nav.track(699.0, stacked(800.0));
        assert_eq!(nav.active, Section::Home);
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let mut nav = NavState {
            active: Section::Skills,
            menu_open: false,
        };
        let found = nav.track(100_000.0, stacked(800.0));
        assert_eq!(found, None);
        assert_eq!(nav.active, Section::Skills);
    }

    #[test]
    fn test_missing_sections_skipped() {
        let mut nav = NavState::default();
        let found = nav.track(0.0, |section| match section {
            Section::Home => None,
            Section::About => Some(SectionBounds {
                top: 0.0,
                height: 500.0,
            }),
            _ => None,
        });
        assert_eq!(found, Some(Section::About));
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let bounds = [
            (
                Section::Home,
                SectionBounds {
                    top: 0.0,
                    height: 1000.0,
                },
            ),
            (
                Section::About,
                SectionBounds {
                    top: 500.0,
                    height: 1000.0,
                },
            ),
        ];
        assert_eq!(locate(600.0, bounds), Some(Section::Home));
        assert_eq!(locate(1200.0, bounds), Some(Section::About));
        assert_eq!(locate(1500.0, bounds), None);
    }

    #[test]
    fn test_navigate_always_closes_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);
        assert!(nav.navigate(Section::Contact, |_| true));
        assert!(!nav.menu_open);

        nav.toggle_menu();
        assert!(!nav.navigate(Section::Contact, |_| false));
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_navigate_does_not_change_active() {
        let mut nav = NavState::default();
        nav.navigate(Section::Projects, |s| {
            assert_eq!(s, Section::Projects);
            true
        });
        // the tracker moves the highlight once the scroll lands
        assert_eq!(nav.active, Section::Home);
    }
}
