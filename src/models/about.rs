//! About page content types.

/// A team member card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub skills: &'static [&'static str],
    pub github: &'static str,
    pub twitter: &'static str,
    pub linkedin: &'static str,
}

/// One of the mission statements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MissionPillar {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}
