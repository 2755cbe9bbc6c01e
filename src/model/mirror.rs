//! Mirror domains selectable for x.com / twitter.com links.

use std::fmt;
use std::str::FromStr;

/// A mirror domain that serves embed-friendly copies of x.com posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mirror {
    /// `vxtwitter.com`
    #[default]
    VxTwitter,
    /// `fxtwitter.com`
    FxTwitter,
    /// `fixupx.com`
    FixupX,
}

impl Mirror {
    /// Number of mirrors.
    pub const COUNT: usize = 3;

    /// Every mirror, in menu order.
    pub const ALL: [Mirror; Mirror::COUNT] = [Mirror::VxTwitter, Mirror::FxTwitter, Mirror::FixupX];

    /// Hostname substituted into rewritten links.
    pub fn domain(self) -> &'static str {
        match self {
            Mirror::VxTwitter => "vxtwitter.com",
            Mirror::FxTwitter => "fxtwitter.com",
            Mirror::FixupX => "fixupx.com",
        }
    }

    /// Short name used in menus and console commands.
    pub fn name(self) -> &'static str {
        match self {
            Mirror::VxTwitter => "vxtwitter",
            Mirror::FxTwitter => "fxtwitter",
            Mirror::FixupX => "fixupx",
        }
    }

    /// Position in [`Mirror::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Mirror::index`].
    pub fn from_index(index: usize) -> Option<Mirror> {
        Mirror::ALL.get(index).copied()
    }

    pub(crate) fn to_u8(self) -> u8 {
        self as u8
    }

    /// Unknown values fall back to the default mirror.
    pub(crate) fn from_u8(raw: u8) -> Mirror {
        Mirror::from_index(raw as usize).unwrap_or_default()
    }
}

impl fmt::Display for Mirror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.domain())
    }
}

/// Error returned when a mirror name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMirror(pub String);

impl fmt::Display for UnknownMirror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mirror '{}'", self.0)
    }
}

impl std::error::Error for UnknownMirror {}

impl FromStr for Mirror {
    type Err = UnknownMirror;

    /// Accepts the short name or the full domain, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Mirror::ALL
            .into_iter()
            .find(|m| m.name() == wanted || m.domain() == wanted)
            .ok_or_else(|| UnknownMirror(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_vxtwitter() {
        assert_eq!(Mirror::default(), Mirror::VxTwitter);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, mirror) in Mirror::ALL.into_iter().enumerate() {
            assert_eq!(mirror.index(), i);
            assert_eq!(Mirror::from_index(i), Some(mirror));
        }
        assert_eq!(Mirror::from_index(Mirror::ALL.len()), None);
    }

    #[test]
    fn test_from_u8_out_of_range_falls_back_to_default() {
        assert_eq!(Mirror::from_u8(200), Mirror::VxTwitter);
        assert_eq!(Mirror::from_u8(Mirror::FixupX.to_u8()), Mirror::FixupX);
    }

    #[test]
    fn test_parse_name_and_domain() {
        assert_eq!("fxtwitter".parse::<Mirror>(), Ok(Mirror::FxTwitter));
        assert_eq!(" FixupX.com ".parse::<Mirror>(), Ok(Mirror::FixupX));
        assert_eq!(
            "nitter".parse::<Mirror>(),
            Err(UnknownMirror("nitter".to_string()))
        );
    }
}
