//! The set of lessons offered on the home screen.

use std::fmt;
use std::str::FromStr;

use mirrorlab_core::MirrorlabError;
use mirrorlab_lessons::{
    AppleDoubleMirror, AppleSide, AppleTop, ColorLesson, HumanDoubleMirror, HumanMirror,
    HumanSixtyDegree, Lesson, Tube,
};

/// Identifies one lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LessonId {
    Color,
    AppleSide,
    AppleTop,
    AppleDoubleMirror,
    HumanMirror,
    HumanDoubleMirror,
    HumanSixtyDegree,
    Tube,
}

impl LessonId {
    /// Every lesson, in home screen order.
    pub const ALL: [Self; 8] = [
        Self::Color,
        Self::AppleSide,
        Self::AppleTop,
        Self::AppleDoubleMirror,
        Self::HumanMirror,
        Self::HumanDoubleMirror,
        Self::HumanSixtyDegree,
        Self::Tube,
    ];

    /// Stable kebab-case key, as used on the command line and in file names.
    pub fn key(self) -> &'static str {
        match self {
            Self::Color => ColorLesson::KEY,
            Self::AppleSide => AppleSide::KEY,
            Self::AppleTop => AppleTop::KEY,
            Self::AppleDoubleMirror => AppleDoubleMirror::KEY,
            Self::HumanMirror => HumanMirror::KEY,
            Self::HumanDoubleMirror => HumanDoubleMirror::KEY,
            Self::HumanSixtyDegree => HumanSixtyDegree::KEY,
            Self::Tube => Tube::KEY,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Color => "How colors look",
            Self::AppleSide | Self::AppleTop => "An apple in the mirror",
            Self::AppleDoubleMirror => "An apple between two mirrors",
            Self::HumanMirror | Self::HumanDoubleMirror | Self::HumanSixtyDegree => {
                "A person in the mirror"
            }
            Self::Tube => "The mysterious tube",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Color => "What changes behind cellophane?",
            Self::AppleSide => "Seen from the side",
            Self::AppleTop => "Seen from above",
            Self::AppleDoubleMirror => "What if there are two mirrors?",
            Self::HumanMirror => "Do left and right swap?",
            Self::HumanDoubleMirror => "What if there are two mirrors?",
            Self::HumanSixtyDegree => "What if the mirrors meet at 60 degrees?",
            Self::Tube => "Which mirrors are hidden inside?",
        }
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LessonId {
    type Err = MirrorlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| MirrorlabError::UnknownLesson(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique_and_parse_back() {
        let keys: HashSet<_> = LessonId::ALL.iter().map(|id| id.key()).collect();
        assert_eq!(keys.len(), LessonId::ALL.len());
        for id in LessonId::ALL {
            assert_eq!(id.to_string().parse::<LessonId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_key() {
        let err = "prism".parse::<LessonId>().unwrap_err();
        assert!(matches!(err, MirrorlabError::UnknownLesson(key) if key == "prism"));
        assert!("Color".parse::<LessonId>().is_err());
    }

    #[test]
    fn test_every_lesson_has_text() {
        for id in LessonId::ALL {
            assert!(!id.title().is_empty());
            assert!(!id.subtitle().is_empty());
        }
    }
}
