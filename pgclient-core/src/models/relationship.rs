use std::fmt::{self, Display};

///
/// Kinship category of a predicted relative match, each with a stable numeric
/// code and a canonical description.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, PartialOrd, Ord)]
pub enum Relationship {
    You,
    IdenticalTwin,
    Father,
    Mother,
    Son,
    Daughter,
    Brother,
    Sister,
    HalfBrother,
    HalfSister,
    Grandfather,
    Grandmother,
    Grandson,
    Granddaughter,
    Uncle,
    Aunt,
    Nephew,
    Niece,
    GreatGrandfather,
    GreatGrandson,
    GreatGrandmother,
    GreatGranddaughter,
    GreatUncle,
    GreatAunt,
    GreatNephew,
    GreatNiece,
    FirstCousin,
    FirstCousinOnceRemoved,
    FirstCousinTwiceRemoved,
    SecondCousin,
    SecondCousinOnceRemoved,
    SecondCousinTwiceRemoved,
    ThirdCousin,
    ThirdCousinOnceRemoved,
    ThirdCousinTwiceRemoved,
    FourthCousin,
    FifthCousin,
    SixthCousin,
    DistantCousin,
}

impl Relationship {
    pub const ALL: [Relationship; 39] = [
        Relationship::You,
        Relationship::IdenticalTwin,
        Relationship::Father,
        Relationship::Mother,
        Relationship::Son,
        Relationship::Daughter,
        Relationship::Brother,
        Relationship::Sister,
        Relationship::HalfBrother,
        Relationship::HalfSister,
        Relationship::Grandfather,
        Relationship::Grandmother,
        Relationship::Grandson,
        Relationship::Granddaughter,
        Relationship::Uncle,
        Relationship::Aunt,
        Relationship::Nephew,
        Relationship::Niece,
        Relationship::GreatGrandfather,
        Relationship::GreatGrandson,
        Relationship::GreatGrandmother,
        Relationship::GreatGranddaughter,
        Relationship::GreatUncle,
        Relationship::GreatAunt,
        Relationship::GreatNephew,
        Relationship::GreatNiece,
        Relationship::FirstCousin,
        Relationship::FirstCousinOnceRemoved,
        Relationship::FirstCousinTwiceRemoved,
        Relationship::SecondCousin,
        Relationship::SecondCousinOnceRemoved,
        Relationship::SecondCousinTwiceRemoved,
        Relationship::ThirdCousin,
        Relationship::ThirdCousinOnceRemoved,
        Relationship::ThirdCousinTwiceRemoved,
        Relationship::FourthCousin,
        Relationship::FifthCousin,
        Relationship::SixthCousin,
        Relationship::DistantCousin,
    ];

    pub fn code(&self) -> u32 {
        match self {
            Relationship::You => 0,
            Relationship::IdenticalTwin => 1,
            Relationship::Father => 2,
            Relationship::Mother => 3,
            Relationship::Son => 4,
            Relationship::Daughter => 5,
            Relationship::Brother => 6,
            Relationship::Sister => 7,
            Relationship::HalfBrother => 8,
            Relationship::HalfSister => 9,
            Relationship::Grandfather => 10,
            Relationship::Grandmother => 11,
            Relationship::Grandson => 12,
            Relationship::Granddaughter => 13,
            Relationship::Uncle => 14,
            Relationship::Aunt => 15,
            Relationship::Nephew => 16,
            Relationship::Niece => 17,
            Relationship::GreatGrandfather => 18,
            Relationship::GreatGrandson => 19,
            Relationship::GreatGrandmother => 20,
            Relationship::GreatGranddaughter => 21,
            Relationship::GreatUncle => 22,
            Relationship::GreatAunt => 23,
            Relationship::GreatNephew => 24,
            Relationship::GreatNiece => 25,
            Relationship::FirstCousin => 26,
            Relationship::FirstCousinOnceRemoved => 27,
            Relationship::FirstCousinTwiceRemoved => 28,
            Relationship::SecondCousin => 29,
            Relationship::SecondCousinOnceRemoved => 30,
            Relationship::SecondCousinTwiceRemoved => 31,
            Relationship::ThirdCousin => 32,
            Relationship::ThirdCousinOnceRemoved => 33,
            Relationship::ThirdCousinTwiceRemoved => 34,
            Relationship::FourthCousin => 35,
            Relationship::FifthCousin => 38,
            Relationship::SixthCousin => 41,
            Relationship::DistantCousin => 44,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Relationship::You => "You",
            Relationship::IdenticalTwin => "Identical Twin",
            Relationship::Father => "Father",
            Relationship::Mother => "Mother",
            Relationship::Son => "Son",
            Relationship::Daughter => "Daughter",
            Relationship::Brother => "Brother",
            Relationship::Sister => "Sister",
            Relationship::HalfBrother => "Half Brother",
            Relationship::HalfSister => "Half Sister",
            Relationship::Grandfather => "Grandfather",
            Relationship::Grandmother => "Grandmother",
            Relationship::Grandson => "Grandson",
            Relationship::Granddaughter => "Granddaughter",
            Relationship::Uncle => "Uncle",
            Relationship::Aunt => "Aunt",
            Relationship::Nephew => "Nephew",
            Relationship::Niece => "Niece",
            Relationship::GreatGrandfather => "Great Grandfather",
            Relationship::GreatGrandson => "Great Grandson",
            Relationship::GreatGrandmother => "Great Grandmother",
            Relationship::GreatGranddaughter => "Great Granddaughter",
            Relationship::GreatUncle => "Great Uncle",
            Relationship::GreatAunt => "Great Aunt",
            Relationship::GreatNephew => "Great Nephew",
            Relationship::GreatNiece => "Great Niece",
            Relationship::FirstCousin => "1st Cousin",
            Relationship::FirstCousinOnceRemoved => "1st Cousin, Once Removed",
            Relationship::FirstCousinTwiceRemoved => "1st Cousin, Twice Removed",
            Relationship::SecondCousin => "2nd Cousin",
            Relationship::SecondCousinOnceRemoved => "2nd Cousin, Once Removed",
            Relationship::SecondCousinTwiceRemoved => "2nd Cousin, Twice Removed",
            Relationship::ThirdCousin => "3rd Cousin",
            Relationship::ThirdCousinOnceRemoved => "3rd Cousin, Once Removed",
            Relationship::ThirdCousinTwiceRemoved => "3rd Cousin, Twice Removed",
            Relationship::FourthCousin => "4th Cousin",
            Relationship::FifthCousin => "5th Cousin",
            Relationship::SixthCousin => "6th Cousin",
            Relationship::DistantCousin => "Distant Cousin",
        }
    }

    ///
    /// Resolve a numeric relationship code. Unknown codes resolve to `None`.
    ///
    pub fn from_code(code: i64) -> Option<Relationship> {
        Relationship::ALL
            .iter()
            .copied()
            .find(|relationship| i64::from(relationship.code()) == code)
    }

    ///
    /// Resolve a canonical description, matched exactly. Unknown descriptions
    /// resolve to `None`.
    ///
    pub fn from_description(description: &str) -> Option<Relationship> {
        Relationship::ALL
            .iter()
            .copied()
            .find(|relationship| relationship.description() == description)
    }
}

impl Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
