/// A profile of an account and whether it has been genotyped.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Profile {
    pub id: String,
    pub genotyped: bool,
}

/// Account with its profiles.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct User {
    pub id: String,
    pub profiles: Vec<Profile>,
}

impl User {
    ///
    /// Iterate over the profiles that have genotype data
    ///
    pub fn genotyped_profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter().filter(|profile| profile.genotyped)
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct ProfileName {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// Account holder name plus the names of each of its profiles.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct UserName {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_names: Vec<ProfileName>,
}
