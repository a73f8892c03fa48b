pub mod ancestry;
pub mod genome;
pub mod haplogroup;
pub mod relationship;
pub mod relative;
pub mod report;
pub mod user;

// re-export for cleaner imports
pub use self::ancestry::Ancestry;
pub use self::genome::{Genome, Genotype};
pub use self::haplogroup::{Haplogroup, MaternalTerminalSnp, PaternalTerminalSnp};
pub use self::relationship::Relationship;
pub use self::relative::Relative;
pub use self::report::{Carrier, DrugResponse, Risk, Trait};
pub use self::user::{Profile, ProfileName, User, UserName};
