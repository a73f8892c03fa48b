/// Terminal SNP of a maternal haplogroup, positioned on the revised Cambridge
/// Reference Sequence.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct MaternalTerminalSnp {
    pub rsid: String,
    pub rcrs_position: String,
}

/// Terminal SNP of a paternal haplogroup.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct PaternalTerminalSnp {
    pub rsid: String,
    pub snp: String,
}

///
/// Haplogroups of a profile. `paternal` is absent for profiles without a
/// Y chromosome.
///
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Haplogroup {
    pub profile_id: String,
    pub paternal: Option<String>,
    pub maternal: String,
    pub paternal_terminal_snps: Vec<PaternalTerminalSnp>,
    pub maternal_terminal_snps: Vec<MaternalTerminalSnp>,
}
