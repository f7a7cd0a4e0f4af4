//! Flavor tables for the school and the remedial class, rolled once per session.

use crate::core::game_state::Difficulty;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchoolType {
    ProvincialKey,
    CityKey,
    Ordinary,
    Private,
    JuniorHigh,
    SeniorHigh,
}

impl SchoolType {
    pub const ALL: [SchoolType; 6] = [
        SchoolType::ProvincialKey,
        SchoolType::CityKey,
        SchoolType::Ordinary,
        SchoolType::Private,
        SchoolType::JuniorHigh,
        SchoolType::SeniorHigh,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SchoolType::ProvincialKey => "provincial key school",
            SchoolType::CityKey => "city key school",
            SchoolType::Ordinary => "ordinary school",
            SchoolType::Private => "private school",
            SchoolType::JuniorHigh => "junior high school",
            SchoolType::SeniorHigh => "senior high school",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    ExamHeavyProvince,
    ProvincialCapital,
    LowerTierCity,
    County,
    Rural,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::ExamHeavyProvince,
        Region::ProvincialCapital,
        Region::LowerTierCity,
        Region::County,
        Region::Rural,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Region::ExamHeavyProvince => "an exam-heavy province",
            Region::ProvincialCapital => "the provincial capital",
            Region::LowerTierCity => "a third-tier city",
            Region::County => "a county town",
            Region::Rural => "the countryside",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchoolLevel {
    SuperSchool,
    Prestigious,
    Ordinary,
    Struggling,
}

impl SchoolLevel {
    pub const ALL: [SchoolLevel; 4] = [
        SchoolLevel::SuperSchool,
        SchoolLevel::Prestigious,
        SchoolLevel::Ordinary,
        SchoolLevel::Struggling,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SchoolLevel::SuperSchool => "super school",
            SchoolLevel::Prestigious => "prestigious",
            SchoolLevel::Ordinary => "ordinary",
            SchoolLevel::Struggling => "struggling",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrincipalStyle {
    Hardline,
    Conciliatory,
    Opportunist,
    Timid,
    WellConnected,
}

impl PrincipalStyle {
    pub const ALL: [PrincipalStyle; 5] = [
        PrincipalStyle::Hardline,
        PrincipalStyle::Conciliatory,
        PrincipalStyle::Opportunist,
        PrincipalStyle::Timid,
        PrincipalStyle::WellConnected,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PrincipalStyle::Hardline => "hardline",
            PrincipalStyle::Conciliatory => "conciliatory",
            PrincipalStyle::Opportunist => "opportunist",
            PrincipalStyle::Timid => "timid",
            PrincipalStyle::WellConnected => "well-connected",
        }
    }

    /// How readily the school bends to outside pressure.
    pub fn pressure_factor(&self) -> f64 {
        match self {
            PrincipalStyle::Hardline => 0.6,
            PrincipalStyle::Conciliatory => 0.9,
            PrincipalStyle::Opportunist => 1.0,
            PrincipalStyle::Timid => 1.3,
            PrincipalStyle::WellConnected => 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BureauStyle {
    Protective,
    Muddling,
    Perfunctory,
    Cautious,
    Efficient,
    Corrupt,
}

impl BureauStyle {
    pub const ALL: [BureauStyle; 6] = [
        BureauStyle::Protective,
        BureauStyle::Muddling,
        BureauStyle::Perfunctory,
        BureauStyle::Cautious,
        BureauStyle::Efficient,
        BureauStyle::Corrupt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BureauStyle::Protective => "protective of its schools",
            BureauStyle::Muddling => "fond of smoothing things over",
            BureauStyle::Perfunctory => "perfunctory",
            BureauStyle::Cautious => "cautious",
            BureauStyle::Efficient => "efficient",
            BureauStyle::Corrupt => "corrupt",
        }
    }

    /// How seriously the bureau takes a report.
    pub fn fear_factor(&self) -> f64 {
        match self {
            BureauStyle::Protective => 0.6,
            BureauStyle::Muddling => 0.8,
            BureauStyle::Perfunctory => 0.7,
            BureauStyle::Cautious => 1.1,
            BureauStyle::Efficient => 1.3,
            BureauStyle::Corrupt => 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassForm {
    OnCampus,
    OffCampusRented,
    OnlineLive,
    SmallScattered,
    VoluntaryReturn,
    SchoolEnterpriseBase,
}

impl ClassForm {
    pub const ALL: [ClassForm; 6] = [
        ClassForm::OnCampus,
        ClassForm::OffCampusRented,
        ClassForm::OnlineLive,
        ClassForm::SmallScattered,
        ClassForm::VoluntaryReturn,
        ClassForm::SchoolEnterpriseBase,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ClassForm::OnCampus => "held on campus",
            ClassForm::OffCampusRented => "held in a rented venue off campus",
            ClassForm::OnlineLive => "streamed online",
            ClassForm::SmallScattered => "split into small scattered groups",
            ClassForm::VoluntaryReturn => "framed as a voluntary return to school",
            ClassForm::SchoolEnterpriseBase => "run at a school-enterprise base",
        }
    }

    /// Forms the school can quietly move elsewhere once caught.
    pub fn recurrence_prone(&self) -> bool {
        matches!(
            self,
            ClassForm::OnlineLive | ClassForm::SmallScattered | ClassForm::SchoolEnterpriseBase
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassName {
    WeekendCare,
    AfterSchoolService,
    SummerCamp,
    StudyTour,
    Enrichment,
    OpenStudyHall,
    HolidayCare,
    MilitaryTraining,
}

impl ClassName {
    pub const ALL: [ClassName; 8] = [
        ClassName::WeekendCare,
        ClassName::AfterSchoolService,
        ClassName::SummerCamp,
        ClassName::StudyTour,
        ClassName::Enrichment,
        ClassName::OpenStudyHall,
        ClassName::HolidayCare,
        ClassName::MilitaryTraining,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ClassName::WeekendCare => "Weekend Care",
            ClassName::AfterSchoolService => "After-School Service",
            ClassName::SummerCamp => "Summer Camp",
            ClassName::StudyTour => "Study Tour",
            ClassName::Enrichment => "Enrichment and Catch-Up",
            ClassName::OpenStudyHall => "Open Study Hall",
            ClassName::HolidayCare => "Holiday Care",
            ClassName::MilitaryTraining => "Military Outward Bound",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceLevel {
    Mandatory,
    NominalWithThreats,
    TopStudentsOnly,
    VoluntaryMostAttend,
    Tiered,
}

impl ForceLevel {
    pub const ALL: [ForceLevel; 5] = [
        ForceLevel::Mandatory,
        ForceLevel::NominalWithThreats,
        ForceLevel::TopStudentsOnly,
        ForceLevel::VoluntaryMostAttend,
        ForceLevel::Tiered,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ForceLevel::Mandatory => "mandatory for everyone",
            ForceLevel::NominalWithThreats => "voluntary in name, with threats",
            ForceLevel::TopStudentsOnly => "top students only",
            ForceLevel::VoluntaryMostAttend => "voluntary, but nearly everyone goes",
            ForceLevel::Tiered => "tiered by ability",
        }
    }

    /// Coercion level 1-5.
    pub fn coercion(&self) -> u8 {
        match self {
            ForceLevel::Mandatory => 5,
            ForceLevel::NominalWithThreats => 4,
            ForceLevel::TopStudentsOnly | ForceLevel::Tiered => 3,
            ForceLevel::VoluntaryMostAttend => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolProfile {
    pub school_type: SchoolType,
    pub region: Region,
    pub level: SchoolLevel,
    pub principal: PrincipalStyle,
    pub bureau: BureauStyle,
}

impl SchoolProfile {
    /// Short description used when rendering replies and summaries.
    pub fn describe(&self) -> String {
        format!(
            "a {} {} in {}",
            self.level.name(),
            self.school_type.name(),
            self.region.name()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDetail {
    pub form: ClassForm,
    pub name: ClassName,
    pub force: ForceLevel,
    /// How long the class runs, in days.
    pub duration: u32,
    /// Day on which the class begins.
    pub start_in: u32,
    pub fee: u32,
}

impl ClassDetail {
    pub fn coercion(&self) -> u8 {
        self.force.coercion()
    }

    pub fn recurrence_prone(&self) -> bool {
        self.form.recurrence_prone()
    }

    /// First day the class is in session.
    pub fn start_day(&self) -> u32 {
        self.start_in
    }

    /// First day after the class has finished.
    pub fn end_day(&self) -> u32 {
        self.start_in + self.duration
    }

    /// Days until the class starts, or `None` once it has.
    pub fn days_until_start(&self, day: u32) -> Option<u32> {
        self.start_in.checked_sub(day).filter(|d| *d > 0)
    }
}

fn pick<T: Copy, R: Rng>(options: &[T], fallback: T, rng: &mut R) -> T {
    options.choose(rng).copied().unwrap_or(fallback)
}

/// Rolls the school profile. Easy schools have a timid principal and a fair
/// bureau; hard ones a stubborn principal and a bureau that covers for them.
pub fn roll_school_profile<R: Rng>(difficulty: Difficulty, rng: &mut R) -> SchoolProfile {
    let (principals, bureaus): (&[PrincipalStyle], &[BureauStyle]) = match difficulty {
        Difficulty::Easy => (
            &[PrincipalStyle::Timid],
            &[BureauStyle::Cautious, BureauStyle::Efficient],
        ),
        Difficulty::Medium => (&PrincipalStyle::ALL, &BureauStyle::ALL),
        Difficulty::Hard => (
            &[PrincipalStyle::Hardline, PrincipalStyle::WellConnected],
            &[BureauStyle::Protective, BureauStyle::Corrupt],
        ),
    };

    SchoolProfile {
        school_type: pick(&SchoolType::ALL, SchoolType::Ordinary, rng),
        region: pick(&Region::ALL, Region::LowerTierCity, rng),
        level: pick(&SchoolLevel::ALL, SchoolLevel::Ordinary, rng),
        principal: pick(principals, PrincipalStyle::Opportunist, rng),
        bureau: pick(bureaus, BureauStyle::Muddling, rng),
    }
}

/// Rolls the remedial class. Harder difficulties start sooner and coerce harder.
pub fn roll_class_detail<R: Rng>(difficulty: Difficulty, rng: &mut R) -> ClassDetail {
    let force = match difficulty {
        Difficulty::Hard => pick(
            &[ForceLevel::Mandatory, ForceLevel::NominalWithThreats],
            ForceLevel::Mandatory,
            rng,
        ),
        _ => pick(&ForceLevel::ALL, ForceLevel::Tiered, rng),
    };
    let start_in = match difficulty {
        Difficulty::Easy => rng.gen_range(7..=10),
        Difficulty::Medium => rng.gen_range(5..=8),
        Difficulty::Hard => rng.gen_range(3..=5),
    };

    ClassDetail {
        form: pick(&ClassForm::ALL, ClassForm::OnCampus, rng),
        name: pick(&ClassName::ALL, ClassName::WeekendCare, rng),
        force,
        duration: rng.gen_range(14..=45),
        start_in,
        fee: rng.gen_range(5..=30) * 100,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_easy_profile_is_lenient() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let profile = roll_school_profile(Difficulty::Easy, &mut rng);
            assert_eq!(profile.principal, PrincipalStyle::Timid);
            assert!(matches!(
                profile.bureau,
                BureauStyle::Cautious | BureauStyle::Efficient
            ));
        }
    }

    #[test]
    fn test_hard_class_is_coercive_and_soon() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let detail = roll_class_detail(Difficulty::Hard, &mut rng);
            assert!(detail.coercion() >= 4);
            assert!((3..=5).contains(&detail.start_in));
            assert!((14..=45).contains(&detail.duration));
            assert!(detail.fee >= 500 && detail.fee <= 3000);
        }
    }

    #[test]
    fn test_recurrence_prone_forms() {
        assert!(ClassForm::OnlineLive.recurrence_prone());
        assert!(!ClassForm::OnCampus.recurrence_prone());
    }
}
