use serde::{Deserialize, Serialize};

/// One scholarship listing from the merged snapshot.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Scholarship {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "scholarship_name")]
    pub name: String,
    #[serde(default)]
    pub eligibility: String,
    #[serde(default)]
    pub required_documents: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub tags: ScholarshipTags,
}

/// The AI-annotated tag tree: requirements shared by every application
/// track, plus per-track requirement groups.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScholarshipTags {
    #[serde(default)]
    pub common_tags: Vec<Requirement>,
    #[serde(default)]
    pub groups: Vec<RequirementGroup>,
}

impl ScholarshipTags {
    /// Display view: a lone group with no common tags is promoted to act as
    /// the common block. Matching always runs on the un-promoted structure.
    pub fn display_normalized(&self) -> ScholarshipTags {
        if self.common_tags.is_empty() && self.groups.len() == 1 {
            return ScholarshipTags {
                common_tags: self.groups[0].requirements.clone(),
                groups: Vec::new(),
            };
        }
        self.clone()
    }

    /// All requirements across common tags and every group.
    pub fn all_requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.common_tags
            .iter()
            .chain(self.groups.iter().flat_map(|g| g.requirements.iter()))
    }
}

/// One independent application track within a listing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RequirementGroup {
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

/// A single eligibility tag produced by the annotation pipeline.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Requirement {
    #[serde(rename = "tag_category", default)]
    pub category: Category,
    #[serde(rename = "condition_type", default)]
    pub condition: ConditionKind,
    #[serde(default)]
    pub tag_value: String,
    #[serde(default)]
    pub standardized_value: Option<String>,
    #[serde(default)]
    pub numerical: Option<Numerical>,
}

/// Numeric payload attached to amount/quota/academic tags.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Numerical {
    pub num_value: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub academic_scope: Option<String>,
    #[serde(default)]
    pub academic_metric: Option<String>,
}

/// The fixed 19-category tag vocabulary. Category names outside the
/// vocabulary fold into `Other`, which no filter ever matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    DegreeLevel,
    Year,
    StudentStatus,
    College,
    Nationality,
    Domicile,
    StudyLocation,
    SpecialIdentity,
    FamilyCircumstance,
    FinancialProof,
    AcademicRequirement,
    Conduct,
    Talent,
    AidExclusion,
    PostAwardObligation,
    AwardAmount,
    Quota,
    RequiredDocument,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::DegreeLevel => "學制",
            Category::Year => "年級",
            Category::StudentStatus => "學籍狀態",
            Category::College => "學院",
            Category::Nationality => "國籍身分",
            Category::Domicile => "設籍地",
            Category::StudyLocation => "就讀地",
            Category::SpecialIdentity => "特殊身份",
            Category::FamilyCircumstance => "家庭境遇",
            Category::FinancialProof => "經濟相關證明",
            Category::AcademicRequirement => "核心學業要求",
            Category::Conduct => "操行/品德",
            Category::Talent => "特殊能力/專長",
            Category::AidExclusion => "補助/獎學金排斥",
            Category::PostAwardObligation => "領獎學金後的義務",
            Category::AwardAmount => "獎助金額",
            Category::Quota => "獎助名額",
            Category::RequiredDocument => "應繳文件",
            Category::Other => "其他（用於無法歸類的特殊要求）",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match s.as_str() {
            "學制" => Category::DegreeLevel,
            "年級" => Category::Year,
            "學籍狀態" => Category::StudentStatus,
            "學院" => Category::College,
            "國籍身分" => Category::Nationality,
            "設籍地" => Category::Domicile,
            "就讀地" => Category::StudyLocation,
            "特殊身份" => Category::SpecialIdentity,
            "家庭境遇" => Category::FamilyCircumstance,
            "經濟相關證明" => Category::FinancialProof,
            "核心學業要求" => Category::AcademicRequirement,
            "操行/品德" => Category::Conduct,
            "特殊能力/專長" => Category::Talent,
            "補助/獎學金排斥" => Category::AidExclusion,
            "領獎學金後的義務" => Category::PostAwardObligation,
            "獎助金額" => Category::AwardAmount,
            "獎助名額" => Category::Quota,
            "應繳文件" => Category::RequiredDocument,
            _ => Category::Other,
        }
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

/// Condition kind declared by the tagging pipeline. The matcher treats all
/// kinds alike; `Attribute` entries are descriptive rather than restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ConditionKind {
    LimitedTo,
    Includes,
    Attribute,
}

impl Default for ConditionKind {
    fn default() -> Self {
        ConditionKind::Attribute
    }
}

impl From<String> for ConditionKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "限於" => ConditionKind::LimitedTo,
            "包含" => ConditionKind::Includes,
            _ => ConditionKind::Attribute,
        }
    }
}

impl From<ConditionKind> for String {
    fn from(c: ConditionKind) -> Self {
        match c {
            ConditionKind::LimitedTo => "限於",
            ConditionKind::Includes => "包含",
            ConditionKind::Attribute => "屬性",
        }
        .to_string()
    }
}

/// The user's sidebar selection, rebuilt on every interaction. Empty vectors
/// and `None` mean "no constraint" for that category.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(rename = "學制", default)]
    pub degree_levels: Vec<String>,
    #[serde(rename = "年級", default)]
    pub years: Vec<String>,
    #[serde(rename = "學籍狀態", default)]
    pub student_statuses: Vec<String>,
    #[serde(rename = "學院", default)]
    pub colleges: Vec<String>,
    #[serde(rename = "國籍身分", default)]
    pub nationalities: Vec<String>,
    #[serde(rename = "設籍地", default)]
    pub domiciles: Vec<String>,
    #[serde(rename = "就讀地", default)]
    pub study_locations: Vec<String>,
    #[serde(rename = "特殊身份", default)]
    pub special_identities: Vec<String>,
    #[serde(rename = "家庭境遇", default)]
    pub family_circumstances: Vec<String>,
    #[serde(rename = "經濟相關證明", default)]
    pub financial_proofs: Vec<String>,
    #[serde(rename = "補助/獎學金排斥", default)]
    pub aid_exclusions: Vec<String>,
    #[serde(rename = "獎助金額", default)]
    pub amount_range: Option<(f64, f64)>,
    #[serde(rename = "獎助名額", default)]
    pub quota_range: Option<(f64, f64)>,
}

impl FilterSelection {
    /// Every multi-select category paired with the user's chosen values,
    /// in the order the original sidebar checks them.
    pub fn category_selections(&self) -> [(Category, &[String]); 11] {
        [
            (Category::DegreeLevel, self.degree_levels.as_slice()),
            (Category::Year, self.years.as_slice()),
            (Category::StudentStatus, self.student_statuses.as_slice()),
            (Category::College, self.colleges.as_slice()),
            (Category::Nationality, self.nationalities.as_slice()),
            (Category::Domicile, self.domiciles.as_slice()),
            (Category::StudyLocation, self.study_locations.as_slice()),
            (Category::SpecialIdentity, self.special_identities.as_slice()),
            (
                Category::FamilyCircumstance,
                self.family_circumstances.as_slice(),
            ),
            (Category::FinancialProof, self.financial_proofs.as_slice()),
            (Category::AidExclusion, self.aid_exclusions.as_slice()),
        ]
    }
}
