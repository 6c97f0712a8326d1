//! 表示用ビューモデル
//!
//! 解析結果をセクションごとに独立して表示用の値へ変換する。
//! 未設定・空のフィールドはここでプレースホルダに置き換えるので、
//! UI側は分岐せずにそのまま描画できる。

use crate::types::{Education, Experience, ParsedResume};

pub const NOT_FOUND: &str = "Not found";
pub const NO_SKILLS: &str = "No skills detected";
pub const NO_EXPERIENCE: &str = "No experience found";
pub const NO_EDUCATION: &str = "No education found";
pub const NO_PROJECTS: &str = "No projects found";
pub const NO_CERTIFICATIONS: &str = "No certifications found";

pub const UNKNOWN_ROLE: &str = "Unknown Role";
pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const DATES_UNSPECIFIED: &str = "Dates not specified";
pub const UNKNOWN_DEGREE: &str = "Unknown Degree";
pub const UNKNOWN_INSTITUTION: &str = "Unknown Institution";
pub const YEAR_UNSPECIFIED: &str = "Year not specified";

/// 信頼度の区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    /// 80以上（緑）
    High,
    /// 60以上（黄）
    Medium,
    /// 60未満（赤）
    Low,
}

impl ConfidenceTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ConfidenceTier::High
        } else if score >= 60.0 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "confidence-high",
            ConfidenceTier::Medium => "confidence-medium",
            ConfidenceTier::Low => "confidence-low",
        }
    }
}

/// 信頼度バー
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceDisplay {
    pub score: f64,
    pub tier: ConfidenceTier,
}

impl ConfidenceDisplay {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            tier: ConfidenceTier::from_score(score),
        }
    }

    /// "85.0%"。ちょうど中間の値は0から遠い側へ丸める
    pub fn label(&self) -> String {
        let rounded = (self.score * 10.0).round() / 10.0;
        format!("{:.1}%", rounded)
    }

    /// バー幅（0-100にクランプ）。"85%"
    pub fn bar_width(&self) -> String {
        format!("{}%", self.score.clamp(0.0, 100.0))
    }
}

/// 連絡先の1行
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRow {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceCard {
    pub role: String,
    pub company: String,
    pub dates: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationCard {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

/// セクションの中身。空ならプレースホルダ文言
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    Empty(&'static str),
    Items(Vec<T>),
}

impl<T> Section<T> {
    fn from_items(items: Vec<T>, placeholder: &'static str) -> Self {
        if items.is_empty() {
            Section::Empty(placeholder)
        } else {
            Section::Items(items)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Section::Empty(_))
    }
}

/// 結果画面全体のビューモデル
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeView {
    pub confidence: ConfidenceDisplay,
    pub contacts: Vec<ContactRow>,
    pub skills: Section<String>,
    pub experience: Section<ExperienceCard>,
    pub education: Section<EducationCard>,
    pub projects: Section<String>,
    pub certifications: Section<String>,
}

fn or_placeholder(value: &Option<String>, placeholder: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

impl From<&Experience> for ExperienceCard {
    fn from(exp: &Experience) -> Self {
        Self {
            role: or_placeholder(&exp.role, UNKNOWN_ROLE),
            company: or_placeholder(&exp.company, UNKNOWN_COMPANY),
            dates: or_placeholder(&exp.dates, DATES_UNSPECIFIED),
        }
    }
}

impl From<&Education> for EducationCard {
    fn from(edu: &Education) -> Self {
        Self {
            degree: or_placeholder(&edu.degree, UNKNOWN_DEGREE),
            institution: or_placeholder(&edu.institution, UNKNOWN_INSTITUTION),
            year: or_placeholder(&edu.year, YEAR_UNSPECIFIED),
        }
    }
}

impl From<&ParsedResume> for ResumeView {
    fn from(resume: &ParsedResume) -> Self {
        let contacts = vec![
            ContactRow { icon: "👤", label: "Name", value: or_placeholder(&resume.name, NOT_FOUND) },
            ContactRow { icon: "✉", label: "Email", value: or_placeholder(&resume.email, NOT_FOUND) },
            ContactRow { icon: "☎", label: "Phone", value: or_placeholder(&resume.phone, NOT_FOUND) },
            ContactRow { icon: "🔗", label: "LinkedIn", value: or_placeholder(&resume.linkedin, NOT_FOUND) },
        ];

        Self {
            confidence: ConfidenceDisplay::new(resume.confidence_score),
            contacts,
            skills: Section::from_items(resume.skills.clone(), NO_SKILLS),
            experience: Section::from_items(
                resume.experience.iter().map(ExperienceCard::from).collect(),
                NO_EXPERIENCE,
            ),
            education: Section::from_items(
                resume.education.iter().map(EducationCard::from).collect(),
                NO_EDUCATION,
            ),
            projects: Section::from_items(resume.projects.clone(), NO_PROJECTS),
            certifications: Section::from_items(resume.certifications.clone(), NO_CERTIFICATIONS),
        }
    }
}
