//! Static per-team schema registry.
//!
//! Column order defines both table column order and form field order.
//! Every lookup is a pure function over the constant tables below;
//! absent keys yield an empty slice, never an error, so callers can
//! always fall back to a plain text input.

use serde::{Deserialize, Serialize};

/// The three business teams the board manages. Selecting a team decides
/// which schema applies and which backend collection is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Business,
    Dev,
    Security,
}

impl Team {
    pub const ALL: [Team; 3] = [Team::Business, Team::Dev, Team::Security];

    pub fn key(self) -> &'static str {
        match self {
            Team::Business => "biz",
            Team::Dev => "dev",
            Team::Security => "security",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Team::Business => "사업팀",
            Team::Dev => "개발팀",
            Team::Security => "보안팀",
        }
    }

    /// Collection endpoint, relative to the API base.
    pub fn endpoint(self) -> &'static str {
        match self {
            Team::Business => "/api/companies",
            Team::Dev => "/api/dev",
            Team::Security => "/api/incident",
        }
    }

    /// Key under which the list endpoint wraps its JSON array.
    pub fn envelope_key(self) -> &'static str {
        match self {
            Team::Business => "companies",
            Team::Dev => "dev",
            Team::Security => "incidents",
        }
    }

    pub fn from_key(key: &str) -> Option<Team> {
        Team::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// How a column is rendered and filtered. Resolved once here instead of
/// being re-derived from key-name string conventions at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain text input.
    Text,
    /// Calendar date, stored as `YYYY-MM-DD`.
    Date,
    /// Single choice from a static vocabulary.
    Select(&'static str),
    /// Single choice whose options depend on another field's value.
    DependentSelect { parent: &'static str },
    /// Read-only, assigned by the backend (business `company_id`).
    Derived,
    /// Free text continuously reformatted to hyphenated digit groups.
    Phone,
    /// One half of the `company_id`/`company_name` pair referencing the
    /// business collection; set atomically, immutable after creation.
    CompanyRef,
    /// Manager name chosen from the team's admin contacts; picking one
    /// also fills the phone field.
    ManagerRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn col(key: &'static str, label: &'static str, kind: FieldKind) -> ColumnSpec {
    ColumnSpec { key, label, kind }
}

const BUSINESS_COLUMNS: &[ColumnSpec] = &[
    col("company_id", "회사코드", FieldKind::Derived),
    col("company_name", "회사명", FieldKind::Text),
    col("industry", "업종", FieldKind::Select("industry")),
    col("plan", "플랜", FieldKind::Select("plan")),
    col("contract_start", "계약 시작일", FieldKind::Date),
    col("contract_end", "계약 종료일", FieldKind::Date),
    col("status", "상태", FieldKind::Select("status_biz")),
    col("manager_name", "담당자명", FieldKind::ManagerRef),
    col("manager_phone", "담당자 연락처", FieldKind::Phone),
];

const DEV_COLUMNS: &[ColumnSpec] = &[
    col("company_id", "회사코드", FieldKind::CompanyRef),
    col("company_name", "회사명", FieldKind::CompanyRef),
    col("os", "운영체제", FieldKind::Select("os")),
    col("os_version", "OS 버전", FieldKind::DependentSelect { parent: "os" }),
    col("dev_start_date", "개발 시작일", FieldKind::Date),
    col("dev_end_date", "개발 종료일", FieldKind::Date),
    col("status", "상태", FieldKind::Select("status_dev")),
    col("maintenance", "유지보수", FieldKind::Select("maintenance")),
];

const SECURITY_COLUMNS: &[ColumnSpec] = &[
    col("incident_no", "Incident No", FieldKind::Text),
    col("company_id", "회사코드", FieldKind::CompanyRef),
    col("company_name", "회사명", FieldKind::CompanyRef),
    col("threat_type", "위협 유형", FieldKind::Select("threat_type")),
    col("risk_level", "위험 등급", FieldKind::Select("risk_level")),
    col("server_type", "서버 종류", FieldKind::Select("server_type")),
    col("incident_date", "사건 일자", FieldKind::Date),
    col("handled_date", "처리 일자", FieldKind::Date),
    col("status", "상태", FieldKind::Select("status_security")),
    col("action", "조치", FieldKind::Select("action")),
    col("handler_count", "처리 인원 수", FieldKind::Text),
];

pub fn columns_for(team: Team) -> &'static [ColumnSpec] {
    match team {
        Team::Business => BUSINESS_COLUMNS,
        Team::Dev => DEV_COLUMNS,
        Team::Security => SECURITY_COLUMNS,
    }
}

pub fn column(team: Team, key: &str) -> Option<&'static ColumnSpec> {
    columns_for(team).iter().find(|c| c.key == key)
}

/// Date-bearing columns, in cycling order for the date-range filter.
pub fn date_columns_for(team: Team) -> Vec<&'static ColumnSpec> {
    columns_for(team)
        .iter()
        .filter(|c| c.kind == FieldKind::Date)
        .collect()
}

/// Columns never offered as filter dropdowns, beyond the date columns
/// and the free-text search column.
pub fn excluded_filter_columns(team: Team) -> &'static [&'static str] {
    match team {
        Team::Business => &["manager_phone", "industry"],
        Team::Dev => &[],
        Team::Security => &["incident_no"],
    }
}

/// Column searched by the free-text query. The backend joins
/// `company_name` into every team's listing, so all teams support it.
pub const FREE_TEXT_COLUMN: &str = "company_name";

const INDUSTRIES: &[&str] = &["IT", "제조", "금융", "유통"];
const PLANS: &[&str] = &["베이직", "프로", "엔터프라이즈"];
const MAINTENANCE: &[&str] = &["정상 운영중", "점검 예정", "점검 진행중", "장애 발생", "서비스 종료"];
const STATUS_BIZ: &[&str] = &["진행중", "만료", "해지", "예정"];
const STATUS_DEV: &[&str] = &["개발 예정", "개발 중", "개발 완료", "개발 중지"];
const STATUS_SECURITY: &[&str] = &["처리중", "미처리", "처리완료"];
const RISK_LEVELS: &[&str] = &["HIGH", "MEDIUM", "LOW"];
const THREAT_TYPES: &[&str] = &[
    "악성코드",
    "해킹공격",
    "피싱",
    "APT공격",
    "랜섬웨어",
    "DDoS",
    "내부자위협",
    "공급망공격",
    "웹취약점",
    "소셜엔지니어링",
    "자격증명 탈취",
    "메시지 가로채기",
    "스팸",
];
const SERVER_TYPES: &[&str] = &[
    "웹서버",
    "DB서버",
    "파일서버",
    "애플리케이션서버",
    "메일서버",
    "FTP서버",
    "인증서버",
];
const ACTIONS: &[&str] = &[
    "ip 차단",
    "패치적용",
    "로그삭제",
    "계정잠금",
    "백업복구",
    "접근제어 강화",
    "모니터링 강화",
    "보안 교육 실시",
    "다중 인증 적용",
    "방화벽 설정",
];

const OS_VERSIONS: &[(&str, &[&str])] = &[
    ("Windows", &["7", "8", "10", "11"]),
    ("Linux", &["Ubuntu 18.04", "Ubuntu 20.04", "Ubuntu 22.04", "Rocky 8", "Rocky 9"]),
    ("Android", &["10", "11", "12", "13"]),
    ("macOS", &["11", "12", "13", "14"]),
    ("iOS", &["15", "16", "17"]),
];

/// Vocabulary lookup by the key recorded in `FieldKind::Select`.
pub fn select_options_for(key: &str) -> &'static [&'static str] {
    match key {
        "industry" => INDUSTRIES,
        "plan" => PLANS,
        "maintenance" => MAINTENANCE,
        "status_biz" => STATUS_BIZ,
        "status_dev" => STATUS_DEV,
        "status_security" => STATUS_SECURITY,
        "risk_level" => RISK_LEVELS,
        "threat_type" => THREAT_TYPES,
        "server_type" => SERVER_TYPES,
        "action" => ACTIONS,
        "os" => OS_NAMES,
        _ => &[],
    }
}

pub fn status_options_for(team: Team) -> &'static [&'static str] {
    match team {
        Team::Business => STATUS_BIZ,
        Team::Dev => STATUS_DEV,
        Team::Security => STATUS_SECURITY,
    }
}

const OS_NAMES: &[&str] = &["Windows", "Linux", "Android", "macOS", "iOS"];

pub fn os_names() -> &'static [&'static str] {
    OS_NAMES
}

pub fn os_version_options_for(os: &str) -> &'static [&'static str] {
    OS_VERSIONS
        .iter()
        .find(|(name, _)| *name == os)
        .map(|(_, versions)| *versions)
        .unwrap_or(&[])
}

/// Company identifiers encode their industry in the first letter.
pub fn industry_label_for(company_id: &str) -> Option<&'static str> {
    match company_id.chars().next()?.to_ascii_uppercase() {
        'F' => Some("금융"),
        'M' => Some("제조"),
        'I' => Some("IT"),
        'D' => Some("유통"),
        _ => None,
    }
}

/// Contract duration shortcuts offered on the business form, in days.
pub const CONTRACT_PERIODS: &[(i64, &str)] = &[
    (30, "1개월"),
    (90, "3개월"),
    (180, "6개월"),
    (365, "1년"),
    (1095, "3년"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_keys_are_unique_per_team() {
        for team in Team::ALL {
            let columns = columns_for(team);
            for (i, a) in columns.iter().enumerate() {
                for b in &columns[i + 1..] {
                    assert_ne!(a.key, b.key, "duplicate key in {:?}", team);
                }
            }
        }
    }

    #[test]
    fn date_columns_are_a_schema_subset_in_order() {
        for team in Team::ALL {
            let keys: Vec<_> = columns_for(team).iter().map(|c| c.key).collect();
            let date_keys: Vec<_> = date_columns_for(team).iter().map(|c| c.key).collect();
            let mut last = 0;
            for key in date_keys {
                let pos = keys.iter().position(|k| *k == key).expect("date column in schema");
                assert!(pos >= last);
                last = pos;
            }
        }
    }

    #[test]
    fn absent_vocabulary_is_empty_not_error() {
        assert!(select_options_for("no_such_key").is_empty());
        assert!(os_version_options_for("BeOS").is_empty());
    }

    #[test]
    fn os_versions_cover_every_os_name() {
        for os in os_names() {
            assert!(!os_version_options_for(os).is_empty());
        }
    }

    #[test]
    fn industry_labels_match_prefixes() {
        assert_eq!(industry_label_for("F00123"), Some("금융"));
        assert_eq!(industry_label_for("m0042"), Some("제조"));
        assert_eq!(industry_label_for("I00001"), Some("IT"));
        assert_eq!(industry_label_for("D00009"), Some("유통"));
        assert_eq!(industry_label_for("X123"), None);
        assert_eq!(industry_label_for(""), None);
    }
}
