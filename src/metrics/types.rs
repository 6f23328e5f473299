use serde::{Deserialize, Serialize};

/// Column headers shared by every record.
pub const HEADERS: [&str; 2] = ["Metric", "Value"];

/// A display row: metric label and formatted value.
pub type Row = (&'static str, String);

fn float(v: f64) -> String {
    format!("{v:.2}")
}

/// Response of the `activity-overview` tab.
///
/// The `lines_commit_*` fields are sent by the API as preformatted strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub commits_activity_overview: i64,
    pub lines_commit_activity_overview: String,
    pub lines_commit_file_activity_overview: String,
    pub issues_created_activity_overview: i64,
    pub issues_closed_activity_overview: i64,
    pub issues_open_activity_overview: i64,
    pub reviews_created_activity_overview: i64,
    pub reviews_closed_activity_overview: i64,
    pub reviews_open_activity_overview: i64,
}

impl Activity {
    pub fn rows(&self) -> Vec<Row> {
        vec![
            ("Commits Activity Overview", self.commits_activity_overview.to_string()),
            ("Lines Commit Activity Overview", self.lines_commit_activity_overview.clone()),
            ("Lines Commit File Activity Overview", self.lines_commit_file_activity_overview.clone()),
            ("Issues Created Activity Overview", self.issues_created_activity_overview.to_string()),
            ("Issues Closed Activity Overview", self.issues_closed_activity_overview.to_string()),
            ("Issues Open Activity Overview", self.issues_open_activity_overview.to_string()),
            ("Reviews Created Activity Overview", self.reviews_created_activity_overview.to_string()),
            ("Reviews Closed Activity Overview", self.reviews_closed_activity_overview.to_string()),
            ("Reviews Open Activity Overview", self.reviews_open_activity_overview.to_string()),
        ]
    }
}

/// Response of the `community-overview` tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Community {
    pub active_people_git_community_overview: i64,
    pub active_people_issues_community_overview: i64,
    pub active_people_patches_community_overview: i64,
    pub onboardings_git_community_overview: i64,
    pub onboardings_issues_community_overview: i64,
    pub onboardings_patches_community_overview: i64,
}

impl Community {
    pub fn rows(&self) -> Vec<Row> {
        vec![
            ("Active People Git Community Overview", self.active_people_git_community_overview.to_string()),
            ("Active People Issues Community Overview", self.active_people_issues_community_overview.to_string()),
            ("Active People Patches Community Overview", self.active_people_patches_community_overview.to_string()),
            ("Onboardings Git Community Overview", self.onboardings_git_community_overview.to_string()),
            ("Onboardings Issues Community Overview", self.onboardings_issues_community_overview.to_string()),
            ("Onboardings Patches Community Overview", self.onboardings_patches_community_overview.to_string()),
        ]
    }
}

/// Response of the `overview` tab. `yoy` stands for year-over-year.
///
/// The question fields are strings because the API reports `"?"` when the
/// project has no Q&A data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overview {
    pub commits_overview: i64,
    pub issues_overview: i64,
    pub reviews_overview: i64,
    pub questions_overview: String,
    pub commits_last_year_overview: i64,
    pub issues_last_year_overview: i64,
    pub reviews_last_year_overview: i64,
    pub questions_last_year_overview: String,
    pub commits_yoy_overview: f64,
    pub issues_yoy_overview: f64,
    pub reviews_yoy_overview: f64,
    pub questions_yoy_overview: i64,
    pub commit_authors_overview: i64,
    pub issue_submitters_overview: i64,
    pub review_submitters_overview: i64,
    pub question_authors_overview: String,
    pub commit_authors_last_year_overview: i64,
    pub issue_submitters_last_year_overview: i64,
    pub review_submitters_last_year_overview: i64,
    pub question_authors_last_year_overview: String,
    pub commit_authors_yoy_overview: f64,
    pub issue_submitters_yoy_overview: f64,
    pub review_submitters_yoy_overview: f64,
    pub question_authors_yoy_overview: i64,
    pub issues_median_time_to_close_overview: f64,
    pub reviews_median_time_to_close_overview: f64,
    pub issues_median_time_to_close_last_year_overview: f64,
    pub reviews_median_time_to_close_last_year_overview: f64,
    pub issues_median_time_to_close_yoy_overview: f64,
    pub reviews_median_time_to_close_yoy_overview: f64,
}

impl Overview {
    pub fn rows(&self) -> Vec<Row> {
        vec![
            ("Commits Overview", self.commits_overview.to_string()),
            ("Issues Overview", self.issues_overview.to_string()),
            ("Reviews Overview", self.reviews_overview.to_string()),
            ("Questions Overview", self.questions_overview.clone()),
            ("Commits Last Year Overview", self.commits_last_year_overview.to_string()),
            ("Issues Last Year Overview", self.issues_last_year_overview.to_string()),
            ("Reviews Last Year Overview", self.reviews_last_year_overview.to_string()),
            ("Questions Last Year Overview", self.questions_last_year_overview.clone()),
            ("Commits YoY Overview", float(self.commits_yoy_overview)),
            ("Issues YoY Overview", float(self.issues_yoy_overview)),
            ("Reviews YoY Overview", float(self.reviews_yoy_overview)),
            ("Questions YoY Overview", self.questions_yoy_overview.to_string()),
            ("Commit Authors Overview", self.commit_authors_overview.to_string()),
            ("Issue Submitters Overview", self.issue_submitters_overview.to_string()),
            ("Review Submitters Overview", self.review_submitters_overview.to_string()),
            ("Question Authors Overview", self.question_authors_overview.clone()),
            ("Commit Authors Last Year Overview", self.commit_authors_last_year_overview.to_string()),
            ("Issue Submitters Last Year Overview", self.issue_submitters_last_year_overview.to_string()),
            ("Review Submitters Last Year Overview", self.review_submitters_last_year_overview.to_string()),
            ("Question Authors Last Year Overview", self.question_authors_last_year_overview.clone()),
            ("Commit Authors YoY Overview", float(self.commit_authors_yoy_overview)),
            ("Issue Submitters YoY Overview", float(self.issue_submitters_yoy_overview)),
            ("Review Submitters YoY Overview", float(self.review_submitters_yoy_overview)),
            ("Question Authors YoY Overview", self.question_authors_yoy_overview.to_string()),
            ("Issues Median Time To Close Overview", float(self.issues_median_time_to_close_overview)),
            ("Reviews Median Time To Close Overview", float(self.reviews_median_time_to_close_overview)),
            (
                "Issues Median Time To Close Last Year Overview",
                float(self.issues_median_time_to_close_last_year_overview),
            ),
            (
                "Reviews Median Time To Close Last Year Overview",
                float(self.reviews_median_time_to_close_last_year_overview),
            ),
            ("Issues Median Time To Close YoY Overview", float(self.issues_median_time_to_close_yoy_overview)),
            ("Reviews Median Time To Close YoY Overview", float(self.reviews_median_time_to_close_yoy_overview)),
        ]
    }
}

/// Response of the `performance-overview` tab. Times are in days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Performance {
    pub issues_time_open_average_performance_overview: f64,
    pub issues_time_open_median_performance_overview: f64,
    pub open_issues_performance_overview: i64,
    pub reviews_time_open_average_performance_overview: f64,
    pub reviews_time_open_median_performance_overview: f64,
    pub open_reviews_performance_overview: i64,
}

impl Performance {
    pub fn rows(&self) -> Vec<Row> {
        vec![
            (
                "Issues Time Open Average Performance Overview",
                float(self.issues_time_open_average_performance_overview),
            ),
            (
                "Issues Time Open Median Performance Overview",
                float(self.issues_time_open_median_performance_overview),
            ),
            ("Open Issues Performance Overview", self.open_issues_performance_overview.to_string()),
            (
                "Reviews Time Open Average Performance Overview",
                float(self.reviews_time_open_average_performance_overview),
            ),
            (
                "Reviews Time Open Median Performance Overview",
                float(self.reviews_time_open_median_performance_overview),
            ),
            ("Open Reviews Performance Overview", self.open_reviews_performance_overview.to_string()),
        ]
    }
}
