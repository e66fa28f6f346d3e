use crate::models::SearchHit;

/// URL substrings that identify job postings on known ATS platforms or
/// common job paths. A match here overrides every other signal.
pub const ATS_JOB_PATTERNS: &[&str] = &[
    "greenhouse.io",
    "lever.co",
    "myworkdayjobs.com",
    "careers.icims.com",
    "/jobs/",
    "/job/",
    "/careers/",
    "/opening/",
    "/apply/",
    "/position/",
];

/// URL path segments that mark non-job pages (blog, news, marketing).
const BAD_URL_SIGNALS: &[&str] = &["/blog/", "/news/", "/press/", "/about/", "/company/", "/search?"];

/// Title keywords used as a fallback when the URL is inconclusive.
const JOB_TITLE_SIGNALS: &[&str] = &[
    "manager",
    "director",
    "engineer",
    "analyst",
    "specialist",
    "lead",
    "associate",
    "coordinator",
];

/// Heuristically decide whether a search hit is a genuine job posting.
///
/// Pure function; the check order is significant:
/// 1. ATS/job-path URL pattern → job posting, no matter the title.
/// 2. Bad-signal URL segment → not a job posting, no matter the title.
/// 3. Otherwise fall back to job-title keywords, case-insensitive.
pub fn is_job_posting(hit: &SearchHit) -> bool {
    let url = hit.url.to_lowercase();
    let title = hit.title.to_lowercase();

    if ATS_JOB_PATTERNS.iter().any(|p| url.contains(p)) {
        return true;
    }

    if BAD_URL_SIGNALS.iter().any(|s| url.contains(s)) {
        return false;
    }

    JOB_TITLE_SIGNALS.iter().any(|sig| title.contains(sig))
}
